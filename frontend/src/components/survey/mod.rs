//! Survey page: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `SurveyPage`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, fetch the current contents of the survey log so the
//!   inspection table below the form is populated.

use common::requests::TableLoad;
use gloo_net::http::Request;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::SurveyPage;

impl Component for SurveyPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        SurveyPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            fetch_records(ctx.link().clone());
        }
    }
}

/// Loads the whole survey log for the inspection table. Transport failures
/// fold into a `Failed` load so the page keeps rendering either way.
pub(crate) fn fetch_records(link: Scope<SurveyPage>) {
    spawn_local(async move {
        let response = Request::get("/api/survey/records").send().await;
        match response {
            Ok(resp) if resp.status() == 200 => match resp.json::<TableLoad>().await {
                Ok(load) => link.send_message(Msg::RecordsLoaded(load)),
                Err(e) => link.send_message(Msg::RecordsFailed(e.to_string())),
            },
            Ok(resp) => link.send_message(Msg::RecordsFailed(format!(
                "unexpected status {}",
                resp.status()
            ))),
            Err(e) => link.send_message(Msg::RecordsFailed(e.to_string())),
        }
    });
}
