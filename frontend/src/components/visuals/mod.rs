//! Visualizations page: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and chart geometry.
//!
//! On first render the page fires two independent loads, one per data
//! source; each resolves to its own message and a failure of one never
//! blocks the other.

use common::requests::{MetricsLoad, TableLoad};
use gloo_net::http::Request;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

pub mod charts;
mod messages;
mod state;
mod update;
mod view;

pub use messages::{ChartKind, Msg};
pub use state::VisualsPage;

impl Component for VisualsPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        VisualsPage::new()
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
            fetch_metrics(ctx.link().clone());
        }
    }
}

fn fetch_records(link: Scope<VisualsPage>) {
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

fn fetch_metrics(link: Scope<VisualsPage>) {
    spawn_local(async move {
        let response = Request::get("/api/metrics").send().await;
        match response {
            Ok(resp) if resp.status() == 200 => match resp.json::<MetricsLoad>().await {
                Ok(load) => link.send_message(Msg::MetricsLoaded(load)),
                Err(e) => link.send_message(Msg::MetricsFailed(e.to_string())),
            },
            Ok(resp) => link.send_message(Msg::MetricsFailed(format!(
                "unexpected status {}",
                resp.status()
            ))),
            Err(e) => link.send_message(Msg::MetricsFailed(e.to_string())),
        }
    });
}
