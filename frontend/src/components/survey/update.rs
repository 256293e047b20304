//! Update function for the survey page.
//!
//! Elm-style: receives the current `SurveyPage` state, the `Context`, and a
//! `Msg`, mutates the state, and returns whether the view should re-render.
//!
//! Key behaviors
//! - Widget messages carry raw DOM strings; numeric ones are parsed here
//!   and clamped to the widget's own bounds. Nothing else is validated;
//!   the record is taken verbatim on submit.
//! - `Submit` POSTs the draft and resolves to `Saved` or `SaveFailed`; a
//!   failed write is shown to the user instead of a blanket success.
//! - A successful save refreshes the inspection table underneath the form.

use common::model::survey::Mood;
use common::model::table::SurveyTable;
use common::requests::{LoadStatus, SubmitReceipt, TableLoad};
use gloo_console::error;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SurveyPage;

pub fn update(page: &mut SurveyPage, ctx: &Context<SurveyPage>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateName(value) => {
            page.draft.name = value;
            true
        }
        Msg::UpdateScreenTime(raw) => {
            if let Ok(hours) = raw.parse::<f64>() {
                page.draft.screen_time_hours = hours.max(0.0);
            }
            true
        }
        Msg::UpdateFocus(raw) => {
            if let Ok(level) = raw.parse::<u8>() {
                page.draft.focus_level = level.clamp(1, 10);
            }
            true
        }
        Msg::UpdateMood(raw) => {
            page.draft.mood = Mood::parse(&raw);
            true
        }
        Msg::UpdateProductivity(raw) => {
            if let Ok(level) = raw.parse::<u8>() {
                page.draft.productivity_level = level.clamp(1, 10);
            }
            true
        }
        Msg::Submit => {
            if page.submitting {
                return false;
            }
            page.submitting = true;
            page.last_error = None;

            let record = page.draft.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let request = match Request::post("/api/survey/submit").json(&record) {
                    Ok(request) => request,
                    Err(e) => {
                        link.send_message(Msg::SaveFailed(e.to_string()));
                        return;
                    }
                };
                match request.send().await {
                    Ok(resp) if resp.ok() => match resp.json::<SubmitReceipt>().await {
                        Ok(receipt) => link.send_message(Msg::Saved(receipt)),
                        Err(e) => link.send_message(Msg::SaveFailed(e.to_string())),
                    },
                    Ok(resp) => {
                        let reason = resp
                            .text()
                            .await
                            .unwrap_or_else(|_| format!("unexpected status {}", resp.status()));
                        link.send_message(Msg::SaveFailed(reason));
                    }
                    Err(e) => link.send_message(Msg::SaveFailed(e.to_string())),
                }
            });
            true
        }
        Msg::Saved(receipt) => {
            page.submitting = false;
            page.last_receipt = Some(receipt);
            // The log changed underneath the inspection table; reload it.
            super::fetch_records(ctx.link().clone());
            true
        }
        Msg::SaveFailed(reason) => {
            error!("survey submit failed:", reason.clone());
            page.submitting = false;
            page.last_error = Some(reason);
            true
        }
        Msg::RecordsLoaded(load) => {
            page.records = Some(load);
            true
        }
        Msg::RecordsFailed(reason) => {
            error!("survey log load failed:", reason.clone());
            page.records = Some(TableLoad {
                status: LoadStatus::Failed(reason),
                table: SurveyTable::default(),
            });
            true
        }
    }
}
