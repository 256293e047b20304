//! View rendering for the survey page.
//!
//! Top to bottom: title and directions, the intake form, the result notice
//! of the last submission, and an inspection table showing the full current
//! contents of the survey log.

use common::model::survey::Mood;
use common::model::table::SurveyTable;
use common::requests::LoadStatus;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SurveyPage;

pub fn view(page: &SurveyPage, ctx: &Context<SurveyPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="survey-page">
            <h1>{"Screen Time Survey"}</h1>
            <p>{"Track your daily phone usage and how it affects your focus and mood!"}</p>

            { build_form(page, link) }
            { build_result_notice(page) }

            <hr class="divider" />
            <h2>{"Current Survey Data"}</h2>
            { build_records_section(page) }
        </div>
    }
}

fn build_form(page: &SurveyPage, link: &Scope<SurveyPage>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form {onsubmit}>
            <div class="form-row">
                <label for="name-input">{"Enter your name:"}</label>
                <input
                    id="name-input"
                    type="text"
                    value={page.draft.name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateName(input.value())
                    })}
                />
            </div>

            <div class="form-row">
                <label for="screen-time-input">
                    {"How many hours did you spend on your phone today?"}
                </label>
                <input
                    id="screen-time-input"
                    type="number"
                    min="0"
                    step="0.5"
                    value={page.draft.screen_time_hours.to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateScreenTime(input.value())
                    })}
                />
            </div>

            <div class="form-row">
                <label for="focus-input">
                    {"How focused did you feel today? (1 = not focused, 10 = very focused)"}
                </label>
                <input
                    id="focus-input"
                    type="range"
                    min="1"
                    max="10"
                    value={page.draft.focus_level.to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateFocus(input.value())
                    })}
                />
                <span class="range-value">{ page.draft.focus_level }</span>
            </div>

            <div class="form-row">
                <label for="mood-select">{"How was your mood today?"}</label>
                <select
                    id="mood-select"
                    onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::UpdateMood(select.value())
                    })}
                >
                    {
                        for Mood::ALL.iter().map(|mood| html! {
                            <option
                                value={mood.as_str()}
                                selected={page.draft.mood == *mood}
                            >
                                { mood.as_str() }
                            </option>
                        })
                    }
                </select>
            </div>

            <div class="form-row">
                <label for="productivity-input">
                    {"How productive did you feel today? (1–10)"}
                </label>
                <input
                    id="productivity-input"
                    type="range"
                    min="1"
                    max="10"
                    value={page.draft.productivity_level.to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::UpdateProductivity(input.value())
                    })}
                />
                <span class="range-value">{ page.draft.productivity_level }</span>
            </div>

            <button type="submit" disabled={page.submitting}>{"Submit Data"}</button>
        </form>
    }
}

/// Outcome of the last submission: a success notice plus the one-line
/// summary, or an error notice naming the reason the entry was not saved.
fn build_result_notice(page: &SurveyPage) -> Html {
    if let Some(reason) = &page.last_error {
        return html! {
            <div class="notice error">{ format!("Your data was NOT saved: {}", reason) }</div>
        };
    }
    match &page.last_receipt {
        Some(receipt) => html! {
            <>
                <div class="notice success">{"Your data has been saved!"}</div>
                <p class="summary">{ receipt.summary.clone() }</p>
            </>
        },
        None => html! {},
    }
}

fn build_records_section(page: &SurveyPage) -> Html {
    match &page.records {
        None => html! { <p>{"Loading survey data…"}</p> },
        Some(load) => match &load.status {
            LoadStatus::Missing => html! {
                <div class="notice warning">
                    {"The 'data.csv' file is empty or does not exist yet."}
                </div>
            },
            LoadStatus::Failed(reason) => html! {
                <div class="notice error">{ format!("Error loading survey data: {}", reason) }</div>
            },
            LoadStatus::Loaded => data_table(&load.table),
        },
    }
}

fn data_table(table: &SurveyTable) -> Html {
    html! {
        <table class="data-table">
            <thead>
                <tr>
                    { for table.columns.iter().map(|column| html! {
                        <th>{ column.title.clone() }</th>
                    }) }
                </tr>
            </thead>
            <tbody>
                {
                    for table.rows.iter().map(|row| html! {
                        <tr>
                            { for row.iter().map(|cell| html! { <td>{ cell.clone() }</td> }) }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}
