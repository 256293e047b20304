use crate::components::survey::SurveyPage;
use crate::components::visuals::VisualsPage;
use yew::{classes, html, Component, Context, Html};

/// The two independently addressable views of the app.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Survey,
    Visuals,
}

pub enum Msg {
    SetPage(Page),
}

pub struct App {
    active_page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            active_page: Page::Survey,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetPage(page) => {
                let changed = self.active_page != page;
                self.active_page = page;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tab = |page: Page, label: &str| {
            html! {
                <button
                    class={classes!("tab-btn", (self.active_page == page).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetPage(page))}
                >
                    { label }
                </button>
            }
        };

        html! {
            <div class="app-root">
                <nav class="tab-bar">
                    { tab(Page::Survey, "Survey") }
                    { tab(Page::Visuals, "Visualizations") }
                </nav>
                {
                    match self.active_page {
                        Page::Survey => html! { <SurveyPage /> },
                        Page::Visuals => html! { <VisualsPage /> },
                    }
                }
            </div>
        }
    }
}
