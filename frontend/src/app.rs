use crud_common::config::ApiConfig;
use log::info;
use yew::{classes, html, Component, Context, Html};

use crate::components::customers::CustomersPage;
use crate::components::items::ItemsPage;
use crate::components::samples::SamplesPage;
use crate::components::status::StatusPage;

/// Pages reachable from the navigation bar. Each one keeps its own state,
/// which is dropped as soon as another page is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Customers,
    Samples,
    Items,
    Status,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Customers, Screen::Samples, Screen::Items, Screen::Status];

    pub fn hash(&self) -> &'static str {
        match self {
            Screen::Customers => "#/customers",
            Screen::Samples => "#/sample",
            Screen::Items => "#/items",
            Screen::Status => "#/status",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Customers => "Customers",
            Screen::Samples => "Sample",
            Screen::Items => "Items",
            Screen::Status => "Status",
        }
    }

    /// Screen named by a location hash; anything unknown opens Customers.
    pub fn from_hash(hash: &str) -> Screen {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.hash() == hash)
            .unwrap_or(Screen::Customers)
    }
}

pub enum Msg {
    Show(Screen),
}

pub struct App {
    config: ApiConfig,
    screen: Screen,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = crate::config::resolve();
        info!("backend at {}", config.base_url());
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self {
            config,
            screen: Screen::from_hash(&hash),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Show(screen) => {
                if screen == self.screen {
                    return false;
                }
                self.screen = screen;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_hash(screen.hash());
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let config = self.config.clone();
        html! {
            <div>
                <nav style="display:flex;gap:8px;justify-content:center;padding:12px;border-bottom:1px solid #eee;font-family:system-ui,sans-serif;">
                    { for Screen::ALL.into_iter().map(|screen| html! {
                        <button
                            class={classes!("tab-btn", (screen == self.screen).then_some("active"))}
                            onclick={link.callback(move |_| Msg::Show(screen))}
                        >
                            { screen.title() }
                        </button>
                    }) }
                </nav>
                {
                    match self.screen {
                        Screen::Customers => html! { <CustomersPage {config} /> },
                        Screen::Samples => html! { <SamplesPage {config} /> },
                        Screen::Items => html! { <ItemsPage {config} /> },
                        Screen::Status => html! { <StatusPage {config} /> },
                    }
                }
            </div>
        }
    }
}
