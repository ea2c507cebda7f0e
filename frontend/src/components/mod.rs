//! One Yew component per page.
//!
//! The page logic lives in `crud_common::pages`; the components here only own
//! a page state, render it, and run the commands it hands back with
//! `spawn_local`, feeding the outcome back in as the next message.

use crud_common::api::ApiClient;
use crud_common::config::ApiConfig;
use crud_common::pages::Page;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::transport::HttpTransport;
use helpers::show_toast;

pub mod customers;
pub mod helpers;
pub mod items;
pub mod samples;
pub mod status;

pub type Client = ApiClient<HttpTransport>;

/// Properties shared by every page: the backend address resolved at startup.
#[derive(Properties, PartialEq, Clone)]
pub struct PageProps {
    pub config: ApiConfig,
}

pub fn client_for(props: &PageProps) -> Client {
    ApiClient::new(props.config.clone(), HttpTransport)
}

/// Applies `msg` to `page` and, if a command comes back, runs it in the
/// background and posts its outcome to `link`. Returns `true` so the caller
/// re-renders.
pub fn drive<C, P>(page: &mut P, client: &Client, link: &Scope<C>, msg: P::Msg) -> bool
where
    C: Component<Message = P::Msg>,
    P: Page + 'static,
{
    if let Some(notice) = P::notice(&msg) {
        show_toast(&notice);
    }
    if let Some(cmd) = page.update(msg) {
        let client = client.clone();
        let link = link.clone();
        spawn_local(async move {
            let msg = P::execute(&client, cmd).await;
            link.send_message(msg);
        });
    }
    true
}
