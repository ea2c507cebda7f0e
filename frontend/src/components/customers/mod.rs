//! Customer Manager page.

use crud_common::pages::customers::{CustomerManager, CustomerMsg};
use yew::prelude::*;

use super::{client_for, drive, Client, PageProps};

mod view;

pub struct CustomersPage {
    pub state: CustomerManager,
    client: Client,
    /// Guards the one-time initial fetch.
    loaded: bool,
}

impl Component for CustomersPage {
    type Message = CustomerMsg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: CustomerManager::default(),
            client: client_for(ctx.props()),
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        drive(&mut self.state, &self.client, ctx.link(), msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(CustomerMsg::Load);
        }
    }
}
