//! Status Viewer page.

use crud_common::pages::status::{StatusViewer, StatusMsg};
use yew::prelude::*;

use super::{client_for, drive, Client, PageProps};

mod view;

pub struct StatusPage {
    pub state: StatusViewer,
    client: Client,
    loaded: bool,
}

impl Component for StatusPage {
    type Message = StatusMsg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: StatusViewer::default(),
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
            ctx.link().send_message(StatusMsg::Load);
        }
    }
}
