//! Page state machines.
//!
//! Each page follows an Elm-style loop: `update` applies a message to the
//! page state and may hand back one command; `execute` performs that command
//! against the backend and turns the outcome into the next message. A refresh
//! command is only ever produced by the message that reports a finished
//! mutation, so within one action the mutation always completes before the
//! refresh starts.

use async_trait::async_trait;

use crate::api::{ApiClient, Transport};

pub mod customers;
pub mod items;
pub mod samples;
pub mod status;

#[async_trait(?Send)]
pub trait Page: Default {
    type Msg: 'static;
    type Cmd: 'static;

    /// Applies `msg` to the state. Returns the network step to run next, if any.
    fn update(&mut self, msg: Self::Msg) -> Option<Self::Cmd>;

    /// Runs one network step and reports its outcome as a message.
    async fn execute<T: Transport>(client: &ApiClient<T>, cmd: Self::Cmd) -> Self::Msg;

    /// Message worth showing to the user as a transient notice.
    fn notice(_msg: &Self::Msg) -> Option<String> {
        None
    }
}

/// Feeds `msg` into `page` and keeps executing the resulting commands until
/// the page is idle.
#[cfg(test)]
pub(crate) async fn run_to_idle<P: Page, T: Transport>(
    page: &mut P,
    client: &ApiClient<T>,
    msg: P::Msg,
) {
    let mut next = page.update(msg);
    while let Some(cmd) = next {
        let msg = P::execute(client, cmd).await;
        next = page.update(msg);
    }
}

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
