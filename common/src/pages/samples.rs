//! Sample Manager: list named records and add new ones.

use async_trait::async_trait;
use log::warn;

use super::Page;
use crate::api::{ApiClient, ApiError, Transport};
use crate::model::sample::SampleRecord;

#[derive(Debug, Default)]
pub struct SampleManager {
    pub rows: Vec<SampleRecord>,
    pub name: String,
}

#[derive(Debug)]
pub enum SampleMsg {
    Load,
    Loaded(Result<Vec<SampleRecord>, ApiError>),
    EditName(String),
    Add,
    Added(Result<(), ApiError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SampleCmd {
    FetchList,
    Create(String),
}

#[async_trait(?Send)]
impl Page for SampleManager {
    type Msg = SampleMsg;
    type Cmd = SampleCmd;

    fn update(&mut self, msg: SampleMsg) -> Option<SampleCmd> {
        match msg {
            SampleMsg::Load => Some(SampleCmd::FetchList),
            // The body is taken as the list without any shape check; a body
            // that does not decode leaves the previous rows on screen.
            SampleMsg::Loaded(Ok(rows)) => {
                self.rows = rows;
                None
            }
            SampleMsg::Loaded(Err(err)) => {
                warn!("sample list refresh failed: {}", err);
                None
            }
            SampleMsg::EditName(name) => {
                self.name = name;
                None
            }
            SampleMsg::Add => {
                if self.name.is_empty() {
                    return None;
                }
                Some(SampleCmd::Create(self.name.clone()))
            }
            SampleMsg::Added(outcome) => {
                if let Err(err) = outcome {
                    warn!("create sample failed: {}", err);
                }
                self.name.clear();
                Some(SampleCmd::FetchList)
            }
        }
    }

    async fn execute<T: Transport>(client: &ApiClient<T>, cmd: SampleCmd) -> SampleMsg {
        match cmd {
            SampleCmd::FetchList => SampleMsg::Loaded(client.list_samples().await),
            SampleCmd::Create(name) => SampleMsg::Added(client.create_sample(&name).await),
        }
    }

    fn notice(msg: &SampleMsg) -> Option<String> {
        match msg {
            SampleMsg::Added(Err(err)) => Some(format!("Add failed: {}", err)),
            _ => None,
        }
    }
}
