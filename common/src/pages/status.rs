//! Status Viewer: one-shot read of the two health endpoints.
//!
//! This is the only page that shows errors to the user. Anything that goes
//! wrong while probing is stringified into `error`.

use async_trait::async_trait;
use serde_json::Value;

use super::Page;
use crate::api::{ApiClient, ApiError, ApiResponse, Transport};
use crate::model::health::{DbHealth, InfoSnapshot};

pub const OK_COLOR: &str = "limegreen";
pub const NOT_OK_COLOR: &str = "orangered";

#[derive(Debug, Default)]
pub struct StatusViewer {
    pub db: Option<DbHealth>,
    pub info: Option<InfoSnapshot>,
    pub error: Option<String>,
}

/// What one probe managed to read. `db` is only set once both requests went
/// through and the DB body decoded.
#[derive(Debug, Default)]
pub struct Probe {
    pub db: Option<DbHealth>,
    pub info: Option<InfoSnapshot>,
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum StatusMsg {
    Load,
    Probed(Probe),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCmd {
    Probe,
}

impl StatusViewer {
    /// Green only when the DB token is exactly `"ok"`; pending counts as not ok.
    pub fn indicator_color(&self) -> &'static str {
        match &self.db {
            Some(db) if db.is_ok() => OK_COLOR,
            _ => NOT_OK_COLOR,
        }
    }

    pub fn db_label(&self) -> String {
        let token = self
            .db
            .as_ref()
            .and_then(|db| db.db.as_deref())
            .filter(|token| !token.is_empty())
            .unwrap_or("...");
        format!("Backend → DB: {}", token)
    }

    /// Info payload as 2-space indented JSON.
    pub fn info_pretty(&self) -> Option<String> {
        self.info
            .as_ref()
            .filter(|info| !info.is_null())
            .and_then(|info| serde_json::to_string_pretty(info).ok())
    }

    pub fn error_label(&self) -> Option<String> {
        self.error.as_ref().map(|err| format!("Error: {}", err))
    }
}

#[async_trait(?Send)]
impl Page for StatusViewer {
    type Msg = StatusMsg;
    type Cmd = StatusCmd;

    fn update(&mut self, msg: StatusMsg) -> Option<StatusCmd> {
        match msg {
            StatusMsg::Load => Some(StatusCmd::Probe),
            StatusMsg::Probed(probe) => {
                if probe.db.is_some() {
                    self.db = probe.db;
                }
                if probe.info.is_some() {
                    self.info = probe.info;
                }
                if probe.error.is_some() {
                    self.error = probe.error;
                }
                None
            }
        }
    }

    async fn execute<T: Transport>(client: &ApiClient<T>, cmd: StatusCmd) -> StatusMsg {
        match cmd {
            StatusCmd::Probe => {
                let mut probe = Probe::default();
                let (db_response, info_response) = match fetch_both(client).await {
                    Ok(responses) => responses,
                    Err(err) => {
                        probe.error = Some(err.to_string());
                        return StatusMsg::Probed(probe);
                    }
                };
                match db_response.json::<DbHealth>() {
                    Ok(db) => probe.db = Some(db),
                    Err(err) => {
                        probe.error = Some(err.to_string());
                        return StatusMsg::Probed(probe);
                    }
                }
                match info_response.json::<InfoSnapshot>() {
                    Ok(Value::Null) => {}
                    Ok(info) => probe.info = Some(info),
                    Err(err) => probe.error = Some(err.to_string()),
                }
                StatusMsg::Probed(probe)
            }
        }
    }
}

/// Sends both health requests, DB first. Only a transport failure stops the
/// sequence; bodies are decoded afterwards.
async fn fetch_both<T: Transport>(
    client: &ApiClient<T>,
) -> Result<(ApiResponse, ApiResponse), ApiError> {
    let db = client.health_db().await?;
    let info = client.health_info().await?;
    Ok((db, info))
}
