use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload of `GET /health/db`.
///
/// Only `db` is interpreted. Anything else the backend adds (the database
/// name, or an error `detail` when the status is not 2xx) is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DbHealth {
    #[serde(default)]
    pub db: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DbHealth {
    pub fn is_ok(&self) -> bool {
        self.db.as_deref() == Some("ok")
    }
}

/// Payload of `GET /health/info`. No schema is assumed.
pub type InfoSnapshot = Value;
