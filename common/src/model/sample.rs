use serde::{Deserialize, Serialize};

/// A row of the `sample` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub id: i64,
    pub name: String,
    /// Timestamp assigned by the backend, kept as the ISO-8601 text it was
    /// sent as. The frontend renders it in the browser locale.
    pub created_at: String,
}
