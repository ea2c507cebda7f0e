use serde::{Deserialize, Serialize};

/// A catalogue item.
///
/// `price` is a decimal the backend serialises as a string ("1200.00"), so it
/// stays a string here to avoid any float rounding on the way through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    pub item_name: String,
    pub price: String,
    #[serde(default)]
    pub id: Option<i64>,
    pub created_at: String,
}

impl Item {
    pub fn row_label(&self) -> String {
        format!("{} — {} ¥{}", self.item_id, self.item_name, self.price)
    }
}
