use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
/// Request payload for `POST /sample`.
/// Only the name is sent; the backend assigns `id` and `created_at`.
pub struct CreateSampleRequest {
    pub name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
/// Request payload for `POST /items`.
/// `price` is the decimal exactly as typed; the backend parses it.
pub struct CreateItemRequest {
    pub item_name: String,
    pub price: String,
}
