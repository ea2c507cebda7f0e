//! Item Manager: list catalogue items and create new ones.

use async_trait::async_trait;
use log::warn;

use super::Page;
use crate::api::{ApiClient, ApiError, Transport};
use crate::model::item::Item;
use crate::requests::CreateItemRequest;

#[derive(Debug, Default)]
pub struct ItemManager {
    pub rows: Vec<Item>,
    pub item_name: String,
    pub price: String,
    pub busy: bool,
}

#[derive(Debug)]
pub enum ItemMsg {
    Load,
    Loaded(Result<Vec<Item>, ApiError>),
    EditName(String),
    EditPrice(String),
    Add,
    Added(Result<(), ApiError>),
    Resynced(Result<Vec<Item>, ApiError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemCmd {
    FetchList,
    Resync,
    Create(CreateItemRequest),
}

impl ItemManager {
    fn apply_rows(&mut self, outcome: Result<Vec<Item>, ApiError>) {
        match outcome {
            Ok(rows) => self.rows = rows,
            Err(err) => warn!("item list refresh failed: {}", err),
        }
    }
}

#[async_trait(?Send)]
impl Page for ItemManager {
    type Msg = ItemMsg;
    type Cmd = ItemCmd;

    fn update(&mut self, msg: ItemMsg) -> Option<ItemCmd> {
        match msg {
            ItemMsg::Load => Some(ItemCmd::FetchList),
            ItemMsg::Loaded(outcome) => {
                self.apply_rows(outcome);
                None
            }
            ItemMsg::EditName(value) => {
                self.item_name = value;
                None
            }
            ItemMsg::EditPrice(value) => {
                self.price = value;
                None
            }
            ItemMsg::Add => {
                let price = self.price.trim();
                if self.item_name.is_empty() || price.is_empty() {
                    return None;
                }
                self.busy = true;
                Some(ItemCmd::Create(CreateItemRequest {
                    item_name: self.item_name.clone(),
                    price: price.to_string(),
                }))
            }
            ItemMsg::Added(outcome) => {
                if let Err(err) = outcome {
                    warn!("create item failed: {}", err);
                }
                self.item_name.clear();
                self.price.clear();
                Some(ItemCmd::Resync)
            }
            ItemMsg::Resynced(outcome) => {
                self.apply_rows(outcome);
                self.busy = false;
                None
            }
        }
    }

    async fn execute<T: Transport>(client: &ApiClient<T>, cmd: ItemCmd) -> ItemMsg {
        match cmd {
            ItemCmd::FetchList => ItemMsg::Loaded(client.list_items().await),
            ItemCmd::Resync => ItemMsg::Resynced(client.list_items().await),
            ItemCmd::Create(payload) => ItemMsg::Added(client.create_item(&payload).await),
        }
    }

    fn notice(msg: &ItemMsg) -> Option<String> {
        match msg {
            ItemMsg::Added(Err(err)) => Some(format!("Add failed: {}", err)),
            _ => None,
        }
    }
}
