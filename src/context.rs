//! State container that front ends drive the item store through.
//!
//! `ItemContext` keeps a cached copy of the collection in step with the store,
//! tracks the selected item and the last error, and queues user-facing
//! notices. A failed operation never touches the cached list.
use std::sync::Arc;

use log::error;

use crate::{InventoryError, Item, ItemFields, ItemStore, KeyValueStore};

/// A message to present to the user after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

pub struct ItemContext<S> {
    store: Arc<ItemStore<S>>,
    items: Vec<Item>,
    selected: Option<Item>,
    error: Option<String>,
    notices: Vec<Notice>,
}

impl<S: KeyValueStore> ItemContext<S> {
    /// Creates an empty context over an already constructed store
    pub fn new(store: Arc<ItemStore<S>>) -> Self {
        Self {
            store,
            items: Vec::new(),
            selected: None,
            error: None,
            notices: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn selected(&self) -> Option<&Item> {
        self.selected.as_ref()
    }

    pub fn set_selected(&mut self, item: Option<Item>) {
        self.selected = item;
    }

    /// Message describing the last failed operation
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Drains the queued notices, oldest first
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Reloads the cached list from the store.
    pub async fn fetch_items(&mut self) {
        match self.store.list_all().await {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.fail(e, "Failed to fetch items", "Failed to load items"),
        }
    }

    /// Loads a single item and makes it the selected one.
    pub async fn get_item(&mut self, id: &str) -> Option<Item> {
        match self.store.get_by_id(id).await {
            Ok(item) => {
                self.selected = Some(item.clone());
                Some(item)
            }
            Err(e) => {
                self.fail(e, "Failed to get item details", "Failed to load item details");
                None
            }
        }
    }

    pub async fn create_item(&mut self, fields: ItemFields) -> Option<Item> {
        match self.store.create(fields).await {
            Ok(item) => {
                self.items.push(item.clone());
                self.notices
                    .push(Notice::Success("Item created successfully!".to_string()));
                Some(item)
            }
            Err(e) => {
                self.fail(e, "Failed to create item", "Failed to create item");
                None
            }
        }
    }

    pub async fn update_item(&mut self, id: &str, fields: ItemFields) -> Option<Item> {
        match self.store.update(id, fields).await {
            Ok(updated) => {
                for item in self.items.iter_mut().filter(|item| item.id == id) {
                    *item = updated.clone();
                }
                self.notices
                    .push(Notice::Success("Item updated successfully!".to_string()));
                Some(updated)
            }
            Err(e) => {
                self.fail(e, "Failed to update item", "Failed to update item");
                None
            }
        }
    }

    pub async fn delete_item(&mut self, id: &str) -> bool {
        match self.store.delete(id).await {
            Ok(_) => {
                self.items.retain(|item| item.id != id);
                self.notices
                    .push(Notice::Success("Item deleted successfully!".to_string()));
                true
            }
            Err(e) => {
                self.fail(e, "Failed to delete item", "Failed to delete item");
                false
            }
        }
    }

    fn fail(&mut self, err: InventoryError, state_message: &str, notice: &str) {
        error!("{}: {}", state_message, err);
        self.error = Some(state_message.to_string());
        self.notices.push(Notice::Error(notice.to_string()));
    }
}
