use std::sync::Arc;

use toolshop_core::{DomainResult, Item, ItemId};
use toolshop_infra::ItemStore;

use crate::config::ApiConfig;

/// Static application metadata served by `/info`.
#[derive(Debug, Clone)]
pub struct AppInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

/// Everything a handler needs, shared behind an `Arc`.
pub struct AppServices {
    store: Arc<dyn ItemStore>,
    info: AppInfo,
}

impl AppServices {
    pub fn new(store: Arc<dyn ItemStore>, config: &ApiConfig) -> Self {
        Self {
            store,
            info: AppInfo {
                title: config.title.clone(),
                description: config.description.clone(),
                version: config.version.clone(),
            },
        }
    }

    pub fn info(&self) -> &AppInfo {
        &self.info
    }

    pub fn items_list(&self) -> DomainResult<Vec<Item>> {
        self.store.list()
    }

    pub fn items_get(&self, id: ItemId) -> DomainResult<Item> {
        self.store.get(id)
    }

    pub fn items_create(&self, item: Item) -> DomainResult<Item> {
        self.store.create(item)
    }

    pub fn items_update(&self, id: ItemId, item: Item) -> DomainResult<Item> {
        self.store.update(id, item)
    }

    pub fn items_delete(&self, id: ItemId) -> DomainResult<Item> {
        self.store.delete(id)
    }
}
