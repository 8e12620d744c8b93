//! Storage and audit ports consumed by [`crate::ItemService`].

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use depot_core::ItemId;

use crate::{Item, ItemRequest};

/// Item store failure. The message is what callers end up seeing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Backend(String),

    #[error("item store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// CRUD over items. The store owns record lifetime and id assignment.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, in store order.
    async fn list_items(&self) -> Result<Vec<Item>, StoreError>;

    async fn get_item(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// Persist a new item and return it with its assigned id.
    async fn create_item(&self, request: &ItemRequest) -> Result<Item, StoreError>;

    /// Persist an item previously fetched and mutated by the caller.
    async fn update_item(&self, item: &Item) -> Result<(), StoreError>;

    async fn delete_item(&self, item: &Item) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        (**self).list_items().await
    }

    async fn get_item(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        (**self).get_item(id).await
    }

    async fn create_item(&self, request: &ItemRequest) -> Result<Item, StoreError> {
        (**self).create_item(request).await
    }

    async fn update_item(&self, item: &Item) -> Result<(), StoreError> {
        (**self).update_item(item).await
    }

    async fn delete_item(&self, item: &Item) -> Result<(), StoreError> {
        (**self).delete_item(item).await
    }
}

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("invalid audit destination '{0}'")]
    InvalidDestination(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Backend(String),
}

/// Append-only audit log, one line per call, grouped by destination name.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn write(&self, destination: &str, line: &str) -> Result<(), AuditError>;
}

#[async_trait]
impl<A> AuditSink for Arc<A>
where
    A: AuditSink + ?Sized,
{
    async fn write(&self, destination: &str, line: &str) -> Result<(), AuditError> {
        (**self).write(destination, line).await
    }
}
