use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use depot_core::ItemId;
use depot_inventory::{Item, ItemRequest, ItemStore, StoreError};

#[derive(Debug)]
struct State {
    items: BTreeMap<ItemId, Item>,
    next_id: i64,
}

/// In-memory item store.
///
/// Ids start at 1 and are never reused, so iteration order (by id) is
/// creation order. Intended for tests/dev.
#[derive(Debug)]
pub struct InMemoryItemStore {
    state: RwLock<State>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Seed the store with fixed items (ids are kept as given).
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items: BTreeMap<ItemId, Item> = items.into_iter().map(|i| (i.id, i)).collect();
        let next_id = items.keys().next_back().map(|id| id.get() + 1).unwrap_or(1);

        Self {
            state: RwLock::new(State { items, next_id }),
        }
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
        Ok(state.items.values().cloned().collect())
    }

    async fn get_item(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
        Ok(state.items.get(&id).cloned())
    }

    async fn create_item(&self, request: &ItemRequest) -> Result<Item, StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;

        let id = ItemId::new(state.next_id);
        state.next_id += 1;

        let item = Item::from_request(id, request);
        state.items.insert(id, item.clone());
        Ok(item)
    }

    async fn update_item(&self, item: &Item) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;

        match state.items.get_mut(&item.id) {
            Some(slot) => {
                *slot = item.clone();
                Ok(())
            }
            None => Err(StoreError::backend(format!("item {} no longer exists", item.id))),
        }
    }

    async fn delete_item(&self, item: &Item) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;
        state.items.remove(&item.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::LocationId;

    fn request(name: &str) -> ItemRequest {
        ItemRequest {
            price: 12.0,
            name: name.to_string(),
            location_id: LocationId::new(1),
            requires_authorized_user: false,
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids_and_lists_in_creation_order() {
        let store = InMemoryItemStore::new();

        let a = store.create_item(&request("a")).await.unwrap();
        let b = store.create_item(&request("b")).await.unwrap();

        assert_eq!(a.id, ItemId::new(1));
        assert_eq!(b.id, ItemId::new(2));

        let names: Vec<String> = store.list_items().await.unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryItemStore::new();
        let a = store.create_item(&request("a")).await.unwrap();
        store.delete_item(&a).await.unwrap();

        let b = store.create_item(&request("b")).await.unwrap();
        assert_eq!(b.id, ItemId::new(2));
        assert_eq!(store.get_item(a.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_persists_mutated_item() {
        let store = InMemoryItemStore::new();
        let mut item = store.create_item(&request("a")).await.unwrap();

        item.overwrite_with(&request("renamed"));
        store.update_item(&item).await.unwrap();

        assert_eq!(store.get_item(item.id).await.unwrap().unwrap().name, "renamed");
    }

    #[tokio::test]
    async fn update_of_vanished_item_fails() {
        let store = InMemoryItemStore::new();
        let item = Item::from_request(ItemId::new(9), &request("ghost"));

        let err = store.update_item(&item).await.unwrap_err();
        assert_eq!(err, StoreError::backend("item 9 no longer exists"));
    }

    #[tokio::test]
    async fn seeded_store_continues_after_highest_id() {
        let store = InMemoryItemStore::with_items([Item::from_request(ItemId::new(40), &request("x"))]);
        let next = store.create_item(&request("y")).await.unwrap();
        assert_eq!(next.id, ItemId::new(41));
    }
}
