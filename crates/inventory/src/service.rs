//! Permission-gated item operations.
//!
//! Every operation follows the same shape:
//! permission check → store lookup → operation, with `?` turning any
//! denial into `Forbidden` and any store/audit fault into `BadInput`.

use depot_auth::{authorize, AuthorizationPort, Permission};
use depot_core::{ItemId, LocationId};

use crate::{AuditSink, Discount, Item, ItemError, ItemRequest, ItemStore};

pub const LOCATION_MISMATCH: &str = "Cannot add items to different location";

/// Orchestrates the item store and audit sink on behalf of a caller.
///
/// Holds no per-call state; share one instance across requests.
#[derive(Debug, Clone)]
pub struct ItemService<S, A> {
    store: S,
    audit: A,
}

impl<S, A> ItemService<S, A>
where
    S: ItemStore,
    A: AuditSink,
{
    pub fn new(store: S, audit: A) -> Self {
        Self { store, audit }
    }

    /// Everything for authenticated callers; only public items otherwise.
    #[tracing::instrument(skip_all, fields(authenticated = caller.is_authenticated()))]
    pub async fn list_items(&self, caller: &dyn AuthorizationPort) -> Result<Vec<Item>, ItemError> {
        let items = self.store.list_items().await?;

        if caller.is_authenticated() {
            return Ok(items);
        }

        Ok(items
            .into_iter()
            .filter(|item| !item.requires_authorized_user)
            .collect())
    }

    #[tracing::instrument(skip_all, fields(item_id = %id))]
    pub async fn get_item(&self, caller: &dyn AuthorizationPort, id: ItemId) -> Result<Item, ItemError> {
        authorize(caller, Permission::ViewItem)?;
        self.find(id).await
    }

    /// Item price after the caller's discount tier.
    #[tracing::instrument(skip_all, fields(item_id = %id))]
    pub async fn get_item_price(&self, caller: &dyn AuthorizationPort, id: ItemId) -> Result<f64, ItemError> {
        authorize(caller, Permission::ViewItem)?;
        let item = self.find(id).await?;

        let discount = discount_for(caller, &item);
        tracing::debug!(?discount, price = item.price, "priced item");
        Ok(discount.apply(item.price))
    }

    /// Non-admins may only create items for their own workplace.
    #[tracing::instrument(skip_all, fields(location_id = %request.location_id))]
    pub async fn add_item(
        &self,
        caller: &dyn AuthorizationPort,
        request: &ItemRequest,
    ) -> Result<Item, ItemError> {
        authorize(caller, Permission::CreateItems)?;

        if !caller.has_permission(Permission::Admin) && caller.workplace_id() != request.location_id {
            return Err(ItemError::bad_input(LOCATION_MISMATCH));
        }

        let item = self.store.create_item(request).await?;
        tracing::info!(item_id = %item.id, "item created");
        Ok(item)
    }

    /// Replace all mutable fields of an item, then audit the change.
    ///
    /// No location check here, unlike `add_item`. The update is persisted
    /// before the audit line; an audit failure is still reported as
    /// `BadInput` and the update stays committed.
    #[tracing::instrument(skip_all, fields(item_id = %id))]
    pub async fn update_item(
        &self,
        caller: &dyn AuthorizationPort,
        id: ItemId,
        request: &ItemRequest,
    ) -> Result<(), ItemError> {
        authorize(caller, Permission::UpdateItems)?;

        let mut item = self.find(id).await?;
        item.overwrite_with(request);
        self.store.update_item(&item).await?;

        self.audit
            .write(
                &audit_destination(caller.workplace_id()),
                &format!("user id={} updated item id={}", caller.user_id(), id),
            )
            .await?;

        tracing::info!("item updated");
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(item_id = %id))]
    pub async fn delete_item(&self, caller: &dyn AuthorizationPort, id: ItemId) -> Result<(), ItemError> {
        authorize(caller, Permission::DeleteItems)?;

        let item = self.find(id).await?;
        self.store.delete_item(&item).await?;

        tracing::info!("item deleted");
        Ok(())
    }

    async fn find(&self, id: ItemId) -> Result<Item, ItemError> {
        self.store.get_item(id).await?.ok_or(ItemError::NotFound(id))
    }
}

/// Discount tier for `item` as seen by `caller`; `None` without `GetDiscount`.
pub fn discount_for(caller: &dyn AuthorizationPort, item: &Item) -> Discount {
    if !caller.has_permission(Permission::GetDiscount) {
        return Discount::None;
    }
    Discount::for_price(item.price)
}

/// Audit log name for a workplace.
pub fn audit_destination(workplace_id: LocationId) -> String {
    format!("{workplace_id}.log")
}
