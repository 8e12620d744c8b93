use std::sync::Arc;

use anyhow::Context;

use depot_infra::audit::FileAuditSink;
use depot_infra::item_store::{InMemoryItemStore, PostgresItemStore};
use depot_inventory::{AuditSink, ItemService, ItemStore};

use crate::config::ApiConfig;

/// Item service over type-erased adapters, so the router doesn't care which
/// store/sink were picked at start-up.
pub type DynItemService = ItemService<Arc<dyn ItemStore>, Arc<dyn AuditSink>>;

#[derive(Clone)]
pub struct AppServices {
    pub items: DynItemService,
}

impl AppServices {
    pub fn new(store: Arc<dyn ItemStore>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            items: ItemService::new(store, audit),
        }
    }
}

/// Pick adapters from configuration: Postgres when `DATABASE_URL` is set,
/// in-memory otherwise; audit lines always go to files under `AUDIT_DIR`.
pub async fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    let store: Arc<dyn ItemStore> = match &config.database_url {
        Some(url) => {
            let store = PostgresItemStore::connect(url)
                .await
                .context("failed to connect item store")?;
            tracing::info!("using postgres item store");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; items are kept in memory");
            Arc::new(InMemoryItemStore::new())
        }
    };

    let audit = FileAuditSink::new(&config.audit_dir);
    tracing::info!(dir = %audit.dir().display(), "audit log directory");

    Ok(AppServices::new(store, Arc::new(audit)))
}
