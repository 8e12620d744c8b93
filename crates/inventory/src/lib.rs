//! Inventory domain module.
//!
//! Items, discount tiers, the storage/audit ports, and [`ItemService`], which
//! combines permission checks, store access and pricing into outcomes.

pub mod discount;
pub mod error;
pub mod item;
pub mod ports;
pub mod service;

pub use discount::Discount;
pub use error::ItemError;
pub use item::{Item, ItemRequest};
pub use ports::{AuditError, AuditSink, ItemStore, StoreError};
pub use service::ItemService;
