//! Infrastructure layer: item persistence and audit log adapters.

pub mod audit;
pub mod item_store;
