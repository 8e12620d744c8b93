//! `ItemStore` adapters.
//!
//! `InMemoryItemStore` backs dev runs and tests; `PostgresItemStore` is the
//! persistent implementation.

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryItemStore;
pub use postgres::PostgresItemStore;
