//! `AuditSink` adapters.

pub mod file;
pub mod in_memory;

pub use file::FileAuditSink;
pub use in_memory::{AuditRecord, InMemoryAuditSink};
