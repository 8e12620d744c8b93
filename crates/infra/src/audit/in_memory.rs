use std::sync::Mutex;

use async_trait::async_trait;

use depot_inventory::{AuditError, AuditSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub destination: String,
    pub line: String,
}

/// Audit sink that keeps every write in memory (tests/dev).
#[derive(Debug, Default)]
pub struct InMemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl InMemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<AuditRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditSink {
    async fn write(&self, destination: &str, line: &str) -> Result<(), AuditError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| AuditError::Backend("audit sink lock poisoned".to_string()))?;

        records.push(AuditRecord {
            destination: destination.to_string(),
            line: line.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_writes_in_order() {
        let sink = InMemoryAuditSink::new();
        sink.write("1.log", "first").await.unwrap();
        sink.write("2.log", "second").await.unwrap();

        let lines: Vec<String> = sink.records().into_iter().map(|r| r.line).collect();
        assert_eq!(lines, vec!["first", "second"]);
        assert_eq!(sink.records()[1].destination, "2.log");
    }
}
