use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use depot_inventory::{AuditError, AuditSink};

/// Appends audit lines to `<dir>/<destination>`, one line per write.
///
/// Destinations are plain file names; anything that could escape `dir` is
/// rejected.
#[derive(Debug, Clone)]
pub struct FileAuditSink {
    dir: PathBuf,
}

impl FileAuditSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, destination: &str) -> Result<PathBuf, AuditError> {
        let invalid = destination.is_empty()
            || destination == "."
            || destination == ".."
            || destination.contains(['/', '\\', '\0']);

        if invalid {
            return Err(AuditError::InvalidDestination(destination.to_string()));
        }
        Ok(self.dir.join(destination))
    }
}

#[async_trait]
impl AuditSink for FileAuditSink {
    async fn write(&self, destination: &str, line: &str) -> Result<(), AuditError> {
        let path = self.path_for(destination)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        // One write per line keeps concurrent appends from interleaving.
        file.write_all(format!("{line}\n").as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(path = %path.display(), "audit line written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn appends_lines_to_named_destination() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileAuditSink::new(dir.path().join("audit"));

        sink.write("10.log", "user id=1 updated item id=2").await.unwrap();
        sink.write("10.log", "user id=1 updated item id=3").await.unwrap();
        sink.write("11.log", "user id=4 updated item id=5").await.unwrap();

        let ten = std::fs::read_to_string(dir.path().join("audit/10.log")).unwrap();
        assert_eq!(ten, "user id=1 updated item id=2\nuser id=1 updated item id=3\n");

        let eleven = std::fs::read_to_string(dir.path().join("audit/11.log")).unwrap();
        assert_eq!(eleven, "user id=4 updated item id=5\n");
    }

    #[tokio::test]
    async fn rejects_destinations_that_escape_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileAuditSink::new(dir.path());

        for bad in ["", "..", "../etc.log", "nested/10.log", "c:\\10.log"] {
            let err = sink.write(bad, "line").await.unwrap_err();
            assert!(
                matches!(err, AuditError::InvalidDestination(ref d) if d == bad),
                "expected rejection of {bad:?}"
            );
        }
    }
}
