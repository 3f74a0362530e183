use crate::core::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Filesystem backend for the export directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    // Idempotent: succeeds silently when the directory is already there.
    async fn ensure_base_dir(&self) -> Result<()> {
        if self.base_path.exists() {
            tracing::debug!("✓ Export directory exists: {}", self.base_path.display());
        } else {
            tokio::fs::create_dir_all(&self.base_path)
                .await
                .map_err(|e| {
                    tracing::error!("✗ Failed to create export directory: {}", e);
                    e
                })?;
            tracing::info!("✓ Created export directory: {}", self.base_path.display());
        }
        Ok(())
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, name: &str, data: &[u8]) -> Result<()> {
        self.ensure_base_dir().await?;

        let full_path = self.base_path.join(name);
        tokio::fs::write(&full_path, data).await.map_err(|e| {
            tracing::error!("✗ Failed to write file: {}", e);
            e
        })?;

        tracing::info!("✓ File written: {}", full_path.display());
        Ok(())
    }
}
