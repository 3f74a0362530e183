pub mod local;

pub use local::LocalStorage;

use std::path::PathBuf;

/// Fixed export location. All generated files land here; the path is never
/// taken from request input.
pub const DEFAULT_EXPORT_DIR: &str = "/tmp/protex-intelligence-file-exports";

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub export_dir: PathBuf,
}

impl ExportConfig {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EXPORT_DIR)
    }
}
