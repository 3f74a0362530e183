pub mod config;
pub mod core;
pub mod server;
pub mod utils;

pub use config::{ExportConfig, LocalStorage};
pub use core::{exporter::Exporter, ExportOutcome, ExportRequest};
pub use server::CsvExportServer;
pub use utils::error::{ExportError, Result};
