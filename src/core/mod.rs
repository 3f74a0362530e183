pub mod encoder;
pub mod exporter;
pub mod model;
pub mod ports;

pub use model::{ExportArtifact, ExportFailure, ExportOutcome, ExportRequest, Record};
pub use ports::Storage;

pub use crate::utils::error::Result;
