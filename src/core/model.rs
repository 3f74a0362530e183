use serde::{Deserialize, Serialize};

/// One row of tabular data. The first record's key order fixes the output
/// column order, which is why serde_json is built with `preserve_order`.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Arguments of one `csv_export` invocation.
///
/// `data` is kept as a raw value so the exporter controls the shape checks
/// and their error messages instead of serde.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub data: Option<serde_json::Value>,
    pub filename: Option<String>,
    /// Informational only; accepted and never persisted.
    pub description: Option<String>,
    pub delimiter: Option<char>,
    pub include_headers: Option<bool>,
}

/// Success payload. `path` and `filename` both carry the generated name, a
/// portable reference rather than a local disk path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportArtifact {
    pub path: String,
    pub filetype: String,
    pub filename: String,
    pub filesize: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportFailure {
    pub success: bool,
    pub error: String,
}

/// The two result shapes are asymmetric on purpose: success responses omit
/// the `success` field entirely and callers branch on its presence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportOutcome {
    Success(ExportArtifact),
    Failure(ExportFailure),
}

impl ExportOutcome {
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(ExportFailure {
            success: false,
            error: error.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
