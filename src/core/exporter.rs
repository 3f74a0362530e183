use crate::core::encoder;
use crate::core::model::{ExportArtifact, ExportOutcome, ExportRequest, Record};
use crate::core::ports::Storage;
use crate::utils::error::{ExportError, Result};
use serde_json::Value;
use uuid::Uuid;

const DEFAULT_BASENAME: &str = "output";
const DEFAULT_DELIMITER: char = ',';
const CSV_CONTENT_TYPE: &str = "text/csv";

/// Orchestrates one export: validation, encoding, naming, write, result.
/// The only component with side effects, and the sole error boundary.
pub struct Exporter<S: Storage> {
    storage: S,
}

impl<S: Storage> Exporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Run one export. Every failure inside validation, encoding or storage
    /// is normalized into the failure-shaped result here; callers never see
    /// an error value.
    pub async fn export(&self, request: ExportRequest) -> ExportOutcome {
        match self.try_export(request).await {
            Ok(artifact) => ExportOutcome::Success(artifact),
            Err(e) => {
                tracing::error!("Error processing CSV export: {}", e);
                ExportOutcome::failure(e.to_string())
            }
        }
    }

    async fn try_export(&self, request: ExportRequest) -> Result<ExportArtifact> {
        let records = validate_data(request.data)?;
        let delimiter = validate_delimiter(request.delimiter)?;
        let include_headers = request.include_headers.unwrap_or(true);

        if let Some(description) = &request.description {
            tracing::debug!("Export description: {}", description);
        }

        let content = encoder::encode(&records, delimiter, include_headers)?;

        let basename = request
            .filename
            .unwrap_or_else(|| DEFAULT_BASENAME.to_string());
        let full_filename = unique_filename(&basename);
        let filesize = file_size_string(&content);

        let row_count = records.len();
        let column_count = records.first().map_or(0, Record::len);

        self.storage
            .write_file(&full_filename, content.as_bytes())
            .await?;

        tracing::info!("✅ CSV generated: {} ({})", full_filename, filesize);
        tracing::info!("   Rows: {}, Columns: {}", row_count, column_count);

        Ok(ExportArtifact {
            path: full_filename.clone(),
            filetype: CSV_CONTENT_TYPE.to_string(),
            filename: full_filename,
            filesize,
        })
    }
}

fn validate_data(data: Option<Value>) -> Result<Vec<Record>> {
    let items = match data {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(ExportError::invalid_input(
                "Data must be provided as an array of objects",
            ))
        }
    };

    if items.is_empty() {
        return Err(ExportError::invalid_input("Data array cannot be empty"));
    }

    // A non-object element becomes a record with no keys; its cells come out
    // empty instead of failing the whole export.
    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::Object(record) => record,
            _ => Record::new(),
        })
        .collect())
}

// The csv writer takes the delimiter as a single byte.
fn validate_delimiter(delimiter: Option<char>) -> Result<u8> {
    let delimiter = delimiter.unwrap_or(DEFAULT_DELIMITER);
    if !delimiter.is_ascii() {
        return Err(ExportError::invalid_input(
            "Delimiter must be a single ASCII character",
        ));
    }
    Ok(delimiter as u8)
}

/// Compose `{sanitized}_{uuid}.csv`. Sanitization keeps `[A-Za-z0-9_-]` and
/// replaces everything else with `_`, which also strips path separators; the
/// fresh uuid per call is the only collision defense.
fn unique_filename(basename: &str) -> String {
    let basename = if basename.is_empty() {
        DEFAULT_BASENAME
    } else {
        basename
    };
    let sanitized: String = basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_{}.csv", sanitized, Uuid::new_v4())
}

// Coarse user-facing label, not an exact byte count. Sub-kilobyte payloads
// report "1 KB"; the KB tier rounds to whole units, the MB tier keeps two
// decimals.
fn file_size_string(content: &str) -> String {
    let kb = content.len() as f64 / 1024.0;
    if kb < 1.0 {
        "1 KB".to_string()
    } else if kb < 1024.0 {
        format!("{:.0} KB", kb)
    } else {
        format!("{:.2} MB", kb / 1024.0)
    }
}
