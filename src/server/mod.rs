use crate::config::{ExportConfig, LocalStorage};
use crate::core::exporter::Exporter;
use crate::core::model::{ExportOutcome, ExportRequest};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ListToolsResult, PaginatedRequestParam,
    ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler};
use serde_json::{json, Value};
use std::sync::Arc;

pub const TOOL_NAME: &str = "csv_export";

/// Stdio MCP binding for the export core: advertises the single `csv_export`
/// tool and forwards parsed arguments to the exporter.
pub struct CsvExportServer {
    exporter: Exporter<LocalStorage>,
}

impl CsvExportServer {
    pub fn new(config: ExportConfig) -> Self {
        let storage = LocalStorage::new(config.export_dir);
        Self {
            exporter: Exporter::new(storage),
        }
    }

    /// Run the tool against a raw argument object and render the outcome as
    /// pretty-printed JSON. Argument shapes serde rejects (a multi-character
    /// delimiter string, for example) are folded into the same failure shape
    /// the exporter produces, never a protocol-level error.
    pub async fn run_csv_export(
        &self,
        arguments: Option<serde_json::Map<String, Value>>,
    ) -> String {
        let arguments = Value::Object(arguments.unwrap_or_default());
        let outcome = match serde_json::from_value::<ExportRequest>(arguments) {
            Ok(request) => self.exporter.export(request).await,
            Err(e) => {
                tracing::error!("Error processing CSV export: {}", e);
                ExportOutcome::failure(e.to_string())
            }
        };

        serde_json::to_string_pretty(&outcome).unwrap_or_else(|e| {
            json!({"success": false, "error": e.to_string()}).to_string()
        })
    }
}

fn csv_export_tool() -> Tool {
    let schema = json!({
        "type": "object",
        "properties": {
            "data": {
                "type": "array",
                "description": "Array of objects to export as CSV",
                "items": { "type": "object" }
            },
            "filename": {
                "type": "string",
                "description": "Filename for the exported file (without extension)",
                "default": "output"
            },
            "description": {
                "type": "string",
                "description": "Optional description of the file contents"
            },
            "delimiter": {
                "type": "string",
                "description": "CSV delimiter character",
                "default": ","
            },
            "includeHeaders": {
                "type": "boolean",
                "description": "Whether to include column headers",
                "default": true
            }
        },
        "required": ["data"]
    });
    let input_schema = match schema {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };

    Tool::new(
        TOOL_NAME,
        "Export tabular data to a CSV file in the export directory",
        Arc::new(input_schema),
    )
}

impl ServerHandler for CsvExportServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Exports tabular data as CSV files into a fixed export directory".to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: vec![csv_export_tool()],
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        match request.name.as_ref() {
            TOOL_NAME => {
                let text = self.run_csv_export(request.arguments).await;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            other => Err(McpError::invalid_params(
                format!("Unknown tool: {}", other),
                None,
            )),
        }
    }
}
