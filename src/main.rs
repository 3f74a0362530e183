use csv_export_mcp::config::ExportConfig;
use csv_export_mcp::server::CsvExportServer;
use csv_export_mcp::utils::logger;
use rmcp::{transport::stdio, ServiceExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_server_logger();

    let config = ExportConfig::default();
    tracing::info!("CSV Export MCP Server running on stdio");
    tracing::info!("📁 Export directory: {}", config.export_dir.display());

    let service = CsvExportServer::new(config).serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
