//! get_post_stats tool: aggregate post counters

use crate::error::AppError;
use crate::mcp::ToolResult;
use crate::sociona::client::SocionaClient;
use crate::sociona::types::PostStats;
use futures::future::BoxFuture;
use serde_json::Value;

pub fn handle(client: &SocionaClient, _args: Value) -> BoxFuture<'_, Result<ToolResult, AppError>> {
    Box::pin(run(client))
}

/// Execute get_post_stats (shared implementation for MCP and CLI)
pub async fn run(client: &SocionaClient) -> Result<ToolResult, AppError> {
    let stats = client.post_stats().await?;
    Ok(ToolResult::text(render(&stats)))
}

pub fn render(stats: &PostStats) -> String {
    format!(
        "Post Statistics:\n- Total: {}\n- Published: {}\n- Failed: {}\n- Scheduled: {}",
        stats.total, stats.published, stats.failed, stats.scheduled
    )
}
