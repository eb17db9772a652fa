//! cancel_scheduled_post tool: withdraw a pending post from the scheduler

use crate::cli::CancelArgs;
use crate::error::AppError;
use crate::mcp::ToolResult;
use crate::sociona::client::SocionaClient;
use crate::sociona::types::CancelOutcome;
use futures::future::BoxFuture;
use serde_json::Value;
use tracing::info;

pub fn handle(client: &SocionaClient, args: Value) -> BoxFuture<'_, Result<ToolResult, AppError>> {
    Box::pin(async move {
        let args: CancelArgs = serde_json::from_value(args)
            .map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))?;
        run(client, args).await
    })
}

/// Execute cancel_scheduled_post (shared implementation for MCP and CLI)
pub async fn run(client: &SocionaClient, args: CancelArgs) -> Result<ToolResult, AppError> {
    let outcome = client.cancel_schedule(&args.post_id).await?;
    info!("Cancel request for {}: success={}", args.post_id, outcome.success);
    confirm(&args.post_id, outcome)
}

/// Turn the upstream outcome into a confirmation or a surfaced failure
fn confirm(post_id: &str, outcome: CancelOutcome) -> Result<ToolResult, AppError> {
    if outcome.success {
        Ok(ToolResult::text(format!(
            "✅ Scheduled post {} has been canceled.",
            post_id
        )))
    } else {
        Err(AppError::Api(outcome.message.unwrap_or_else(|| {
            "Failed to cancel scheduled post".to_string()
        })))
    }
}
