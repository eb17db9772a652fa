//! schedule_post tool: hand a post to the upstream scheduler
//!
//! "Scheduling" here is just forwarding `scheduledFor` to the API; the
//! upstream owns the timer and the eventual publication.

use crate::cli::ScheduleArgs;
use crate::error::AppError;
use crate::mcp::ToolResult;
use crate::sociona::client::SocionaClient;
use crate::sociona::types::NewSchedule;
use futures::future::BoxFuture;
use serde_json::Value;
use tracing::info;

pub fn handle(client: &SocionaClient, args: Value) -> BoxFuture<'_, Result<ToolResult, AppError>> {
    Box::pin(async move {
        let args: ScheduleArgs = serde_json::from_value(args)
            .map_err(|e| AppError::InvalidInput(format!("Invalid arguments: {}", e)))?;
        run(client, args).await
    })
}

/// Execute schedule_post (shared implementation for MCP and CLI)
pub async fn run(client: &SocionaClient, args: ScheduleArgs) -> Result<ToolResult, AppError> {
    let accounts = client.accounts().await?;
    let account = super::find_account(&accounts, args.platform)?;

    info!(
        "Scheduling post for {} on {} via account {}",
        args.scheduled_for, args.platform, account.id
    );

    let created = client
        .create_schedule(&NewSchedule {
            account_id: account.id.clone(),
            platform: args.platform,
            content: args.content,
            scheduled_for: args.scheduled_for.clone(),
            media_urls: args.media_urls,
        })
        .await?;

    Ok(ToolResult::text(render(
        &args.scheduled_for,
        args.platform.as_str(),
        &created.id,
    )))
}

fn render(scheduled_for: &str, platform: &str, id: &str) -> String {
    format!(
        "✅ Post scheduled for {} on {}!\nScheduled Post ID: {}",
        scheduled_for, platform, id
    )
}
