//! get_accounts tool: list connected social media accounts

use crate::error::AppError;
use crate::mcp::ToolResult;
use crate::sociona::client::SocionaClient;
use crate::sociona::types::Account;
use futures::future::BoxFuture;
use serde_json::Value;

pub fn handle(client: &SocionaClient, _args: Value) -> BoxFuture<'_, Result<ToolResult, AppError>> {
    Box::pin(run(client))
}

/// Execute get_accounts (shared implementation for MCP and CLI)
pub async fn run(client: &SocionaClient) -> Result<ToolResult, AppError> {
    let accounts = client.accounts().await?;
    Ok(ToolResult::text(render(&accounts)))
}

/// Render one line per account as `provider: handle (status)`
pub fn render(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No social media accounts connected.".to_string();
    }

    let list = accounts
        .iter()
        .map(|a| format!("- {}: {} ({})", a.provider, a.handle, a.status))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Connected accounts:\n{}", list)
}
