//! MCP tools implementation
//!
//! A single registry declares every tool once — name, description, input
//! schema, handler — and both `tools/list` and `tools/call` read from it, so
//! a tool cannot be dispatchable without being advertised or vice versa.

pub mod accounts;
pub mod cancel;
pub mod posts;
pub mod publish;
pub mod schedule;
pub mod scheduled;
pub mod stats;

use crate::cli::{
    AccountsArgs, CancelArgs, PostsArgs, PublishArgs, ScheduleArgs, ScheduledArgs, StatsArgs,
};
use crate::error::AppError;
use crate::mcp::ToolResult;
use crate::sociona::client::SocionaClient;
use crate::sociona::types::{Account, Platform};
use futures::future::BoxFuture;
use serde_json::Value;
use tracing::warn;

/// Uniform handler contract: parse arguments, issue API calls, render text
pub type Handler =
    for<'a> fn(&'a SocionaClient, Value) -> BoxFuture<'a, Result<ToolResult, AppError>>;

/// One advertised tool: catalog entry and dispatch target in a single record
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    schema: fn() -> Value,
    handler: Handler,
}

impl ToolDef {
    /// JSON schema for the tool's arguments, derived from its clap struct
    pub fn input_schema(&self) -> Value {
        (self.schema)()
    }
}

fn schema_of<T: schemars::JsonSchema>() -> Value {
    serde_json::to_value(schemars::schema_for!(T)).unwrap_or(Value::Null)
}

/// The fixed tool catalog
pub fn registry() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: "publish_post",
            description: "Publish a social media post immediately",
            schema: schema_of::<PublishArgs>,
            handler: publish::handle,
        },
        ToolDef {
            name: "schedule_post",
            description: "Schedule a post for future publication",
            schema: schema_of::<ScheduleArgs>,
            handler: schedule::handle,
        },
        ToolDef {
            name: "get_accounts",
            description: "Get list of connected social media accounts",
            schema: schema_of::<AccountsArgs>,
            handler: accounts::handle,
        },
        ToolDef {
            name: "get_posts",
            description: "Get recent posts published via the API",
            schema: schema_of::<PostsArgs>,
            handler: posts::handle,
        },
        ToolDef {
            name: "get_scheduled_posts",
            description: "Get scheduled posts, optionally filtered by status",
            schema: schema_of::<ScheduledArgs>,
            handler: scheduled::handle,
        },
        ToolDef {
            name: "cancel_scheduled_post",
            description: "Cancel a scheduled post before it publishes",
            schema: schema_of::<CancelArgs>,
            handler: cancel::handle,
        },
        ToolDef {
            name: "get_post_stats",
            description: "Get statistics about your posts",
            schema: schema_of::<StatsArgs>,
            handler: stats::handle,
        },
    ]
}

/// Route a tool call by name
///
/// This is the sole error-recovery boundary for tool execution: unknown
/// names and every handler or client failure come back as an
/// `isError: true` result, never as a propagated error.
pub async fn dispatch(client: &SocionaClient, name: &str, arguments: Value) -> ToolResult {
    // Clients may omit arguments entirely for no-arg tools
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments
    };

    let tools = registry();
    let Some(tool) = tools.iter().find(|t| t.name == name) else {
        warn!("Rejected call to unknown tool '{}'", name);
        return ToolResult::error(format!(
            "Error: {}",
            AppError::UnknownTool(name.to_string())
        ));
    };

    match (tool.handler)(client, arguments).await {
        Ok(result) => result,
        Err(e) => {
            warn!("Tool '{}' failed ({}): {}", name, e.error_code(), e.message());
            ToolResult::error(format!("Error: {}", e.message()))
        }
    }
}

/// Resolve the connected account for a platform
///
/// Listing the providers that ARE connected makes the failure actionable for
/// the calling agent.
pub fn find_account(accounts: &[Account], platform: Platform) -> Result<&Account, AppError> {
    accounts
        .iter()
        .find(|account| account.provider == platform.as_str())
        .ok_or_else(|| {
            let available = accounts
                .iter()
                .map(|account| account.provider.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            AppError::AccountNotFound(format!(
                "No {} account connected. Available accounts: {}",
                platform, available
            ))
        })
}
