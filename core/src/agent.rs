//! Tool types for AI agent systems
//!
//! This module provides the types a hosting agent framework consumes:
//! a [`Tool`] definition it can hand to an LLM API for tool selection, and
//! executor types ([`ToolExecutorFn`], [`ToolExecutor`]) it invokes when the
//! model requests a tool call.
//!
//! Executors take the raw JSON input string from the model and return a
//! [`ToolResult`]. Failures are values ([`ToolError`]), never panics: every
//! execution path returns normally so the framework can relay the error text
//! back to the model.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Tool definition following the JSON-Schema tool-calling convention
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    /// Tool name (used to identify which tool to call)
    pub name: String,
    /// Human-readable description of what the tool does
    pub description: String,
    /// JSON schema for the tool's input parameters
    pub input_schema: serde_json::Value,
}

/// Result from tool execution
pub type ToolResult = Result<String, ToolError>;

/// Tool execution errors
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolError {
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ToolError {}

/// Boxed async tool executor
///
/// Takes the raw JSON input string and resolves to a [`ToolResult`]. The
/// `Arc` makes executors cheaply cloneable so a registry can hand them out
/// without holding its lock across an await.
pub type ToolExecutorFn =
    Arc<dyn Fn(String) -> Pin<Box<dyn Future<Output = ToolResult> + Send>> + Send + Sync>;

/// Tool executor trait for implementing custom tools
///
/// **Edition 2024**: Uses RPITIT (Return Position Impl Trait In Traits)
pub trait ToolExecutor: Send + Sync {
    /// Execute tool with JSON input string, return result or error
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if the tool execution fails
    fn execute(&self, input: &str) -> impl Future<Output = ToolResult> + Send;
}
