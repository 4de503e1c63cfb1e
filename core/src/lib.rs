//! # Toolcase Core
//!
//! Core types for building tools consumed by AI agent systems.
//!
//! A tool is two things: a [`agent::Tool`] definition (name, description,
//! JSON Schema for its input) that the hosting framework hands to an LLM for
//! tool selection, and an executor that receives the raw JSON input string
//! and produces a [`agent::ToolResult`].
//!
//! The hosting framework itself (LLM client, conversation loop) is an
//! external collaborator: this crate only defines the seam it plugs into.
//!
//! ## Example
//!
//! ```ignore
//! use toolcase_core::agent::{Tool, ToolError, ToolExecutorFn, ToolResult};
//! use std::sync::Arc;
//!
//! let tool = Tool {
//!     name: "echo".to_string(),
//!     description: "Echo the input back".to_string(),
//!     input_schema: serde_json::json!({
//!         "type": "object",
//!         "properties": { "text": { "type": "string" } },
//!         "required": ["text"]
//!     }),
//! };
//!
//! let executor: ToolExecutorFn = Arc::new(|input: String| {
//!     Box::pin(async move { Ok(input) })
//! });
//! ```

pub mod agent;

// Re-export commonly used types
pub use agent::{Tool, ToolError, ToolExecutor, ToolExecutorFn, ToolResult};
