//! Built-in tools for AI agents
//!
//! This crate provides two independent, stateless tools for agent systems:
//! a geometry calculator and a PDF text fetcher.
//!
//! ## Design Principles
//!
//! **LLM-Agnostic**: Tools return plain strings and declare their inputs as
//! JSON Schema. They do not assume a specific LLM or format output for a
//! specific API; the hosting agent framework owns that translation.
//!
//! **Failures are values**: every failure path resolves to a `ToolError`
//! carrying a descriptive message. Nothing retries, nothing panics, nothing
//! is fatal to the hosting process.
//!
//! ## Modules
//!
//! - `geometry`: shape calculations (`geometry_expert`)
//! - `pdf`: PDF fetching and text extraction (`pdf_read`)
//! - `registry`: tool registry for dynamic tool management

pub mod geometry;
pub mod pdf;
pub mod registry;

pub use toolcase_core::agent::{Tool, ToolExecutorFn, ToolResult};

// Re-export commonly used types
pub use registry::ToolRegistry;
