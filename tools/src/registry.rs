//! Tool registry for dynamic tool management
//!
//! The registry is the seam the hosting framework drives: tools register
//! under their name, the framework lists their definitions for the LLM API
//! and executes whichever tool the model requests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use toolcase_core::agent::{Tool, ToolError, ToolExecutorFn, ToolResult};

/// Thread-safe tool registry
///
/// ## Example
///
/// ```ignore
/// use toolcase_tools::registry::ToolRegistry;
/// use toolcase_tools::geometry::geometry_tool;
///
/// let registry = ToolRegistry::new();
/// let (tool, executor) = geometry_tool();
/// registry.register(tool, executor);
///
/// let result = registry
///     .execute("geometry_expert", input_json)
///     .await;
/// ```
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Arc<RwLock<HashMap<String, (Tool, ToolExecutorFn)>>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool with its executor
    ///
    /// If a tool with the same name already exists it is replaced and this
    /// method returns `true`; otherwise returns `false`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread)
    #[allow(clippy::expect_used)]
    pub fn register(&self, tool: Tool, executor: ToolExecutorFn) -> bool {
        let mut tools = self
            .tools
            .write()
            .expect("Tool registry lock poisoned - indicates a panic in another thread");
        tools.insert(tool.name.clone(), (tool, executor)).is_some()
    }

    /// Execute a tool by name with a raw JSON input string
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if the tool is not found or execution fails
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread)
    #[allow(clippy::expect_used)]
    pub async fn execute(&self, name: &str, input: String) -> ToolResult {
        // Get executor (release lock before awaiting)
        let executor = {
            let tools = self
                .tools
                .read()
                .expect("Tool registry lock poisoned - indicates a panic in another thread");
            tools.get(name).map(|(_, executor)| executor.clone())
        };

        match executor {
            Some(executor) => {
                tracing::debug!(tool = name, "executing tool");
                executor(input).await
            }
            None => Err(ToolError {
                message: format!("Tool not found: {name}"),
            }),
        }
    }

    /// Get a list of all registered tool names, sorted alphabetically
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread)
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn list_tools(&self) -> Vec<String> {
        let tools = self
            .tools
            .read()
            .expect("Tool registry lock poisoned - indicates a panic in another thread");
        let mut names: Vec<String> = tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all registered tool definitions, sorted by name (for passing to
    /// an LLM API)
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread)
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn get_tools(&self) -> Vec<Tool> {
        let tools = self
            .tools
            .read()
            .expect("Tool registry lock poisoned - indicates a panic in another thread");
        let mut tool_list: Vec<Tool> = tools.values().map(|(tool, _)| tool.clone()).collect();
        tool_list.sort_by(|a, b| a.name.cmp(&b.name));
        tool_list
    }

    /// Get a specific tool definition by name
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread)
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn get_tool(&self, name: &str) -> Option<Tool> {
        let tools = self
            .tools
            .read()
            .expect("Tool registry lock poisoned - indicates a panic in another thread");
        tools.get(name).map(|(tool, _)| tool.clone())
    }

    /// Get the number of registered tools
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread)
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn count(&self) -> usize {
        let tools = self
            .tools
            .read()
            .expect("Tool registry lock poisoned - indicates a panic in another thread");
        tools.len()
    }
}
