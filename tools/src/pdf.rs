//! PDF fetching and text extraction tool
//!
//! Fetches a PDF over HTTP and returns the concatenated text of every page
//! in document order. A single attempt with whole-body buffering: no retry,
//! no caching, no streaming.

use std::sync::Arc;

use toolcase_core::agent::{Tool, ToolError, ToolExecutorFn, ToolResult};

/// Fetch a PDF document, buffering the full response body
///
/// Non-2xx statuses and transport failures are both reported as a retrieval
/// failure wrapping the underlying error text.
///
/// # Errors
///
/// Returns `ToolError` if the URL scheme is not http(s), or if the request
/// fails or returns a non-success status.
async fn fetch_pdf(url: &str) -> Result<Vec<u8>, ToolError> {
    // Security: Only allow http:// and https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ToolError {
            message: "URL must start with http:// or https://".to_string(),
        });
    }

    tracing::debug!(url, "fetching PDF");

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| ToolError {
            message: format!("Failed to retrieve the PDF: {e}"),
        })?;

    let bytes = response.bytes().await.map_err(|e| ToolError {
        message: format!("Failed to retrieve the PDF: {e}"),
    })?;

    Ok(bytes.to_vec())
}

/// Extract the text of every page, concatenated in document order
///
/// Parsing is CPU-bound, so it runs on a blocking thread.
///
/// # Errors
///
/// Returns `ToolError` if the bytes are not a parseable PDF document
/// (malformed data, unsupported encryption).
async fn extract_pdf_text(bytes: Vec<u8>) -> Result<String, ToolError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| ToolError {
            message: format!("Failed to spawn PDF extraction task: {e}"),
        })?
        .map_err(|e| ToolError {
            message: format!("An error occurred during PDF processing: {e}"),
        })
}

/// Create the `pdf_read` tool
///
/// Fetches a PDF from a URL and returns its extracted text with no
/// separators inserted between pages.
#[must_use]
pub fn pdf_read_tool() -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "pdf_read".to_string(),
        description: "Fetches a PDF from a given URL and extracts its textual content."
            .to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "pdf_url": {
                    "type": "string",
                    "description": "URL of the PDF document to be processed."
                }
            },
            "required": ["pdf_url"]
        }),
    };

    let executor = Arc::new(|input: String| {
        Box::pin(async move {
            let parsed: serde_json::Value = serde_json::from_str(&input).map_err(|e| {
                ToolError {
                    message: format!("Invalid input JSON: {e}"),
                }
            })?;

            let pdf_url = parsed["pdf_url"]
                .as_str()
                .ok_or_else(|| ToolError {
                    message: "Missing 'pdf_url' field".to_string(),
                })?;

            let bytes = fetch_pdf(pdf_url).await?;
            extract_pdf_text(bytes).await
        }) as std::pin::Pin<
            Box<dyn std::future::Future<Output = ToolResult> + Send>,
        >
    }) as ToolExecutorFn;

    (tool, executor)
}
