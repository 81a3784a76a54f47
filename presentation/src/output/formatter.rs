//! Output formatter trait

use crate::api::{ApiError, ApiResponse, Reply, respond};
use trivia_domain::OutputFormat;

/// Trait for rendering operation results on the terminal
pub trait OutputFormatter {
    /// Render a successful result
    fn format_reply(&self, reply: &Reply) -> String;

    /// Render a failure
    fn format_error(&self, error: &ApiError) -> String;
}

/// Prints the JSON envelope, exactly as `serve-stdin` would return it
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty(response: ApiResponse) -> String {
        serde_json::to_string_pretty(&response.body).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_reply(&self, reply: &Reply) -> String {
        Self::pretty(respond(Ok(reply.clone())))
    }

    fn format_error(&self, error: &ApiError) -> String {
        Self::pretty(ApiResponse::from(error.clone()))
    }
}

/// Formatter for the selected output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(super::console::ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
