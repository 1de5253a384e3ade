//! Error types for ffpipe-av.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the external tool or decoding its reports.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The external tool executable could not be located.
    #[error("tool not found: {tool} (set a valid ffmpeg executable path before use)")]
    ToolNotFound { tool: String },

    /// The external tool failed to execute.
    #[error("tool execution failed: {tool}: {message}")]
    ToolFailed { tool: String, message: String },

    /// A report line did not match the layout its report kind requires.
    #[error("unparseable {report} report line: {line:?}")]
    MalformedReport { report: &'static str, line: String },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a tool execution failed error.
    pub fn tool_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a malformed report error for one offending line.
    pub fn malformed_report(report: &'static str, line: impl Into<String>) -> Self {
        Self::MalformedReport {
            report,
            line: line.into(),
        }
    }
}
