//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Property list parsing error: {0}")]
    Plist(#[from] plist::Error),

    // ─────────────────────────────────────────────────────────────
    // Process Execution Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to launch process: {reason}")]
    ProcessLaunch { reason: String },

    /// The native tool writes many failure diagnostics to stderr while
    /// exiting zero, so any stderr content fails the command.
    #[error("Process reported an error: {message}")]
    ProcessStderr { message: String },

    #[error("Process exited with nonzero status: {code:?}")]
    TerminationStatus { code: Option<i32> },

    // ─────────────────────────────────────────────────────────────
    // Output Interpretation Errors
    // ─────────────────────────────────────────────────────────────
    /// Structured output (JSON/property list) failed to decode.
    #[error("Failed to decode command output: {message}")]
    Decode { message: String },

    /// The process succeeded but its output did not have the expected
    /// shape (line count, field count, identifier pattern).
    #[error("Unexpected command output: {message}")]
    UnexpectedOutput { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn process_launch(reason: impl Into<String>) -> Self {
        Self::ProcessLaunch {
            reason: reason.into(),
        }
    }

    pub fn process_stderr(message: impl Into<String>) -> Self {
        Self::ProcessStderr {
            message: message.into(),
        }
    }

    pub fn termination_status(code: Option<i32>) -> Self {
        Self::TerminationStatus { code }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn unexpected_output(message: impl Into<String>) -> Self {
        Self::UnexpectedOutput {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Whether the process itself failed (as opposed to its output
    /// failing to parse).
    pub fn is_process_failure(&self) -> bool {
        matches!(
            self,
            Error::ProcessLaunch { .. }
                | Error::ProcessStderr { .. }
                | Error::TerminationStatus { .. }
        )
    }

    /// Whether the process succeeded but its output was unusable.
    pub fn is_output_failure(&self) -> bool {
        matches!(
            self,
            Error::Decode { .. }
                | Error::UnexpectedOutput { .. }
                | Error::Json(_)
                | Error::Plist(_)
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::ProcessLaunch { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::process_stderr("shutdown: NOT super-user");
        assert_eq!(
            err.to_string(),
            "Process reported an error: shutdown: NOT super-user"
        );

        let err = Error::termination_status(Some(1));
        assert!(err.to_string().contains("nonzero status"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_process_failure_classification() {
        assert!(Error::process_launch("missing executable").is_process_failure());
        assert!(Error::process_stderr("boom").is_process_failure());
        assert!(Error::termination_status(Some(2)).is_process_failure());
        assert!(!Error::decode("bad json").is_process_failure());
    }

    #[test]
    fn test_output_failure_classification() {
        assert!(Error::decode("bad shape").is_output_failure());
        assert!(Error::unexpected_output("4 lines").is_output_failure());
        assert!(!Error::process_stderr("boom").is_output_failure());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::process_launch("no xcrun").is_fatal());
        assert!(!Error::process_stderr("boom").is_fatal());
        assert!(!Error::unexpected_output("lines").is_fatal());
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::process_launch("test");
        let _ = Error::process_stderr("test");
        let _ = Error::termination_status(None);
        let _ = Error::decode("test");
        let _ = Error::unexpected_output("test");
        let _ = Error::channel_send("test");
    }
}
