//! Error handling for gmail-dot-forge

use thiserror::Error;

/// Main error type for gmail-dot-forge
#[derive(Error, Debug, Clone)]
pub enum DotForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl DotForgeError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or DOT_FORGE_* variables", message)
            }
            Self::Validation { message } => {
                format!("❌ {}\n💡 Enter a Gmail address like username@gmail.com", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 The file may be corrupted, try removing it", message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

impl From<inquire::InquireError> for DotForgeError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => Self::cli("Input cancelled"),
            other => Self::cli(other.to_string()),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DotForgeError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::DotForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DotForgeError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::DotForgeError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DotForgeError::validation(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let error = DotForgeError::validation("bad address");
        assert_eq!(error.to_string(), "Validation error: bad address");
    }

    #[test]
    fn test_io_user_message_has_path() {
        let error = DotForgeError::io("denied", Some("out.txt".to_string()));
        assert!(error.user_message().contains("(out.txt)"));
    }

    #[test]
    fn test_prompt_cancel_maps_to_cli() {
        let error = DotForgeError::from(inquire::InquireError::OperationCanceled);
        assert!(matches!(error, DotForgeError::Cli { .. }));
        assert!(error.to_string().contains("cancelled"));
    }

    #[test]
    fn test_macros() {
        let error = validation_error!("count {} too large", 5);
        assert!(error.to_string().contains("count 5 too large"));

        let error = config_error!("missing");
        assert!(matches!(error, DotForgeError::Config { .. }));
    }
}
