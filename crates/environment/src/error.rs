// ---------------------------------------------------------------------------
// EnvironmentError: typed errors for transitions and configuration loading
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors surfaced by the environment crate.
///
/// None of these are fatal to the host: callers log them and fall back to
/// "that visual effect does not apply".
#[derive(Debug)]
pub enum EnvironmentError {
    /// A transition was requested with a duration that is zero, negative or
    /// not finite.
    InvalidDuration(f32),
    /// Reading a configuration file failed.
    Io(std::io::Error),
    /// Configuration JSON could not be parsed.
    Config(String),
}

impl fmt::Display for EnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentError::InvalidDuration(duration) => {
                write!(f, "Invalid transition duration: {duration}s (must be > 0)")
            }
            EnvironmentError::Io(e) => write!(f, "I/O error: {e}"),
            EnvironmentError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for EnvironmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EnvironmentError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EnvironmentError {
    fn from(e: std::io::Error) -> Self {
        EnvironmentError::Io(e)
    }
}

impl From<serde_json::Error> for EnvironmentError {
    fn from(e: serde_json::Error) -> Self {
        EnvironmentError::Config(e.to_string())
    }
}
