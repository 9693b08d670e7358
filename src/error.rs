use thiserror::Error;

/// Why a feed load did not produce a unit collection.
///
/// Both failure families surface to the visitor the same way (a "failed to
/// load" table state); they are kept apart for logging and for the proxy's
/// error message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("Unable to fetch unit data: {0}")]
    Fetch(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Invalid JSON data received: {0}")]
    Parse(String),

    #[error("Invalid JSON data received: expected an array of units")]
    NotAnArray,
}

impl LoadError {
    /// Network and non-2xx failures, as opposed to malformed bodies.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, LoadError::Fetch(_) | LoadError::Status(_))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Form validation failures of the mail relay contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingField(&'static str),

    #[error("Please fill in all required fields")]
    InvalidEmail,

    #[error("Please agree to receive updates")]
    ConsentRequired,
}
