use thiserror::Error;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input closed before a team name was finalized for '{participant}'")]
    InputClosed { participant: String },
}

impl DraftError {
    /// Short operator-facing description, without the wrapped source chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            DraftError::IoError(e) => format!("Could not read or write the team-name store: {}", e),
            DraftError::SerializationError(e) => format!("Could not render the draft report: {}", e),
            DraftError::ConfigError { message } => format!("Configuration problem: {}", message),
            DraftError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            DraftError::InputClosed { participant } => format!(
                "Standard input ended while asking for {}'s team name; nothing was saved",
                participant
            ),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DraftError::IoError(_) => "Check that the data directory exists and is writable",
            DraftError::SerializationError(_) => "Re-run with --format text",
            DraftError::ConfigError { .. } | DraftError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted options"
            }
            DraftError::InputClosed { .. } => {
                "Supply one line per participant, or use auto-draft for a non-interactive run"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DraftError>;
