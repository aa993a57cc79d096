use thiserror::Error;

#[derive(Error, Debug)]
pub enum SipError {
    /// Raised only by mood suggestion; carries the text exactly as the user typed it
    #[error("I don't recognize the mood '{mood}'.")]
    MoodNotFound { mood: String },

    #[error("Menu error: {0}")]
    Menu(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl SipError {
    /// Whether the shell can show this error and keep prompting
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SipError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, SipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_not_found_keeps_original_text() {
        let err = SipError::MoodNotFound {
            mood: "Grumpy Cat".to_string(),
        };
        assert_eq!(err.to_string(), "I don't recognize the mood 'Grumpy Cat'.");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_io_errors_are_not_recoverable() {
        let err: SipError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(!err.is_recoverable());
    }
}
