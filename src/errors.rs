// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    /// The request never completed (DNS, refused connection, aborted body).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Error: {0}")]
    RequestFailed(u16),

    #[error("Unexpected response structure: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Please enter an expression ID")]
    EmptyIdentifier,

    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message() {
        assert_eq!(CalcError::RequestFailed(404).to_string(), "Error: 404");
        assert_eq!(CalcError::RequestFailed(500).to_string(), "Error: 500");
    }

    #[test]
    fn test_decode_error_is_distinct() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = CalcError::from(source);
        assert!(matches!(err, CalcError::Decode(_)));
        assert!(err.to_string().starts_with("Unexpected response structure: "));
    }

    #[test]
    fn test_empty_identifier_prompt() {
        assert_eq!(
            CalcError::EmptyIdentifier.to_string(),
            "Please enter an expression ID"
        );
    }
}
