#[derive(Debug, thiserror::Error)]
pub enum IntegralError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Incomplete selection: no dataset selected for {0}")]
    IncompleteSelection(String),

    #[error("Failed to load data file {path}: {reason}")]
    DatasetLoad { path: String, reason: String },

    #[error("Connectivity error: {0}")]
    Connectivity(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid value: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl IntegralError {
    /// HTTP status reported by the remote API, if this error came from one.
    pub fn api_status(&self) -> Option<u16> {
        match self {
            IntegralError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Errors that abort a run before any analysis result exists.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            IntegralError::Config(_)
                | IntegralError::IncompleteSelection(_)
                | IntegralError::DatasetLoad { .. }
                | IntegralError::Connectivity(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, IntegralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IntegralError::Config("missing key".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing key");

        let err = IntegralError::Api { status: 429, message: "slow down".to_string() };
        assert_eq!(err.to_string(), "API error (429): slow down");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: IntegralError = io_err.into();
        assert!(matches!(err, IntegralError::Io(_)));
    }

    #[test]
    fn test_api_status() {
        let err = IntegralError::Api { status: 401, message: String::new() };
        assert_eq!(err.api_status(), Some(401));
        assert_eq!(IntegralError::Model("x".into()).api_status(), None);
    }

    #[test]
    fn test_fatal_classification() {
        assert!(IntegralError::Config("x".into()).is_fatal());
        assert!(
            IntegralError::DatasetLoad { path: "ul_neg.csv".into(), reason: "gone".into() }
                .is_fatal()
        );
        assert!(!IntegralError::Model("x".into()).is_fatal());
        assert!(!IntegralError::InvalidResponse("x".into()).is_fatal());
    }
}
