use std::fmt::Display;

#[derive(Debug)]
pub enum TodoError {
    /// Request never produced a response (connect, timeout, body read)
    HttpError(String),
    /// Server answered with a non-success status
    Status { status: u16, body: String },
    ConfigError(String),
}

impl Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpError(e) => {
                write!(f, "{}", e)
            }
            Self::Status { status, body } => {
                write!(f, "Server responded with {}: {}", status, body.trim())
            }
            Self::ConfigError(e) => {
                write!(f, "Invalid configuration: {}", e)
            }
        }
    }
}

impl From<reqwest::Error> for TodoError {
    fn from(e: reqwest::Error) -> Self {
        TodoError::HttpError(e.to_string())
    }
}

impl From<std::io::Error> for TodoError {
    fn from(e: std::io::Error) -> Self {
        TodoError::ConfigError(e.to_string())
    }
}

impl From<serde_json::Error> for TodoError {
    fn from(e: serde_json::Error) -> Self {
        TodoError::ConfigError(e.to_string())
    }
}

impl std::error::Error for TodoError {}

#[cfg(test)]
mod errors_test {
    use super::TodoError;

    #[test]
    fn test_status_display_trims_body() {
        let err = TodoError::Status {
            status: 400,
            body: String::from("Title is required\n"),
        };

        assert_eq!(err.to_string(), "Server responded with 400: Title is required");
    }
}
