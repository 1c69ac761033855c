/// Error raised when the host cannot enumerate tabs
///
/// Carries the string form of whatever the host rejected with. `Display`
/// is the bare message so it can be embedded in user-facing lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TabQueryFailure {
    message: String,
}

impl TabQueryFailure {
    pub fn new(message: impl Into<String>) -> Self {
        TabQueryFailure {
            message: message.into(),
        }
    }
}

/// Error decoding the startup configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config object: {0}")]
    Js(String),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = TabQueryFailure::new("network down");

        assert_eq!(err.to_string(), "network down");
    }
}
