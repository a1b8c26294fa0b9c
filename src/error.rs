use std::fmt;

/// Central error type for the storefront
#[derive(Debug)]
pub enum AppError {
    /// Request could not be sent or the connection dropped
    Network(String),
    /// Server answered with a non-success status
    Http(u16),
    /// Response body did not match the expected shape
    Decode(String),
    /// Invalid configuration
    Config(ConfigError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Http(status) => write!(f, "Server returned status {}", status),
            AppError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            AppError::Http(status.as_u16())
        } else {
            AppError::Network(e.to_string())
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

/// User-friendly error messages for UI
impl AppError {
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => "Could not reach the shop. Check your connection.".to_string(),
            AppError::Http(status) if *status >= 500 => {
                "The shop is having trouble right now. Please try again.".to_string()
            }
            AppError::Http(_) => "Error loading. Please try again.".to_string(),
            AppError::Decode(_) => "Error loading. Please try again.".to_string(),
            AppError::Config(_) => "The shop is misconfigured.".to_string(),
        }
    }
}

/// Errors while loading `StorefrontConfig`
#[derive(Debug)]
pub enum ConfigError {
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "could not parse config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert!(AppError::Http(503).user_message().contains("trouble"));
        assert_eq!(
            AppError::Http(404).user_message(),
            "Error loading. Please try again."
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(AppError::Http(500).to_string(), "Server returned status 500");
        assert_eq!(
            ConfigError::Invalid("api_base is empty".into()).to_string(),
            "invalid config: api_base is empty"
        );
    }
}
