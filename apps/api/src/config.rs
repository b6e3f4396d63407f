use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key. Optional on purpose: the service starts without it and
    /// every model call fails with a MODEL_ERROR carrying setup instructions,
    /// which keeps the chat UI usable for manual entry.
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        // Missing key is reported from main, after the subscriber is up.
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        Ok(Config {
            gemini_api_key,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_none_not_error() {
        std::env::remove_var("GEMINI_API_KEY");
        let config = Config::from_env().unwrap();
        assert!(config.gemini_api_key.is_none());
    }
}
