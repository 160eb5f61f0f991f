use std::time::Duration;

/// Default RapidAPI host for Kanji Alive.
pub const DEFAULT_API_HOST: &str = "kanjialive-api.p.rapidapi.com";

/// Default provider timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the Kanji Alive API.
#[derive(Debug, Clone)]
pub struct KanjiAliveConfig {
    /// Scheme and authority requests are sent to, e.g. `https://kanjialive-api.p.rapidapi.com`.
    pub base_url: String,
    /// Value of the `x-rapidapi-host` header.
    pub api_host: String,
    /// Value of the `x-rapidapi-key` header.
    pub api_key: String,
    /// Whole-request timeout for a single lookup.
    pub timeout: Duration,
}

impl Default for KanjiAliveConfig {
    fn default() -> Self {
        Self {
            base_url: format!("https://{DEFAULT_API_HOST}"),
            api_host: DEFAULT_API_HOST.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl KanjiAliveConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                              |
    /// |-------------------------|--------------------------------------|
    /// | `KANJI_ALIVE_API_KEY`   | empty                                |
    /// | `KANJI_ALIVE_API_HOST`  | `kanjialive-api.p.rapidapi.com`      |
    /// | `KANJI_ALIVE_BASE_URL`  | `https://{KANJI_ALIVE_API_HOST}`     |
    /// | `PROVIDER_TIMEOUT_SECS` | `10`                                 |
    pub fn from_env() -> Self {
        let api_key = std::env::var("KANJI_ALIVE_API_KEY").unwrap_or_default();

        let api_host =
            std::env::var("KANJI_ALIVE_API_HOST").unwrap_or_else(|_| DEFAULT_API_HOST.into());

        let base_url = std::env::var("KANJI_ALIVE_BASE_URL")
            .unwrap_or_else(|_| format!("https://{api_host}"))
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = std::env::var("PROVIDER_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("PROVIDER_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            api_host,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Whether an API key has been configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_rapidapi_with_ten_second_timeout() {
        let config = KanjiAliveConfig::default();
        assert_eq!(config.base_url, "https://kanjialive-api.p.rapidapi.com");
        assert_eq!(config.api_host, DEFAULT_API_HOST);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.has_api_key());
    }
}
