//! NASA API configuration and environment variable handling.

use std::env;
use std::time::Duration;

/// Year covered by the star map. Every `MM-DD` date key resolves within it.
pub const DEFAULT_YEAR: i32 = 2025;

/// Configuration for the NASA API client.
#[derive(Debug, Clone)]
pub struct NasaConfig {
    /// Base URL of the NASA API gateway
    pub base_url: String,
    /// API key credential appended to every request
    pub api_key: String,
    /// Retry budget per lookup
    pub max_attempts: u32,
    /// Base backoff delay; attempt `n` waits `n * retry_delay`
    pub retry_delay: Duration,
    /// Per-request timeout for the HTTP transport
    pub request_timeout: Duration,
    /// Calendar year the star map addresses
    pub year: i32,
}

impl Default for NasaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.nasa.gov".to_string(),
            api_key: "DEMO_KEY".to_string(),
            max_attempts: 3,
            retry_delay: Duration::from_secs(1),
            request_timeout: Duration::from_secs(10),
            year: DEFAULT_YEAR,
        }
    }
}

impl NasaConfig {
    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `NASA_API_KEY` (optional, default: `DEMO_KEY`): API key credential
    /// - `NASA_BASE_URL` (optional, default: `https://api.nasa.gov`)
    /// - `NASA_MAX_RETRIES` (optional, default: 3): retry budget per lookup
    /// - `TTT_YEAR` (optional, default: 2025): calendar year of the star map
    ///
    /// # Errors
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, String> {
        let mut config = Self::default();

        if let Ok(key) = env::var("NASA_API_KEY") {
            config.api_key = key;
        }
        if let Ok(url) = env::var("NASA_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(retries) = env::var("NASA_MAX_RETRIES") {
            config.max_attempts = retries
                .parse()
                .map_err(|_| "NASA_MAX_RETRIES must be a positive integer".to_string())?;
        }
        if let Ok(year) = env::var("TTT_YEAR") {
            config.year = year
                .parse()
                .map_err(|_| "TTT_YEAR must be a valid year".to_string())?;
        }

        Ok(config)
    }

    /// URL of the "Astronomy Picture of the Day" endpoint for a full
    /// `YYYY-MM-DD` date.
    pub fn apod_url(&self, date: &str) -> String {
        format!(
            "{}/planetary/apod?api_key={}&date={}",
            self.base_url, self.api_key, date
        )
    }

    /// URL of the near-Earth object feed for a `YYYY-MM-DD` date range.
    pub fn neo_feed_url(&self, start_date: &str, end_date: &str) -> String {
        format!(
            "{}/neo/rest/v1/feed?start_date={}&end_date={}&api_key={}",
            self.base_url, start_date, end_date, self.api_key
        )
    }

    /// URL of the DONKI space weather notifications endpoint.
    pub fn donki_notifications_url(&self) -> String {
        format!(
            "{}/DONKI/notifications?api_key={}&type=all",
            self.base_url, self.api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_public_gateway() {
        let config = NasaConfig::default();
        assert_eq!(config.base_url, "https://api.nasa.gov");
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.year, 2025);
    }

    #[test]
    fn url_builders_carry_the_api_key() {
        let config = NasaConfig {
            base_url: "http://localhost:9999".to_string(),
            api_key: "test-key".to_string(),
            ..NasaConfig::default()
        };

        assert_eq!(
            config.apod_url("2025-03-15"),
            "http://localhost:9999/planetary/apod?api_key=test-key&date=2025-03-15"
        );
        assert_eq!(
            config.neo_feed_url("2025-03-15", "2025-03-15"),
            "http://localhost:9999/neo/rest/v1/feed?start_date=2025-03-15&end_date=2025-03-15&api_key=test-key"
        );
        assert_eq!(
            config.donki_notifications_url(),
            "http://localhost:9999/DONKI/notifications?api_key=test-key&type=all"
        );
    }
}
