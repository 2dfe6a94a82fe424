use std::{env, path::PathBuf, time::Duration};

use holidays_core::selection::DEFAULT_COUNTRY;

/// Default holiday API base URL (the local development backend).
pub const DEFAULT_BASE_URL: &str = "https://localhost:44355/core/api/holiday";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Holiday API base URL (default: the local development backend)
    pub base_url: String,
    /// Country selected on startup (default: "DE")
    pub default_country: String,
    /// Directory exported files are written to (default: ".")
    pub export_dir: PathBuf,
    /// Request timeout in seconds (default: 30, zero is ignored)
    pub timeout_seconds: u64,
    /// Accept self-signed TLS certificates (default: false)
    pub accept_invalid_certs: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HOLIDAYS_URL` - API base URL
    /// - `HOLIDAYS_COUNTRY` - Initial country ISO code (default: "DE")
    /// - `HOLIDAYS_EXPORT_DIR` - Export directory (default: ".")
    /// - `HOLIDAYS_TIMEOUT_SECONDS` - Request timeout in seconds (default: 30)
    /// - `HOLIDAYS_ACCEPT_INVALID_CERTS` - "true"/"1" to accept self-signed certificates
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("HOLIDAYS_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            default_country: lookup("HOLIDAYS_COUNTRY")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            export_dir: lookup("HOLIDAYS_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            timeout_seconds: lookup("HOLIDAYS_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .filter(|&seconds| seconds > 0)
                .unwrap_or(30),
            accept_invalid_certs: lookup("HOLIDAYS_ACCEPT_INVALID_CERTS")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Get request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.default_country, "DE");
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(config.timeout_seconds, 30);
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_values_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("HOLIDAYS_URL", "http://127.0.0.1:8080/api"),
            ("HOLIDAYS_COUNTRY", "AT"),
            ("HOLIDAYS_EXPORT_DIR", "/tmp/out"),
            ("HOLIDAYS_TIMEOUT_SECONDS", "5"),
            ("HOLIDAYS_ACCEPT_INVALID_CERTS", "TRUE"),
        ]);

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.base_url, "http://127.0.0.1:8080/api");
        assert_eq!(config.default_country, "AT");
        assert_eq!(config.export_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(|key| match key {
            "HOLIDAYS_TIMEOUT_SECONDS" => Some("soon".to_string()),
            "HOLIDAYS_COUNTRY" => Some("  ".to_string()),
            _ => None,
        });

        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.default_country, "DE");
    }

    #[test]
    fn test_zero_timeout_falls_back() {
        let config = Config::from_lookup(|key| {
            (key == "HOLIDAYS_TIMEOUT_SECONDS").then(|| "0".to_string())
        });

        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
