//! Client configuration.
//!
//! Everything has a default so an empty (or partial) JSON object is a valid
//! config; the browser build reads one from localStorage.

use serde::{Deserialize, Serialize};
use tracing::Level;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_ws_path")]
    pub ws_path: String,
    /// Overrides the page host (e.g. `127.0.0.1:8888` while developing).
    #[serde(default)]
    pub host: Option<String>,
    /// Forces `wss` (`true`) or `ws` (`false`); unset follows the page protocol.
    #[serde(default)]
    pub secure: Option<bool>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_rate_decimals")]
    pub rate_decimals: usize,
}

fn default_ws_path() -> String {
    "/ws".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_rate_decimals() -> usize {
    3
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ws_path: default_ws_path(),
            host: None,
            secure: None,
            log_level: default_log_level(),
            rate_decimals: default_rate_decimals(),
        }
    }
}

impl ClientConfig {
    /// Parses a stored config. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// WebSocket URL for a page served as `page_protocol` (`"http:"`, `"https:"`)
    /// from `page_host`.
    pub fn endpoint(&self, page_protocol: &str, page_host: &str) -> String {
        let secure = self
            .secure
            .unwrap_or_else(|| page_protocol.trim_end_matches(':').eq_ignore_ascii_case("https"));
        let scheme = if secure { "wss" } else { "ws" };
        let host = self.host.as_deref().unwrap_or(page_host);

        let path = self.ws_path.trim();
        if path.starts_with('/') {
            format!("{scheme}://{host}{path}")
        } else {
            format!("{scheme}://{host}/{path}")
        }
    }

    pub fn level(&self) -> Level {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" | "warning" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_follows_page_protocol() {
        let cfg = ClientConfig::default();
        assert_eq!(
            cfg.endpoint("http:", "localhost:8888"),
            "ws://localhost:8888/ws"
        );
        assert_eq!(cfg.endpoint("https:", "vote.example"), "wss://vote.example/ws");
    }

    #[test]
    fn overrides_take_precedence() {
        let cfg = ClientConfig {
            ws_path: "socket".to_string(),
            host: Some("127.0.0.1:9000".to_string()),
            secure: Some(false),
            ..ClientConfig::default()
        };
        assert_eq!(
            cfg.endpoint("https:", "vote.example"),
            "ws://127.0.0.1:9000/socket"
        );
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = ClientConfig::from_json(r#"{"log_level":"debug"}"#).unwrap();
        assert_eq!(cfg.ws_path, "/ws");
        assert_eq!(cfg.rate_decimals, 3);
        assert_eq!(cfg.level(), Level::DEBUG);

        assert_eq!(ClientConfig::from_json("{}").unwrap(), ClientConfig::default());
    }

    #[test]
    fn unreadable_json_is_an_error() {
        assert!(ClientConfig::from_json("{oops").is_err());
        assert!(ClientConfig::from_json(r#"{"rate_decimals": "three"}"#).is_err());
    }

    #[test]
    fn unknown_level_is_info() {
        let cfg = ClientConfig {
            log_level: "loud".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(cfg.level(), Level::INFO);
    }
}
