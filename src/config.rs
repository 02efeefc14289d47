use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use crate::error::{AppError, Result};

/// Feed the service reads its verse from. Not configurable.
pub const FEED_URL: &str = "https://www.fighterverses.com/blog-feed.xml";

pub const DEFAULT_PORT: u16 = 8081;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub feed_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let port = env::var("PORT").ok();
        Self::from_port(port.as_deref())
    }

    /// Resolves the listen address from a raw `PORT` value. Unset and empty
    /// both mean the default port.
    pub fn from_port(port: Option<&str>) -> Result<Self> {
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::ConfigError(format!("Invalid port {:?}: {}", raw, e)))?,
        };

        Ok(Config {
            server_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
            feed_url: FEED_URL.to_string(),
        })
    }

    pub fn with_feed_url(mut self, feed_url: impl Into<String>) -> Self {
        self.feed_url = feed_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_port_listens_on_8081() {
        let config = Config::from_port(None).unwrap();
        assert_eq!(config.server_addr.port(), 8081);
        assert!(config.server_addr.ip().is_unspecified());
    }

    #[test]
    fn empty_port_listens_on_8081() {
        let config = Config::from_port(Some("")).unwrap();
        assert_eq!(config.server_addr.port(), DEFAULT_PORT);
    }

    #[test]
    fn explicit_port_is_used() {
        let config = Config::from_port(Some("9090")).unwrap();
        assert_eq!(config.server_addr.port(), 9090);
    }

    #[test]
    fn invalid_port_is_config_error() {
        let err = Config::from_port(Some("http")).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));

        let err = Config::from_port(Some("70000")).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn feed_url_is_fixed() {
        let config = Config::from_port(Some("9090")).unwrap();
        assert_eq!(config.feed_url, FEED_URL);
    }
}
