use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use crate::error::{AppError, Result};

const DEFAULT_UPSTREAM_URL: &str = "http://localhost:5000";
const DEFAULT_SUMMARIZE_PATH: &str = "/api/summarize_youtube";

/// Proxy server configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Base URL of the upstream summarization service.
    pub upstream_url: String,
    /// Path of the summarize endpoint, both on this server and upstream.
    pub summarize_path: String,
    /// Directory holding the built frontend.
    pub static_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "4000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let upstream_url = lookup("UPSTREAM_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());
        let summarize_path = normalize_path(
            &lookup("SUMMARIZE_PATH").unwrap_or_else(|| DEFAULT_SUMMARIZE_PATH.to_string()),
        )?;
        let static_dir = PathBuf::from(lookup("STATIC_DIR").unwrap_or_else(|| "build".to_string()));

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            upstream_url: trim_base(&upstream_url)?,
            summarize_path,
            static_dir,
        })
    }

    pub fn upstream_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.upstream_url, path)
    }
}

/// Settings for the summarization client used by the form.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_url: String,
    pub summarize_path: String,
}

impl ClientConfig {
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("API_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());
        let summarize_path = lookup("SUMMARIZE_PATH").unwrap_or_else(|| DEFAULT_SUMMARIZE_PATH.to_string());

        Ok(ClientConfig {
            api_url: trim_base(&api_url)?,
            summarize_path: normalize_path(&summarize_path)?,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.api_url, self.summarize_path)
    }
}

fn trim_base(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(AppError::Config("Base URL must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

fn normalize_path(path: &str) -> Result<String> {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Err(AppError::Config("Summarize path must not be empty".to_string()));
    }
    Ok(format!("/{}", trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn server_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.server_addr, "127.0.0.1:4000".parse().unwrap());
        assert_eq!(config.upstream_url, "http://localhost:5000");
        assert_eq!(config.summarize_path, "/api/summarize_youtube");
        assert_eq!(config.static_dir, PathBuf::from("build"));
    }

    #[test]
    fn server_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("UPSTREAM_URL", "https://summarizer.example.com/"),
            ("SUMMARIZE_PATH", "summarize-youtube/"),
            ("STATIC_DIR", "/srv/www"),
        ]))
        .unwrap();
        assert_eq!(config.server_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(
            config.upstream_endpoint("/summary"),
            "https://summarizer.example.com/summary"
        );
        assert_eq!(config.summarize_path, "/summarize-youtube");
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn invalid_port_is_config_error() {
        let err = Config::from_lookup(lookup(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn invalid_host_is_config_error() {
        let err = Config::from_lookup(lookup(&[("HOST", "localhost:1")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn client_endpoint_joins_base_and_path() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.endpoint(), "http://localhost:5000/api/summarize_youtube");

        let config = ClientConfig::from_lookup(lookup(&[
            ("API_URL", "https://app.example.com/api/"),
            ("SUMMARIZE_PATH", "/summarize-youtube"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint(), "https://app.example.com/api/summarize-youtube");
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[("API_URL", "  ")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
