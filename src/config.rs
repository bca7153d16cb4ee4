use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DEBOUNCE_MS: u64 = 200;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: String,
    pub api_token: Option<String>,
    pub bind_addr: SocketAddr,
    pub fetch_debounce: Duration,
    pub board_refresh_secs: Option<u64>,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_url = get("ROUTINE_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "ROUTINE_API_URL must be an http(s) URL, got {}",
                api_url
            )));
        }

        let api_token = get("ROUTINE_API_TOKEN");

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is invalid: {}", e)))?;

        let debounce_ms = match get("FETCH_DEBOUNCE_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| AppError::Config(format!("FETCH_DEBOUNCE_MS is not a number: {}", raw)))?,
            None => DEFAULT_DEBOUNCE_MS,
        };

        let board_refresh_secs = match get("BOARD_REFRESH_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(secs),
                Err(_) => {
                    return Err(AppError::Config(format!(
                        "BOARD_REFRESH_SECS is not a number: {}",
                        raw
                    )));
                }
            },
            None => None,
        };

        Ok(Self {
            api_url,
            api_token,
            bind_addr,
            fetch_debounce: Duration::from_millis(debounce_ms),
            board_refresh_secs,
        })
    }
}
