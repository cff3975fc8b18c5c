use crate::error::ImggenError;
use std::env;
use std::time::Duration;

pub const API_KEY_VAR: &str = "IMGGEN_API_KEY";
pub const API_ENDPOINT_VAR: &str = "IMGGEN_API_ENDPOINT";
pub const TIMEOUT_VAR: &str = "IMGGEN_TIMEOUT";

pub const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings taken from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Settings {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Result<Self, ImggenError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the settings through `lookup`, which maps a variable name to its
    /// value. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// - `ImggenError::MissingApiKey` if `IMGGEN_API_KEY` is unset.
    /// - `ImggenError::InvalidTimeout` if `IMGGEN_TIMEOUT` is not a positive
    ///   whole number of seconds.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ImggenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let api_key = get(API_KEY_VAR).ok_or(ImggenError::MissingApiKey)?;
        let endpoint = get(API_ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
        let timeout = match get(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ImggenError::InvalidTimeout(raw)),
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key,
            endpoint,
            timeout,
        })
    }
}
