use crate::errors::ConfigError;
use log::debug;
use std::collections::HashMap;
use std::env;

pub const YIELD_SCIENCE: &str = "YIELD_SCIENCE";
pub const SERVER_LISTEN_ADDRESS: &str = "SERVER_LISTEN_ADDRESS";
pub const FUNCTIONS_CUSTOMHANDLER_PORT: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";
pub const WORKERS: &str = "WORKERS";

const DEFAULT_PORT: u16 = 3000;

/// A key-value source of settings, normally the process environment.
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Reads the required science yield. There is no default: a missing or
/// non-integer value is an error.
pub fn load_science_yield(env: &dyn EnvSource) -> Result<i64, ConfigError> {
    debug!("Reading {YIELD_SCIENCE} from environment");
    let value = env
        .var(YIELD_SCIENCE)
        .ok_or_else(|| ConfigError::Missing(YIELD_SCIENCE.to_string()))?;

    value.trim().parse::<i64>().map_err(|_| ConfigError::Invalid {
        key: YIELD_SCIENCE.to_string(),
        value,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub server_listen_address: String,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_listen_address: format!("127.0.0.1:{DEFAULT_PORT}"),
            workers: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(env: &dyn EnvSource) -> Self {
        // The functions host hands custom handlers their port; an explicit address wins.
        let server_listen_address = env.var(SERVER_LISTEN_ADDRESS).unwrap_or_else(|| {
            let port = env
                .var(FUNCTIONS_CUSTOMHANDLER_PORT)
                .and_then(|p| p.trim().parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT);
            format!("127.0.0.1:{port}")
        });

        Self {
            server_listen_address,
            workers: env.var(WORKERS).and_then(|w| w.parse::<usize>().ok()),
        }
    }
}
