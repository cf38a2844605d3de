use anyhow::{bail, Context};
use std::env;
use std::time::Duration;

use crate::game::constants::TICK_MS;

const DEFAULT_PORT: u16 = 5050;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    pub tick: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match read("PORT") {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("invalid PORT {value:?}"))?,
            None => DEFAULT_PORT,
        };
        let tick_ms = match read("TICK_MS") {
            Some(value) => value
                .parse::<u64>()
                .with_context(|| format!("invalid TICK_MS {value:?}"))?,
            None => TICK_MS,
        };
        if tick_ms == 0 {
            bail!("TICK_MS must be greater than zero");
        }

        Ok(Self {
            bind_addr: read("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port,
            tick: Duration::from_millis(tick_ms),
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
