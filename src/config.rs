//! Configuration module

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::predict::ErrorMetric;

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Bind host
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Largest dataset generate-dataset will produce
    pub max_samples: usize,

    /// Request body cap for uploads
    pub max_upload_bytes: usize,

    /// Seed used when a generate request does not bring its own
    pub dataset_seed: Option<u64>,

    /// Metric shown in chart titles
    pub chart_metric: ErrorMetric,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            max_samples: 100_000,
            max_upload_bytes: 10 * 1024 * 1024,
            dataset_seed: None,
            chart_metric: ErrorMetric::Mse,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key/value source. Missing keys keep
    /// their defaults; unparseable ones are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: parsed(&lookup, "HOST").unwrap_or(defaults.host),
            port: parsed(&lookup, "PORT").unwrap_or(defaults.port),
            max_samples: parsed(&lookup, "MAX_SAMPLES").unwrap_or(defaults.max_samples),
            max_upload_bytes: parsed(&lookup, "MAX_UPLOAD_BYTES").unwrap_or(defaults.max_upload_bytes),
            dataset_seed: parsed(&lookup, "DATASET_SEED").or(defaults.dataset_seed),
            chart_metric: parsed(&lookup, "CHART_METRIC").unwrap_or(defaults.chart_metric),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring {key}={raw:?}: {e}");
            None
        }
    }
}
