//! Runtime configuration for the record service.
//!
//! Defaults reproduce the behavior of the registry as shipped: a
//! `registry.sqlite` file in the working directory, the list stored under
//! `records_db_v2`, 300 ms latency on reads and deletes and 500 ms on creates
//! and updates. Each value can be overridden from the environment:
//!
//! | Variable                    | Field            |
//! |-----------------------------|------------------|
//! | `REGISTRY_DB_PATH`          | `db_path`        |
//! | `REGISTRY_STORAGE_KEY`      | `storage_key`    |
//! | `REGISTRY_READ_LATENCY_MS`  | `latency.read`   |
//! | `REGISTRY_WRITE_LATENCY_MS` | `latency.write`  |

use log::warn;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DB_PATH: &str = "registry.sqlite";
pub const DEFAULT_STORAGE_KEY: &str = "records_db_v2";
const DEFAULT_READ_LATENCY_MS: u64 = 300;
const DEFAULT_WRITE_LATENCY_MS: u64 = 500;

/// Simulated round-trip time of the record service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Applied to `list` and `delete`.
    pub read: Duration,
    /// Applied to `create` and `update`.
    pub write: Duration,
}

impl Latency {
    pub const NONE: Latency = Latency {
        read: Duration::ZERO,
        write: Duration::ZERO,
    };
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            read: Duration::from_millis(DEFAULT_READ_LATENCY_MS),
            write: Duration::from_millis(DEFAULT_WRITE_LATENCY_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub storage_key: String,
    pub latency: Latency,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            latency: Latency::default(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source, so tests do not
    /// have to touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let db_path = lookup("REGISTRY_DB_PATH")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);
        let storage_key = lookup("REGISTRY_STORAGE_KEY")
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.storage_key);
        let read = millis(&lookup, "REGISTRY_READ_LATENCY_MS", defaults.latency.read);
        let write = millis(&lookup, "REGISTRY_WRITE_LATENCY_MS", defaults.latency.write);

        Self {
            db_path,
            storage_key,
            latency: Latency { read, write },
        }
    }
}

fn millis(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: Duration) -> Duration {
    match lookup(name) {
        None => default,
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(ms) => Duration::from_millis(ms),
            Err(_) => {
                warn!("{name}={raw:?} is not a number of milliseconds, using {default:?}");
                default
            }
        },
    }
}
