use std::{env, fmt::Display, path::PathBuf, str::FromStr};
use tracing::{info, warn};

use crate::stats::DEFAULT_RECENT_WINDOW_DAYS;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    /// Owner used when a request carries no `x-owner-id` header.
    pub owner_id: String,
    pub recent_window_days: u32,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", 8080),
            data_path: PathBuf::from(try_load("APP_DATA_PATH", "data/state.json".to_string())),
            owner_id: try_load("APP_OWNER_ID", "local".to_string()),
            recent_window_days: try_load("RECENT_WINDOW_DAYS", DEFAULT_RECENT_WINDOW_DAYS),
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Ok(raw) = env::var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(err) => {
            warn!("invalid {key} value {raw:?}: {err}, using default: {default}");
            default
        }
    }
}
