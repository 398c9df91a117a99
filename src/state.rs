use crate::config::Config;
use crate::models::AppData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub owner_id: String,
    pub recent_window_days: u32,
}

impl AppState {
    pub fn new(config: &Config, data: AppData) -> Self {
        Self {
            data_path: config.data_path.clone(),
            data: Arc::new(Mutex::new(data)),
            owner_id: config.owner_id.clone(),
            recent_window_days: config.recent_window_days,
        }
    }
}
