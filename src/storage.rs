use crate::errors::AppError;
use crate::models::AppData;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

/// Reads the snapshot from disk. A missing or unreadable file is treated as
/// "no data" and the default catalog is seeded either way.
pub async fn load_data(path: &Path) -> AppData {
    let mut data = match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    };

    if data.ensure_catalog() {
        info!("seeded default sport catalog");
    }
    data
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await.map_err(|err| {
        error!("failed to write data file {}: {err}", path.display());
        AppError::internal(err)
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;
    use chrono::NaiveDate;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("sport_tracker_{}_{name}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_seeded_defaults() {
        let data = load_data(&temp_path("missing")).await;
        assert!(data.sessions.is_empty());
        assert_eq!(data.sports.len(), 6);
    }

    #[tokio::test]
    async fn corrupt_file_is_treated_as_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{ not json").await.unwrap();
        let data = load_data(&path).await;
        assert!(data.sessions.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_sessions_reload() {
        let path = temp_path("reload");
        let mut data = load_data(&path).await;
        data.insert_session(Session {
            id: "s1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            sport_id: "running".to_string(),
            duration: 45,
            notes: Some("5k run".to_string()),
            user_id: "local".to_string(),
        });
        persist_data(&path, &data).await.unwrap();

        let reloaded = load_data(&path).await;
        assert_eq!(reloaded.sessions, data.sessions);
        let _ = fs::remove_file(&path).await;
    }
}
