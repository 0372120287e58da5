use std::env;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::pool::SelectionPool;
use crate::types::{SelectionInfo, UiStatus};

const SELECTIONS_SNAPSHOT_FILE: &str = "selections.json";
pub(crate) const SELECTIONS_SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct SnapshotFile {
    version: u32,
    generated_at: Option<String>,
    selections: Vec<SnapshotEntryData>,
}

#[derive(Serialize, Deserialize)]
struct SnapshotEntryData {
    name: String,
    summary: String,
    order: i64,
    status: String,
    #[serde(default)]
    packages: Vec<String>,
}

pub fn load_selection_snapshot_from_disk() -> SelectionPool {
    let Some(path) = snapshot_path() else {
        return SelectionPool::default();
    };

    let Ok(content) = fs::read_to_string(&path) else {
        return SelectionPool::default();
    };

    pool_from_snapshot_str(&content).unwrap_or_default()
}

pub(crate) fn pool_from_snapshot_str(content: &str) -> Option<SelectionPool> {
    let file = serde_json::from_str::<SnapshotFile>(content).ok()?;

    if file.version != SELECTIONS_SNAPSHOT_VERSION {
        return None;
    }

    let mut pool = SelectionPool::new();
    pool.generated_at = file.generated_at.as_deref().and_then(parse_snapshot_datetime);

    for entry in file.selections {
        if entry.name.is_empty() {
            continue;
        }

        let status = UiStatus::from_key(&entry.status).unwrap_or_default();
        let id = pool.insert(SelectionInfo {
            name: entry.name,
            summary: entry.summary,
            order: entry.order,
            packages: entry.packages,
        });
        pool.set_status(id, status);
        pool.activate_changes(id, status);
    }

    Some(pool)
}

pub fn save_selection_snapshot_to_disk(pool: &SelectionPool) -> Result<(), String> {
    let Some(path) = snapshot_path() else {
        return Err("Unable to determine selections data directory".to_string());
    };

    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            return Err(format!("Failed to create data directory: {}", err));
        }
    }

    let selections: Vec<SnapshotEntryData> = pool
        .ids()
        .into_iter()
        .filter_map(|id| {
            let info = pool.info(id)?;
            Some(SnapshotEntryData {
                name: info.name.clone(),
                summary: info.summary.clone(),
                order: info.order,
                status: pool.status(id).unwrap_or_default().key().to_string(),
                packages: info.packages.clone(),
            })
        })
        .collect();

    let file = SnapshotFile {
        version: SELECTIONS_SNAPSHOT_VERSION,
        generated_at: pool.generated_at.as_ref().map(format_snapshot_datetime),
        selections,
    };

    let data = serde_json::to_string_pretty(&file)
        .map_err(|err| format!("Failed to serialize selections snapshot: {}", err))?;

    fs::write(&path, data).map_err(|err| format!("Failed to write selections snapshot: {}", err))
}

fn parse_snapshot_datetime(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn format_snapshot_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339()
}

fn app_data_dir() -> Option<PathBuf> {
    if let Ok(custom) = env::var("VELA_DATA_DIR") {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    if let Ok(data_home) = env::var("XDG_DATA_HOME") {
        let trimmed = data_home.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed).join("vela"));
        }
    }

    if let Ok(home) = env::var("HOME") {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return Some(
                PathBuf::from(trimmed)
                    .join(".local")
                    .join("share")
                    .join("vela"),
            );
        }
    }

    None
}

fn snapshot_path() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join(SELECTIONS_SNAPSHOT_FILE))
}
