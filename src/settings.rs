use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const APP_SETTINGS_FILE: &str = "settings.json";

/// Presentation preferences shared by Vela frontends. Fields default
/// individually so settings written by older builds keep loading.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrontendSettings {
    #[serde(default = "default_show_package_counts")]
    pub show_package_counts: bool,
    #[serde(default = "default_summary_width")]
    pub summary_width: usize,
}

fn default_show_package_counts() -> bool {
    true
}

fn default_summary_width() -> usize {
    48
}

impl Default for FrontendSettings {
    fn default() -> Self {
        Self {
            show_package_counts: default_show_package_counts(),
            summary_width: default_summary_width(),
        }
    }
}

pub fn load_frontend_settings() -> FrontendSettings {
    let Some(path) = app_settings_path() else {
        return FrontendSettings::default();
    };

    let Ok(content) = fs::read_to_string(&path) else {
        return FrontendSettings::default();
    };

    serde_json::from_str(&content).unwrap_or_default()
}

pub fn save_frontend_settings(settings: &FrontendSettings) -> Result<(), String> {
    let Some(path) = app_settings_path() else {
        return Err("Unable to determine settings directory".to_string());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("Failed to create settings directory: {}", err))?;
    }

    let data = serde_json::to_string_pretty(settings)
        .map_err(|err| format!("Failed to serialize settings: {}", err))?;

    fs::write(&path, data).map_err(|err| format!("Failed to write settings: {}", err))
}

fn app_config_dir() -> Option<PathBuf> {
    if let Ok(custom) = env::var("VELA_CONFIG_DIR") {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    if let Ok(config_home) = env::var("XDG_CONFIG_HOME") {
        let trimmed = config_home.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed).join("vela"));
        }
    }

    if let Ok(home) = env::var("HOME") {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed).join(".config").join("vela"));
        }
    }

    None
}

fn app_settings_path() -> Option<PathBuf> {
    app_config_dir().map(|dir| dir.join(APP_SETTINGS_FILE))
}
