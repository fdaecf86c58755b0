use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use super::upload::HostSettings;
use crate::global_constants;

fn default_true() -> bool {
    true
}

fn default_host() -> String {
    global_constants::DEFAULT_HOST_ID.to_string()
}

/// User configuration: per-host credentials plus the two global toggles.
///
/// Persisted as JSON in the platform config directory; missing fields fall
/// back to defaults so older settings files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginSettings {
    #[serde(default = "default_host")]
    pub default_host: String,
    #[serde(default)]
    pub hosts: HashMap<String, HostSettings>,
    #[serde(default = "default_true")]
    pub show_notifications: bool,
    #[serde(default = "default_true")]
    pub retain_original_path: bool,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            default_host: default_host(),
            hosts: HashMap::new(),
            show_notifications: true,
            retain_original_path: true,
        }
    }
}

impl PluginSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save()?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(&settings_path)?;
        let settings: PluginSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Default host: {}", settings.default_host);
        log::debug!(
            "[SETTINGS] Configured hosts: {:?}",
            settings.hosts.keys().collect::<Vec<_>>()
        );

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    /// Settings for one host; an empty map when the host has none yet.
    pub fn host_settings(&self, host_id: &str) -> HostSettings {
        self.hosts.get(host_id).cloned().unwrap_or_default()
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
