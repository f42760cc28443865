use std::{collections::HashMap, fs, path::PathBuf};

use tracing::warn;

const DEFAULT_CONFIG_FILE: &str = "orders_console.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub api_prefix: String,
    pub state_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".into(),
            api_prefix: String::new(),
            state_path: None,
        }
    }
}

/// Defaults, then the TOML file, then the environment.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    let config_path =
        std::env::var("ORDERS_CONSOLE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
    if let Ok(raw) = fs::read_to_string(&config_path) {
        apply_file(&mut settings, &raw);
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

pub(crate) fn apply_file(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<HashMap<String, String>>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(error) => {
            warn!(%error, "ignoring unreadable console config file");
            return;
        }
    };

    if let Some(v) = file_cfg.get("server_url") {
        settings.server_url = v.clone();
    }
    if let Some(v) = file_cfg.get("api_prefix") {
        settings.api_prefix = v.clone();
    }
    if let Some(v) = file_cfg.get("state_path") {
        settings.state_path = non_empty_path(v);
    }
}

pub(crate) fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("ORDERS_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = lookup("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = lookup("APP__API_PREFIX") {
        settings.api_prefix = v;
    }

    if let Some(v) = lookup("APP__STATE_PATH") {
        settings.state_path = non_empty_path(&v);
    }
}

fn non_empty_path(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| PathBuf::from(raw))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
