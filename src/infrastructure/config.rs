use std::path::{Path, PathBuf};

use config::ConfigError;
use serde::Deserialize;

use crate::presentation::config::keybindings::KeyBindings;
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
}

impl Config {
    /// Load from the user config directory, falling back to the built-in defaults.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir(), &utils::get_data_dir())
    }

    pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // User bindings win; defaults fill in the rest
        for (key, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(*key)
                .or_insert_with(|| action.clone());
        }

        Ok(cfg)
    }

    /// Built-in configuration only
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::action::Action;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "{}-config-test-{name}-{}",
            env!("CARGO_PKG_NAME"),
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn test_defaults() -> Result<(), ConfigError> {
        let cfg = Config::defaults()?;
        assert_eq!(
            cfg.keybindings.action_for(&key(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
        assert_eq!(
            cfg.keybindings.action_for(&key(KeyCode::Tab)),
            Some(&Action::FocusNext)
        );
        assert_eq!(
            cfg.keybindings.action_for(&key(KeyCode::Enter)),
            Some(&Action::Activate)
        );
        Ok(())
    }

    #[test]
    fn test_missing_user_config_uses_defaults() -> Result<(), ConfigError> {
        let dir = scratch_dir("missing");
        let cfg = Config::load_from(&dir, &dir)?;

        assert_eq!(cfg.config.config_dir, dir);
        assert_eq!(cfg.config.data_dir, dir);
        assert_eq!(cfg.keybindings.len(), Config::defaults()?.keybindings.len());
        Ok(())
    }

    #[test]
    fn test_user_bindings_override_defaults() -> Result<(), ConfigError> {
        let dir = scratch_dir("override");
        fs::write(
            dir.join("config.json5"),
            r#"{ keybindings: { "<q>": "FocusNext", "<x>": "Quit" } }"#,
        )
        .expect("write config");

        let cfg = Config::load_from(&dir, &dir)?;
        assert_eq!(
            cfg.keybindings.action_for(&key(KeyCode::Char('q'))),
            Some(&Action::FocusNext)
        );
        assert_eq!(
            cfg.keybindings.action_for(&key(KeyCode::Char('x'))),
            Some(&Action::Quit)
        );
        assert_eq!(
            cfg.keybindings.action_for(&key(KeyCode::Esc)),
            Some(&Action::Quit)
        );
        Ok(())
    }
}
