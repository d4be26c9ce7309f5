// src/config/config_load.rs
//
// loading from config.toml

use serde::Deserialize;
use std::fs;

use super::{AnimationConfig, StyleConfig, WindowConfig};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub animation: AnimationConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_config() {
        let config: Config = toml::from_str(
            r#"
            [window]
            width = 800
            height = 600

            [style]
            fore_color = [1.0, 0.0, 0.0]
            back_color = [0.0, 0.0, 0.0]
            stroke_factor = 90.0
            size_factor = 2.9

            [animation]
            tick_interval = 0.05
            "#,
        )
        .unwrap();

        assert_eq!(config.window.width, 800);
        assert_eq!(config.style.fore_color, [1.0, 0.0, 0.0]);
        assert_eq!(config.animation.tick_interval, 0.05);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[window]\nwidth = 640\nheight = 480\n").unwrap();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.style.stroke_factor, 90.0);
        assert_eq!(config.animation.tick_interval, 0.05);
    }
}
