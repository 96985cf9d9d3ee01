use crate::error::ConfigError;
use crate::style;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub sidebar: SidebarConfig,
    pub font: FontConfig,
    pub ui: UiConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Navigation sidebar configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SidebarConfig {
    /// Initial width of the navigation sidebar (in points)
    pub width: f32,
}

/// Font and text rendering configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    /// Size of the main interface font (in points)
    pub font_size: f32,
    /// Size of code in comparison tables (in points)
    pub code_font_size: f32,
    /// Font file with CJK glyphs; system locations are probed when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cjk_font: Option<PathBuf>,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Show the Kotlin column when a record carries a Kotlin example.
    /// The bundled content has none, so this only affects custom content.
    pub show_kotlin: bool,
    /// Viewport width below which the sidebar becomes an overlay
    pub narrow_breakpoint: f32,
    /// Location opened at startup when none is given on the command line
    pub start_location: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig {
                mode: "dark".to_string(),
            },
            sidebar: SidebarConfig {
                width: style::SIDEBAR_DEFAULT,
            },
            font: FontConfig {
                font_size: 14.0,
                code_font_size: 12.0,
                cjk_font: None,
            },
            ui: UiConfig {
                show_kotlin: false,
                narrow_breakpoint: style::NARROW_BREAKPOINT,
                start_location: "/".to_string(),
            },
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Config::default().theme
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Config::default().sidebar
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Config::default().font
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Config::default().ui
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "tsjava-guide")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default configuration");
                Config::default()
            }
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str::<Config>(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save_to(&path)?;
                tracing::info!(path = %path.display(), "wrote default configuration");
            }
        }
        Ok(())
    }

    pub fn theme(&self) -> style::Theme {
        style::Theme::from_mode(&self.theme.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.sidebar.width, 256.0);
        assert_eq!(config.font.font_size, 14.0);
        assert_eq!(config.ui.narrow_breakpoint, 1024.0);
        assert_eq!(config.ui.start_location, "/");
        assert!(!config.ui.show_kotlin);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let config: Config = toml::from_str("[ui]\nshow_kotlin = true\nstart_location = \"/comparison/oop\"\n")
            .expect("Failed to parse");
        assert!(config.ui.show_kotlin);
        assert_eq!(config.ui.start_location, "/comparison/oop");
        assert_eq!(config.ui.narrow_breakpoint, 1024.0);
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.sidebar.width, 256.0);
    }

    #[test]
    fn save_and_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.theme.mode = "light".to_string();
        config.sidebar.width = 320.0;
        config.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, config);
        assert_eq!(loaded.theme(), style::Theme::Light);
    }

    #[test]
    fn invalid_file_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = 3").expect("write");
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }
}
