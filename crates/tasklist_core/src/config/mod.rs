use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use time::{Date, OffsetDateTime, UtcOffset};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_ENV_VAR: &str = "TASKLIST_CONFIG_PATH";

/// Offset used to decide which calendar day is "today" when none is configured.
pub const DEFAULT_UTC_OFFSET_HOURS: i8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// ANSI bright background code.
    pub fn background_code(self) -> u8 {
        match self {
            Self::Red => 101,
            Self::Green => 102,
            Self::Yellow => 103,
            Self::Blue => 104,
        }
    }
}

/// Decides how a colored tag is drawn. Every tag occupies one visible cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub colored: bool,
}

impl Palette {
    pub fn tag(&self, color: Color, code: char) -> String {
        if self.colored {
            format!("\x1b[{}m \x1b[0m", color.background_code())
        } else {
            code.to_string()
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub utc_offset_hours: Option<i8>,
    #[serde(default)]
    pub color: Option<bool>,
}

impl Config {
    pub fn utc_offset(&self) -> Result<UtcOffset, AppError> {
        let hours = self.utc_offset_hours.unwrap_or(DEFAULT_UTC_OFFSET_HOURS);
        UtcOffset::from_hms(hours, 0, 0)
            .map_err(|_| AppError::invalid_data(format!("utc offset {hours} is out of range")))
    }

    pub fn palette(&self) -> Palette {
        Palette {
            colored: self.color.unwrap_or(true),
        }
    }

    /// Current calendar day at the configured offset.
    pub fn today(&self) -> Result<Date, AppError> {
        Ok(OffsetDateTime::now_utc().to_offset(self.utc_offset()?).date())
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub error: Option<AppError>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub utc_offset_hours: Option<i8>,
    pub color: Option<bool>,
}

pub fn config_path() -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::invalid_data("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata)
            .join("tasklist")
            .join(CONFIG_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::invalid_data("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("tasklist")
            .join(CONFIG_FILE_NAME))
    }
}

pub fn load_config_with_fallback() -> ConfigLoad {
    match config_path() {
        Ok(path) => load_config_with_fallback_from_path(&path),
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_config_with_fallback_from_path(path: &Path) -> ConfigLoad {
    if !path.exists() {
        return ConfigLoad {
            config: Config::default(),
            error: None,
        };
    }

    match load_config_from_path(path) {
        Ok(config) => ConfigLoad {
            config,
            error: None,
        },
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<Config, AppError> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| AppError::io(format!("{}: {}", path.display(), err)))?;
    let config: Config = serde_json::from_str(&content).map_err(|err| {
        AppError::invalid_data(format!("invalid JSON in {}: {}", path.display(), err))
    })?;
    config.utc_offset()?;
    Ok(config)
}

pub fn merge_overrides(base: &Config, overrides: &ConfigOverrides) -> Config {
    let mut merged = base.clone();
    if let Some(hours) = overrides.utc_offset_hours {
        merged.utc_offset_hours = Some(hours);
    }
    if let Some(color) = overrides.color {
        merged.color = Some(color);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::{
        Color, Config, ConfigOverrides, DEFAULT_UTC_OFFSET_HOURS, Palette, load_config_from_path,
        load_config_with_fallback_from_path, merge_overrides,
    };
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};
    use time::UtcOffset;

    fn temp_path(file_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("tasklist-{nanos}-{file_name}"))
    }

    #[test]
    fn load_config_missing_returns_defaults_without_error() {
        let path = temp_path("missing-config.json");
        let result = load_config_with_fallback_from_path(&path);

        assert_eq!(result.config, Config::default());
        assert!(result.error.is_none());
    }

    #[test]
    fn load_config_invalid_returns_defaults_and_error() {
        let path = temp_path("invalid-config.json");
        fs::write(&path, "{ invalid json ").unwrap();

        let result = load_config_with_fallback_from_path(&path);
        fs::remove_file(&path).ok();

        assert_eq!(result.config, Config::default());
        assert_eq!(result.error.unwrap().code(), "invalid_data");
    }

    #[test]
    fn load_config_reads_valid_file() {
        let path = temp_path("valid-config.json");
        let content = serde_json::json!({
            "utc_offset_hours": -5,
            "color": false
        });
        fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

        let loaded = load_config_from_path(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded.utc_offset_hours, Some(-5));
        assert_eq!(loaded.color, Some(false));
        assert!(!loaded.palette().colored);
    }

    #[test]
    fn load_config_rejects_out_of_range_offset() {
        let path = temp_path("offset-config.json");
        fs::write(&path, "{\"utc_offset_hours\": 30}").unwrap();

        let err = load_config_from_path(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert_eq!(err.code(), "invalid_data");
    }

    #[test]
    fn default_offset_is_fixed_rather_than_local() {
        let offset = Config::default().utc_offset().unwrap();
        assert_eq!(offset.whole_hours(), DEFAULT_UTC_OFFSET_HOURS);
        assert_ne!(offset, UtcOffset::UTC);
    }

    #[test]
    fn merge_overrides_replaces_only_given_values() {
        let base = Config {
            utc_offset_hours: Some(2),
            color: Some(true),
        };
        let overrides = ConfigOverrides {
            utc_offset_hours: None,
            color: Some(false),
        };

        let merged = merge_overrides(&base, &overrides);
        assert_eq!(merged.utc_offset_hours, Some(2));
        assert_eq!(merged.color, Some(false));
        assert_eq!(base.color, Some(true));
    }

    #[test]
    fn merge_overrides_with_empty_overrides_returns_clone() {
        let base = Config {
            utc_offset_hours: Some(0),
            color: None,
        };
        assert_eq!(merge_overrides(&base, &ConfigOverrides::default()), base);
    }

    #[test]
    fn palette_tags_are_one_visible_cell() {
        let colored = Palette { colored: true };
        assert_eq!(colored.tag(Color::Red, 'C'), "\x1b[101m \x1b[0m");
        assert_eq!(colored.tag(Color::Blue, 'L'), "\x1b[104m \x1b[0m");

        let plain = Palette { colored: false };
        assert_eq!(plain.tag(Color::Yellow, 'T'), "T");
    }
}
