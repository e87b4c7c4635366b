use clap::Parser;
use std::path::PathBuf;
use tasklist_core::config::ConfigOverrides;

pub mod session;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive console task list", long_about = None)]
pub struct Cli {
    /// Task store file (defaults to $TASKLIST_STORE_PATH, then ./tasklist.json)
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Print priority and urgency as letters instead of colored cells
    #[arg(long)]
    pub no_color: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Override configuration values (format KEY=VALUE)
    #[arg(long = "config-override", value_name = "KEY=VALUE")]
    pub config_override: Vec<String>,
}

impl Cli {
    /// Folds `--config-override` and `--no-color` into one override set.
    pub fn overrides(&self) -> Result<ConfigOverrides, String> {
        let mut overrides = ConfigOverrides::default();
        for raw in &self.config_override {
            let parsed = parse_config_override(raw)?;
            match parsed {
                ParsedConfigOverride::UtcOffsetHours(hours) => {
                    overrides.utc_offset_hours = Some(hours)
                }
                ParsedConfigOverride::Color(color) => overrides.color = Some(color),
            }
        }
        if self.no_color {
            overrides.color = Some(false);
        }
        Ok(overrides)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedConfigOverride {
    UtcOffsetHours(i8),
    Color(bool),
}

/// Parse a raw `KEY=VALUE` override string into a typed value.
pub fn parse_config_override(raw: &str) -> Result<ParsedConfigOverride, String> {
    let trimmed = raw.trim();
    let (key_raw, value_raw) = trimmed
        .split_once('=')
        .ok_or_else(|| "override must be in KEY=VALUE format".to_string())?;

    let value = value_raw.trim();
    let canonical_field =
        canonicalize_flag_name(key_raw).ok_or_else(|| "override key cannot be empty".to_string())?;

    match canonical_field.as_str() {
        "utc_offset" | "utc_offset_hours" => value
            .parse::<i8>()
            .ok()
            .filter(|hours| (-25..=25).contains(hours))
            .map(ParsedConfigOverride::UtcOffsetHours)
            .ok_or_else(|| format!("utc_offset must be a whole number of hours, got '{value}'")),
        "color" | "colour" => match value.to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(ParsedConfigOverride::Color(true)),
            "false" | "off" | "no" | "0" => Ok(ParsedConfigOverride::Color(false)),
            _ => Err(format!("color must be true or false, got '{value}'")),
        },
        other => Err(format!("unknown config field '{other}'")),
    }
}

fn canonicalize_flag_name(name: &str) -> Option<String> {
    let mut cleaned = String::new();
    let mut previous_underscore = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            cleaned.push(ch.to_ascii_lowercase());
            previous_underscore = false;
        } else if !previous_underscore && !cleaned.is_empty() {
            cleaned.push('_');
            previous_underscore = true;
        }
    }

    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
