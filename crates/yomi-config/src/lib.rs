use std::env;

use serde::{Deserialize, Serialize};

use self::conjugation::ConjugationConfig;
use self::logging::LoggingConfig;

pub mod conjugation;
pub mod logging;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub conjugation: ConjugationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Apply `YOMI_*` environment overrides on top of the current values
    pub fn apply_env(&mut self) {
        if let Ok(filter) = env::var("YOMI_LOG") {
            self.logging.filter = filter;
        }

        if let Some(json) = env::var("YOMI_LOG_JSON").ok().and_then(|v| parse_flag(&v)) {
            self.logging.json = json;
        }

        if let Ok(paths) = env::var("YOMI_TABLES") {
            self.conjugation.table_paths = split_paths(&paths);
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn split_paths(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
