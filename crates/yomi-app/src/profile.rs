use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use yomi_config::Config;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "yomi.json";

/// Load the config at `path`, or `yomi.json` if it exists, else defaults.
/// Environment overrides are applied last in every case.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
    };

    let Some(path) = path else {
        return Ok(Config::new());
    };

    let mut config = read_config(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    config.apply_env();
    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}
