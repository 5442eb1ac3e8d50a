use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use xinjie_config::Config;

/// Config from a JSON file when given, otherwise from the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path)
        .with_context(|| format!("failed to open config file {}", path.display()))?;
    let config: Config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("invalid config file {}", path.display()))?;

    Ok(config.with_env_credentials())
}
