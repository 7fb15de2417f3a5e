use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use wordcheck_config::Config;

/// Load a JSON profile if one is given, otherwise start from defaults.
/// Environment variables override either.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    tracing::info!("Loading config profile {}", path.display());
    let file =
        File::open(path).with_context(|| format!("failed to open config {}", path.display()))?;
    let mut config: Config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    config.apply_env();

    Ok(config)
}
