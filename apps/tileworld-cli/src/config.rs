use std::path::Path;

use anyhow::Context;
use tileworld_kernel::GeneratorConfig;

/// Load generator settings from a YAML file, or the defaults when no path
/// is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = GeneratorConfig::from_yaml_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), octaves = config.octaves.len(), "config loaded");
    Ok(config)
}
