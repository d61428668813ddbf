//! Configuration file loading.

use std::path::Path;

use anyhow::Context;

use ps_core::ClientConfig;

/// Load the client configuration from a TOML file.
///
/// A missing file is not an error: the defaults cover the standard local
/// daemon setup.
pub fn load_client_config(path: &Path) -> anyhow::Result<ClientConfig> {
    if !path.exists() {
        return Ok(ClientConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("unable to read config file {}", path.display()))?;

    let value: toml::Value = raw
        .parse()
        .with_context(|| format!("invalid TOML in {}", path.display()))?;

    ClientConfig::from_toml(&value)
}
