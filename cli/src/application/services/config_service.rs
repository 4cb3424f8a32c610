//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::HdiutilConfig;

/// Load configuration.
///
/// # Errors
///
/// Returns an error if the store cannot read its file.
pub fn load_config(store: &impl ConfigStore) -> Result<HdiutilConfig> {
    store.load()
}

/// Save configuration.
///
/// # Errors
///
/// Returns an error if the store cannot write its file.
pub fn save_config(store: &impl ConfigStore, config: &HdiutilConfig) -> Result<()> {
    store.save(config)
}

/// Validate and persist a single `key = value` setting, returning the
/// updated configuration.
///
/// # Errors
///
/// Returns an error if the key or value is invalid or the store fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<HdiutilConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    Ok(config)
}
