use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tanka_config::Config;

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Resolve the config: an explicit file wins, then the named profile,
/// then `main`, then environment defaults
pub fn load_config(explicit: Option<&Path>, profile: &str) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&data)
            .with_context(|| format!("invalid config {}", path.display()))?;
        return Ok(config);
    }

    let defaults = Config::new();
    let dir = defaults.storage.profiles_dir();
    Ok(load_profile_from(&dir, profile)?.unwrap_or(defaults))
}

/// Load a profile by name from `dir`, falling back to `main`
pub fn load_profile_from(dir: &Path, name: &str) -> anyhow::Result<Option<Config>> {
    let profile_file = profile_path(dir, name);

    if profile_file.exists() {
        return read_profile(&profile_file).map(Some);
    }

    let main_file = profile_path(dir, "main");
    if main_file.exists() {
        if name != "main" {
            tracing::warn!("Profile {name} not found, falling back to main profile");
        }
        return read_profile(&main_file).map(Some);
    }

    tracing::debug!("No profiles in {}, using defaults", dir.display());
    Ok(None)
}

/// Write `config` as a named profile, creating the directory if needed
pub fn save_profile(dir: &Path, name: &str, config: &Config) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let profile = Profile {
        name: name.into(),
        value: config.clone(),
    };
    let file = profile_path(dir, name);
    fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Saved profile: {name}");
    Ok(file)
}

fn profile_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.json"))
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("invalid profile {}", path.display()))?;
    Ok(profile.value)
}
