use crate::error::{Result, TrustError};
use crate::types::config::TrustConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "trustscope.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/trustscope/config.toml";

/// Loads the layered config: global file, then `explicit` (or
/// `trustscope.toml` in the working directory). Missing files fall back to
/// defaults; an explicitly named file must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<TrustConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let project = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(TrustError::PathNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };
    load_config_with_global(&project, global.as_deref())
}

pub(crate) fn load_config_with_global(
    project_path: &Path,
    global_path: Option<&Path>,
) -> Result<TrustConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, project_path)?;

    let cfg: TrustConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| TrustError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| TrustError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
