use crate::error::{ReadinessError, Result};
use crate::types::config::ReadinessConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "readiness.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".readiness/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/readiness/config.toml";

/// Loads `readiness.toml` from `root`, or `explicit` when given, layered over
/// the user's global config and under `.readiness/local.toml`. Returns `None`
/// when there is no project config at all.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<ReadinessConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<Option<ReadinessConfig>> {
    let project_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ReadinessError::PathNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => root.join(DEFAULT_CONFIG_FILE),
    };
    if !project_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &project_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: ReadinessConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ReadinessError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ReadinessError::ConfigParse(format!("{}: {}", path.display(), e)))
}

// Tables merge key by key; anything else, arrays included, is replaced.
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
