use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const CONFIG_DIR: &str = "dsync";
const CONFIG_FILE: &str = "config.toml";

/// Candidate configuration file locations, in search order:
/// `$XDG_CONFIG_HOME/dsync/config.toml` (when the variable is set and
/// non-empty), then `~/.config/dsync/config.toml`.
pub fn config_search_paths() -> Result<Vec<PathBuf>> {
    let home = home_dir()?;
    Ok(search_paths_from(xdg_config_home().as_deref(), &home))
}

/// The preferred config path for writing (`dsync init`). Discovery for
/// reading should use `find_config_file`.
pub fn config_file_path() -> Result<PathBuf> {
    if let Some(xdg) = xdg_config_home() {
        return Ok(xdg.join(CONFIG_DIR).join(CONFIG_FILE));
    }
    Ok(home_dir()?.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Select the first search candidate that exists as a regular file. When
/// none does, the error lists every searched path.
pub fn find_config_file() -> Result<PathBuf> {
    let searched = config_search_paths()?;
    for path in &searched {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => return Ok(path.clone()),
            Ok(_) => continue,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
            Err(err) => return Err(Error::Io(err)),
        }
    }
    Err(Error::NotFound { searched })
}

/// Pure search-order helper over injected environment values.
fn search_paths_from(xdg_config_home: Option<&Path>, home: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(xdg) = xdg_config_home {
        paths.push(xdg.join(CONFIG_DIR).join(CONFIG_FILE));
    }

    let fallback = home.join(".config").join(CONFIG_DIR).join(CONFIG_FILE);
    if !paths.contains(&fallback) {
        paths.push(fallback);
    }
    paths
}

fn xdg_config_home() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(Error::Home)
}
