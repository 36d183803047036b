use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional `chatlog.toml` settings; CLI flags take precedence over these.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatlogConfig {
    pub database: Option<String>,
    pub port: Option<u16>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("chatlog.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("messages.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<ChatlogConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: ChatlogConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
