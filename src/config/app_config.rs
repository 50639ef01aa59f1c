use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid TOML: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub db_path: Option<String>,
    pub clipboard_ttl: Option<u64>,
    pub allow_duplicate_services: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub clipboard_ttl: Option<u64>,
    pub allow_duplicate_services: bool,
}

impl Config {
    pub fn create(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // 1) Load config file if present
        let (_, file_cfg) = load_file_config_with_path()?;

        // 2) Database path precedence: cli > env > config file > default
        let db_path = resolve_db_path(path, &file_cfg);

        // 3) Clipboard TTL: env > config file > None (use command default)
        let clipboard_ttl = env::var("PASSDESK_CLIP_TTL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .or(file_cfg.clipboard_ttl);

        // 4) Duplicate service names: env > config file > rejected
        let allow_duplicate_services = env::var("PASSDESK_ALLOW_DUPLICATES")
            .ok()
            .and_then(|s| s.parse::<bool>().ok())
            .or(file_cfg.allow_duplicate_services)
            .unwrap_or(false);

        Ok(Config {
            db_path,
            clipboard_ttl,
            allow_duplicate_services,
        })
    }
}

fn resolve_db_path(cli_path: Option<PathBuf>, file_cfg: &FileConfig) -> PathBuf {
    if let Some(p) = cli_path {
        return p;
    }
    if let Ok(p) = env::var("PASSDESK_DB_PATH") {
        return PathBuf::from(p);
    }
    if let Some(p) = file_cfg.db_path.as_ref() {
        return PathBuf::from(p);
    }
    default_db_path()
}

pub fn config_file_path() -> PathBuf {
    // PASSDESK_CONFIG_DIR keeps tests away from the real config dir
    let cfg_dir = if let Ok(p) = env::var("PASSDESK_CONFIG_DIR") {
        PathBuf::from(p)
    } else {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    };
    cfg_dir.join("passdesk").join("config.toml")
}

/// A missing file yields defaults; an unreadable or malformed one is an error.
pub fn load_file_config_with_path() -> Result<(PathBuf, FileConfig), ConfigError> {
    let path = config_file_path();
    if !path.exists() {
        return Ok((path, FileConfig::default()));
    }
    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let cfg = toml::from_str::<FileConfig>(&content).map_err(|source| ConfigError::Malformed {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok((path, cfg))
}

fn default_db_path() -> PathBuf {
    // PASSDESK_DATA_DIR > platform data_dir > ~/.passdesk/passwords.db
    if let Ok(base) = env::var("PASSDESK_DATA_DIR") {
        return PathBuf::from(base).join("passdesk").join("passwords.db");
    }
    if let Some(mut p) = dirs::data_dir() {
        p.push("passdesk");
        p.push("passwords.db");
        return p;
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(&home).join(".passdesk").join("passwords.db")
}
