use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use lettre::message::Mailbox;
use macfield_core::domain::field::{validate_meta_key, FieldPlacement, MacField};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "macfield";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_EMAIL_FROM: &str = "Orders <orders@example.com>";
pub const DEFAULT_EMAIL_SUBJECT: &str = "Order confirmation";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub field: MacField,
    pub email: EmailConfig,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub from: String,
    pub subject: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            field: MacField::default(),
            email: EmailConfig {
                from: DEFAULT_EMAIL_FROM.to_string(),
                subject: DEFAULT_EMAIL_SUBJECT.to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid field label")]
    InvalidFieldLabel,
    #[error("invalid meta_key value: {0}")]
    InvalidMetaKey(String),
    #[error("invalid email from address: {0}")]
    InvalidFromAddress(String),
    #[error("invalid email subject")]
    EmptyEmailSubject,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    field: Option<FieldFile>,
    email: Option<EmailFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldFile {
    placement: Option<FieldPlacement>,
    meta_key: Option<String>,
    label: Option<String>,
    placeholder: Option<String>,
    required: Option<bool>,
    priority: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EmailFile {
    from: Option<String>,
    subject: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(field) = parsed.field {
        if let Some(placement) = field.placement {
            config.field.placement = placement;
        }
        if let Some(meta_key) = field.meta_key {
            validate_meta_key(&meta_key).map_err(|_| ConfigError::InvalidMetaKey(meta_key.clone()))?;
            config.field.meta_key = meta_key;
        }
        if let Some(label) = field.label {
            if label.trim().is_empty() {
                return Err(ConfigError::InvalidFieldLabel);
            }
            config.field.label = label;
        }
        if let Some(placeholder) = field.placeholder {
            config.field.placeholder = placeholder;
        }
        if let Some(required) = field.required {
            config.field.required = required;
        }
        if let Some(priority) = field.priority {
            config.field.priority = priority;
        }
    }

    if let Some(email) = parsed.email {
        if let Some(from) = email.from {
            from.parse::<Mailbox>()
                .map_err(|_| ConfigError::InvalidFromAddress(from.clone()))?;
            config.email.from = from;
        }
        if let Some(subject) = email.subject {
            if subject.trim().is_empty() {
                return Err(ConfigError::EmptyEmailSubject);
            }
            config.email.subject = subject;
        }
    }

    Ok(config)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
