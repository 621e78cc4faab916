use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use walink_core::phone::{DEFAULT_COUNTRY_CODE, DEFAULT_LOCAL_DIGITS};
use walink_core::{validate_link_host, DefaultCountryCode, DEFAULT_LINK_HOST};
pub use walink_launch::DEFAULT_HANDLER;

const APP_DIR: &str = "walink";
const CONFIG_FILENAME: &str = "config.toml";

pub const MIN_LOCAL_DIGITS: usize = 4;
pub const MAX_LOCAL_DIGITS: usize = 15;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub phone: PhoneConfig,
    pub link: LinkConfig,
    pub launch: LaunchConfig,
}

#[derive(Debug, Clone)]
pub struct PhoneConfig {
    /// `None` when the regional default is switched off.
    pub default_country_code: Option<DefaultCountryCode>,
}

#[derive(Debug, Clone)]
pub struct LinkConfig {
    pub host: String,
}

#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub handler: String,
    pub fallback: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            phone: PhoneConfig {
                default_country_code: Some(DefaultCountryCode::default()),
            },
            link: LinkConfig {
                host: DEFAULT_LINK_HOST.to_string(),
            },
            launch: LaunchConfig {
                handler: DEFAULT_HANDLER.to_string(),
                fallback: true,
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
    #[error("invalid phone.default_country_code value: {0}")]
    InvalidCountryCode(String),
    #[error("invalid phone.local_digits value: {0}")]
    InvalidLocalDigits(i64),
    #[error("invalid link.host value: {0}")]
    InvalidLinkHost(String),
    #[error("invalid launch.handler value: {0}")]
    InvalidHandler(String),
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

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    phone: Option<PhoneFile>,
    link: Option<LinkFile>,
    launch: Option<LaunchFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PhoneFile {
    default_country_code: Option<String>,
    local_digits: Option<i64>,
    apply_default: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LinkFile {
    host: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LaunchFile {
    handler: Option<String>,
    fallback: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
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

    if let Some(phone) = parsed.phone {
        config.phone = merge_phone(phone)?;
    }

    if let Some(host) = parsed.link.and_then(|link| link.host) {
        config.link.host =
            validate_link_host(&host).map_err(|_| ConfigError::InvalidLinkHost(host.clone()))?;
    }

    if let Some(launch) = parsed.launch {
        if let Some(handler) = launch.handler {
            let trimmed = handler.trim();
            if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidHandler(handler));
            }
            config.launch.handler = trimmed.to_string();
        }
        if let Some(fallback) = launch.fallback {
            config.launch.fallback = fallback;
        }
    }

    Ok(config)
}

fn merge_phone(phone: PhoneFile) -> Result<PhoneConfig> {
    let local_digits = match phone.local_digits {
        Some(value) => usize::try_from(value)
            .ok()
            .filter(|digits| (MIN_LOCAL_DIGITS..=MAX_LOCAL_DIGITS).contains(digits))
            .ok_or(ConfigError::InvalidLocalDigits(value))?,
        None => DEFAULT_LOCAL_DIGITS,
    };
    let code = phone
        .default_country_code
        .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string());
    let default = DefaultCountryCode::new(&code, local_digits)
        .map_err(|_| ConfigError::InvalidCountryCode(code.clone()))?;

    let apply = phone.apply_default.unwrap_or(true);
    Ok(PhoneConfig {
        default_country_code: apply.then_some(default),
    })
}

#[cfg(test)]
mod tests {
    use super::{
        load_at_path, merge_config, resolve_config_path, AppConfig, ConfigError, ConfigFile,
        LaunchFile, LinkFile, PhoneFile, DEFAULT_HANDLER,
    };
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn defaults_use_regional_country_code() {
        let config = AppConfig::default();
        let default = config.phone.default_country_code.expect("default code");
        assert_eq!(default.code(), "91");
        assert_eq!(default.local_digits(), 10);
        assert_eq!(config.link.host, "wa.me");
        assert_eq!(config.launch.handler, DEFAULT_HANDLER);
        assert!(config.launch.fallback);
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            phone: Some(PhoneFile {
                default_country_code: Some("+1".to_string()),
                local_digits: Some(10),
                apply_default: None,
            }),
            link: Some(LinkFile {
                host: Some("API.WhatsApp.com".to_string()),
            }),
            launch: Some(LaunchFile {
                handler: Some(" com.whatsapp.w4b ".to_string()),
                fallback: Some(false),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        let default = merged.phone.default_country_code.expect("default code");
        assert_eq!(default.code(), "1");
        assert_eq!(merged.link.host, "api.whatsapp.com");
        assert_eq!(merged.launch.handler, "com.whatsapp.w4b");
        assert!(!merged.launch.fallback);
    }

    #[test]
    fn merge_config_can_disable_country_code_default() {
        let parsed = ConfigFile {
            phone: Some(PhoneFile {
                apply_default: Some(false),
                ..PhoneFile::default()
            }),
            ..ConfigFile::default()
        };
        let merged = merge_config(parsed).expect("merge");
        assert!(merged.phone.default_country_code.is_none());
    }

    #[test]
    fn merge_config_rejects_invalid_values() {
        let parsed = ConfigFile {
            phone: Some(PhoneFile {
                default_country_code: Some("12a".to_string()),
                ..PhoneFile::default()
            }),
            ..ConfigFile::default()
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::InvalidCountryCode(_))
        ));

        let parsed = ConfigFile {
            phone: Some(PhoneFile {
                local_digits: Some(0),
                ..PhoneFile::default()
            }),
            ..ConfigFile::default()
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::InvalidLocalDigits(0))
        ));

        let parsed = ConfigFile {
            link: Some(LinkFile {
                host: Some("https://wa.me".to_string()),
            }),
            ..ConfigFile::default()
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::InvalidLinkHost(_))
        ));

        let parsed = ConfigFile {
            launch: Some(LaunchFile {
                handler: Some("   ".to_string()),
                fallback: None,
            }),
            ..ConfigFile::default()
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::InvalidHandler(_))
        ));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_skips_missing_optional_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[phone]\ndefault_country_code = \"44\"\nlocal_digits = 10\n[launch]\nfallback = false\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        let default = config.phone.default_country_code.expect("default code");
        assert_eq!(default.code(), "44");
        assert!(!config.launch.fallback);
        assert_eq!(config.link.host, "wa.me");
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[link]\nhost = \"wa.me\"\nscheme = \"http\"\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn resolve_config_path_rejects_empty_custom_path() {
        let err = resolve_config_path(Some(PathBuf::new())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfigPath(_)));
    }
}
