use crate::utils::error::{Result, SdkError};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const KEY_API_URL: &str = "api_url";
pub const KEY_VERSION: &str = "version";
pub const KEY_USERNAME: &str = "username";
pub const KEY_PASSWORD: &str = "password";
pub const KEY_TIMEOUT: &str = "timeout_seconds";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SdkConfig {
    pub api: ApiConfig,
    pub credentials: CredentialsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    pub url: String,
    pub version: u32,
    pub timeout_seconds: Option<u64>,
}

#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct CredentialsConfig {
    pub username: String,
    pub password: String,
}

// 避免密碼出現在 log 中
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl SdkConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SdkError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SdkError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PAYSDK_PASSWORD})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SdkError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 從 key/value 載入，四個必要欄位缺一不可
    pub fn from_map(values: &HashMap<String, String>) -> Result<Self> {
        let required = |key: &str| {
            values
                .get(key)
                .cloned()
                .ok_or_else(|| SdkError::MissingConfigError {
                    field: key.to_string(),
                })
        };

        let mut config = Self {
            api: ApiConfig {
                url: required(KEY_API_URL)?,
                version: 0,
                timeout_seconds: None,
            },
            credentials: CredentialsConfig {
                username: required(KEY_USERNAME)?,
                password: required(KEY_PASSWORD)?,
            },
        };
        config.set(KEY_VERSION, required(KEY_VERSION)?)?;
        if let Some(timeout) = values.get(KEY_TIMEOUT) {
            config.set(KEY_TIMEOUT, timeout.clone())?;
        }

        Ok(config)
    }

    /// 依 key 取值；未知的 key 回傳 `None`
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_API_URL => Some(self.api.url.clone()),
            KEY_VERSION => Some(self.api.version.to_string()),
            KEY_USERNAME => Some(self.credentials.username.clone()),
            KEY_PASSWORD => Some(self.credentials.password.clone()),
            KEY_TIMEOUT => self.api.timeout_seconds.map(|t| t.to_string()),
            _ => None,
        }
    }

    /// 依 key 設定值；未知的 key 直接忽略並回傳 `false`
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<bool> {
        let value = value.into();
        match key {
            KEY_API_URL => self.api.url = value,
            KEY_VERSION => self.api.version = parse_number(key, &value)?,
            KEY_USERNAME => self.credentials.username = value,
            KEY_PASSWORD => self.credentials.password = value,
            KEY_TIMEOUT => self.api.timeout_seconds = Some(parse_number(key, &value)?),
            _ => {
                tracing::debug!(key, "Ignoring unknown configuration key");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// 完整的 API 基底網址，例如 `https://rest.example.com/v1/`
    pub fn base_url(&self) -> String {
        format!("{}/v{}/", self.api.url.trim_end_matches('/'), self.api.version)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("api.url", &self.api.url)?;
        validate_range("api.version", self.api.version, 1, 99)?;
        if let Some(timeout) = self.api.timeout_seconds {
            validate_range("api.timeout_seconds", timeout, 1, 300)?;
        }
        validate_non_empty_string("credentials.username", &self.credentials.username)?;
        validate_non_empty_string("credentials.password", &self.credentials.password)?;
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| SdkError::InvalidConfigValueError {
            field: key.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

impl Validate for SdkConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
