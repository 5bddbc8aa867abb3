use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::category::Category;
use crate::conversion::TemperatureMode;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub const DEFAULT_HEADER_ANIMATION_URL: &str =
    "https://assets1.lottiefiles.com/packages/lf20_5tkzkblw.json";
pub const DEFAULT_CONVERSION_ANIMATION_URL: &str =
    "https://assets1.lottiefiles.com/packages/lf20_1pxqjqps.json";

/// 장식용 애니메이션 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enabled: bool,
    pub header_url: String,
    pub conversion_url: String,
    pub timeout_secs: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            header_url: DEFAULT_HEADER_ANIMATION_URL.to_string(),
            conversion_url: DEFAULT_CONVERSION_ANIMATION_URL.to_string(),
            timeout_secs: 5,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// auto / ko / en
    pub language: String,
    /// tracing 필터 문자열(info, debug, universal_converter=trace 등)
    pub log_level: String,
    pub temperature_mode: TemperatureMode,
    pub default_category: Category,
    pub animation: AnimationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            log_level: "info".to_string(),
            temperature_mode: TemperatureMode::Normalized,
            default_category: Category::Length,
            animation: AnimationConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(DEFAULT_CONFIG_PATH)
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본 설정을 그 경로에 저장한다.
pub fn load_or_default_at(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        info!(path = %path.display(), "기본 설정 파일 생성");
        Ok(cfg)
    }
}

impl Config {
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = load_or_default_at(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config {
            language: "ko".into(),
            temperature_mode: TemperatureMode::Raw,
            default_category: Category::Temperature,
            animation: AnimationConfig {
                enabled: false,
                ..AnimationConfig::default()
            },
            ..Config::default()
        };
        cfg.save_to(&path).unwrap();
        assert_eq!(load_or_default_at(&path).unwrap(), cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "temperature_mode = \"raw\"\n[animation]\ntimeout_secs = 2\n").unwrap();
        let cfg = load_or_default_at(&path).unwrap();
        assert_eq!(cfg.temperature_mode, TemperatureMode::Raw);
        assert_eq!(cfg.animation.timeout_secs, 2);
        assert!(cfg.animation.enabled);
        assert_eq!(cfg.default_category, Category::Length);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_category = \"speed\"\n").unwrap();
        assert!(matches!(
            load_or_default_at(&path),
            Err(ConfigError::Parse(_))
        ));
    }
}
