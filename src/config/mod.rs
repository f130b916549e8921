use crate::error::{Result, SenderError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// 국가 코드 형식: `+` 뒤에 1~4자리 숫자
static COUNTRY_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+\d{1,4}$").expect("country code pattern is valid")
});

/// bulkwa 사용자 설정
///
/// 설정 파일은 ~/.bulkwa/config.toml에 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// `+`로 시작하지 않는 번호 앞에 붙일 국가 코드
    #[serde(default = "default_country_code")]
    pub default_country_code: String,

    /// 연락처 번호가 들어있는 컬럼 이름
    #[serde(default = "default_contact_column")]
    pub contact_column: String,

    /// 전송 사이 최소 대기 시간 (초)
    #[serde(default = "default_pacing_interval")]
    pub pacing_interval_secs: u64,

    /// 이미지 전송 시 브라우저 로딩 대기 시간 (초)
    #[serde(default = "default_image_open_delay")]
    pub image_open_delay_secs: u64,

    /// 기본 드라이버 (browser, helper, dry-run)
    #[serde(default = "default_driver")]
    pub default_driver: String,

    /// helper 드라이버가 실행할 외부 프로그램
    #[serde(default = "default_helper_command")]
    pub helper_command: String,

    /// helper 프로그램 1회 실행 제한 시간 (초)
    #[serde(default = "default_helper_timeout")]
    pub helper_timeout_secs: u64,
}

fn default_country_code() -> String {
    "+91".to_string()
}

fn default_contact_column() -> String {
    "WhatsApp".to_string()
}

fn default_pacing_interval() -> u64 {
    15
}

fn default_image_open_delay() -> u64 {
    15
}

fn default_driver() -> String {
    "browser".to_string()
}

fn default_helper_command() -> String {
    "wa-send".to_string()
}

fn default_helper_timeout() -> u64 {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_country_code: default_country_code(),
            contact_column: default_contact_column(),
            pacing_interval_secs: default_pacing_interval(),
            image_open_delay_secs: default_image_open_delay(),
            default_driver: default_driver(),
            helper_command: default_helper_command(),
            helper_timeout_secs: default_helper_timeout(),
        }
    }
}

impl Config {
    /// 설정 디렉토리 경로
    fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bulkwa")
    }

    /// 설정 파일 경로 가져오기
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// 설정 파일에서 로드 (없으면 기본값 사용)
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Self::from_toml(&content)
    }

    /// TOML 문자열 파싱 후 값 검증
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| SenderError::ConfigError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// 설정을 파일에 저장
    pub fn save(&self) -> Result<PathBuf> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_path();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| SenderError::ConfigError(e.to_string()))?;

        fs::write(&config_path, toml_string)?;

        Ok(config_path)
    }

    /// 설정 파일 초기화 (기본값으로)
    pub fn init() -> Result<PathBuf> {
        Self::default().save()
    }

    pub fn validate(&self) -> Result<()> {
        validate_country_code(&self.default_country_code)?;

        if self.contact_column.trim().is_empty() {
            return Err(SenderError::ConfigError(
                "contact_column must not be empty".to_string(),
            ));
        }

        if self.helper_timeout_secs == 0 {
            return Err(SenderError::ConfigError(
                "helper_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn pacing_interval(&self) -> Duration {
        Duration::from_secs(self.pacing_interval_secs)
    }

    pub fn image_open_delay(&self) -> Duration {
        Duration::from_secs(self.image_open_delay_secs)
    }

    pub fn helper_timeout(&self) -> Duration {
        Duration::from_secs(self.helper_timeout_secs)
    }
}

/// 국가 코드 형식 검증 (예: "+91", "+1", "+351")
pub fn validate_country_code(code: &str) -> Result<()> {
    if COUNTRY_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(SenderError::ConfigError(format!(
            "invalid country code '{}' (expected '+' followed by 1-4 digits)",
            code
        )))
    }
}
