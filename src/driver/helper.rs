use crate::driver::MessageDriver;
use crate::error::{Result, SenderError};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// 외부 자동화 프로그램에 전송을 위임하는 드라이버
///
/// 호출 형식:
/// - `<cmd> text <phone> <body>`
/// - `<cmd> image <phone> <path> <caption> <open_delay_secs>`
/// - `<cmd> document <phone> <path> <caption>`
///
/// 종료 코드 0이면 성공, 그 외에는 stderr 내용을 실패 사유로 사용합니다.
pub struct HelperDriver {
    program: String,
    timeout: Duration,
}

impl HelperDriver {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    async fn invoke(&self, args: Vec<OsString>) -> Result<()> {
        debug!(program = %self.program, ?args, "invoking helper");

        let output = Command::new(&self.program)
            .args(&args)
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, output)
            .await
            .map_err(|_| {
                SenderError::SendFailed(format!(
                    "{} timed out after {}s",
                    self.program,
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| SenderError::SendFailed(format!("failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                stderr
            };
            return Err(SenderError::SendFailed(reason));
        }

        Ok(())
    }
}

#[async_trait]
impl MessageDriver for HelperDriver {
    fn name(&self) -> &str {
        "helper"
    }

    async fn check_installation(&self) -> Result<()> {
        // 경로로 지정된 경우 파일 존재만 확인
        if Path::new(&self.program).components().count() > 1 {
            return if Path::new(&self.program).is_file() {
                Ok(())
            } else {
                Err(SenderError::ConfigError(format!(
                    "helper program not found: {}",
                    self.program
                )))
            };
        }

        let found = Command::new("which")
            .arg(&self.program)
            .output()
            .await
            .map(|o| o.status.success())
            .unwrap_or(false);

        if found {
            Ok(())
        } else {
            Err(SenderError::ConfigError(format!(
                "helper program '{}' is not installed or not on PATH\n\
                 Set helper_command in {}",
                self.program,
                crate::config::Config::config_path().display()
            )))
        }
    }

    fn supports_media(&self) -> bool {
        true
    }

    fn presses_send(&self) -> bool {
        true
    }

    async fn send_text(&self, phone: &str, body: &str) -> Result<()> {
        self.invoke(vec!["text".into(), phone.into(), body.into()])
            .await
    }

    async fn send_image(
        &self,
        phone: &str,
        path: &Path,
        caption: &str,
        open_delay: Duration,
    ) -> Result<()> {
        self.invoke(vec![
            "image".into(),
            phone.into(),
            path.as_os_str().to_owned(),
            caption.into(),
            open_delay.as_secs().to_string().into(),
        ])
        .await
    }

    async fn send_document(&self, phone: &str, path: &Path, caption: &str) -> Result<()> {
        self.invoke(vec![
            "document".into(),
            phone.into(),
            path.as_os_str().to_owned(),
            caption.into(),
        ])
        .await
    }
}
