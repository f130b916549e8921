use crate::driver::MessageDriver;
use crate::error::{Result, SenderError};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

const WHATSAPP_WEB_SEND_URL: &str = "https://web.whatsapp.com/send";

/// 시스템 브라우저로 WhatsApp Web 채팅을 열고 메시지를 미리 채워 넣는 드라이버
///
/// 첨부 파일은 보낼 수 없습니다.
pub struct BrowserDriver;

impl BrowserDriver {
    pub fn new() -> Self {
        Self
    }

    /// 전송 URL 생성 (`+` 없이 숫자만 사용)
    pub fn send_url(phone: &str, body: &str) -> String {
        let digits = phone.trim_start_matches('+');
        format!(
            "{}?phone={}&text={}",
            WHATSAPP_WEB_SEND_URL,
            digits,
            urlencoding::encode(body)
        )
    }

    fn media_unsupported(&self) -> SenderError {
        SenderError::SendFailed(
            "browser driver cannot attach files; use the helper driver for media".to_string(),
        )
    }
}

impl Default for BrowserDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageDriver for BrowserDriver {
    fn name(&self) -> &str {
        "browser"
    }

    async fn check_installation(&self) -> Result<()> {
        Ok(())
    }

    fn supports_media(&self) -> bool {
        false
    }

    fn presses_send(&self) -> bool {
        false
    }

    async fn send_text(&self, phone: &str, body: &str) -> Result<()> {
        let url = Self::send_url(phone, body);
        debug!(%phone, %url, "opening chat in browser");

        // open::that은 블로킹 호출
        tokio::task::spawn_blocking(move || open::that(url))
            .await
            .map_err(|e| SenderError::UnknownSendError(e.to_string()))?
            .map_err(|e| SenderError::SendFailed(format!("failed to open browser: {}", e)))
    }

    async fn send_image(
        &self,
        _phone: &str,
        _path: &Path,
        _caption: &str,
        _open_delay: Duration,
    ) -> Result<()> {
        Err(self.media_unsupported())
    }

    async fn send_document(&self, _phone: &str, _path: &Path, _caption: &str) -> Result<()> {
        Err(self.media_unsupported())
    }
}
