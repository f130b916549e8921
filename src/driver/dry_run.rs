use crate::driver::MessageDriver;
use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// 실제로 보내지 않고 로그만 남기는 드라이버
pub struct DryRunDriver;

impl DryRunDriver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DryRunDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageDriver for DryRunDriver {
    fn name(&self) -> &str {
        "dry-run"
    }

    async fn check_installation(&self) -> Result<()> {
        Ok(())
    }

    fn supports_media(&self) -> bool {
        true
    }

    fn presses_send(&self) -> bool {
        true
    }

    async fn send_text(&self, phone: &str, body: &str) -> Result<()> {
        info!(%phone, chars = body.chars().count(), "[dry-run] would send text");
        Ok(())
    }

    async fn send_image(
        &self,
        phone: &str,
        path: &Path,
        caption: &str,
        open_delay: Duration,
    ) -> Result<()> {
        info!(
            %phone,
            path = %path.display(),
            caption_chars = caption.chars().count(),
            open_delay_secs = open_delay.as_secs(),
            "[dry-run] would send image"
        );
        Ok(())
    }

    async fn send_document(&self, phone: &str, path: &Path, caption: &str) -> Result<()> {
        info!(
            %phone,
            path = %path.display(),
            caption_chars = caption.chars().count(),
            "[dry-run] would send document"
        );
        Ok(())
    }
}
