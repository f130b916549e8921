pub mod browser;
pub mod dry_run;
pub mod factory;
pub mod helper;

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

pub use factory::DriverFactory;

/// Message delivery backend (the browser automation collaborator).
///
/// Each operation either completes or returns an error; there is no delivery receipt.
#[async_trait]
pub trait MessageDriver: Send + Sync {
    /// Driver name (e.g., "browser", "helper", "dry-run")
    fn name(&self) -> &str;

    /// Check that whatever the driver needs is available on this system
    async fn check_installation(&self) -> Result<()>;

    /// Whether image/document attachments can be sent
    fn supports_media(&self) -> bool;

    /// Whether a successful call means the message was actually sent.
    /// `false` when the driver only opens the chat with the message prefilled.
    fn presses_send(&self) -> bool;

    async fn send_text(&self, phone: &str, body: &str) -> Result<()>;

    async fn send_image(
        &self,
        phone: &str,
        path: &Path,
        caption: &str,
        open_delay: Duration,
    ) -> Result<()>;

    async fn send_document(&self, phone: &str, path: &Path, caption: &str) -> Result<()>;
}
