use crate::driver::MessageDriver;
use crate::error::{Result, SenderError};
use crate::message::{MediaKind, Payload};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// 실제로 사용된 전송 경로
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Text,
    Image,
    Document,
    /// 채팅만 열고 메시지를 채워 둠. 전송은 사용자가 직접 눌러야 함
    Prefilled,
}

/// 번호 하나에 대해 텍스트/이미지/문서 중 하나를 골라 드라이버에 위임
pub struct MessageDispatcher {
    driver: Arc<dyn MessageDriver>,
    image_open_delay: Duration,
}

impl MessageDispatcher {
    pub fn new(driver: Arc<dyn MessageDriver>, image_open_delay: Duration) -> Self {
        Self {
            driver,
            image_open_delay,
        }
    }

    /// 전송 1회 시도
    ///
    /// 미디어 파일 확인과 형식 분류는 드라이버 호출 전에 이루어집니다.
    /// 드라이버 에러는 `SendFailed` 또는 `UnknownSendError`로 변환됩니다.
    pub async fn dispatch(&self, phone: &str, payload: &Payload) -> Result<Delivery> {
        let (delivery, result) = match payload.media() {
            Some(media) => {
                if !media.path.exists() {
                    warn!(%phone, path = %media.path.display(), "media file not found");
                    return Err(SenderError::MediaNotFound(media.path.display().to_string()));
                }

                match media.kind {
                    MediaKind::Image => {
                        info!(%phone, "sending image");
                        let result = self
                            .driver
                            .send_image(phone, &media.path, payload.caption(), self.image_open_delay)
                            .await;
                        (Delivery::Image, result)
                    }
                    MediaKind::Document => {
                        info!(%phone, "sending document");
                        let result = self
                            .driver
                            .send_document(phone, &media.path, payload.caption())
                            .await;
                        (Delivery::Document, result)
                    }
                    MediaKind::Unsupported => {
                        warn!(%phone, extension = %media.extension(), "unsupported media file format");
                        return Err(SenderError::UnsupportedMediaFormat(media.extension()));
                    }
                }
            }
            None => {
                info!(%phone, "sending message");
                let result = self.driver.send_text(phone, payload.caption()).await;
                (Delivery::Text, result)
            }
        };

        let delivery = if self.driver.presses_send() {
            delivery
        } else {
            Delivery::Prefilled
        };

        result.map(|_| delivery).map_err(|e| {
            warn!(%phone, error = %e, "failed to send message");
            if e.is_run_fatal() {
                SenderError::UnknownSendError(e.to_string())
            } else {
                e
            }
        })
    }
}

/// 드라이버까지 도달한 뒤 발생한 에러인지 여부
pub fn reached_driver(err: &SenderError) -> bool {
    !matches!(
        err,
        SenderError::MediaNotFound(_) | SenderError::UnsupportedMediaFormat(_)
    )
}
