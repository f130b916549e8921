use thiserror::Error;

#[derive(Error, Debug)]
pub enum SenderError {
    #[error("Spreadsheet not found: {0}")]
    MissingSpreadsheet(String),

    #[error("Failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("'{0}' column not found in spreadsheet")]
    MissingColumn(String),

    #[error("Please enter a message or select a media file to send")]
    EmptyPayload,

    #[error("Media file not found: {0}")]
    MediaNotFound(String),

    #[error("Unsupported media file format: {0}")]
    UnsupportedMediaFormat(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Unknown send error: {0}")]
    UnknownSendError(String),

    #[error("Unknown driver: {0}")]
    UnknownDriver(String),

    #[error("Driver '{0}' cannot send media attachments")]
    UnsupportedDriver(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("User cancelled")]
    UserCancelled,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl SenderError {
    /// 전체 실행을 중단시키는 에러인지 여부
    ///
    /// 연락처 단위 에러(잘못된 번호, 미디어 누락, 전송 실패)는 기록만 하고 계속 진행합니다.
    pub fn is_run_fatal(&self) -> bool {
        !matches!(
            self,
            SenderError::MediaNotFound(_)
                | SenderError::UnsupportedMediaFormat(_)
                | SenderError::InvalidNumber(_)
                | SenderError::SendFailed(_)
                | SenderError::UnknownSendError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_fatal_classification() {
        assert!(SenderError::MissingSpreadsheet("a.xlsx".into()).is_run_fatal());
        assert!(SenderError::MissingColumn("WhatsApp".into()).is_run_fatal());
        assert!(SenderError::EmptyPayload.is_run_fatal());

        assert!(!SenderError::MediaNotFound("x.png".into()).is_run_fatal());
        assert!(!SenderError::SendFailed("boom".into()).is_run_fatal());
        assert!(!SenderError::InvalidNumber("abc".into()).is_run_fatal());
    }

    #[test]
    fn test_error_messages() {
        let err = SenderError::MissingColumn("WhatsApp".to_string());
        assert_eq!(err.to_string(), "'WhatsApp' column not found in spreadsheet");
    }
}
