use crate::error::{Result, SenderError};
use std::path::{Path, PathBuf};

/// 첨부 파일 종류 (확장자 기준)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Document,
    Unsupported,
}

impl MediaKind {
    const IMAGE_EXTENSIONS: &'static [&'static str] = &["jpg", "jpeg", "png"];
    const DOCUMENT_EXTENSIONS: &'static [&'static str] = &["pdf", "docx"];

    /// 파일 확장자로 분류 (대소문자 무시)
    pub fn from_path(path: &Path) -> Self {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.to_lowercase(),
            None => return MediaKind::Unsupported,
        };

        if Self::IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Image
        } else if Self::DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Document
        } else {
            MediaKind::Unsupported
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Document => "document",
            MediaKind::Unsupported => "unsupported",
        }
    }
}

/// 첨부 파일 참조
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    pub path: PathBuf,
    pub kind: MediaKind,
}

impl MediaRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = MediaKind::from_path(&path);
        Self { path, kind }
    }

    /// 에러 메시지용 확장자 문자열
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_else(|| "(none)".to_string())
    }
}

/// 모든 연락처에 보낼 내용. 실행 시작 전에 한 번 만들어지고 이후 바뀌지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    text: Option<String>,
    media: Option<MediaRef>,
}

impl Payload {
    /// 텍스트와 첨부 파일 중 최소 하나는 있어야 합니다.
    pub fn new(text: Option<String>, media: Option<PathBuf>) -> Result<Self> {
        let text = text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let media = media
            .filter(|p| !p.as_os_str().is_empty())
            .map(MediaRef::new);

        if text.is_none() && media.is_none() {
            return Err(SenderError::EmptyPayload);
        }

        Ok(Self { text, media })
    }

    #[allow(dead_code)]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn media(&self) -> Option<&MediaRef> {
        self.media.as_ref()
    }

    /// 첨부 파일 캡션 (텍스트가 없으면 빈 문자열)
    pub fn caption(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// 요약 표시용 설명
    pub fn describe(&self) -> String {
        match (&self.text, &self.media) {
            (Some(_), Some(media)) => format!("{} with caption", media.kind.as_str()),
            (None, Some(media)) => media.kind.as_str().to_string(),
            (Some(text), None) => format!("text ({} chars)", text.chars().count()),
            (None, None) => "empty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_classification() {
        assert_eq!(MediaKind::from_path(Path::new("a.jpg")), MediaKind::Image);
        assert_eq!(MediaKind::from_path(Path::new("a.JPEG")), MediaKind::Image);
        assert_eq!(MediaKind::from_path(Path::new("dir/b.Png")), MediaKind::Image);
        assert_eq!(MediaKind::from_path(Path::new("c.pdf")), MediaKind::Document);
        assert_eq!(MediaKind::from_path(Path::new("c.DOCX")), MediaKind::Document);
        assert_eq!(MediaKind::from_path(Path::new("d.gif")), MediaKind::Unsupported);
        assert_eq!(MediaKind::from_path(Path::new("noext")), MediaKind::Unsupported);
    }

    #[test]
    fn test_payload_requires_text_or_media() {
        assert!(matches!(
            Payload::new(None, None),
            Err(SenderError::EmptyPayload)
        ));
        assert!(matches!(
            Payload::new(Some("   \n".to_string()), Some(PathBuf::new())),
            Err(SenderError::EmptyPayload)
        ));
    }

    #[test]
    fn test_payload_trims_text() {
        let payload = Payload::new(Some("  hello \n".to_string()), None).unwrap();
        assert_eq!(payload.text(), Some("hello"));
        assert!(payload.media().is_none());
        assert_eq!(payload.caption(), "hello");
    }

    #[test]
    fn test_media_only_payload_has_empty_caption() {
        let payload = Payload::new(None, Some(PathBuf::from("flyer.PNG"))).unwrap();
        assert_eq!(payload.caption(), "");
        assert_eq!(payload.media().unwrap().kind, MediaKind::Image);
        assert_eq!(payload.media().unwrap().extension(), ".png");
        assert_eq!(payload.describe(), "image");
    }
}
