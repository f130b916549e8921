use crate::error::{Result, SenderError};
use colored::*;
use dialoguer::{Confirm, Input};
use std::io::IsTerminal;
use std::path::PathBuf;

/// 실행 전 확인용 요약
pub struct RunSummary<'a> {
    pub spreadsheet: &'a str,
    /// 헤더를 제외하고 비어있지 않은 연락처 수
    pub contacts: usize,
    pub payload: String,
    pub driver: &'a str,
    pub pacing_secs: u64,
    pub country_code: &'a str,
}

pub struct ConfirmPrompt;

impl ConfirmPrompt {
    pub fn new() -> Self {
        Self
    }

    pub fn confirm_run(&self, summary: &RunSummary<'_>) -> Result<bool> {
        eprintln!("\n{}", "[>] About to send:".cyan().bold());
        eprintln!("  - Spreadsheet: {}", summary.spreadsheet);
        eprintln!("  - Contacts: {}", summary.contacts);
        eprintln!("  - Payload: {}", summary.payload.yellow());
        eprintln!("  - Driver: {}", summary.driver);
        eprintln!("  - Pause between sends: {}s", summary.pacing_secs);
        eprintln!("  - Default country code: {}", summary.country_code);

        let result = Confirm::new()
            .with_prompt("Start sending?")
            .default(false)
            .interact()
            .map_err(|_| SenderError::UserCancelled)?;

        Ok(result)
    }
}

impl Default for ConfirmPrompt {
    fn default() -> Self {
        Self::new()
    }
}

/// CLI 인자로 빠진 입력값을 대화형으로 받음
pub struct InputCollector {
    interactive: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self {
            interactive: std::io::stdin().is_terminal() && std::io::stderr().is_terminal(),
        }
    }

    #[allow(dead_code)]
    pub fn non_interactive() -> Self {
        Self { interactive: false }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// 스프레드시트 경로. 비대화형이면 `MissingSpreadsheet`
    pub fn spreadsheet(&self, given: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = given.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(path);
        }

        if !self.interactive {
            return Err(SenderError::MissingSpreadsheet(
                "please select a spreadsheet (--file)".to_string(),
            ));
        }

        let input: String = Input::new()
            .with_prompt("Spreadsheet path (.xlsx)")
            .interact_text()
            .map_err(|_| SenderError::UserCancelled)?;

        let input = input.trim();
        if input.is_empty() {
            return Err(SenderError::MissingSpreadsheet(
                "please select a spreadsheet (--file)".to_string(),
            ));
        }

        Ok(PathBuf::from(input))
    }

    /// 메시지와 첨부 파일이 모두 없을 때만 메시지를 물어봄
    pub fn message(&self, given: Option<String>, has_media: bool) -> Result<Option<String>> {
        let given = given.filter(|m| !m.trim().is_empty());
        if given.is_some() || has_media || !self.interactive {
            return Ok(given);
        }

        let input: String = Input::new()
            .with_prompt("Message")
            .allow_empty(true)
            .interact_text()
            .map_err(|_| SenderError::UserCancelled)?;

        Ok(Some(input).filter(|m| !m.trim().is_empty()))
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_interactive_requires_spreadsheet() {
        let collector = InputCollector::non_interactive();
        assert!(matches!(
            collector.spreadsheet(None),
            Err(SenderError::MissingSpreadsheet(_))
        ));
        assert_eq!(
            collector.spreadsheet(Some(PathBuf::from("a.xlsx"))).unwrap(),
            PathBuf::from("a.xlsx")
        );
    }

    #[test]
    fn test_non_interactive_message_passthrough() {
        let collector = InputCollector::non_interactive();
        assert_eq!(collector.message(None, false).unwrap(), None);
        assert_eq!(
            collector.message(Some("hi".to_string()), false).unwrap(),
            Some("hi".to_string())
        );
        assert_eq!(collector.message(Some("  ".to_string()), true).unwrap(), None);
    }
}
