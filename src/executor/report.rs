use chrono::{DateTime, Utc};
use serde::Serialize;

/// 연락처 하나에 대한 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum SendResult {
    Sent,
    /// 브라우저에 메시지를 채운 채팅을 열었지만 전송되지는 않음
    Opened,
    SkippedInvalidNumber,
    Failed(String),
}

impl SendResult {
    pub fn is_sent(&self) -> bool {
        matches!(self, SendResult::Sent)
    }
}

/// 행 단위 결과 기록
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactOutcome {
    /// 스프레드시트 행 번호
    pub row: usize,
    /// 셀 원본 값
    pub raw: String,
    /// 정규화된 번호
    pub phone: String,
    pub result: SendResult,
}

/// 전체 실행 결과
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// 처리한 연락처 수 (빈 셀 제외)
    pub total: usize,
    pub sent: usize,
    /// 열기만 하고 전송하지 않은 채팅 수
    pub opened: usize,
    pub skipped: usize,
    pub failed: usize,
    pub outcomes: Vec<ContactOutcome>,
    pub started_at: DateTime<Utc>,
    /// 전체 실행 시간 (밀리초)
    pub duration_ms: u128,
}

impl RunReport {
    pub fn new(outcomes: Vec<ContactOutcome>, started_at: DateTime<Utc>, duration_ms: u128) -> Self {
        let sent = outcomes.iter().filter(|o| o.result.is_sent()).count();
        let opened = outcomes
            .iter()
            .filter(|o| o.result == SendResult::Opened)
            .count();
        let skipped = outcomes
            .iter()
            .filter(|o| o.result == SendResult::SkippedInvalidNumber)
            .count();
        let failed = outcomes
            .iter()
            .filter(|o| matches!(o.result, SendResult::Failed(_)))
            .count();

        Self {
            total: outcomes.len(),
            sent,
            opened,
            skipped,
            failed,
            outcomes,
            started_at,
            duration_ms,
        }
    }

    /// 모든 연락처에 전송했는지 확인 (열기만 한 채팅은 전송으로 치지 않음)
    pub fn all_sent(&self) -> bool {
        self.sent == self.total
    }

    pub fn failed_contacts(&self) -> Vec<&ContactOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, SendResult::Failed(_)))
            .collect()
    }

    pub fn skipped_contacts(&self) -> Vec<&ContactOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.result == SendResult::SkippedInvalidNumber)
            .collect()
    }

    /// 성공률 계산
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.sent as f64 / self.total as f64) * 100.0
    }
}
