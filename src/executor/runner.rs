use crate::contacts::{ContactRecord, RawContact, RowValidator, SheetLoader};
use crate::error::{Result, SenderError};
use crate::executor::dispatcher::{reached_driver, Delivery, MessageDispatcher};
use crate::executor::report::{ContactOutcome, RunReport, SendResult};
use crate::message::Payload;
use crate::ui::BatchProgressDisplay;
use chrono::Utc;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// 실행 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Validating,
    Sending,
    Done,
    Failed,
}

/// 전송 사이 최소 대기 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub interval: Duration,
}

impl Pacing {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    async fn wait(&self) {
        if !self.interval.is_zero() {
            debug!(secs = self.interval.as_secs_f64(), "pacing before next send");
            tokio::time::sleep(self.interval).await;
        }
    }
}

/// 스프레드시트의 모든 연락처에 순차 전송
pub struct BulkRunner {
    loader: SheetLoader,
    validator: RowValidator,
    dispatcher: MessageDispatcher,
    pacing: Pacing,
    state: RunState,
    progress: Option<BatchProgressDisplay>,
}

impl BulkRunner {
    pub fn new(
        loader: SheetLoader,
        validator: RowValidator,
        dispatcher: MessageDispatcher,
        pacing: Pacing,
    ) -> Self {
        Self {
            loader,
            validator,
            dispatcher,
            pacing,
            state: RunState::Idle,
            progress: None,
        }
    }

    /// 진행률 표시 사용
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.progress = enabled.then(BatchProgressDisplay::hidden_until_started);
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    fn transition(&mut self, next: RunState) {
        debug!(from = ?self.state, to = ?next, "run state changed");
        self.state = next;
    }

    /// 스프레드시트를 읽어 연락처 목록 반환
    ///
    /// 파일을 읽지 못하거나 컬럼이 없으면 `Failed` 상태로 에러를 반환합니다.
    pub fn load(&mut self, path: &Path) -> Result<Vec<RawContact>> {
        self.transition(RunState::Validating);

        match self.loader.load(path) {
            Ok(contacts) => {
                info!(
                    path = %path.display(),
                    column = self.loader.column(),
                    contacts = contacts.len(),
                    "spreadsheet loaded"
                );
                Ok(contacts)
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to load spreadsheet");
                self.transition(RunState::Failed);
                Err(e)
            }
        }
    }

    /// 스프레드시트를 읽어 전송 실행
    ///
    /// 파일을 읽지 못하거나 컬럼이 없으면 아무것도 보내지 않고 에러를 반환합니다.
    /// 연락처 단위 실패는 리포트에만 기록됩니다.
    #[allow(dead_code)]
    pub async fn run(&mut self, path: &Path, payload: &Payload) -> Result<RunReport> {
        let contacts = self.load(path)?;
        Ok(self.run_contacts(contacts, payload).await)
    }

    /// 이미 읽어온 연락처 목록으로 전송 실행
    pub async fn run_contacts(&mut self, contacts: Vec<RawContact>, payload: &Payload) -> RunReport {
        if self.state != RunState::Validating {
            self.transition(RunState::Validating);
        }

        let started_at = Utc::now();
        let start = Instant::now();

        let records: Vec<(usize, ContactRecord)> = contacts
            .into_iter()
            .map(|c| (c.row, self.validator.validate(&c.value)))
            .collect();

        self.transition(RunState::Sending);
        if let Some(progress) = &self.progress {
            progress.start(records.len());
        }

        let mut outcomes = Vec::with_capacity(records.len());
        let mut pace_before_next = false;

        for (row, record) in records {
            let result = if !record.is_valid() {
                let err = SenderError::InvalidNumber(record.phone.clone());
                warn!(row, phone = %record.phone, error = %err, "skipping invalid number");
                SendResult::SkippedInvalidNumber
            } else {
                if pace_before_next {
                    self.pacing.wait().await;
                }

                if let Some(progress) = &self.progress {
                    progress.set_current(&record.phone);
                }

                match self.dispatcher.dispatch(&record.phone, payload).await {
                    Ok(Delivery::Prefilled) => {
                        info!(row, phone = %record.phone, "chat opened with message prefilled, not sent");
                        pace_before_next = true;
                        SendResult::Opened
                    }
                    Ok(delivery) => {
                        info!(row, phone = %record.phone, ?delivery, "sent");
                        pace_before_next = true;
                        SendResult::Sent
                    }
                    Err(e) => {
                        pace_before_next = reached_driver(&e);
                        SendResult::Failed(e.to_string())
                    }
                }
            };

            if let Some(progress) = &self.progress {
                progress.record(&result);
            }

            outcomes.push(ContactOutcome {
                row,
                raw: record.raw,
                phone: record.phone,
                result,
            });
        }

        let report = RunReport::new(outcomes, started_at, start.elapsed().as_millis());

        if let Some(progress) = &self.progress {
            progress.finish(&report);
        }

        info!(
            total = report.total,
            sent = report.sent,
            opened = report.opened,
            skipped = report.skipped,
            failed = report.failed,
            "run complete"
        );

        self.transition(RunState::Done);
        report
    }
}
