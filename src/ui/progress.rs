use crate::executor::report::{RunReport, SendResult};
use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// 스피너 스타일 (스프레드시트 읽는 중)
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// 일괄 전송용 프로그레스 디스플레이
pub struct BatchProgressDisplay {
    bar: ProgressBar,
}

impl BatchProgressDisplay {
    /// `start` 호출 전까지는 아무것도 그리지 않음
    pub fn hidden_until_started() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn start(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░ "),
        );
        self.bar.set_draw_target(ProgressDrawTarget::stderr());
    }

    /// 현재 전송 중인 번호 표시
    pub fn set_current(&self, phone: &str) {
        self.bar.set_message(format!("sending to {}", phone));
    }

    pub fn record(&self, result: &SendResult) {
        if let SendResult::Failed(reason) = result {
            self.bar.set_message(format!("{} {}", "failed:".red(), reason.dimmed()));
        }
        self.bar.inc(1);
    }

    /// 전체 완료
    pub fn finish(&self, report: &RunReport) {
        self.bar.finish_with_message(format!(
            "{} done (sent: {}, opened: {}, skipped: {}, failed: {})",
            "✓".green().bold(),
            report.sent.to_string().green(),
            report.opened.to_string().cyan(),
            report.skipped.to_string().yellow(),
            report.failed.to_string().red()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_create_spinner() {
        let spinner = create_spinner("reading spreadsheet...");
        assert!(!spinner.is_finished());
        spinner.finish_and_clear();
    }

    #[test]
    fn test_batch_progress_counts_each_contact() {
        let display = BatchProgressDisplay::hidden_until_started();
        display.start(2);
        display.set_current("+919876543210");
        display.record(&SendResult::Sent);
        display.record(&SendResult::Failed("timeout".to_string()));
        display.finish(&RunReport::new(Vec::new(), Utc::now(), 0));
    }
}
