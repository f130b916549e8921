use crate::cli::Cli;
use crate::config::Config;
use crate::contacts::{RowValidator, SheetLoader};
use crate::driver::DriverFactory;
use crate::error::{Result, SenderError};
use crate::executor::{BulkRunner, MessageDispatcher, Pacing, RunReport, SendResult};
use crate::message::Payload;
use crate::ui::{create_spinner, ConfirmPrompt, InputCollector, RunSummary};
use colored::*;
use std::fs;
use std::time::Duration;
use tracing::debug;

/// 입력 수집 → 확인 → 일괄 전송 → 결과 출력
pub async fn execute_send(cli: &Cli, config: &Config) -> Result<RunReport> {
    let collector = InputCollector::new();

    // 1. 입력 수집 (스프레드시트 → 메시지/첨부 순서로 검증)
    let spreadsheet = collector.spreadsheet(cli.file.clone())?;

    let message = match &cli.message_file {
        Some(path) => Some(fs::read_to_string(path)?),
        None => cli.message.clone(),
    };
    let media = cli.media.clone().filter(|p| !p.as_os_str().is_empty());
    let message = collector.message(message, media.is_some())?;
    let payload = Payload::new(message, media)?;

    // 2. 설정 병합 (CLI 인자가 우선)
    let country_code = cli
        .country_code
        .clone()
        .unwrap_or_else(|| config.default_country_code.clone());
    let column = cli
        .column
        .clone()
        .unwrap_or_else(|| config.contact_column.clone());
    let pacing = cli
        .interval
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.pacing_interval());
    let validator = RowValidator::new(country_code.clone())?;

    // 3. 드라이버 선택
    let driver = DriverFactory::create(cli.driver_name(&config.default_driver), config)?;
    if payload.media().is_some() && !driver.supports_media() {
        return Err(SenderError::UnsupportedDriver(driver.name().to_string()));
    }

    let spinner = create_spinner(&format!("Checking {} driver...", driver.name()));
    let check = driver.check_installation().await;
    spinner.finish_and_clear();
    check?;

    // 4. 연락처 읽기 (확인 전에 파일과 컬럼을 검사)
    let dispatcher = MessageDispatcher::new(driver.clone(), config.image_open_delay());
    let loader = SheetLoader::new(column).with_sheet(cli.sheet.clone());
    let mut runner = BulkRunner::new(
        loader,
        validator,
        dispatcher,
        Pacing::new(pacing),
    )
    .with_progress(!cli.json);

    let contacts = runner.load(&spreadsheet)?;

    // 5. 사용자 확인 (--yes / --dry-run이 없으면)
    if !cli.yes && !cli.dry_run {
        if !collector.is_interactive() {
            return Err(SenderError::ConfigError(
                "non-interactive session: pass --yes to send without confirmation".to_string(),
            ));
        }

        let spreadsheet_display = spreadsheet.display().to_string();
        let summary = RunSummary {
            spreadsheet: &spreadsheet_display,
            contacts: contacts.len(),
            payload: payload.describe(),
            driver: driver.name(),
            pacing_secs: pacing.as_secs(),
            country_code: &country_code,
        };
        if !ConfirmPrompt::new().confirm_run(&summary)? {
            return Err(SenderError::UserCancelled);
        }
    }

    // 6. 실행
    if !cli.json {
        eprintln!("{} Sending via {} driver...", "[>>]".cyan().bold(), driver.name());
    }

    let report = runner.run_contacts(contacts, &payload).await;
    debug!(state = ?runner.state(), "runner finished");

    // 7. 결과 출력
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(report)
}

fn print_summary(report: &RunReport) {
    // 열기만 한 채팅이 있으면 all_sent()는 false
    let marker = if report.all_sent() {
        "[OK]".green().bold()
    } else {
        "[!]".yellow().bold()
    };
    eprintln!("\n{} {}", marker, headline(report));
    eprintln!("  - Contacts: {}", report.total);
    eprintln!("  - Sent: {}", report.sent.to_string().green());
    if report.opened > 0 {
        eprintln!("  - Opened, not sent: {}", report.opened.to_string().cyan());
    }
    eprintln!("  - Skipped (invalid number): {}", report.skipped.to_string().yellow());
    eprintln!("  - Failed: {}", report.failed.to_string().red());
    eprintln!("  - Success rate: {:.1}%", report.success_rate());
    eprintln!("  - Execution time: {}ms", report.duration_ms);

    let skipped = report.skipped_contacts();
    if !skipped.is_empty() {
        eprintln!("\n{} Skipped numbers:", "[!]".yellow());
        for outcome in skipped {
            eprintln!("  - row {}: {}", outcome.row, outcome.phone);
        }
    }

    let failed = report.failed_contacts();
    if !failed.is_empty() {
        eprintln!("\n{} Failed contacts:", "[X]".red());
        for outcome in failed {
            if let SendResult::Failed(reason) = &outcome.result {
                eprintln!("  - row {}: {} - {}", outcome.row, outcome.phone, reason.red());
            }
        }
    }
}

/// 결과 요약 첫 줄
fn headline(report: &RunReport) -> String {
    if report.opened > 0 {
        format!(
            "Opened {} chat(s) with the message prefilled; press send in each browser tab.",
            report.opened
        )
    } else if report.all_sent() {
        "WhatsApp messages have been sent!".to_string()
    } else {
        "Finished with skipped or failed contacts.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::report::ContactOutcome;
    use chrono::Utc;

    fn report(results: Vec<SendResult>) -> RunReport {
        let outcomes = results
            .into_iter()
            .enumerate()
            .map(|(i, result)| ContactOutcome {
                row: i + 2,
                raw: "9876543210".to_string(),
                phone: "+919876543210".to_string(),
                result,
            })
            .collect();
        RunReport::new(outcomes, Utc::now(), 0)
    }

    #[test]
    fn test_headline_for_browser_run_does_not_claim_sent() {
        let line = headline(&report(vec![SendResult::Opened, SendResult::Opened]));
        assert!(line.starts_with("Opened 2 chat(s)"));
        assert!(!line.contains("have been sent"));
    }

    #[test]
    fn test_headline_variants() {
        assert_eq!(
            headline(&report(vec![SendResult::Sent])),
            "WhatsApp messages have been sent!"
        );
        assert_eq!(
            headline(&report(vec![SendResult::Sent, SendResult::SkippedInvalidNumber])),
            "Finished with skipped or failed contacts."
        );
    }
}
