use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bulkwa")]
#[command(version)]
#[command(about = "Bulk WhatsApp sender from a spreadsheet", long_about = None)]
pub struct Cli {
    /// 연락처 스프레드시트 (.xlsx, .xls, .ods)
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// 보낼 메시지 (첨부 파일이 있으면 캡션)
    #[arg(short = 'm', long, conflicts_with = "message_file")]
    pub message: Option<String>,

    /// 메시지를 파일에서 읽기
    #[arg(long)]
    pub message_file: Option<PathBuf>,

    /// 첨부 파일 (jpg, jpeg, png, pdf, docx)
    #[arg(short = 'a', long)]
    pub media: Option<PathBuf>,

    /// 워크시트 이름 (기본: 첫 번째 시트)
    #[arg(long)]
    pub sheet: Option<String>,

    /// 연락처 컬럼 이름. 미지정시 설정 파일의 contact_column 사용
    #[arg(long)]
    pub column: Option<String>,

    /// `+`가 없는 번호에 붙일 국가 코드 (예: +91)
    #[arg(long, allow_hyphen_values = true)]
    pub country_code: Option<String>,

    /// 전송 사이 대기 시간 (초)
    #[arg(long)]
    pub interval: Option<u64>,

    /// 전송 드라이버 (browser, helper, dry-run)
    #[arg(long)]
    pub driver: Option<String>,

    /// 확인 없이 바로 실행
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// 실제로 보내지 않고 로그만 출력
    #[arg(long)]
    pub dry_run: bool,

    /// 결과 리포트를 JSON으로 stdout에 출력
    #[arg(long)]
    pub json: bool,

    /// 디버그 로그
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// 기본 설정 파일 생성 후 종료
    #[arg(long)]
    pub init_config: bool,
}

impl Cli {
    /// 사용할 드라이버 이름 (--dry-run 우선)
    pub fn driver_name<'a>(&'a self, default: &'a str) -> &'a str {
        if self.dry_run {
            "dry-run"
        } else {
            self.driver.as_deref().unwrap_or(default)
        }
    }
}
