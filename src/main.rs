use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pump_sizing_toolbox::app::{self, AppError, RunOptions};
use pump_sizing_toolbox::config::{Config, ReportFormat, DEFAULT_CONFIG_PATH};
use pump_sizing_toolbox::i18n::{self, keys, Translator};
use pump_sizing_toolbox::source::{CaseFile, InputSource};
use pump_sizing_toolbox::ui_cli::PromptSource;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// 배관 조건으로 펌프 양정·동력을 계산하고 계산서를 만든다.
#[derive(Debug, Parser)]
#[command(name = "pump_sizing_toolbox", version, about)]
struct Cli {
    /// TOML 케이스 파일. 없으면 대화형으로 입력받는다.
    #[arg(long)]
    input: Option<PathBuf>,
    /// 계산서 형식
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,
    /// 계산서 저장 디렉터리
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// 파일로 저장하지 않고 표준 출력에 쓴다
    #[arg(long)]
    stdout: bool,
    /// 언어 (auto, zh, en)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 계산서를 만든다.
fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pump_sizing_toolbox=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = match Config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, cfg.locale_dir.as_deref());

    match try_run(&cli, &cfg, &tr) {
        Ok(Some(path)) => {
            println!(
                "\n{}",
                tr.fill(keys::REPORT_SAVED, &[("path", path.display().to_string())])
            );
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli, cfg: &Config, tr: &Translator) -> Result<Option<PathBuf>, AppError> {
    let options = RunOptions {
        format: cli.format,
        output_dir: cli.out_dir.clone(),
        to_stdout: cli.stdout,
    };
    let mut source: Box<dyn InputSource + '_> = match &cli.input {
        Some(path) => Box::new(CaseFile::new(path)),
        None => Box::new(PromptSource::stdio(tr)),
    };
    let mut stdout = std::io::stdout();
    app::run(cfg, &options, source.as_mut(), tr, &mut stdout)
}
