use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::config::{Config, ConfigError, ReportFormat};
use crate::i18n::Translator;
use crate::pump::{normalize, size_pump, PumpCase, PumpSizingResult, RawPumpInput, ValidationError};
use crate::report::{build_report, writer_for, Report, ReportError};
use crate::source::{InputSource, SourceError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("입력 수집 오류: {0}")]
    Source(#[from] SourceError),
    #[error("입력값 오류: {0}")]
    Validation(#[from] ValidationError),
    #[error("계산서 저장 오류: {0}")]
    Report(#[from] ReportError),
}

/// 한 번의 실행에 대한 옵션. `None`이면 설정 파일 값을 쓴다.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub format: Option<ReportFormat>,
    pub output_dir: Option<PathBuf>,
    /// 파일 대신 표준 출력에 쓴다
    pub to_stdout: bool,
}

/// 계산 한 건의 산출물.
#[derive(Debug, Clone)]
pub struct Calculation {
    pub case: PumpCase,
    pub result: PumpSizingResult,
    pub report: Report,
}

/// 검증 → 계산 → 문장 구성. 입력이 잘못되면 계산 전에 실패한다.
pub fn calculate(raw: &RawPumpInput, tr: &Translator) -> Result<Calculation, ValidationError> {
    let case = normalize(raw)?;
    debug!(pump = %case.pump_name, "input validated");
    let result = size_pump(&case.input);
    let report = build_report(&case, &result, tr);
    Ok(Calculation {
        case,
        result,
        report,
    })
}

/// 입력을 수집해 계산서를 만들고 저장한다. 파일로 저장했으면 그 경로를 돌려준다.
pub fn run(
    config: &Config,
    options: &RunOptions,
    source: &mut dyn InputSource,
    tr: &Translator,
    stdout: &mut dyn Write,
) -> Result<Option<PathBuf>, AppError> {
    let raw = source.collect()?;
    let calc = calculate(&raw, tr)?;
    let writer = writer_for(options.format.unwrap_or(config.report.format));
    if options.to_stdout {
        writer.render(&calc.report, stdout)?;
        return Ok(None);
    }
    let dir = options
        .output_dir
        .as_deref()
        .unwrap_or(config.report.output_dir.as_path());
    let path = writer.write_to_dir(&calc.report, dir)?;
    Ok(Some(path))
}
