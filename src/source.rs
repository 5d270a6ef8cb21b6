//! 입력 수집기. 계산 코어는 [`RawPumpInput`]만 받으므로 터미널 없이도 시험할 수 있다.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::pump::{Field, RawPumpInput};

/// 입력 수집 오류.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("케이스 파일 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("알 수 없는 항목: {0}")]
    UnknownField(String),
    #[error("{field}: 지원하지 않는 값 형식({kind})")]
    UnsupportedValue { field: Field, kind: &'static str },
}

/// 원시 입력을 모아 오는 협력자.
pub trait InputSource {
    fn collect(&mut self) -> Result<RawPumpInput, SourceError>;
}

/// TOML 케이스 파일. 값은 문자열·정수·실수 모두 허용한다.
///
/// ```toml
/// pump_name = "P-101A/B"
/// flow_rate_cmh = 60
/// pipe_diameter_mm = 100
/// ```
#[derive(Debug, Clone)]
pub struct CaseFile {
    path: PathBuf,
}

impl CaseFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InputSource for CaseFile {
    fn collect(&mut self) -> Result<RawPumpInput, SourceError> {
        let content = fs::read_to_string(&self.path)?;
        parse_case(&content)
    }
}

/// 케이스 파일 내용을 원시 입력으로 바꾼다.
pub fn parse_case(src: &str) -> Result<RawPumpInput, SourceError> {
    let table: toml::Table = toml::from_str(src)?;
    let mut raw = RawPumpInput::new();
    for (key, value) in &table {
        let field = Field::from_key(key).ok_or_else(|| SourceError::UnknownField(key.clone()))?;
        let text = match value {
            toml::Value::String(s) => s.clone(),
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            other => {
                return Err(SourceError::UnsupportedValue {
                    field,
                    kind: other.type_str(),
                })
            }
        };
        raw.set(field, text);
    }
    Ok(raw)
}
