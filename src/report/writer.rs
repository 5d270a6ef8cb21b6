//! 계산서 저장 형식.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::{Report, ReportStatement, StatementRole};
use crate::config::ReportFormat;

/// 텍스트 계산서의 제목 가운데 정렬 폭(문자 수).
const TEXT_PAGE_WIDTH: usize = 48;

/// 계산서 저장 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("출력 디렉터리를 만들 수 없습니다 ({path}): {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("계산서를 저장할 수 없습니다 ({path}): {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// 문장 목록을 특정 형식의 파일로 저장하는 작성기.
pub trait ReportWriter {
    /// 산출물 확장자(점 제외).
    fn extension(&self) -> &'static str;

    /// 문장 목록을 출력 스트림에 기록한다.
    fn render(&self, report: &Report, out: &mut dyn Write) -> io::Result<()>;

    /// `dir/<펌프번호>_計算書.<ext>`로 저장하고 경로를 돌려준다.
    /// 파일 핸들은 성공·실패 어느 경우에도 이 함수 안에서 닫힌다.
    fn write_to_dir(&self, report: &Report, dir: &Path) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join(report.file_name(self.extension()));
        let write = |path: &Path| -> io::Result<()> {
            let mut out = BufWriter::new(File::create(path)?);
            self.render(report, &mut out)?;
            out.flush()
        };
        write(&path).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), statements = report.statements.len(), "report written");
        Ok(path)
    }
}

/// 형식에 맞는 작성기를 고른다.
pub fn writer_for(format: ReportFormat) -> Box<dyn ReportWriter> {
    match format {
        ReportFormat::Text => Box::new(TextReportWriter),
        ReportFormat::Markdown => Box::new(MarkdownReportWriter),
    }
}

/// 일반 텍스트(.txt). 제목은 가운데 정렬, 강조 문장은 밑줄을 긋는다.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReportWriter;

impl ReportWriter for TextReportWriter {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        for (i, st) in report.statements.iter().enumerate() {
            match st.role {
                StatementRole::Title => {
                    let width = st.text.chars().count();
                    let pad = TEXT_PAGE_WIDTH.saturating_sub(width) / 2;
                    writeln!(out, "{:pad$}{}", "", st.text)?;
                    writeln!(out, "{}", "=".repeat(TEXT_PAGE_WIDTH))?;
                }
                StatementRole::Section => {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    writeln!(out, "{}", st.text)?;
                }
                StatementRole::Body => {
                    writeln!(out, "{}", st.text)?;
                    if st.emphasized {
                        writeln!(out, "{}", "-".repeat(st.text.chars().count()))?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Markdown(.md). 제목은 가운데 정렬 HTML 헤딩, 강조 문장은 굵게.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReportWriter;

impl MarkdownReportWriter {
    fn line(st: &ReportStatement) -> String {
        let text = escape_markdown(&st.text);
        match st.role {
            StatementRole::Title => format!("<h1 align=\"center\">{}</h1>", st.text),
            StatementRole::Section => format!("## {text}"),
            StatementRole::Body if st.emphasized => format!("**{text}**"),
            StatementRole::Body => text,
        }
    }
}

impl ReportWriter for MarkdownReportWriter {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, report: &Report, out: &mut dyn Write) -> io::Result<()> {
        let blocks: Vec<String> = report.statements.iter().map(Self::line).collect();
        writeln!(out, "{}", blocks.join("\n\n"))
    }
}

fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '*' | '_' | '`' | '#' | '<') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
