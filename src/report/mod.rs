//! 펌프 계산서 문장 구성.
//!
//! 계산 결과를 순서 있는 문장 목록으로 만든다. 값의 반올림은 계산 단계에서 이미
//! 끝났으므로 여기서는 표시 자릿수만 정한다. 파일 형식은 [`writer`]가 담당한다.

pub mod writer;

use crate::i18n::{keys, Translator};
use crate::pump::{PumpCase, PumpSizingResult};

pub use writer::{writer_for, MarkdownReportWriter, ReportError, ReportWriter, TextReportWriter};

/// 산출물 파일명 접미사.
pub const ARTIFACT_SUFFIX: &str = "_計算書";

/// 문장의 역할. 작성기가 배치(가운데 정렬, 제목 수준)를 정하는 데 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementRole {
    Title,
    Section,
    Body,
}

/// 계산서 한 줄.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStatement {
    pub role: StatementRole,
    pub text: String,
    /// 굵게 표시
    pub emphasized: bool,
}

impl ReportStatement {
    fn new(role: StatementRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            emphasized: false,
        }
    }

    fn body(text: impl Into<String>) -> Self {
        Self::new(StatementRole::Body, text)
    }

    fn emphasized(mut self) -> Self {
        self.emphasized = true;
        self
    }
}

/// 작성기에 넘기는 계산서.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// 경로 구분자를 `_`로 바꾼 펌프 번호
    pub output_id: String,
    pub statements: Vec<ReportStatement>,
}

impl Report {
    /// 확장자를 붙인 산출물 파일명.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{ARTIFACT_SUFFIX}.{extension}", self.output_id)
    }
}

/// 펌프 번호를 파일명에 쓸 수 있게 `/`, `\`를 `_`로 바꾼다.
pub fn sanitize_identifier(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

/// 보고서용 수치 표기. 정수값도 소수 한 자리를 남긴다(60 → "60.0").
pub fn display_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// 계산 결과를 계산서 문장 목록으로 구성한다.
pub fn build_report(case: &PumpCase, result: &PumpSizingResult, tr: &Translator) -> Report {
    let input = &case.input;
    let flow = display_number(input.flow_rate_cmh);
    let rate = display_number(input.friction_rate_per_100m);
    let length = format!("{:.2}", result.equivalent_length_m);
    let friction = display_number(result.friction_loss_m);
    let vertical = display_number(input.vertical_head_m);
    let extra = display_number(input.extra_loss_m);
    let design = format!("{:.0}", result.design_head_m);
    let daily = display_number(input.daily_volume_cmd);

    let mut statements = vec![
        ReportStatement::new(StatementRole::Title, tr.t(keys::REPORT_TITLE)),
        ReportStatement::body(tr.fill(keys::REPORT_PUMP_NAME, &[("name", case.pump_name.clone())])),
        ReportStatement::body(tr.fill(
            keys::REPORT_BASIC_SPEC,
            &[
                ("flow", flow.clone()),
                ("diameter", input.pipe_diameter_mm.to_string()),
                ("rate", rate.clone()),
            ],
        ))
        .emphasized(),
        ReportStatement::new(StatementRole::Section, tr.t(keys::REPORT_HEAD_SECTION)),
        ReportStatement::body(tr.fill(keys::REPORT_EQUIVALENT_LENGTH, &[("length", length.clone())])),
        ReportStatement::body(tr.fill(
            keys::REPORT_FRICTION_LOSS,
            &[
                ("length", length),
                ("rate", rate),
                ("friction", friction.clone()),
            ],
        )),
        ReportStatement::body(tr.fill(keys::REPORT_VERTICAL_HEAD, &[("vertical", vertical.clone())])),
    ];
    if input.extra_loss_m > 0.0 {
        statements.push(ReportStatement::body(
            tr.fill(keys::REPORT_EXTRA_LOSS, &[("extra", extra.clone())]),
        ));
    }
    statements.extend([
        ReportStatement::body(tr.fill(
            keys::REPORT_TOTAL_HEAD,
            &[
                ("friction", friction),
                ("vertical", vertical),
                ("extra", extra),
                ("raw", format!("{:.2}", result.raw_total_head_m)),
                ("design", design.clone()),
            ],
        )),
        ReportStatement::new(StatementRole::Section, tr.t(keys::REPORT_POWER_SECTION)),
        ReportStatement::body(tr.t(keys::REPORT_POWER_FORMULA)),
        ReportStatement::body(tr.fill(
            keys::REPORT_POWER_KW,
            &[
                ("flow_per_min", format!("{:.3}", result.flow_per_min)),
                ("design", design),
                ("kw", display_number(result.power_kw)),
            ],
        )),
        ReportStatement::body(tr.fill(keys::REPORT_POWER_HP, &[("hp", display_number(result.power_hp))])),
        ReportStatement::new(StatementRole::Section, tr.t(keys::REPORT_RUNTIME_SECTION)),
        ReportStatement::body(tr.fill(keys::REPORT_DAILY_VOLUME, &[("daily", daily.clone())])),
        ReportStatement::body(tr.fill(
            keys::REPORT_RUNTIME,
            &[
                ("daily", daily),
                ("flow", flow),
                ("runtime", display_number(result.runtime_hours)),
            ],
        )),
    ]);

    Report {
        output_id: sanitize_identifier(&case.pump_name),
        statements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_keep_one_decimal() {
        assert_eq!(display_number(60.0), "60.0");
        assert_eq!(display_number(0.0), "0.0");
        assert_eq!(display_number(3.52), "3.52");
        assert_eq!(display_number(7.9), "7.9");
    }

    #[test]
    fn path_separators_become_underscores() {
        assert_eq!(sanitize_identifier("P-101A/B"), "P-101A_B");
        assert_eq!(sanitize_identifier(r"P\1/2"), "P_1_2");
        assert_eq!(sanitize_identifier("P-7"), "P-7");
    }
}
