//! 원시 입력값 검증 및 기본값 적용.
//!
//! 입력 수집기(터미널 프롬프트, 케이스 파일)는 모든 값을 문자열 그대로
//! [`RawPumpInput`]에 담아 넘기고, 숫자 해석과 기본값·범위 검사는 여기서만 한다.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use super::fittings::FittingCounts;

/// 마찰손실률 기본값(m/100m).
pub const DEFAULT_FRICTION_RATE_PER_100M: f64 = 7.9;

/// 입력 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    PumpName,
    FlowRate,
    PipeDiameter,
    StraightPipeLength,
    FrictionRate,
    VerticalHead,
    ExtraLoss,
    DailyVolume,
    BallValves,
    CheckValves,
    Elbow90,
    Elbow45,
    YStrainer,
}

impl Field {
    /// 프롬프트·검증 순서.
    pub const ALL: [Field; 13] = [
        Field::PumpName,
        Field::FlowRate,
        Field::PipeDiameter,
        Field::StraightPipeLength,
        Field::FrictionRate,
        Field::VerticalHead,
        Field::ExtraLoss,
        Field::DailyVolume,
        Field::BallValves,
        Field::CheckValves,
        Field::Elbow90,
        Field::Elbow45,
        Field::YStrainer,
    ];

    /// 케이스 파일에서 쓰는 키 이름.
    pub fn key(self) -> &'static str {
        match self {
            Field::PumpName => "pump_name",
            Field::FlowRate => "flow_rate_cmh",
            Field::PipeDiameter => "pipe_diameter_mm",
            Field::StraightPipeLength => "straight_pipe_length_m",
            Field::FrictionRate => "friction_rate_per_100m",
            Field::VerticalHead => "vertical_head_m",
            Field::ExtraLoss => "extra_loss_m",
            Field::DailyVolume => "daily_volume_cmd",
            Field::BallValves => "ball_valves",
            Field::CheckValves => "check_valves",
            Field::Elbow90 => "elbow_90_count",
            Field::Elbow45 => "elbow_45_count",
            Field::YStrainer => "y_strainer_count",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 수집된 그대로의 입력. 공백뿐인 값은 입력하지 않은 것으로 본다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPumpInput {
    values: HashMap<Field, String>,
}

impl RawPumpInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// 값을 기록한다. 같은 항목은 덮어쓴다.
    pub fn set(&mut self, field: Field, text: impl Into<String>) -> &mut Self {
        self.values.insert(field, text.into());
        self
    }

    /// 앞뒤 공백을 제거한 값. 비어 있으면 `None`.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values
            .get(&field)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for RawPumpInput {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        let mut raw = RawPumpInput::new();
        for (field, text) in iter {
            raw.set(field, text);
        }
        raw
    }
}

/// 검증을 마친 계산 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpSizingInput {
    /// 설계 유량(m³/h)
    pub flow_rate_cmh: f64,
    /// 관경(mm)
    pub pipe_diameter_mm: u32,
    /// 직관 길이(m)
    pub straight_pipe_length_m: f64,
    /// 마찰손실률(m/100m)
    pub friction_rate_per_100m: f64,
    /// 수직 양정(m)
    pub vertical_head_m: f64,
    /// 다단 여과/외부 설비 압력손실(m)
    pub extra_loss_m: f64,
    /// 일일 처리수량(m³/day)
    pub daily_volume_cmd: f64,
    pub fittings: FittingCounts,
}

impl Default for PumpSizingInput {
    fn default() -> Self {
        Self {
            flow_rate_cmh: 0.0,
            pipe_diameter_mm: 0,
            straight_pipe_length_m: 0.0,
            friction_rate_per_100m: DEFAULT_FRICTION_RATE_PER_100M,
            vertical_head_m: 0.0,
            extra_loss_m: 0.0,
            daily_volume_cmd: 0.0,
            fittings: FittingCounts::default(),
        }
    }
}

/// 펌프 번호와 계산 입력의 묶음.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpCase {
    /// 펌프 번호(예: P-101A/B). 산출물 파일명에 쓰인다.
    pub pump_name: String,
    pub input: PumpSizingInput,
}

/// 물리적으로 허용되지 않는 값의 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainRule {
    Finite,
    Positive,
    NonNegative,
}

impl fmt::Display for DomainRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainRule::Finite => f.write_str("유한한 값이어야 합니다"),
            DomainRule::Positive => f.write_str("0보다 커야 합니다"),
            DomainRule::NonNegative => f.write_str("음수일 수 없습니다"),
        }
    }
}

/// 입력 검증 오류. 어느 항목에서 실패했는지 항상 포함한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// 필수 값이 없거나 숫자로 해석할 수 없음
    #[error("{field}: {}", describe_parse_failure(.raw))]
    InputParse { field: Field, raw: Option<String> },
    /// 물리적으로 불가능한 값
    #[error("{field}: {value} - {rule}")]
    InvalidDomainValue {
        field: Field,
        value: String,
        rule: DomainRule,
    },
}

fn describe_parse_failure(raw: &Option<String>) -> String {
    match raw {
        None => "필수 입력값이 없습니다".to_string(),
        Some(text) => format!("숫자로 해석할 수 없습니다 ({text:?})"),
    }
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::InputParse { field, .. }
            | ValidationError::InvalidDomainValue { field, .. } => *field,
        }
    }
}

/// 원시 입력을 검증하고 기본값을 채운다. 첫 번째 오류에서 멈춘다.
pub fn normalize(raw: &RawPumpInput) -> Result<PumpCase, ValidationError> {
    let pump_name = raw
        .get(Field::PumpName)
        .ok_or(ValidationError::InputParse {
            field: Field::PumpName,
            raw: None,
        })?
        .to_string();

    let input = PumpSizingInput {
        flow_rate_cmh: real(raw, Field::FlowRate, None, DomainRule::NonNegative)?,
        pipe_diameter_mm: diameter(raw)?,
        straight_pipe_length_m: real(raw, Field::StraightPipeLength, None, DomainRule::NonNegative)?,
        friction_rate_per_100m: real(
            raw,
            Field::FrictionRate,
            Some(DEFAULT_FRICTION_RATE_PER_100M),
            DomainRule::NonNegative,
        )?,
        vertical_head_m: real(raw, Field::VerticalHead, None, DomainRule::Finite)?,
        extra_loss_m: real(raw, Field::ExtraLoss, Some(0.0), DomainRule::NonNegative)?,
        daily_volume_cmd: real(raw, Field::DailyVolume, Some(0.0), DomainRule::NonNegative)?,
        fittings: FittingCounts {
            ball_valves: count(raw, Field::BallValves)?,
            check_valves: count(raw, Field::CheckValves)?,
            elbow_90_count: count(raw, Field::Elbow90)?,
            elbow_45_count: count(raw, Field::Elbow45)?,
            y_strainer_count: count(raw, Field::YStrainer)?,
        },
    };
    Ok(PumpCase { pump_name, input })
}

fn parse_error(field: Field, text: &str) -> ValidationError {
    ValidationError::InputParse {
        field,
        raw: Some(text.to_string()),
    }
}

fn domain_error(field: Field, value: impl ToString, rule: DomainRule) -> ValidationError {
    ValidationError::InvalidDomainValue {
        field,
        value: value.to_string(),
        rule,
    }
}

fn real(
    raw: &RawPumpInput,
    field: Field,
    default: Option<f64>,
    rule: DomainRule,
) -> Result<f64, ValidationError> {
    let Some(text) = raw.get(field) else {
        return default.ok_or(ValidationError::InputParse { field, raw: None });
    };
    let value: f64 = text.parse().map_err(|_| parse_error(field, text))?;
    if !value.is_finite() {
        return Err(domain_error(field, text, DomainRule::Finite));
    }
    let ok = match rule {
        DomainRule::Finite => true,
        DomainRule::Positive => value > 0.0,
        DomainRule::NonNegative => value >= 0.0,
    };
    if ok {
        Ok(value)
    } else {
        Err(domain_error(field, value, rule))
    }
}

fn integer(raw: &RawPumpInput, field: Field) -> Result<Option<i64>, ValidationError> {
    raw.get(field)
        .map(|text| text.parse::<i64>().map_err(|_| parse_error(field, text)))
        .transpose()
}

fn diameter(raw: &RawPumpInput) -> Result<u32, ValidationError> {
    let field = Field::PipeDiameter;
    let value = integer(raw, field)?.ok_or(ValidationError::InputParse { field, raw: None })?;
    if value <= 0 {
        return Err(domain_error(field, value, DomainRule::Positive));
    }
    u32::try_from(value).map_err(|_| parse_error(field, &value.to_string()))
}

fn count(raw: &RawPumpInput, field: Field) -> Result<u32, ValidationError> {
    let value = integer(raw, field)?.unwrap_or(0);
    if value < 0 {
        return Err(domain_error(field, value, DomainRule::NonNegative));
    }
    u32::try_from(value).map_err(|_| parse_error(field, &value.to_string()))
}
