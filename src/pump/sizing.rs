//! 검증된 입력 하나로부터 계산서 수치 전체를 산출한다.

use tracing::debug;

use super::fittings::{fitting_loss, DiameterClass, FittingCoefficients};
use super::head::total_head;
use super::input::PumpSizingInput;
use super::power::{daily_runtime_hours, motor_power};

/// 펌프 사이징 결과. 계산서에 인용되는 중간값까지 모두 담는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpSizingResult {
    pub diameter_class: DiameterClass,
    pub coefficients: FittingCoefficients,
    pub equivalent_valve_length_m: f64,
    pub equivalent_elbow_length_m: f64,
    pub equivalent_other_length_m: f64,
    /// 총 등가관장(m)
    pub equivalent_length_m: f64,
    /// 마찰손실(m)
    pub friction_loss_m: f64,
    /// 계산 총양정(m)
    pub raw_total_head_m: f64,
    /// 정수 올림 총양정(m)
    pub rounded_head_m: f64,
    /// 설계 양정(m): 15, 25 또는 30 이상의 5의 배수
    pub design_head_m: f64,
    /// 분당 유량(m³/min)
    pub flow_per_min: f64,
    pub power_kw: f64,
    pub power_hp: f64,
    /// 일일 운전시간(hr)
    pub runtime_hours: f64,
}

/// 등가관장 → 총양정 → 동력 → 운전시간 순으로 계산한다.
pub fn size_pump(input: &PumpSizingInput) -> PumpSizingResult {
    let loss = fitting_loss(input);
    debug!(
        class = ?loss.diameter_class,
        equivalent_length_m = loss.equivalent_length_m,
        friction_loss_m = loss.friction_loss_m,
        "fitting loss"
    );

    let head = total_head(loss.friction_loss_m, input.vertical_head_m, input.extra_loss_m);
    debug!(
        raw_total_head_m = head.raw_total_head_m,
        design_head_m = head.design_head_m,
        "head classified"
    );

    let power = motor_power(input.flow_rate_cmh, head.design_head_m);
    let runtime_hours = daily_runtime_hours(input.daily_volume_cmd, input.flow_rate_cmh);
    debug!(
        power_kw = power.power_kw,
        power_hp = power.power_hp,
        runtime_hours,
        "power sized"
    );

    PumpSizingResult {
        diameter_class: loss.diameter_class,
        coefficients: loss.coefficients,
        equivalent_valve_length_m: loss.valve_length_m,
        equivalent_elbow_length_m: loss.elbow_length_m,
        equivalent_other_length_m: loss.other_length_m,
        equivalent_length_m: loss.equivalent_length_m,
        friction_loss_m: loss.friction_loss_m,
        raw_total_head_m: head.raw_total_head_m,
        rounded_head_m: head.rounded_head_m,
        design_head_m: head.design_head_m,
        flow_per_min: power.flow_per_min,
        power_kw: power.power_kw,
        power_hp: power.power_hp,
        runtime_hours,
    }
}
