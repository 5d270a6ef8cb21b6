//! 펌프 소요동력 및 일일 운전시간 계산.
//!
//! P(kW) = 0.163 × Q(m³/min) × H(m) × K / E

use super::rounding::round2;

/// 물의 동력 환산 계수(kW per m³/min·m).
pub const POWER_COEFFICIENT: f64 = 0.163;
/// 전동 여유율 K.
pub const TRANSMISSION_FACTOR: f64 = 1.1;
/// 펌프 효율 E.
pub const PUMP_EFFICIENCY: f64 = 0.7;
/// kW → HP 환산.
pub const KW_TO_HP: f64 = 1.341;

/// 소요동력 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerRequirement {
    /// 분당 유량(m³/min)
    pub flow_per_min: f64,
    pub power_kw: f64,
    pub power_hp: f64,
}

/// 설계 양정 기준 소요동력을 계산한다.
pub fn motor_power(flow_rate_cmh: f64, design_head_m: f64) -> PowerRequirement {
    let flow_per_min = flow_rate_cmh / 60.0;
    let power_kw = round2(
        (POWER_COEFFICIENT * flow_per_min * design_head_m * TRANSMISSION_FACTOR) / PUMP_EFFICIENCY,
    );
    let power_hp = round2(power_kw * KW_TO_HP);
    PowerRequirement {
        flow_per_min,
        power_kw,
        power_hp,
    }
}

/// 일일 처리수량을 처리하는 데 필요한 운전시간(hr).
///
/// 유량이 0 이하이면 0을 돌려준다.
pub fn daily_runtime_hours(daily_volume_cmd: f64, flow_rate_cmh: f64) -> f64 {
    if flow_rate_cmh > 0.0 {
        round2(daily_volume_cmd / flow_rate_cmh)
    } else {
        0.0
    }
}
