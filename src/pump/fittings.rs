//! 등가관장법에 의한 밸브·피팅 손실 계산.
//!
//! 관경 구분(100mm 이상/미만)에 따라 밸브·엘보의 등가관장 계수가 정해지며,
//! 이 구분이 계수 선택의 유일한 분기점이다.

use super::input::PumpSizingInput;
use super::rounding::round2;

/// 대구경 계수를 적용하는 최소 관경(mm).
pub const LARGE_DIAMETER_THRESHOLD_MM: u32 = 100;

/// Y형 스트레이너 등가관장 계수. 관경 구분과 무관하다.
pub const Y_STRAINER_COEFFICIENT: f64 = 0.3;

/// 관경 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiameterClass {
    /// 관경 ≥ 100mm
    Large,
    /// 관경 < 100mm
    Small,
}

impl DiameterClass {
    /// 관경(mm)으로부터 구분을 정한다.
    pub fn from_diameter_mm(diameter_mm: u32) -> Self {
        if diameter_mm >= LARGE_DIAMETER_THRESHOLD_MM {
            DiameterClass::Large
        } else {
            DiameterClass::Small
        }
    }

    /// 구분별 등가관장 계수표.
    pub fn coefficients(self) -> FittingCoefficients {
        match self {
            DiameterClass::Large => FittingCoefficients {
                ball: 0.2,
                check: 8.7,
                elbow_90: 1.7,
                elbow_45: 0.7,
            },
            DiameterClass::Small => FittingCoefficients {
                ball: 0.2,
                check: 4.4,
                elbow_90: 0.7,
                elbow_45: 0.3,
            },
        }
    }
}

/// 피팅 1개당 등가관장(m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittingCoefficients {
    pub ball: f64,
    pub check: f64,
    pub elbow_90: f64,
    pub elbow_45: f64,
}

/// 배관에 설치된 밸브·피팅 개수.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FittingCounts {
    pub ball_valves: u32,
    pub check_valves: u32,
    pub elbow_90_count: u32,
    pub elbow_45_count: u32,
    pub y_strainer_count: u32,
}

/// 등가관장 및 마찰손실 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittingLoss {
    pub diameter_class: DiameterClass,
    pub coefficients: FittingCoefficients,
    /// 밸브류 등가관장(m)
    pub valve_length_m: f64,
    /// 엘보류 등가관장(m)
    pub elbow_length_m: f64,
    /// 기타(Y형 스트레이너) 등가관장(m)
    pub other_length_m: f64,
    /// 직관 + 피팅 총 등가관장(m)
    pub equivalent_length_m: f64,
    /// 마찰손실 수두(m), 소수 둘째 자리 반올림
    pub friction_loss_m: f64,
}

/// 총 등가관장과 마찰손실을 계산한다.
pub fn fitting_loss(input: &PumpSizingInput) -> FittingLoss {
    let diameter_class = DiameterClass::from_diameter_mm(input.pipe_diameter_mm);
    let c = diameter_class.coefficients();
    let n = &input.fittings;

    let valve_length_m =
        f64::from(n.ball_valves) * c.ball + f64::from(n.check_valves) * c.check;
    let elbow_length_m =
        f64::from(n.elbow_90_count) * c.elbow_90 + f64::from(n.elbow_45_count) * c.elbow_45;
    let other_length_m = f64::from(n.y_strainer_count) * Y_STRAINER_COEFFICIENT;

    let equivalent_length_m =
        input.straight_pipe_length_m + valve_length_m + elbow_length_m + other_length_m;
    let friction_loss_m = round2(equivalent_length_m * (input.friction_rate_per_100m / 100.0));

    FittingLoss {
        diameter_class,
        coefficients: c,
        valve_length_m,
        elbow_length_m,
        other_length_m,
        equivalent_length_m,
        friction_loss_m,
    }
}
