//! 총양정 산정 및 설계 양정 등급화.
//!
//! 계산 양정을 정수로 올린 뒤, 위에서부터 순서대로 규칙을 검사해 처음 맞는
//! 규칙의 설계 양정을 택한다. 경계 비교는 모두 "미만"이다.

/// 규칙이 정하는 설계 양정.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DesignHead {
    /// 고정 양정(m)
    Fixed(f64),
    /// 주어진 간격(m)의 배수로 올림
    RoundUpToStep(f64),
}

impl DesignHead {
    fn apply(self, rounded_head_m: f64) -> f64 {
        match self {
            DesignHead::Fixed(head) => head,
            DesignHead::RoundUpToStep(step) => (rounded_head_m / step).ceil() * step,
        }
    }
}

/// 설계 양정 등급 규칙 한 줄.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadRule {
    /// 이 값 미만일 때 적용. `None`이면 항상 적용.
    pub below_m: Option<f64>,
    pub design: DesignHead,
}

impl HeadRule {
    fn matches(&self, rounded_head_m: f64) -> bool {
        self.below_m.map_or(true, |limit| rounded_head_m < limit)
    }
}

/// 설계 양정 등급표. 순서가 곧 우선순위다.
pub const HEAD_RULES: &[HeadRule] = &[
    HeadRule {
        below_m: Some(20.0),
        design: DesignHead::Fixed(15.0),
    },
    HeadRule {
        below_m: Some(30.0),
        design: DesignHead::Fixed(25.0),
    },
    HeadRule {
        below_m: None,
        design: DesignHead::RoundUpToStep(5.0),
    },
];

/// 정수로 올린 양정에 등급표를 적용한다.
pub fn classify_head(rounded_head_m: f64) -> f64 {
    classify_head_with(HEAD_RULES, rounded_head_m)
}

/// 임의 등급표로 설계 양정을 정한다. 맞는 규칙이 없으면 올린 양정을 그대로 쓴다.
pub fn classify_head_with(rules: &[HeadRule], rounded_head_m: f64) -> f64 {
    rules
        .iter()
        .find(|rule| rule.matches(rounded_head_m))
        .map_or(rounded_head_m, |rule| rule.design.apply(rounded_head_m))
}

/// 총양정 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadClassification {
    /// 마찰손실 + 수직양정 + 외부손실(m)
    pub raw_total_head_m: f64,
    /// 정수로 올린 양정(m)
    pub rounded_head_m: f64,
    /// 등급화된 설계 양정(m)
    pub design_head_m: f64,
}

/// 손실을 합산하고 설계 양정을 정한다.
pub fn total_head(friction_loss_m: f64, vertical_head_m: f64, extra_loss_m: f64) -> HeadClassification {
    let raw_total_head_m = friction_loss_m + vertical_head_m + extra_loss_m;
    let rounded_head_m = raw_total_head_m.ceil();
    HeadClassification {
        raw_total_head_m,
        rounded_head_m,
        design_head_m: classify_head(rounded_head_m),
    }
}
