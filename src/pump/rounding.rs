//! 보고서 수치에 쓰는 소수점 반올림.
//!
//! 부동소수 값의 *정확한 이진 값*을 기준으로 가장 가까운 자릿수로 맞추고,
//! 정확히 한가운데인 경우에만 짝수 쪽으로 보낸다. `{:.N}` 포매팅과 같은 규칙이므로
//! 문자열로 포매팅한 뒤 다시 파싱한다.

/// 소수 `decimals` 자리로 반올림한다. 유한하지 않은 값은 그대로 돌려준다.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// 소수 둘째 자리 반올림. 마찰손실, 동력(kW/HP), 운전시간에 사용한다.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}
