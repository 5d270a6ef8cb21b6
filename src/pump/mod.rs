//! 원심펌프 수력 사이징.
//! 입력 검증, 등가관장 마찰손실, 설계 양정 등급화, 소요동력·운전시간 계산으로 구성한다.

pub mod fittings;
pub mod head;
pub mod input;
pub mod power;
pub mod rounding;
pub mod sizing;

pub use fittings::{DiameterClass, FittingCoefficients, FittingCounts};
pub use input::{normalize, Field, PumpCase, PumpSizingInput, RawPumpInput, ValidationError};
pub use sizing::{size_pump, PumpSizingResult};
