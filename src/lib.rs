//! 펌프 수력 계산 로직을 라이브러리로 분리하여 CLI 외의 입력·출력 방식도 쉽게 붙인다.

pub mod app;
pub mod config;
pub mod i18n;
pub mod pump;
pub mod report;
pub mod source;
pub mod ui_cli;
