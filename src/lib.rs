//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 GUI에서도 같은 코어를 쓴다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod dosing;
pub mod history;
pub mod i18n;
pub mod quantity;
pub mod session;
pub mod ui_cli;
pub mod units;
