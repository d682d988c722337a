//! 약제 투여량/혼합/희석 계산 모듈 모음.

pub mod dilution;
pub mod dosage;
pub mod mixing;

pub use dilution::{compute_dilution, DilutionInput, DilutionResult};
pub use dosage::{compute_dosage, DosageInput, DosageResult};
pub use mixing::{compute_mixing, MixingInput, MixingResult, RatioSpec};

/// 계산기 입력 검증 시 발생 가능한 오류.
#[derive(Debug)]
pub enum CalcError {
    /// 양수가 필요한 자리에 0 이하 값이 들어온 경우
    InvalidInput(&'static str),
    /// 비율 문자열이 정수 비율로 파싱되지 않는 경우
    InvalidRatioFormat(String),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::InvalidInput(what) => write!(f, "잘못된 입력: {what}"),
            CalcError::InvalidRatioFormat(raw) => {
                write!(f, "잘못된 비율 형식: {raw} (예: 10:20:10)")
            }
        }
    }
}

impl std::error::Error for CalcError {}
