use super::CalcError;

/// 콜론 구분 문자열에서 파싱한 정수 비율.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatioSpec {
    parts: Vec<u32>,
}

impl RatioSpec {
    /// "10:20:10" 형태의 문자열을 파싱한다.
    ///
    /// 각 파트는 정수여야 하고 합은 0보다 커야 한다. "0:10"처럼 일부 파트가
    /// 0인 것은 허용하지만 "0:0"처럼 합이 0이면 비율로서 의미가 없으므로
    /// 형식 오류로 처리한다. 파트 합이 u32 범위를 넘는 경우도 형식 오류다.
    pub fn parse(raw: &str) -> Result<Self, CalcError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CalcError::InvalidRatioFormat(raw.to_string()));
        }
        let parts = raw
            .split(':')
            .map(|p| p.trim().parse::<u32>())
            .collect::<Result<Vec<u32>, _>>()
            .map_err(|_| CalcError::InvalidRatioFormat(raw.to_string()))?;
        let total: u64 = parts.iter().map(|p| u64::from(*p)).sum();
        if total == 0 || total > u64::from(u32::MAX) {
            return Err(CalcError::InvalidRatioFormat(raw.to_string()));
        }
        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[u32] {
        &self.parts
    }

    /// 파트 합. 파싱 시 0이 아니고 u32 범위 안임을 보장한다.
    pub fn total_parts(&self) -> u32 {
        self.parts.iter().map(|p| u64::from(*p)).sum::<u64>() as u32
    }
}

/// 혼합 비율 계산 입력.
#[derive(Debug, Clone)]
pub struct MixingInput {
    /// 전체 혼합 체적 [L]
    pub total_volume_l: f64,
    /// 비율 문자열 (예: "10:20:10")
    pub ratio: String,
}

/// 혼합 비율 계산 결과.
#[derive(Debug, Clone)]
pub struct MixingResult {
    /// 파트별 혼합량 [L]. 입력 비율과 같은 순서.
    pub amounts_l: Vec<f64>,
    pub total_parts: u32,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 전체 체적을 비율 파트에 비례해 나눈다. 파트별 양은 소수 둘째 자리 반올림.
pub fn compute_mixing(input: MixingInput) -> Result<MixingResult, CalcError> {
    if input.total_volume_l < 0.0 {
        return Err(CalcError::InvalidInput("전체 체적은 음수일 수 없습니다"));
    }
    let spec = RatioSpec::parse(&input.ratio)?;
    let total_parts = spec.total_parts();
    let amounts_l = spec
        .parts()
        .iter()
        .map(|part| round2((f64::from(*part) / f64::from(total_parts)) * input.total_volume_l))
        .collect();
    Ok(MixingResult {
        amounts_l,
        total_parts,
    })
}
