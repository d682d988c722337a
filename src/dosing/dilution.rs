use super::CalcError;

/// 희석수량 계산 입력.
#[derive(Debug, Clone)]
pub struct DilutionInput {
    /// 약제 체적 [L]
    pub chemical_volume_l: f64,
    /// 희석 배수. "1:100" 표기라도 값은 곱셈 배수 하나로 받는다.
    pub dilution_rate: f64,
}

/// 희석수량 계산 결과.
#[derive(Debug, Clone)]
pub struct DilutionResult {
    /// 필요한 물의 양 [L]
    pub water_volume_l: f64,
}

/// 약제 체적에 희석 배수를 곱해 필요한 물의 양을 구한다.
pub fn compute_dilution(input: DilutionInput) -> Result<DilutionResult, CalcError> {
    if input.dilution_rate <= 0.0 {
        return Err(CalcError::InvalidInput("희석 배수는 0보다 커야 합니다"));
    }
    if input.chemical_volume_l < 0.0 {
        return Err(CalcError::InvalidInput("약제 체적은 음수일 수 없습니다"));
    }
    Ok(DilutionResult {
        water_volume_l: input.chemical_volume_l * input.dilution_rate,
    })
}
