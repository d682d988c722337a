use super::CalcError;

/// 약제 투여량 계산 입력.
#[derive(Debug, Clone)]
pub struct DosageInput {
    /// 권장 기준 면적 [ha]
    pub total_area_ha: f64,
    /// 권장 기준 약제량 [L]
    pub total_chemical_l: f64,
    /// 실제 살포할 면적 [ha]
    pub desired_area_ha: f64,
}

/// 약제 투여량 계산 결과.
#[derive(Debug, Clone)]
pub struct DosageResult {
    /// 헥타르당 약제량 [L/ha]
    pub dosage_per_ha: f64,
    /// 필요 약제량 [L]
    pub required_chemical_l: f64,
}

/// 권장 면적/약제량 비율을 원하는 면적으로 스케일링한다.
pub fn compute_dosage(input: DosageInput) -> Result<DosageResult, CalcError> {
    if input.total_area_ha <= 0.0 {
        return Err(CalcError::InvalidInput("기준 면적은 0보다 커야 합니다"));
    }
    if input.total_chemical_l <= 0.0 {
        return Err(CalcError::InvalidInput("기준 약제량은 0보다 커야 합니다"));
    }
    if input.desired_area_ha < 0.0 {
        return Err(CalcError::InvalidInput("살포 면적은 음수일 수 없습니다"));
    }
    let dosage_per_ha = input.total_chemical_l / input.total_area_ha;
    Ok(DosageResult {
        dosage_per_ha,
        required_chemical_l: dosage_per_ha * input.desired_area_ha,
    })
}
