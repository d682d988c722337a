//! 투여량/혼합/희석 계산 회귀 테스트.
use farm_helper_toolbox::dosing::{
    compute_dilution, compute_dosage, compute_mixing, CalcError, DilutionInput, DosageInput,
    MixingInput, RatioSpec,
};

#[test]
fn dosage_scales_recommended_ratio() {
    let res = compute_dosage(DosageInput {
        total_area_ha: 10.0,
        total_chemical_l: 1.0,
        desired_area_ha: 3.0,
    })
    .expect("dosage calc");
    assert_eq!(res.dosage_per_ha, 0.1);
    assert_eq!(res.required_chemical_l, 0.1 * 3.0);
}

#[test]
fn dosage_zero_desired_area_is_valid() {
    let res = compute_dosage(DosageInput {
        total_area_ha: 5.0,
        total_chemical_l: 2.0,
        desired_area_ha: 0.0,
    })
    .expect("dosage calc");
    assert_eq!(res.required_chemical_l, 0.0);
}

#[test]
fn dosage_rejects_zero_base_inputs() {
    let err = compute_dosage(DosageInput {
        total_area_ha: 0.0,
        total_chemical_l: 1.0,
        desired_area_ha: 3.0,
    })
    .unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput(_)));

    let err = compute_dosage(DosageInput {
        total_area_ha: 10.0,
        total_chemical_l: 0.0,
        desired_area_ha: 3.0,
    })
    .unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput(_)));
}

#[test]
fn mixing_splits_volume_in_ratio_order() {
    let res = compute_mixing(MixingInput {
        total_volume_l: 40.0,
        ratio: "10:20:10".to_string(),
    })
    .expect("mixing calc");
    assert_eq!(res.total_parts, 40);
    assert_eq!(res.amounts_l, vec![10.0, 20.0, 10.0]);
}

#[test]
fn mixing_rounds_amounts_to_two_decimals() {
    let res = compute_mixing(MixingInput {
        total_volume_l: 1.0,
        ratio: "1:2".to_string(),
    })
    .expect("mixing calc");
    assert_eq!(res.amounts_l, vec![0.33, 0.67]);
}

#[test]
fn mixing_rejects_non_integer_ratio() {
    let err = compute_mixing(MixingInput {
        total_volume_l: 40.0,
        ratio: "a:b".to_string(),
    })
    .unwrap_err();
    assert!(matches!(err, CalcError::InvalidRatioFormat(_)));
}

#[test]
fn mixing_rejects_zero_sum_ratio() {
    // "0:0"은 합이 0이라 나눌 수 없으므로 형식 오류로 처리한다.
    let err = compute_mixing(MixingInput {
        total_volume_l: 40.0,
        ratio: "0:0".to_string(),
    })
    .unwrap_err();
    assert!(matches!(err, CalcError::InvalidRatioFormat(_)));
}

#[test]
fn mixing_rejects_ratio_sum_beyond_u32() {
    // 각 파트는 u32에 들어가지만 합이 u32::MAX를 넘는 경우.
    let err = compute_mixing(MixingInput {
        total_volume_l: 40.0,
        ratio: "4000000000:1000000000".to_string(),
    })
    .unwrap_err();
    assert!(matches!(err, CalcError::InvalidRatioFormat(_)));
}

#[test]
fn ratio_spec_allows_zero_parts_with_positive_sum() {
    let spec = RatioSpec::parse("0:10").expect("ratio parse");
    assert_eq!(spec.parts(), &[0, 10]);
    assert_eq!(spec.total_parts(), 10);
}

#[test]
fn ratio_spec_rejects_empty_and_negative() {
    assert!(RatioSpec::parse("").is_err());
    assert!(RatioSpec::parse("10:-5").is_err());
    assert!(RatioSpec::parse("10:").is_err());
}

#[test]
fn dilution_multiplies_by_rate() {
    let res = compute_dilution(DilutionInput {
        chemical_volume_l: 2.0,
        dilution_rate: 100.0,
    })
    .expect("dilution calc");
    assert_eq!(res.water_volume_l, 200.0);
}

#[test]
fn dilution_rejects_non_positive_rate() {
    let err = compute_dilution(DilutionInput {
        chemical_volume_l: 2.0,
        dilution_rate: 0.0,
    })
    .unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput(_)));
}
