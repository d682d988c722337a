//! 단위 변환 테이블 회귀 테스트.
use farm_helper_toolbox::conversion::{
    convert, convert_field, convert_named, named_conversions, ConversionError, FieldOutcome,
    FieldUnit,
};
use farm_helper_toolbox::quantity::QuantityKind;

#[test]
fn field_milliliter_to_liter() {
    let outcome = convert_field(1000.0, FieldUnit::Milliliter, FieldUnit::Liter).expect("convert");
    match outcome {
        FieldOutcome::Converted { factor, result } => {
            assert_eq!(factor, 0.001);
            assert_eq!(result, 1.0);
        }
        other => panic!("expected Converted, got {other:?}"),
    }
}

#[test]
fn field_liter_to_milliliter() {
    let outcome = convert_field(1.0, FieldUnit::Liter, FieldUnit::Milliliter).expect("convert");
    assert!(matches!(
        outcome,
        FieldOutcome::Converted { result, .. } if result == 1000.0
    ));
}

#[test]
fn field_same_unit_is_noop_for_every_unit() {
    for unit in FieldUnit::all() {
        let outcome = convert_field(7.5, *unit, *unit).expect("convert");
        assert_eq!(outcome, FieldOutcome::SameUnit { value: 7.5 });
    }
}

#[test]
fn field_unregistered_pair_is_unsupported() {
    // 체적↔면적 교차 변환은 테이블에 없다.
    let err = convert_field(1.0, FieldUnit::Liter, FieldUnit::Hectare).unwrap_err();
    assert!(matches!(
        err,
        ConversionError::UnsupportedConversion {
            from: FieldUnit::Liter,
            to: FieldUnit::Hectare,
        }
    ));
}

#[test]
fn generic_hectare_to_acre() {
    let acres = convert(QuantityKind::Area, 1.0, "ha", "acre").expect("convert");
    assert!((acres - 2.47105).abs() < 1e-3);
}

#[test]
fn generic_unknown_unit_string() {
    let err = convert(QuantityKind::Volume, 1.0, "bushel", "L").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit(_)));
}

#[test]
fn named_conversion_applies_factor() {
    let feet = convert_named(QuantityKind::Length, "meters to feet", 2.0).expect("convert");
    assert!((feet - 6.56168).abs() < 1e-4);
}

#[test]
fn named_conversion_name_is_case_insensitive() {
    let ml = convert_named(QuantityKind::Volume, "Liters to Milliliters", 1.5).expect("convert");
    assert_eq!(ml, 1500.0);
}

#[test]
fn named_conversion_unknown_name() {
    let err = convert_named(QuantityKind::Weight, "stones to kilograms", 1.0).unwrap_err();
    assert!(matches!(err, ConversionError::UnknownConversion(_)));
}

#[test]
fn named_tables_have_reciprocal_pairs() {
    // ha↔acre가 서로 역수에 가깝게 작성돼 있는지 확인한다.
    let table = named_conversions(QuantityKind::Area);
    let forward = table.iter().find(|c| c.name == "hectares to acres").unwrap();
    let backward = table.iter().find(|c| c.name == "acres to hectares").unwrap();
    assert!((forward.factor * backward.factor - 1.0).abs() < 1e-4);
}
