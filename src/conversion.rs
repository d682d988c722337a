use serde::{Deserialize, Serialize};

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 등록된 변환 계수가 없는 단위 쌍
    UnsupportedConversion { from: FieldUnit, to: FieldUnit },
    /// 등록되지 않은 변환 이름
    UnknownConversion(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::UnsupportedConversion { from, to } => {
                write!(f, "지원하지 않는 변환: {} → {}", from.label(), to.label())
            }
            ConversionError::UnknownConversion(name) => {
                write!(f, "등록되지 않은 변환: {name}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 농작업용 고정 단위 집합. 약제(L/mL)와 농지(ha/acre)만 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldUnit {
    Liter,
    Milliliter,
    Hectare,
    Acre,
}

impl FieldUnit {
    /// 전체 단위 목록. 메뉴/콤보박스 구성에 사용한다.
    pub fn all() -> &'static [FieldUnit] {
        &[
            FieldUnit::Liter,
            FieldUnit::Milliliter,
            FieldUnit::Hectare,
            FieldUnit::Acre,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldUnit::Liter => "L",
            FieldUnit::Milliliter => "mL",
            FieldUnit::Hectare => "ha",
            FieldUnit::Acre => "acre",
        }
    }
}

/// (from, to) 순서쌍 → 곱셈 계수. 역방향 쌍은 역수로 작성해 둔다.
const FIELD_CONVERSION_FACTORS: &[(FieldUnit, FieldUnit, f64)] = &[
    (FieldUnit::Liter, FieldUnit::Milliliter, 1000.0),
    (FieldUnit::Milliliter, FieldUnit::Liter, 0.001),
    (FieldUnit::Hectare, FieldUnit::Acre, 2.47105),
    (FieldUnit::Acre, FieldUnit::Hectare, 0.404686),
];

/// 농작업 단위 변환 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldOutcome {
    /// 입력 단위와 출력 단위가 같아 변환이 필요 없는 경우.
    SameUnit { value: f64 },
    /// 테이블의 계수를 적용한 경우.
    Converted { factor: f64, result: f64 },
}

/// 고정 단위 쌍 테이블을 조회해 변환한다.
///
/// 같은 단위면 조회 없이 `SameUnit`을 돌려주고, 서로 다른 단위인데
/// 계수가 등록되어 있지 않으면 `UnsupportedConversion` 오류가 된다.
pub fn convert_field(
    value: f64,
    from: FieldUnit,
    to: FieldUnit,
) -> Result<FieldOutcome, ConversionError> {
    if from == to {
        return Ok(FieldOutcome::SameUnit { value });
    }
    FIELD_CONVERSION_FACTORS
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, factor)| FieldOutcome::Converted {
            factor: *factor,
            result: value * factor,
        })
        .ok_or(ConversionError::UnsupportedConversion { from, to })
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `m`, `ha`, `L`, `kg`, `acre` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::Weight => {
            let from = parse_weight_unit(from_unit_str)?;
            let to = parse_weight_unit(to_unit_str)?;
            Ok(convert_weight(value, from, to))
        }
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "cm" => Ok(LengthUnit::Centimeter),
        "km" => Ok(LengthUnit::Kilometer),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "ha" | "hectare" => Ok(AreaUnit::Hectare),
        "ac" | "acre" => Ok(AreaUnit::Acre),
        "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "ml" | "milliliter" => Ok(VolumeUnit::Milliliter),
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "gal" | "gallon" => Ok(VolumeUnit::GallonUs),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_weight_unit(s: &str) -> Result<WeightUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg" => Ok(WeightUnit::Kilogram),
        "g" | "gram" => Ok(WeightUnit::Gram),
        "t" | "ton" | "tonne" => Ok(WeightUnit::Tonne),
        "lb" | "lbs" => Ok(WeightUnit::Pound),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 이름 붙은 방향성 변환. from/to가 이름에 녹아 있어 계수 하나로 끝난다.
#[derive(Debug, Clone, Copy)]
pub struct NamedConversion {
    pub name: &'static str,
    pub factor: f64,
}

const LENGTH_CONVERSIONS: &[NamedConversion] = &[
    NamedConversion { name: "meters to feet", factor: 3.28084 },
    NamedConversion { name: "feet to meters", factor: 0.3048 },
    NamedConversion { name: "kilometers to miles", factor: 0.621371 },
    NamedConversion { name: "miles to kilometers", factor: 1.60934 },
];

const AREA_CONVERSIONS: &[NamedConversion] = &[
    NamedConversion { name: "hectares to acres", factor: 2.47105 },
    NamedConversion { name: "acres to hectares", factor: 0.404686 },
    NamedConversion { name: "hectares to square meters", factor: 10_000.0 },
    NamedConversion { name: "square meters to hectares", factor: 0.0001 },
];

const VOLUME_CONVERSIONS: &[NamedConversion] = &[
    NamedConversion { name: "liters to milliliters", factor: 1000.0 },
    NamedConversion { name: "milliliters to liters", factor: 0.001 },
    NamedConversion { name: "liters to gallons (US)", factor: 0.264172 },
    NamedConversion { name: "gallons (US) to liters", factor: 3.78541 },
];

const WEIGHT_CONVERSIONS: &[NamedConversion] = &[
    NamedConversion { name: "kilograms to pounds", factor: 2.20462 },
    NamedConversion { name: "pounds to kilograms", factor: 0.453592 },
    NamedConversion { name: "tonnes to kilograms", factor: 1000.0 },
    NamedConversion { name: "grams to kilograms", factor: 0.001 },
];

/// 물리량별 이름 붙은 변환 목록을 반환한다.
pub fn named_conversions(kind: QuantityKind) -> &'static [NamedConversion] {
    match kind {
        QuantityKind::Length => LENGTH_CONVERSIONS,
        QuantityKind::Area => AREA_CONVERSIONS,
        QuantityKind::Volume => VOLUME_CONVERSIONS,
        QuantityKind::Weight => WEIGHT_CONVERSIONS,
    }
}

/// 이름으로 변환 계수를 찾아 적용한다.
pub fn convert_named(
    kind: QuantityKind,
    name: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    named_conversions(kind)
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
        .map(|c| value * c.factor)
        .ok_or_else(|| ConversionError::UnknownConversion(name.trim().to_string()))
}
