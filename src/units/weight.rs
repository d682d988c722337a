use serde::{Deserialize, Serialize};

/// 무게 단위. 내부 기준은 킬로그램이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Tonne,
    Pound,
}

fn to_kilogram(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilogram => value,
        WeightUnit::Gram => value / 1000.0,
        WeightUnit::Tonne => value * 1000.0,
        WeightUnit::Pound => value * 0.453592,
    }
}

fn from_kilogram(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilogram => value,
        WeightUnit::Gram => value * 1000.0,
        WeightUnit::Tonne => value / 1000.0,
        WeightUnit::Pound => value / 0.453592,
    }
}

/// 무게를 변환한다.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    let kg = to_kilogram(value, from);
    from_kilogram(kg, to)
}
