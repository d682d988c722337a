use serde::{Deserialize, Serialize};

/// 체적 단위. 약제/물 취급이 중심이므로 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liter,
    Milliliter,
    CubicMeter,
    GallonUs,
}

fn to_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::Milliliter => value / 1000.0,
        VolumeUnit::CubicMeter => value * 1000.0,
        VolumeUnit::GallonUs => value * 3.78541,
    }
}

fn from_liter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => value,
        VolumeUnit::Milliliter => value * 1000.0,
        VolumeUnit::CubicMeter => value / 1000.0,
        VolumeUnit::GallonUs => value / 3.78541,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let l = to_liter(value, from);
    from_liter(l, to)
}
