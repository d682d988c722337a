use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// 계산 종류와 종류별 입력/결과 값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalculationKind {
    Dosage {
        total_area_ha: f64,
        total_chemical_l: f64,
        desired_area_ha: f64,
        required_chemical_l: f64,
    },
    Conversion {
        from_unit: String,
        to_unit: String,
        input_value: f64,
        converted_value: f64,
    },
    Mixing {
        total_volume_l: f64,
        ratio: String,
        amounts_l: Vec<f64>,
    },
    Dilution {
        chemical_volume_l: f64,
        dilution_rate: f64,
        water_volume_l: f64,
    },
}

/// 성공한 계산 한 건을 담는 불변 기록.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub recorded_at: DateTime<Local>,
    pub kind: CalculationKind,
}

impl CalculationRecord {
    /// 현재 시각 타임스탬프로 기록을 만든다.
    pub fn new(kind: CalculationKind) -> Self {
        Self {
            recorded_at: Local::now(),
            kind,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            CalculationKind::Dosage { .. } => "Dosage",
            CalculationKind::Conversion { .. } => "Conversion",
            CalculationKind::Mixing { .. } => "Mixing",
            CalculationKind::Dilution { .. } => "Dilution",
        }
    }

    /// 기록 테이블에 보여줄 한 줄 요약.
    pub fn summary(&self) -> String {
        match &self.kind {
            CalculationKind::Dosage {
                total_area_ha,
                total_chemical_l,
                desired_area_ha,
                required_chemical_l,
            } => format!(
                "{total_chemical_l} L / {total_area_ha} ha × {desired_area_ha} ha → {required_chemical_l:.2} L"
            ),
            CalculationKind::Conversion {
                from_unit,
                to_unit,
                input_value,
                converted_value,
            } => format!("{input_value} {from_unit} → {converted_value:.4} {to_unit}"),
            CalculationKind::Mixing {
                total_volume_l,
                ratio,
                amounts_l,
            } => format!("{total_volume_l} L @ {ratio} → {amounts_l:?} L"),
            CalculationKind::Dilution {
                chemical_volume_l,
                dilution_rate,
                water_volume_l,
            } => format!(
                "{chemical_volume_l} L × {dilution_rate} → 물 {water_volume_l:.2} L"
            ),
        }
    }
}

/// 세션 동안 유지되는 append 전용 계산 기록 로그.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    records: Vec<CalculationRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 기록을 뒤에 붙인다. 항상 성공하며 호출 순서를 보존한다.
    pub fn append(&mut self, record: CalculationRecord) {
        self.records.push(record);
    }

    /// 전체 기록을 삽입 순서대로 반환한다. 삭제/검색 연산은 없다.
    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
