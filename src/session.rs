use std::collections::HashMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::history::{CalculationRecord, HistoryLog};

/// 저장 시점의 기록 시퀀스 사본.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    pub saved_at: DateTime<Local>,
    pub records: Vec<CalculationRecord>,
}

/// 대화형 세션 하나의 상태. 세션 시작 시 만들고 종료 시 버린다.
///
/// 기록 로그와 이름별 설정 스냅샷만 담는다. 세션 간 공유는 없으므로
/// 잠금 없이 순차 접근만으로 충분하다.
#[derive(Debug, Default)]
pub struct Session {
    pub history: HistoryLog,
    snapshots: HashMap<String, SettingsSnapshot>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 기록 시퀀스를 복사해 이름으로 저장한다. 같은 이름은 덮어쓴다.
    ///
    /// 복원 연산은 없다. 저장된 스냅샷은 조회/표시 용도로만 쓴다.
    pub fn save_snapshot(&mut self, name: &str) {
        self.snapshots.insert(
            name.to_string(),
            SettingsSnapshot {
                saved_at: Local::now(),
                records: self.history.records().to_vec(),
            },
        );
    }

    pub fn snapshot(&self, name: &str) -> Option<&SettingsSnapshot> {
        self.snapshots.get(name)
    }

    /// 저장된 스냅샷 이름 목록 (표시용, 이름순 정렬).
    pub fn snapshot_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.snapshots.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
