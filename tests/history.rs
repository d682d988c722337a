//! 세션 기록/스냅샷 회귀 테스트.
use farm_helper_toolbox::dosing::{compute_dosage, DosageInput};
use farm_helper_toolbox::history::{CalculationKind, CalculationRecord};
use farm_helper_toolbox::session::Session;

fn dosage_record(desired_area_ha: f64) -> CalculationRecord {
    CalculationRecord::new(CalculationKind::Dosage {
        total_area_ha: 10.0,
        total_chemical_l: 1.0,
        desired_area_ha,
        required_chemical_l: 0.1 * desired_area_ha,
    })
}

#[test]
fn append_preserves_call_order() {
    let mut session = Session::new();
    for i in 0..5 {
        session.history.append(dosage_record(f64::from(i)));
    }
    assert_eq!(session.history.len(), 5);
    for (i, record) in session.history.records().iter().enumerate() {
        match record.kind {
            CalculationKind::Dosage { desired_area_ha, .. } => {
                assert_eq!(desired_area_ha, i as f64);
            }
            ref other => panic!("unexpected kind: {other:?}"),
        }
    }
}

#[test]
fn failed_calculation_appends_nothing() {
    // 핸들러는 계산이 Ok일 때만 기록한다. 실패 경로를 그대로 재현한다.
    let mut session = Session::new();
    let result = compute_dosage(DosageInput {
        total_area_ha: 0.0,
        total_chemical_l: 1.0,
        desired_area_ha: 3.0,
    });
    if let Ok(res) = result {
        session.history.append(CalculationRecord::new(CalculationKind::Dosage {
            total_area_ha: 0.0,
            total_chemical_l: 1.0,
            desired_area_ha: 3.0,
            required_chemical_l: res.required_chemical_l,
        }));
    }
    assert!(session.history.is_empty());
}

#[test]
fn snapshot_copies_history_at_save_time() {
    let mut session = Session::new();
    session.history.append(dosage_record(1.0));
    session.history.append(dosage_record(2.0));
    session.save_snapshot("before");

    session.history.append(dosage_record(3.0));

    let snap = session.snapshot("before").expect("snapshot");
    assert_eq!(snap.records.len(), 2);
    assert_eq!(session.history.len(), 3);
}

#[test]
fn snapshot_same_name_overwrites() {
    let mut session = Session::new();
    session.history.append(dosage_record(1.0));
    session.save_snapshot("mine");
    session.history.append(dosage_record(2.0));
    session.save_snapshot("mine");

    let snap = session.snapshot("mine").expect("snapshot");
    assert_eq!(snap.records.len(), 2);
    assert_eq!(session.snapshot_names(), vec!["mine"]);
}

#[test]
fn snapshot_names_are_sorted_for_display() {
    let mut session = Session::new();
    session.save_snapshot("b");
    session.save_snapshot("a");
    session.save_snapshot("c");
    assert_eq!(session.snapshot_names(), vec!["a", "b", "c"]);
}

#[test]
fn record_summary_mentions_inputs() {
    let record = dosage_record(3.0);
    assert_eq!(record.kind_label(), "Dosage");
    let summary = record.summary();
    assert!(summary.contains("3 ha"), "summary: {summary}");
}
