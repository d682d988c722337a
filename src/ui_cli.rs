use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion::{self, FieldOutcome, FieldUnit};
use crate::dosing::{
    compute_dilution, compute_dosage, compute_mixing, DilutionInput, DosageInput, MixingInput,
};
use crate::history::{CalculationKind, CalculationRecord};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::session::Session;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Dosage,
    UnitConversion,
    Mixing,
    Dilution,
    History,
    Snapshot,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_DOSAGE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_MIXING));
    println!("{}", tr.t(keys::MAIN_MENU_DILUTION));
    println!("{}", tr.t(keys::MAIN_MENU_HISTORY));
    println!("{}", tr.t(keys::MAIN_MENU_SNAPSHOT));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Dosage),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Mixing),
            "4" => return Ok(MenuChoice::Dilution),
            "5" => return Ok(MenuChoice::History),
            "6" => return Ok(MenuChoice::Snapshot),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 약제 투여량 메뉴를 처리한다.
pub fn handle_dosage(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DOSAGE_HEADING));
    let total_area_ha = read_f64(tr, tr.t(keys::PROMPT_TOTAL_AREA))?;
    let total_chemical_l = read_f64(tr, tr.t(keys::PROMPT_TOTAL_CHEMICAL))?;
    let desired_area_ha = read_f64(tr, tr.t(keys::PROMPT_DESIRED_AREA))?;
    let input = DosageInput {
        total_area_ha,
        total_chemical_l,
        desired_area_ha,
    };
    match compute_dosage(input) {
        Ok(result) => {
            println!(
                "{} {:.4} L/ha",
                tr.t(keys::DOSAGE_PER_HA),
                result.dosage_per_ha
            );
            println!(
                "{} {:.2} L ({desired_area_ha} ha)",
                tr.t(keys::DOSAGE_RESULT),
                result.required_chemical_l
            );
            session.history.append(CalculationRecord::new(CalculationKind::Dosage {
                total_area_ha,
                total_chemical_l,
                desired_area_ha,
                required_chemical_l: result.required_chemical_l,
            }));
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(
    tr: &Translator,
    _cfg: &Config,
    session: &mut Session,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_MODES));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "2" => handle_named_conversion(tr, session),
        _ => handle_field_conversion(tr, session),
    }
}

/// 농작업 고정 단위(L/mL/ha/acre) 쌍 변환.
///
/// 같은 단위끼리의 no-op 변환은 안내 메시지만 출력하고 기록하지 않는다.
fn handle_field_conversion(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FIELD_UNIT_OPTIONS));
    let from = read_field_unit(tr, tr.t(keys::PROMPT_FROM_UNIT))?;
    let to = read_field_unit(tr, tr.t(keys::PROMPT_TO_UNIT))?;
    let value = read_f64(tr, tr.t(keys::PROMPT_VALUE))?;
    match conversion::convert_field(value, from, to) {
        Ok(FieldOutcome::SameUnit { .. }) => {
            println!("{}", tr.t(keys::CONVERSION_SAME_UNIT));
        }
        Ok(FieldOutcome::Converted { result, .. }) => {
            println!(
                "{} {value} {} = {result:.4} {}",
                tr.t(keys::CONVERSION_RESULT),
                from.label(),
                to.label()
            );
            session
                .history
                .append(CalculationRecord::new(CalculationKind::Conversion {
                    from_unit: from.label().to_string(),
                    to_unit: to.label().to_string(),
                    input_value: value,
                    converted_value: result,
                }));
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 카테고리별 이름 붙은 변환. from/to가 이름에 녹아 있어 항상 기록한다.
fn handle_named_conversion(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::QUANTITY_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::PROMPT_QUANTITY))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };
    let conversions = conversion::named_conversions(kind);
    println!("{}", tr.t(keys::NAMED_LIST_HEADING));
    for (i, c) in conversions.iter().enumerate() {
        println!("{}) {}", i + 1, c.name);
    }
    let chosen = loop {
        let sel = read_line(tr.t(keys::PROMPT_CONVERSION_NAME))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if n >= 1 && n <= conversions.len() {
                break &conversions[n - 1];
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };
    let value = read_f64(tr, tr.t(keys::PROMPT_VALUE))?;
    match conversion::convert_named(kind, chosen.name, value) {
        Ok(result) => {
            println!(
                "{} {value} → {result:.4} ({})",
                tr.t(keys::CONVERSION_RESULT),
                chosen.name
            );
            session
                .history
                .append(CalculationRecord::new(CalculationKind::Conversion {
                    from_unit: chosen.name.to_string(),
                    to_unit: String::new(),
                    input_value: value,
                    converted_value: result,
                }));
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Length),
        2 => Some(QuantityKind::Area),
        3 => Some(QuantityKind::Volume),
        4 => Some(QuantityKind::Weight),
        _ => None,
    }
}

/// 비료 혼합 비율 메뉴를 처리한다.
pub fn handle_mixing(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::MIXING_HEADING));
    let total_volume_l = read_f64(tr, tr.t(keys::PROMPT_TOTAL_VOLUME))?;
    let ratio = read_line(tr.t(keys::PROMPT_RATIO))?.trim().to_string();
    let input = MixingInput {
        total_volume_l,
        ratio: ratio.clone(),
    };
    match compute_mixing(input) {
        Ok(result) => {
            println!("{} {:?} ({ratio})", tr.t(keys::MIXING_RESULT), result.amounts_l);
            session
                .history
                .append(CalculationRecord::new(CalculationKind::Mixing {
                    total_volume_l,
                    ratio,
                    amounts_l: result.amounts_l,
                }));
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 희석수량 메뉴를 처리한다.
pub fn handle_dilution(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DILUTION_HEADING));
    let chemical_volume_l = read_f64(tr, tr.t(keys::PROMPT_CHEMICAL_VOLUME))?;
    let dilution_rate = read_f64(tr, tr.t(keys::PROMPT_DILUTION_RATE))?;
    let input = DilutionInput {
        chemical_volume_l,
        dilution_rate,
    };
    match compute_dilution(input) {
        Ok(result) => {
            println!(
                "{} {:.2} L ({chemical_volume_l} L × {dilution_rate})",
                tr.t(keys::DILUTION_RESULT),
                result.water_volume_l
            );
            session
                .history
                .append(CalculationRecord::new(CalculationKind::Dilution {
                    chemical_volume_l,
                    dilution_rate,
                    water_volume_l: result.water_volume_l,
                }));
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 계산 기록을 테이블로 출력한다.
pub fn handle_history(tr: &Translator, session: &Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HISTORY_HEADING));
    if session.history.is_empty() {
        println!("{}", tr.t(keys::HISTORY_EMPTY));
        return Ok(());
    }
    println!("{}", tr.t(keys::HISTORY_COLUMNS));
    for record in session.history.records() {
        println!(
            "{} | {} | {}",
            record.recorded_at.format("%H:%M:%S"),
            record.kind_label(),
            record.summary()
        );
    }
    Ok(())
}

/// 설정 스냅샷 저장 메뉴를 처리한다.
pub fn handle_snapshot(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SNAPSHOT_HEADING));
    let name = read_line(tr.t(keys::PROMPT_SNAPSHOT_NAME))?;
    let name = name.trim();
    if name.is_empty() {
        println!("{}", tr.t(keys::SNAPSHOT_EMPTY_NAME));
        return Ok(());
    }
    session.save_snapshot(name);
    println!("{} {name}", tr.t(keys::SNAPSHOT_SAVED));
    println!("{}", tr.t(keys::SNAPSHOT_LIST));
    for snap_name in session.snapshot_names() {
        if let Some(snap) = session.snapshot(snap_name) {
            println!(
                "  {snap_name} ({}, {} records)",
                snap.saved_at.format("%H:%M:%S"),
                snap.records.len()
            );
        }
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_LANG_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "ko".to_string(),
        "2" => "en".to_string(),
        "3" => "auto".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.language.clone()
        }
    };
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_field_unit(tr: &Translator, prompt: &str) -> Result<FieldUnit, AppError> {
    loop {
        let sel = read_line(prompt)?;
        match sel.trim() {
            "1" => return Ok(FieldUnit::Liter),
            "2" => return Ok(FieldUnit::Milliliter),
            "3" => return Ok(FieldUnit::Hectare),
            "4" => return Ok(FieldUnit::Acre),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}
