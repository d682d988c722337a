use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_DOSAGE: &str = "main_menu.dosage";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_MIXING: &str = "main_menu.mixing";
    pub const MAIN_MENU_DILUTION: &str = "main_menu.dilution";
    pub const MAIN_MENU_HISTORY: &str = "main_menu.history";
    pub const MAIN_MENU_SNAPSHOT: &str = "main_menu.snapshot";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const DOSAGE_HEADING: &str = "dosage.heading";
    pub const PROMPT_TOTAL_AREA: &str = "dosage.prompt_total_area";
    pub const PROMPT_TOTAL_CHEMICAL: &str = "dosage.prompt_total_chemical";
    pub const PROMPT_DESIRED_AREA: &str = "dosage.prompt_desired_area";
    pub const DOSAGE_RESULT: &str = "dosage.result";
    pub const DOSAGE_PER_HA: &str = "dosage.per_ha";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_MODES: &str = "unit_conversion.modes";
    pub const FIELD_UNIT_OPTIONS: &str = "unit_conversion.field_unit_options";
    pub const PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const CONVERSION_SAME_UNIT: &str = "unit_conversion.same_unit";
    pub const QUANTITY_OPTIONS: &str = "unit_conversion.quantity_options";
    pub const PROMPT_QUANTITY: &str = "unit_conversion.prompt_quantity";
    pub const NAMED_LIST_HEADING: &str = "unit_conversion.named_list_heading";
    pub const PROMPT_CONVERSION_NAME: &str = "unit_conversion.prompt_conversion_name";
    pub const PROMPT_SELECT: &str = "prompt.select";

    pub const MIXING_HEADING: &str = "mixing.heading";
    pub const PROMPT_TOTAL_VOLUME: &str = "mixing.prompt_total_volume";
    pub const PROMPT_RATIO: &str = "mixing.prompt_ratio";
    pub const MIXING_RESULT: &str = "mixing.result";

    pub const DILUTION_HEADING: &str = "dilution.heading";
    pub const PROMPT_CHEMICAL_VOLUME: &str = "dilution.prompt_chemical_volume";
    pub const PROMPT_DILUTION_RATE: &str = "dilution.prompt_dilution_rate";
    pub const DILUTION_RESULT: &str = "dilution.result";

    pub const HISTORY_HEADING: &str = "history.heading";
    pub const HISTORY_EMPTY: &str = "history.empty";
    pub const HISTORY_COLUMNS: &str = "history.columns";

    pub const SNAPSHOT_HEADING: &str = "snapshot.heading";
    pub const PROMPT_SNAPSHOT_NAME: &str = "snapshot.prompt_name";
    pub const SNAPSHOT_SAVED: &str = "snapshot.saved";
    pub const SNAPSHOT_LIST: &str = "snapshot.list";
    pub const SNAPSHOT_EMPTY_NAME: &str = "snapshot.empty_name";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANG_OPTIONS: &str = "settings.lang_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Farm Helper Toolbox ===",
        MAIN_MENU_DOSAGE => "1) 약제 투여량 계산기",
        MAIN_MENU_UNIT_CONVERSION => "2) 단위 변환기",
        MAIN_MENU_MIXING => "3) 비료 혼합 비율",
        MAIN_MENU_DILUTION => "4) 희석수량 계산",
        MAIN_MENU_HISTORY => "5) 계산 기록",
        MAIN_MENU_SNAPSHOT => "6) 설정 스냅샷 저장",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        DOSAGE_HEADING => "\n-- 약제 투여량 --",
        PROMPT_TOTAL_AREA => "권장 기준 면적 [ha] (예: 10): ",
        PROMPT_TOTAL_CHEMICAL => "권장 기준 약제량 [L] (예: 1): ",
        PROMPT_DESIRED_AREA => "살포할 면적 [ha] (예: 3): ",
        DOSAGE_RESULT => "필요 약제량:",
        DOSAGE_PER_HA => "헥타르당 약제량:",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_MODES => "1) 농작업 단위 (L/mL/ha/acre)  2) 일반 변환 (카테고리별)",
        FIELD_UNIT_OPTIONS => "단위: 1=L 2=mL 3=ha 4=acre",
        PROMPT_FROM_UNIT => "입력 단위 선택: ",
        PROMPT_TO_UNIT => "변환 단위 선택: ",
        PROMPT_VALUE => "값 입력: ",
        CONVERSION_RESULT => "변환 결과:",
        CONVERSION_SAME_UNIT => "같은 단위입니다. 변환이 필요 없습니다.",
        QUANTITY_OPTIONS => "카테고리: 1=길이 2=면적 3=체적 4=무게",
        PROMPT_QUANTITY => "카테고리 번호 입력: ",
        NAMED_LIST_HEADING => "사용 가능한 변환:",
        PROMPT_CONVERSION_NAME => "변환 번호 입력: ",
        PROMPT_SELECT => "선택: ",
        MIXING_HEADING => "\n-- 비료 혼합 비율 --",
        PROMPT_TOTAL_VOLUME => "전체 혼합 체적 [L]: ",
        PROMPT_RATIO => "비율 입력 (예: 10:20:10): ",
        MIXING_RESULT => "파트별 혼합량 [L]:",
        DILUTION_HEADING => "\n-- 희석수량 --",
        PROMPT_CHEMICAL_VOLUME => "약제 체적 [L]: ",
        PROMPT_DILUTION_RATE => "희석 배수 (예: 100): ",
        DILUTION_RESULT => "필요한 물의 양:",
        HISTORY_HEADING => "\n-- 계산 기록 --",
        HISTORY_EMPTY => "아직 기록이 없습니다.",
        HISTORY_COLUMNS => "시각 | 종류 | 요약",
        SNAPSHOT_HEADING => "\n-- 설정 스냅샷 --",
        PROMPT_SNAPSHOT_NAME => "저장할 이름 (취소하려면 엔터): ",
        SNAPSHOT_SAVED => "스냅샷을 저장했습니다:",
        SNAPSHOT_LIST => "저장된 스냅샷:",
        SNAPSHOT_EMPTY_NAME => "이름이 비어 있어 저장하지 않습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_LANG_OPTIONS => "1) 한국어  2) English  3) 자동(시스템)",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어 설정이 저장되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Farm Helper Toolbox ===",
        MAIN_MENU_DOSAGE => "1) Chemical Dosage Calculator",
        MAIN_MENU_UNIT_CONVERSION => "2) Unit Converter",
        MAIN_MENU_MIXING => "3) Fertilizer Mixing Ratio",
        MAIN_MENU_DILUTION => "4) Water Requirements",
        MAIN_MENU_HISTORY => "5) Calculation History",
        MAIN_MENU_SNAPSHOT => "6) Save Settings Snapshot",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        DOSAGE_HEADING => "\n-- Chemical Dosage --",
        PROMPT_TOTAL_AREA => "Total area recommended [ha] (e.g. 10): ",
        PROMPT_TOTAL_CHEMICAL => "Total chemical recommended [L] (e.g. 1): ",
        PROMPT_DESIRED_AREA => "Desired area [ha] (e.g. 3): ",
        DOSAGE_RESULT => "Required chemical:",
        DOSAGE_PER_HA => "Dosage per hectare:",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_MODES => "1) Farm units (L/mL/ha/acre)  2) General (by category)",
        FIELD_UNIT_OPTIONS => "Units: 1=L 2=mL 3=ha 4=acre",
        PROMPT_FROM_UNIT => "From unit: ",
        PROMPT_TO_UNIT => "To unit: ",
        PROMPT_VALUE => "Value: ",
        CONVERSION_RESULT => "Result:",
        CONVERSION_SAME_UNIT => "Units are the same. No conversion needed.",
        QUANTITY_OPTIONS => "Category: 1=Length 2=Area 3=Volume 4=Weight",
        PROMPT_QUANTITY => "Enter category number: ",
        NAMED_LIST_HEADING => "Available conversions:",
        PROMPT_CONVERSION_NAME => "Enter conversion number: ",
        PROMPT_SELECT => "Select: ",
        MIXING_HEADING => "\n-- Fertilizer Mixing Ratio --",
        PROMPT_TOTAL_VOLUME => "Total mix volume [L]: ",
        PROMPT_RATIO => "Ratio (e.g. 10:20:10): ",
        MIXING_RESULT => "Mixing amounts [L]:",
        DILUTION_HEADING => "\n-- Water Requirements --",
        PROMPT_CHEMICAL_VOLUME => "Chemical volume [L]: ",
        PROMPT_DILUTION_RATE => "Dilution rate (e.g. 100): ",
        DILUTION_RESULT => "Water needed:",
        HISTORY_HEADING => "\n-- Calculation History --",
        HISTORY_EMPTY => "No records yet.",
        HISTORY_COLUMNS => "Time | Kind | Summary",
        SNAPSHOT_HEADING => "\n-- Settings Snapshot --",
        PROMPT_SNAPSHOT_NAME => "Snapshot name (enter to cancel): ",
        SNAPSHOT_SAVED => "Snapshot saved:",
        SNAPSHOT_LIST => "Saved snapshots:",
        SNAPSHOT_EMPTY_NAME => "Empty name; nothing saved.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANG_OPTIONS => "1) Korean  2) English  3) Auto (system)",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language setting saved:",
        _ => return None,
    })
}
