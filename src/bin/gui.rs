#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use farm_helper_toolbox::{
    config, conversion,
    conversion::{FieldOutcome, FieldUnit},
    dosing::{compute_dilution, compute_dosage, compute_mixing, DilutionInput, DosageInput, MixingInput},
    history::{CalculationKind, CalculationRecord},
    i18n,
    quantity::QuantityKind,
    session::Session,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Farm Helper Toolbox",
        native_options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래 ttf
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    // 2) 시스템 폰트 탐색 (Windows 기준)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    session: Session,
    lang_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    // 약제 투여량
    dose_total_area: f64,
    dose_total_chemical: f64,
    dose_desired_area: f64,
    dose_result: Option<String>,
    // 단위 변환
    conv_mode: ConvMode,
    conv_value: f64,
    conv_from: FieldUnit,
    conv_to: FieldUnit,
    conv_kind: QuantityKind,
    conv_named_index: usize,
    conv_result: Option<String>,
    // 혼합 비율
    mix_total_volume: f64,
    mix_ratio: String,
    mix_result: Option<String>,
    // 희석수량
    dil_chemical_volume: f64,
    dil_rate: f64,
    dil_result: Option<String>,
    // 기록/스냅샷
    snapshot_name: String,
    snapshot_status: Option<String>,
    // 설정
    font_size: f32,
    ui_scale: f32,
    show_settings_modal: bool,
    show_help_modal: bool,
    theme: ThemeChoice,
    custom_font_path: String,
    font_load_error: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Dosage,
    UnitConv,
    Mixing,
    Dilution,
    History,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ThemeChoice {
    System,
    Light,
    Dark,
    SoftGreen,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ConvMode {
    FarmUnits,
    ByCategory,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        Self {
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config,
            tr,
            session: Session::new(),
            lang_input,
            lang_save_status: None,
            tab: Tab::Dosage,
            dose_total_area: 10.0,
            dose_total_chemical: 1.0,
            dose_desired_area: 3.0,
            dose_result: None,
            conv_mode: ConvMode::FarmUnits,
            conv_value: 1.0,
            conv_from: FieldUnit::Liter,
            conv_to: FieldUnit::Milliliter,
            conv_kind: QuantityKind::Volume,
            conv_named_index: 0,
            conv_result: None,
            mix_total_volume: 40.0,
            mix_ratio: "10:20:10".to_string(),
            mix_result: None,
            dil_chemical_volume: 2.0,
            dil_rate: 100.0,
            dil_result: None,
            snapshot_name: String::new(),
            snapshot_status: None,
            font_size: 16.0,
            ui_scale: 1.0,
            show_settings_modal: false,
            show_help_modal: false,
            theme: ThemeChoice::SoftGreen,
            custom_font_path: String::new(),
            font_load_error: None,
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Dosage, txt("gui.tab.dosage", "Chemical Dosage")),
            (Tab::UnitConv, txt("gui.tab.unit_conv", "Unit Converter")),
            (Tab::Mixing, txt("gui.tab.mixing", "Fertilizer Mixer")),
            (Tab::Dilution, txt("gui.tab.dilution", "Water Requirements")),
            (Tab::History, txt("gui.tab.history", "History")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch menu"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
        ui.add_space(12.0);
        if ui.button(txt("gui.nav.settings", "Settings")).clicked() {
            self.show_settings_modal = true;
        }
        if ui.button(txt("gui.nav.help", "Help")).clicked() {
            self.show_help_modal = true;
        }
    }

    fn ui_dosage(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.dosage.heading", "Chemical Dosage Calculator"),
            &txt(
                "gui.dosage.tip",
                "Scale a recommended chemical/area ratio to your field size.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                egui::Grid::new("dosage_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label_with_tip(
                            ui,
                            &txt("gui.dosage.total_area", "Total area recommended [ha]"),
                            &txt("gui.dosage.total_area_tip", "Area the label recommendation covers"),
                        );
                        ui.add(egui::DragValue::new(&mut self.dose_total_area).speed(0.1));
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.dosage.total_chemical", "Total chemical recommended [L]"),
                            &txt("gui.dosage.total_chemical_tip", "Chemical amount for that area"),
                        );
                        ui.add(egui::DragValue::new(&mut self.dose_total_chemical).speed(0.01));
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.dosage.desired_area", "Desired area [ha]"),
                            &txt("gui.dosage.desired_area_tip", "Area you actually want to spray"),
                        );
                        ui.add(egui::DragValue::new(&mut self.dose_desired_area).speed(0.1));
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button(txt("gui.dosage.run", "Calculate")).clicked() {
                    let input = DosageInput {
                        total_area_ha: self.dose_total_area,
                        total_chemical_l: self.dose_total_chemical,
                        desired_area_ha: self.dose_desired_area,
                    };
                    self.dose_result = match compute_dosage(input) {
                        Ok(res) => {
                            self.session.history.append(CalculationRecord::new(
                                CalculationKind::Dosage {
                                    total_area_ha: self.dose_total_area,
                                    total_chemical_l: self.dose_total_chemical,
                                    desired_area_ha: self.dose_desired_area,
                                    required_chemical_l: res.required_chemical_l,
                                },
                            ));
                            Some(format!(
                                "{} {:.2} L ({:.4} L/ha)",
                                txt("gui.dosage.result", "Required:"),
                                res.required_chemical_l,
                                res.dosage_per_ha
                            ))
                        }
                        Err(e) => Some(format!("{}: {e}", txt("gui.error_prefix", "Error"))),
                    };
                }
                if let Some(res) = &self.dose_result {
                    ui.label(res);
                }
            });
        });
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.unit.heading", "Unit Converter"),
            &txt(
                "gui.unit.tip",
                "Convert between common units for chemicals, water, and land.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(
                    &mut self.conv_mode,
                    ConvMode::FarmUnits,
                    txt("gui.unit.mode.farm", "Farm units"),
                )
                .on_hover_text(txt("gui.unit.mode.farm_tip", "Fixed set: L, mL, ha, acre"));
                ui.selectable_value(
                    &mut self.conv_mode,
                    ConvMode::ByCategory,
                    txt("gui.unit.mode.category", "By category"),
                )
                .on_hover_text(txt(
                    "gui.unit.mode.category_tip",
                    "Named conversions per quantity category",
                ));
            });
            ui.add_space(6.0);
            match self.conv_mode {
                ConvMode::FarmUnits => self.ui_farm_units(ui, &txt),
                ConvMode::ByCategory => self.ui_named_conv(ui, &txt),
            }
            if let Some(res) = &self.conv_result {
                ui.label(res);
            }
        });
    }

    fn ui_farm_units<F>(&mut self, ui: &mut egui::Ui, txt: &F)
    where
        F: Fn(&str, &str) -> String,
    {
        egui::Grid::new("farm_conv_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                label_with_tip(
                    ui,
                    &txt("gui.unit.from", "From unit"),
                    &txt("gui.unit.from_tip", "Current unit of the value"),
                );
                egui::ComboBox::from_id_source("conv_from")
                    .selected_text(self.conv_from.label())
                    .show_ui(ui, |ui| {
                        for unit in FieldUnit::all() {
                            ui.selectable_value(&mut self.conv_from, *unit, unit.label());
                        }
                    });
                ui.end_row();

                label_with_tip(
                    ui,
                    &txt("gui.unit.to", "To unit"),
                    &txt("gui.unit.to_tip", "Desired unit after conversion"),
                );
                egui::ComboBox::from_id_source("conv_to")
                    .selected_text(self.conv_to.label())
                    .show_ui(ui, |ui| {
                        for unit in FieldUnit::all() {
                            ui.selectable_value(&mut self.conv_to, *unit, unit.label());
                        }
                    });
                ui.end_row();

                label_with_tip(
                    ui,
                    &txt("gui.unit.value", "Value"),
                    &txt("gui.unit.value_tip", "Enter the value to convert"),
                );
                ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                ui.end_row();
            });
        ui.add_space(8.0);
        if ui.button(txt("gui.unit.run", "Convert")).clicked() {
            self.conv_result = match conversion::convert_field(
                self.conv_value,
                self.conv_from,
                self.conv_to,
            ) {
                Ok(FieldOutcome::SameUnit { .. }) => Some(txt(
                    "gui.unit.same_unit",
                    "Units are the same. No conversion needed.",
                )),
                Ok(FieldOutcome::Converted { result, .. }) => {
                    self.session.history.append(CalculationRecord::new(
                        CalculationKind::Conversion {
                            from_unit: self.conv_from.label().to_string(),
                            to_unit: self.conv_to.label().to_string(),
                            input_value: self.conv_value,
                            converted_value: result,
                        },
                    ));
                    Some(format!(
                        "{} {} = {result:.4} {}",
                        self.conv_value,
                        self.conv_from.label(),
                        self.conv_to.label()
                    ))
                }
                Err(e) => Some(format!("{}: {e}", txt("gui.error_prefix", "Error"))),
            };
        }
    }

    fn ui_named_conv<F>(&mut self, ui: &mut egui::Ui, txt: &F)
    where
        F: Fn(&str, &str) -> String,
    {
        egui::Grid::new("named_conv_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                label_with_tip(
                    ui,
                    &txt("gui.unit.quantity_label", "Category"),
                    &txt("gui.unit.quantity_tip", "Select the quantity category"),
                );
                let before = self.conv_kind;
                let q_options = [
                    (QuantityKind::Length, txt("gui.unit.quantity.length", "Length")),
                    (QuantityKind::Area, txt("gui.unit.quantity.area", "Area")),
                    (QuantityKind::Volume, txt("gui.unit.quantity.volume", "Volume")),
                    (QuantityKind::Weight, txt("gui.unit.quantity.weight", "Weight")),
                ];
                let selected_label = q_options
                    .iter()
                    .find(|(k, _)| *k == self.conv_kind)
                    .map(|(_, l)| l.clone())
                    .unwrap_or_default();
                egui::ComboBox::from_id_source("conv_kind")
                    .selected_text(selected_label)
                    .show_ui(ui, |ui| {
                        for (k, label) in &q_options {
                            ui.selectable_value(&mut self.conv_kind, *k, label.clone());
                        }
                    });
                if before != self.conv_kind {
                    self.conv_named_index = 0;
                }
                ui.end_row();

                label_with_tip(
                    ui,
                    &txt("gui.unit.conversion", "Conversion"),
                    &txt("gui.unit.conversion_tip", "Named directional conversion"),
                );
                let conversions = conversion::named_conversions(self.conv_kind);
                let selected = conversions
                    .get(self.conv_named_index)
                    .map(|c| c.name)
                    .unwrap_or_default();
                egui::ComboBox::from_id_source("conv_named")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (i, c) in conversions.iter().enumerate() {
                            ui.selectable_value(&mut self.conv_named_index, i, c.name);
                        }
                    });
                ui.end_row();

                label_with_tip(
                    ui,
                    &txt("gui.unit.value", "Value"),
                    &txt("gui.unit.value_tip", "Enter the value to convert"),
                );
                ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                ui.end_row();
            });
        ui.add_space(8.0);
        if ui.button(txt("gui.unit.run", "Convert")).clicked() {
            let conversions = conversion::named_conversions(self.conv_kind);
            let name = conversions
                .get(self.conv_named_index)
                .map(|c| c.name)
                .unwrap_or_default();
            self.conv_result =
                match conversion::convert_named(self.conv_kind, name, self.conv_value) {
                    Ok(result) => {
                        self.session.history.append(CalculationRecord::new(
                            CalculationKind::Conversion {
                                from_unit: name.to_string(),
                                to_unit: String::new(),
                                input_value: self.conv_value,
                                converted_value: result,
                            },
                        ));
                        Some(format!("{} → {result:.4} ({name})", self.conv_value))
                    }
                    Err(e) => Some(format!("{}: {e}", txt("gui.error_prefix", "Error"))),
                };
        }
    }

    fn ui_mixing(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.mixing.heading", "Fertilizer Mixing Ratio"),
            &txt(
                "gui.mixing.tip",
                "Split a total volume into parts proportional to an integer ratio.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                egui::Grid::new("mixing_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label_with_tip(
                            ui,
                            &txt("gui.mixing.total_volume", "Total mix volume [L]"),
                            &txt("gui.mixing.total_volume_tip", "Tank volume to split"),
                        );
                        ui.add(egui::DragValue::new(&mut self.mix_total_volume).speed(0.5));
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.mixing.ratio", "Ratio"),
                            &txt("gui.mixing.ratio_tip", "Integers separated by colons, e.g. 10:20:10"),
                        );
                        ui.text_edit_singleline(&mut self.mix_ratio);
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button(txt("gui.mixing.run", "Calculate Ratio")).clicked() {
                    let input = MixingInput {
                        total_volume_l: self.mix_total_volume,
                        ratio: self.mix_ratio.trim().to_string(),
                    };
                    self.mix_result = match compute_mixing(input) {
                        Ok(res) => {
                            self.session.history.append(CalculationRecord::new(
                                CalculationKind::Mixing {
                                    total_volume_l: self.mix_total_volume,
                                    ratio: self.mix_ratio.trim().to_string(),
                                    amounts_l: res.amounts_l.clone(),
                                },
                            ));
                            Some(format!(
                                "{} {:?} L ({})",
                                txt("gui.mixing.result", "Mixing amounts:"),
                                res.amounts_l,
                                self.mix_ratio.trim()
                            ))
                        }
                        Err(e) => Some(format!("{}: {e}", txt("gui.error_prefix", "Error"))),
                    };
                }
                if let Some(res) = &self.mix_result {
                    ui.label(res);
                }
            });
        });
    }

    fn ui_dilution(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.dilution.heading", "Water Requirements"),
            &txt(
                "gui.dilution.tip",
                "Water needed to dilute a chemical volume at a given rate.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                egui::Grid::new("dilution_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label_with_tip(
                            ui,
                            &txt("gui.dilution.chemical_volume", "Chemical volume [L]"),
                            &txt("gui.dilution.chemical_volume_tip", "Undiluted chemical amount"),
                        );
                        ui.add(egui::DragValue::new(&mut self.dil_chemical_volume).speed(0.01));
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.dilution.rate", "Dilution rate"),
                            &txt(
                                "gui.dilution.rate_tip",
                                "Multiplier, e.g. 100 for a 1:100 dilution",
                            ),
                        );
                        ui.add(egui::DragValue::new(&mut self.dil_rate).speed(1.0));
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button(txt("gui.dilution.run", "Calculate Water")).clicked() {
                    let input = DilutionInput {
                        chemical_volume_l: self.dil_chemical_volume,
                        dilution_rate: self.dil_rate,
                    };
                    self.dil_result = match compute_dilution(input) {
                        Ok(res) => {
                            self.session.history.append(CalculationRecord::new(
                                CalculationKind::Dilution {
                                    chemical_volume_l: self.dil_chemical_volume,
                                    dilution_rate: self.dil_rate,
                                    water_volume_l: res.water_volume_l,
                                },
                            ));
                            Some(format!(
                                "{} {:.2} L",
                                txt("gui.dilution.result", "Water needed:"),
                                res.water_volume_l
                            ))
                        }
                        Err(e) => Some(format!("{}: {e}", txt("gui.error_prefix", "Error"))),
                    };
                }
                if let Some(res) = &self.dil_result {
                    ui.label(res);
                }
            });
        });
    }

    fn ui_history(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.history.heading", "Calculation History"),
            &txt(
                "gui.history.tip",
                "Every successful calculation in this session, in call order.",
            ),
        );
        ui.add_space(8.0);
        if self.session.history.is_empty() {
            ui.label(txt("gui.history.empty", "No records yet."));
        } else {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("history_grid")
                    .num_columns(3)
                    .striped(true)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        ui.strong(txt("gui.history.col_time", "Time"));
                        ui.strong(txt("gui.history.col_kind", "Kind"));
                        ui.strong(txt("gui.history.col_summary", "Summary"));
                        ui.end_row();
                        for record in self.session.history.records() {
                            ui.label(record.recorded_at.format("%H:%M:%S").to_string());
                            ui.label(record.kind_label());
                            ui.label(record.summary());
                            ui.end_row();
                        }
                    });
            });
        }
        ui.add_space(12.0);
        ui.separator();
        ui.label(txt(
            "gui.snapshot.label",
            "Save the current history as a named settings snapshot:",
        ));
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.snapshot_name);
            if ui.button(txt("gui.snapshot.save", "Save Snapshot")).clicked() {
                let name = self.snapshot_name.trim().to_string();
                if name.is_empty() {
                    self.snapshot_status =
                        Some(txt("gui.snapshot.empty_name", "Empty name; nothing saved."));
                } else {
                    self.session.save_snapshot(&name);
                    self.snapshot_status =
                        Some(format!("{} {name}", txt("gui.snapshot.saved", "Saved:")));
                }
            }
        });
        if let Some(status) = &self.snapshot_status {
            ui.label(status);
        }
        let names = self
            .session
            .snapshot_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        if !names.is_empty() {
            ui.add_space(4.0);
            ui.label(txt("gui.snapshot.list", "Saved snapshots:"));
            for name in names {
                if let Some(snap) = self.session.snapshot(&name) {
                    ui.small(format!(
                        "{name} — {} ({} records)",
                        snap.saved_at.format("%H:%M:%S"),
                        snap.records.len()
                    ));
                }
            }
        }
    }

    fn ui_settings_window(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut open = self.show_settings_modal;
        egui::Window::new(txt("gui.settings.title", "Settings"))
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(txt("gui.settings.language", "Language (auto/ko/en)"));
                        ui.text_edit_singleline(&mut self.lang_input);
                        ui.end_row();

                        ui.label(txt("gui.settings.theme", "Theme"));
                        ui.horizontal(|ui| {
                            ui.selectable_value(&mut self.theme, ThemeChoice::System, "System");
                            ui.selectable_value(&mut self.theme, ThemeChoice::Light, "Light");
                            ui.selectable_value(&mut self.theme, ThemeChoice::Dark, "Dark");
                            ui.selectable_value(
                                &mut self.theme,
                                ThemeChoice::SoftGreen,
                                "Soft Green",
                            );
                        });
                        ui.end_row();

                        ui.label(txt("gui.settings.font_size", "Font size"));
                        ui.add(egui::Slider::new(&mut self.font_size, 10.0..=24.0));
                        ui.end_row();

                        ui.label(txt("gui.settings.ui_scale", "UI scale"));
                        ui.add(egui::Slider::new(&mut self.ui_scale, 0.7..=1.8));
                        ui.end_row();

                        ui.label(txt("gui.settings.alpha", "Window transparency"));
                        ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0));
                        ui.end_row();
                    });
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui
                        .button(txt("gui.settings.pick_font", "Custom font..."))
                        .clicked()
                    {
                        if let Some(path) = FileDialog::new()
                            .add_filter("font", &["ttf", "ttc", "otf"])
                            .pick_file()
                        {
                            self.custom_font_path = path.display().to_string();
                            self.font_load_error =
                                load_custom_font(ctx, &self.custom_font_path).err();
                        }
                    }
                    if !self.custom_font_path.is_empty() {
                        ui.small(&self.custom_font_path);
                    }
                });
                if let Some(err) = &self.font_load_error {
                    ui.colored_label(egui::Color32::RED, err);
                }
                ui.add_space(8.0);
                if ui.button(txt("gui.settings.apply", "Apply & Save")).clicked() {
                    let resolved =
                        i18n::resolve_language(&self.lang_input, Some(self.config.language.as_str()));
                    self.config.language = self.lang_input.trim().to_string();
                    self.config.window_alpha = self.window_alpha;
                    self.tr = i18n::Translator::new_with_pack(
                        &resolved,
                        self.config.language_pack_dir.as_deref(),
                    );
                    self.lang_save_status = match self.config.save() {
                        Ok(()) => Some(txt("gui.settings.saved", "Saved.")),
                        Err(e) => Some(format!("{}: {e}", txt("gui.error_prefix", "Error"))),
                    };
                }
                if let Some(status) = &self.lang_save_status {
                    ui.label(status);
                }
            });
        self.show_settings_modal = open;
    }

    fn ui_help_window(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut open = self.show_help_modal;
        egui::Window::new(txt("gui.help.title", "Help"))
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(txt(
                    "gui.help.dosage",
                    "Dosage: required = (chemical / area) × desired area.",
                ));
                ui.label(txt(
                    "gui.help.unit",
                    "Unit converter: farm units use a fixed pair table; categories use named factors.",
                ));
                ui.label(txt(
                    "gui.help.mixing",
                    "Mixer: integer ratio like 10:20:10 splits the volume proportionally.",
                ));
                ui.label(txt(
                    "gui.help.dilution",
                    "Water: water = chemical volume × dilution rate.",
                ));
                ui.label(txt(
                    "gui.help.history",
                    "History keeps this session's successful calculations only.",
                ));
            });
        self.show_help_modal = open;
    }

    fn apply_style(&self, ctx: &egui::Context) {
        let mut visuals = match self.theme {
            ThemeChoice::System => {
                if ctx.style().visuals.dark_mode {
                    egui::Visuals::dark()
                } else {
                    egui::Visuals::light()
                }
            }
            ThemeChoice::Light => egui::Visuals::light(),
            ThemeChoice::Dark => egui::Visuals::dark(),
            ThemeChoice::SoftGreen => {
                let mut v = egui::Visuals::light();
                v.panel_fill = egui::Color32::from_rgb(236, 244, 234);
                v.window_fill = egui::Color32::from_rgb(244, 249, 242);
                v
            }
        };
        visuals.panel_fill = visuals.panel_fill.linear_multiply(self.window_alpha);
        visuals.window_fill = visuals.window_fill.linear_multiply(self.window_alpha);
        ctx.set_visuals(visuals);
        ctx.set_pixels_per_point(self.ui_scale);

        let mut style = (*ctx.style()).clone();
        let scale = self.font_size / 16.0;
        style.text_styles = egui::Style::default()
            .text_styles
            .into_iter()
            .map(|(ts, mut font_id)| {
                font_id.size *= scale;
                (ts, font_id)
            })
            .collect();
        ctx.set_style(style);
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.apply_style(ctx);
        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| self.ui_nav(ui));
        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Dosage => self.ui_dosage(ui),
            Tab::UnitConv => self.ui_unit_conv(ui),
            Tab::Mixing => self.ui_mixing(ui),
            Tab::Dilution => self.ui_dilution(ui),
            Tab::History => self.ui_history(ui),
        });
        if self.show_settings_modal {
            self.ui_settings_window(ctx);
        }
        if self.show_help_modal {
            self.ui_help_window(ctx);
        }
    }
}
