#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use calorimetry_toolbox::{
    calorimetry::{self, report, HeatBreakdown},
    config, conversion, i18n, material_db,
    quantity::QuantityKind,
    reference,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
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

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(980.0, 720.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }

    eframe::run_native(
        "Calorimetry Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 표시용 폰트를 찾아 등록한다. 없으면 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec!["assets/fonts/malgun.ttf".into()];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for name in ["malgun.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(fonts.join(name));
        }
    }
    for name in [
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ] {
        candidates.push(name.into());
    }
    for path in candidates {
        if path.exists() {
            let bytes = fs::read(&path)
                .map_err(|e| format!("Failed to read font ({}): {e}", path.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            return Ok(());
        }
    }
    Err("CJK font not found; falling back to the default fonts.".into())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, name.to_owned());
    }
    ctx.set_fonts(fonts);
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Calculator,
    Solver,
    Converter,
    Formulas,
    Constants,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SolverTarget {
    Mass,
    SpecificHeat,
    FinalTemp,
    InitialTemp,
}

struct GuiApp {
    cfg: config::Config,
    tr: i18n::Translator,
    tab: Tab,
    // 열량 계산
    material_idx: usize,
    mass_kg: f64,
    initial_temp_c: f64,
    final_temp_c: f64,
    calc_report: Option<String>,
    calc_breakdown: Option<HeatBreakdown>,
    calc_error: Option<String>,
    // 변수 풀이
    solver_target: SolverTarget,
    solver_q: f64,
    solver_m: f64,
    solver_c: f64,
    solver_ti: f64,
    solver_tf: f64,
    solver_dt: f64,
    solver_result: Option<String>,
    // 단위 변환
    conv_kind: QuantityKind,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
}

impl GuiApp {
    fn new(cfg: config::Config) -> Self {
        let tr = i18n::Translator::new_with_pack(&cfg.language, None);
        Self {
            cfg,
            tr,
            tab: Tab::Calculator,
            material_idx: 0,
            mass_kg: 1.0,
            initial_temp_c: -20.0,
            final_temp_c: 120.0,
            calc_report: None,
            calc_breakdown: None,
            calc_error: None,
            solver_target: SolverTarget::Mass,
            solver_q: 0.0,
            solver_m: 1.0,
            solver_c: 4186.0,
            solver_ti: 0.0,
            solver_tf: 0.0,
            solver_dt: 0.0,
            solver_result: None,
            conv_kind: QuantityKind::Temperature,
            conv_value: 0.0,
            conv_from: "C".to_string(),
            conv_to: "K".to_string(),
            conv_result: None,
        }
    }

    fn set_language(&mut self, code: &str) {
        self.cfg.language = code.to_string();
        self.tr = i18n::Translator::new_with_pack(code, None);
        self.cfg.save().ok();
    }

    fn calculator_ui(&mut self, ui: &mut egui::Ui, txt: &dyn Fn(&str, &str) -> String) {
        ui.horizontal(|ui| {
            ui.label(txt("gui.calc.material", "Material"));
            let materials = material_db::materials();
            egui::ComboBox::from_id_source("material")
                .selected_text(materials[self.material_idx].key)
                .show_ui(ui, |ui| {
                    for (idx, mat) in materials.iter().enumerate() {
                        ui.selectable_value(&mut self.material_idx, idx, mat.key);
                    }
                });
            ui.label(txt("gui.calc.mass", "Mass [kg]"));
            ui.add(egui::DragValue::new(&mut self.mass_kg).speed(0.1));
            ui.label(txt("gui.calc.initial_temp", "Initial temp [°C]"));
            ui.add(egui::DragValue::new(&mut self.initial_temp_c).speed(1.0));
            ui.label(txt("gui.calc.final_temp", "Final temp [°C]"));
            ui.add(egui::DragValue::new(&mut self.final_temp_c).speed(1.0));
        });

        ui.horizontal(|ui| {
            if ui.button(txt("gui.calc.compute", "Compute")).clicked() {
                let mat = &material_db::materials()[self.material_idx];
                match calorimetry::compute_heat(
                    mat,
                    self.mass_kg,
                    self.initial_temp_c,
                    self.final_temp_c,
                ) {
                    Ok(breakdown) => {
                        self.calc_report = Some(report::render_report(&breakdown, &self.tr));
                        self.calc_breakdown = Some(breakdown);
                        self.calc_error = None;
                    }
                    Err(e) => {
                        self.calc_report = None;
                        self.calc_breakdown = None;
                        self.calc_error = Some(e.to_string());
                    }
                }
            }
            if let Some(ref text) = self.calc_report {
                if ui.button(txt("gui.calc.save_report", "Save report")).clicked() {
                    if let Some(path) = FileDialog::new()
                        .set_file_name("calorimetry_report.txt")
                        .save_file()
                    {
                        if let Err(e) = fs::write(&path, text) {
                            self.calc_error = Some(format!("save failed: {e}"));
                        }
                    }
                }
            }
        });

        if let Some(ref err) = self.calc_error {
            ui.colored_label(egui::Color32::LIGHT_RED, err);
        }

        if let Some(breakdown) = self.calc_breakdown.clone() {
            ui.separator();
            ui.label(txt("gui.calc.plot_title", "Temperature vs Energy"));
            trace_plot_ui(ui, &breakdown, txt);
        }

        if let Some(ref text) = self.calc_report {
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.monospace(text);
            });
        }
    }

    fn solver_ui(&mut self, ui: &mut egui::Ui, txt: &dyn Fn(&str, &str) -> String) {
        ui.horizontal(|ui| {
            ui.label(txt("gui.solver.target", "Solve for"));
            ui.selectable_value(
                &mut self.solver_target,
                SolverTarget::Mass,
                txt("gui.solver.mass", "Mass m"),
            );
            ui.selectable_value(
                &mut self.solver_target,
                SolverTarget::SpecificHeat,
                txt("gui.solver.specific_heat", "Specific heat c"),
            );
            ui.selectable_value(
                &mut self.solver_target,
                SolverTarget::FinalTemp,
                txt("gui.solver.final_temp", "Final temp Tf"),
            );
            ui.selectable_value(
                &mut self.solver_target,
                SolverTarget::InitialTemp,
                txt("gui.solver.initial_temp", "Initial temp Ti"),
            );
        });

        ui.horizontal(|ui| {
            ui.label(txt("gui.solver.heat_q", "Heat Q [J]"));
            ui.add(egui::DragValue::new(&mut self.solver_q).speed(10.0));
            match self.solver_target {
                SolverTarget::Mass => {
                    ui.label(txt("gui.solver.specific_heat", "Specific heat c"));
                    ui.add(egui::DragValue::new(&mut self.solver_c).speed(1.0));
                    ui.label(txt("gui.solver.delta_t", "ΔT [°C]"));
                    ui.add(egui::DragValue::new(&mut self.solver_dt).speed(1.0));
                }
                SolverTarget::SpecificHeat => {
                    ui.label(txt("gui.solver.mass", "Mass m"));
                    ui.add(egui::DragValue::new(&mut self.solver_m).speed(0.1));
                    ui.label(txt("gui.solver.delta_t", "ΔT [°C]"));
                    ui.add(egui::DragValue::new(&mut self.solver_dt).speed(1.0));
                }
                SolverTarget::FinalTemp => {
                    ui.label(txt("gui.solver.mass", "Mass m"));
                    ui.add(egui::DragValue::new(&mut self.solver_m).speed(0.1));
                    ui.label(txt("gui.solver.specific_heat", "Specific heat c"));
                    ui.add(egui::DragValue::new(&mut self.solver_c).speed(1.0));
                    ui.label(txt("gui.solver.initial_temp", "Initial temp Ti"));
                    ui.add(egui::DragValue::new(&mut self.solver_ti).speed(1.0));
                }
                SolverTarget::InitialTemp => {
                    ui.label(txt("gui.solver.mass", "Mass m"));
                    ui.add(egui::DragValue::new(&mut self.solver_m).speed(0.1));
                    ui.label(txt("gui.solver.specific_heat", "Specific heat c"));
                    ui.add(egui::DragValue::new(&mut self.solver_c).speed(1.0));
                    ui.label(txt("gui.solver.final_temp", "Final temp Tf"));
                    ui.add(egui::DragValue::new(&mut self.solver_tf).speed(1.0));
                }
            }
        });

        if ui.button(txt("gui.solver.solve", "Solve")).clicked() {
            let outcome = match self.solver_target {
                SolverTarget::Mass => calorimetry::solve_mass(self.solver_q, self.solver_c, self.solver_dt)
                    .map(|m| format!("m = Q / (c · ΔT) = {m:.4} kg")),
                SolverTarget::SpecificHeat => {
                    calorimetry::solve_specific_heat(self.solver_q, self.solver_m, self.solver_dt)
                        .map(|c| format!("c = Q / (m · ΔT) = {c:.2} J/(kg·°C)"))
                }
                SolverTarget::FinalTemp => calorimetry::solve_final_temp(
                    self.solver_q,
                    self.solver_m,
                    self.solver_c,
                    self.solver_ti,
                )
                .map(|tf| format!("Tf = Ti + Q / (m · c) = {tf:.2} °C")),
                SolverTarget::InitialTemp => calorimetry::solve_initial_temp(
                    self.solver_q,
                    self.solver_m,
                    self.solver_c,
                    self.solver_tf,
                )
                .map(|ti| format!("Ti = Tf - Q / (m · c) = {ti:.2} °C")),
            };
            self.solver_result = Some(match outcome {
                Ok(text) => text,
                Err(e) => e.to_string(),
            });
        }

        if let Some(ref text) = self.solver_result {
            ui.separator();
            ui.monospace(text);
        }
    }

    fn converter_ui(&mut self, ui: &mut egui::Ui, txt: &dyn Fn(&str, &str) -> String) {
        ui.horizontal(|ui| {
            ui.label(txt("gui.converter.quantity", "Quantity"));
            egui::ComboBox::from_id_source("conv_kind")
                .selected_text(format!("{:?}", self.conv_kind))
                .show_ui(ui, |ui| {
                    for kind in [
                        QuantityKind::Temperature,
                        QuantityKind::TemperatureDifference,
                        QuantityKind::Mass,
                        QuantityKind::Energy,
                        QuantityKind::SpecificHeat,
                        QuantityKind::LatentHeat,
                    ] {
                        ui.selectable_value(&mut self.conv_kind, kind, format!("{kind:?}"));
                    }
                });
            ui.label(txt("gui.converter.value", "Value"));
            ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
            ui.label(txt("gui.converter.from", "From unit"));
            ui.add(egui::TextEdit::singleline(&mut self.conv_from).desired_width(70.0));
            ui.label(txt("gui.converter.to", "To unit"));
            ui.add(egui::TextEdit::singleline(&mut self.conv_to).desired_width(70.0));
            if ui.button(txt("gui.converter.convert", "Convert")).clicked() {
                self.conv_result = Some(
                    match conversion::convert(
                        self.conv_kind,
                        self.conv_value,
                        &self.conv_from,
                        &self.conv_to,
                    ) {
                        Ok(v) => format!("{v} {}", self.conv_to.trim()),
                        Err(e) => e.to_string(),
                    },
                );
            }
        });
        if let Some(ref text) = self.conv_result {
            ui.separator();
            ui.monospace(text);
        }
    }
}

/// 누적 곡선을 x=에너지[kJ], y=온도[°C]로 그린다.
fn trace_plot_ui(ui: &mut egui::Ui, breakdown: &HeatBreakdown, txt: &dyn Fn(&str, &str) -> String) {
    let desired = egui::vec2(ui.available_width(), 260.0);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
    let rect = response.rect.shrink(28.0);

    let points_kj: Vec<(f64, f64)> = breakdown
        .trace
        .points()
        .map(|(energy_j, temp_c)| (energy_j / 1000.0, temp_c))
        .collect();
    if points_kj.len() < 2 {
        return;
    }

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in &points_kj {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if x_max == x_min {
        x_max = x_min + 1.0;
    }
    if y_max == y_min {
        y_max = y_min + 1.0;
    }

    let to_screen = |x: f64, y: f64| -> egui::Pos2 {
        let fx = ((x - x_min) / (x_max - x_min)) as f32;
        let fy = ((y - y_min) / (y_max - y_min)) as f32;
        egui::pos2(
            rect.left() + fx * rect.width(),
            rect.bottom() - fy * rect.height(),
        )
    };

    let grid = egui::Stroke::new(1.0, ui.visuals().weak_text_color());
    painter.line_segment([rect.left_bottom(), rect.right_bottom()], grid);
    painter.line_segment([rect.left_bottom(), rect.left_top()], grid);

    let line: Vec<egui::Pos2> = points_kj.iter().map(|&(x, y)| to_screen(x, y)).collect();
    let stroke = egui::Stroke::new(2.0, egui::Color32::from_rgb(0x66, 0x7e, 0xea));
    painter.add(egui::Shape::line(line.clone(), stroke));
    for (i, pos) in line.iter().enumerate() {
        painter.circle_filled(*pos, 4.0, egui::Color32::from_rgb(0x76, 0x4b, 0xa2));
        if i > 0 {
            painter.text(
                *pos + egui::vec2(6.0, -6.0),
                egui::Align2::LEFT_BOTTOM,
                format!("{:.0}°C", points_kj[i].1),
                egui::FontId::proportional(11.0),
                ui.visuals().text_color(),
            );
        }
    }

    painter.text(
        rect.center_bottom() + egui::vec2(0.0, 20.0),
        egui::Align2::CENTER_CENTER,
        txt("gui.calc.plot_x", "Cumulative energy [kJ]"),
        egui::FontId::proportional(12.0),
        ui.visuals().text_color(),
    );
    painter.text(
        rect.left_top() + egui::vec2(-4.0, -16.0),
        egui::Align2::LEFT_BOTTOM,
        txt("gui.calc.plot_y", "Temperature [°C]"),
        egui::FontId::proportional(12.0),
        ui.visuals().text_color(),
    );
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| {
            tr.lookup(key)
                .unwrap_or_else(|| default.to_string())
        };

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Calculator,
                    txt("gui.tab.calculator", "Heat Calculation"),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Solver,
                    txt("gui.tab.solver", "Variable Solver"),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Converter,
                    txt("gui.tab.converter", "Unit Converter"),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Formulas,
                    txt("gui.tab.formulas", "Formulas"),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Constants,
                    txt("gui.tab.constants", "Constants"),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let current = self.tr.language_code().to_string();
                    egui::ComboBox::from_id_source("language")
                        .selected_text(current.clone())
                        .show_ui(ui, |ui| {
                            for code in ["ko", "en"] {
                                if ui.selectable_label(current == code, code).clicked() {
                                    self.set_language(code);
                                }
                            }
                        });
                    ui.label(txt("gui.settings.language", "Language"));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Calculator => self.calculator_ui(ui, &txt),
            Tab::Solver => self.solver_ui(ui, &txt),
            Tab::Converter => self.converter_ui(ui, &txt),
            Tab::Formulas => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.monospace(reference::formulas_text(self.tr.language()));
                });
            }
            Tab::Constants => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.monospace(reference::constants_text(self.tr.language()));
                });
            }
        });
    }
}
