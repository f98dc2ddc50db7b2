use std::io::{self, Write};

use crate::app::AppError;
use crate::calorimetry::{self, report};
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Language, Translator};
use crate::material_db;
use crate::quantity::QuantityKind;
use crate::reference;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    HeatCalculation,
    VariableSolver,
    UnitConversion,
    FormulaReference,
    ConstantsReference,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_HEAT_CALC));
    println!("{}", tr.t(keys::MAIN_MENU_SOLVER));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_FORMULAS));
    println!("{}", tr.t(keys::MAIN_MENU_CONSTANTS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::HeatCalculation),
            "2" => return Ok(MenuChoice::VariableSolver),
            "3" => return Ok(MenuChoice::UnitConversion),
            "4" => return Ok(MenuChoice::FormulaReference),
            "5" => return Ok(MenuChoice::ConstantsReference),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 열량 계산 메뉴를 처리한다.
pub fn handle_heat_calculation(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HEAT_CALC_HEADING));
    println!("{}", tr.t(keys::HEAT_CALC_MATERIALS));
    let mat = loop {
        let sel = read_line(tr.t(keys::PROMPT_MATERIAL))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if n >= 1 && n <= material_db::materials().len() {
                break &material_db::materials()[n - 1];
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };
    let mass = read_f64(tr, tr.t(keys::PROMPT_MASS))?;
    let ti = read_f64(tr, tr.t(keys::PROMPT_INITIAL_TEMP))?;
    let tf = read_f64(tr, tr.t(keys::PROMPT_FINAL_TEMP))?;

    match calorimetry::compute_heat(mat, mass, ti, tf) {
        Ok(breakdown) => {
            println!("{}", report::render_report(&breakdown, tr));
            println!("{}", tr.t(keys::TRACE_HEADING));
            println!("{}", tr.t(keys::TRACE_COLUMNS));
            for (energy_j, temp_c) in breakdown.trace.points() {
                println!("{:>12.2} | {:>8.2}", energy_j / 1000.0, temp_c);
            }
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 변수 풀이 메뉴를 처리한다. 0 분모 오류는 메시지로만 알린다.
pub fn handle_solver(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SOLVER_HEADING));
    println!("{}", tr.t(keys::SOLVER_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let outcome = match sel.trim() {
        "1" => {
            let q = read_f64(tr, tr.t(keys::PROMPT_HEAT_Q))?;
            let c = read_f64(tr, tr.t(keys::PROMPT_SPECIFIC_HEAT))?;
            let dt = read_f64(tr, tr.t(keys::PROMPT_DELTA_T))?;
            calorimetry::solve_mass(q, c, dt)
                .map(|m| format!("m = Q / (c · ΔT) = {q} / ({c} · {dt})\nm = {m:.4} kg"))
        }
        "2" => {
            let q = read_f64(tr, tr.t(keys::PROMPT_HEAT_Q))?;
            let m = read_f64(tr, tr.t(keys::PROMPT_MASS))?;
            let dt = read_f64(tr, tr.t(keys::PROMPT_DELTA_T))?;
            calorimetry::solve_specific_heat(q, m, dt)
                .map(|c| format!("c = Q / (m · ΔT) = {q} / ({m} · {dt})\nc = {c:.2} J/(kg·°C)"))
        }
        "3" => {
            let q = read_f64(tr, tr.t(keys::PROMPT_HEAT_Q))?;
            let m = read_f64(tr, tr.t(keys::PROMPT_MASS))?;
            let c = read_f64(tr, tr.t(keys::PROMPT_SPECIFIC_HEAT))?;
            let ti = read_f64(tr, tr.t(keys::PROMPT_INITIAL_TEMP))?;
            calorimetry::solve_final_temp(q, m, c, ti)
                .map(|tf| format!("Tf = Ti + Q / (m · c) = {ti} + {q} / ({m} · {c})\nTf = {tf:.2} °C"))
        }
        "4" => {
            let q = read_f64(tr, tr.t(keys::PROMPT_HEAT_Q))?;
            let m = read_f64(tr, tr.t(keys::PROMPT_MASS))?;
            let c = read_f64(tr, tr.t(keys::PROMPT_SPECIFIC_HEAT))?;
            let tf = read_f64(tr, tr.t(keys::PROMPT_FINAL_TEMP))?;
            calorimetry::solve_initial_temp(q, m, c, tf)
                .map(|ti| format!("Ti = Tf - Q / (m · c) = {tf} - {q} / ({m} · {c})\nTi = {ti:.2} °C"))
        }
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    };
    match outcome {
        Ok(text) => println!("{}\n{text}", tr.t(keys::SOLVER_RESULT)),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    match conversion::convert(kind, value, from_unit.trim(), to_unit.trim()) {
        Ok(result) => println!(
            "{} {result} {}",
            tr.t(keys::UNIT_CONVERSION_RESULT),
            to_unit.trim()
        ),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Temperature),
        2 => Some(QuantityKind::TemperatureDifference),
        3 => Some(QuantityKind::Mass),
        4 => Some(QuantityKind::Energy),
        5 => Some(QuantityKind::SpecificHeat),
        6 => Some(QuantityKind::LatentHeat),
        _ => None,
    }
}

/// 공식 참고 화면.
pub fn handle_formulas(tr: &Translator) -> Result<(), AppError> {
    println!("{}", reference::formulas_text(tr.language()));
    Ok(())
}

/// 물질 상수표 화면.
pub fn handle_constants(tr: &Translator) -> Result<(), AppError> {
    println!("{}", reference::constants_text(tr.language()));
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어 변경은 다음 실행부터 적용된다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        tr.language_code()
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let lang = match sel.trim() {
        "1" => Language::Ko,
        "2" => Language::En,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.language = lang.as_code().to_string();
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
