use crate::calorimetry::{CalorimetryError, SolverError};
use crate::config::Config;
use crate::conversion;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 열량 계산 오류
    Calorimetry(CalorimetryError),
    /// 변수 풀이 오류
    Solver(SolverError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "config error: {e}"),
            AppError::Conversion(e) => write!(f, "unit conversion error: {e}"),
            AppError::Calorimetry(e) => write!(f, "heat calculation error: {e}"),
            AppError::Solver(e) => write!(f, "solver error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<CalorimetryError> for AppError {
    fn from(value: CalorimetryError) -> Self {
        AppError::Calorimetry(value)
    }
}

impl From<SolverError> for AppError {
    fn from(value: SolverError) -> Self {
        AppError::Solver(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::HeatCalculation => ui_cli::handle_heat_calculation(tr)?,
            MenuChoice::VariableSolver => ui_cli::handle_solver(tr)?,
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr)?,
            MenuChoice::FormulaReference => ui_cli::handle_formulas(tr)?,
            MenuChoice::ConstantsReference => ui_cli::handle_constants(tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
