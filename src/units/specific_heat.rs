use serde::{Deserialize, Serialize};

/// 비열 단위. 내부 기준은 J/(kg·°C)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificHeatUnit {
    JoulePerKgC,
    KilojoulePerKgK,
    /// cal/(g·°C). 물의 비열이 정확히 1이 되는 교육용 단위.
    CaloriePerGramC,
}

fn to_j_per_kg_c(value: f64, unit: SpecificHeatUnit) -> f64 {
    match unit {
        SpecificHeatUnit::JoulePerKgC => value,
        SpecificHeatUnit::KilojoulePerKgK => value * 1000.0,
        SpecificHeatUnit::CaloriePerGramC => value * 4184.0,
    }
}

fn from_j_per_kg_c(value: f64, unit: SpecificHeatUnit) -> f64 {
    match unit {
        SpecificHeatUnit::JoulePerKgC => value,
        SpecificHeatUnit::KilojoulePerKgK => value / 1000.0,
        SpecificHeatUnit::CaloriePerGramC => value / 4184.0,
    }
}

/// 비열을 변환한다.
pub fn convert_specific_heat(value: f64, from: SpecificHeatUnit, to: SpecificHeatUnit) -> f64 {
    from_j_per_kg_c(to_j_per_kg_c(value, from), to)
}
