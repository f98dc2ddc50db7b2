use serde::{Deserialize, Serialize};

/// 잠열 단위. 내부 기준은 J/kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatentHeatUnit {
    JoulePerKg,
    KilojoulePerKg,
    /// cal/g. 얼음 융해열 80 cal/g 같은 교과서 값에 쓰인다.
    CaloriePerGram,
}

fn to_j_per_kg(value: f64, unit: LatentHeatUnit) -> f64 {
    match unit {
        LatentHeatUnit::JoulePerKg => value,
        LatentHeatUnit::KilojoulePerKg => value * 1000.0,
        LatentHeatUnit::CaloriePerGram => value * 4184.0,
    }
}

fn from_j_per_kg(value: f64, unit: LatentHeatUnit) -> f64 {
    match unit {
        LatentHeatUnit::JoulePerKg => value,
        LatentHeatUnit::KilojoulePerKg => value * 0.001,
        LatentHeatUnit::CaloriePerGram => value / 4184.0,
    }
}

/// 잠열을 변환한다.
pub fn convert_latent_heat(value: f64, from: LatentHeatUnit, to: LatentHeatUnit) -> f64 {
    from_j_per_kg(to_j_per_kg(value, from), to)
}
