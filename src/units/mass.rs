use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Pound,
    /// 상형 온스 (avoirdupois). 교과서 문제에 간혹 등장한다.
    Ounce,
}

const KG_PER_POUND: f64 = 0.453592;
const KG_PER_OUNCE: f64 = KG_PER_POUND / 16.0;

fn to_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value / 1000.0,
        MassUnit::Pound => value * KG_PER_POUND,
        MassUnit::Ounce => value * KG_PER_OUNCE,
    }
}

fn from_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value * 1000.0,
        MassUnit::Pound => value / KG_PER_POUND,
        MassUnit::Ounce => value / KG_PER_OUNCE,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    from_kg(to_kg(value, from), to)
}
