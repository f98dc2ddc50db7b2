use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "unknown unit: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시: `C`, `K`, `F`, `kg`, `g`, `lb`, `J`, `kJ`, `MJ`,
/// `cal`, `kcal`, `Btu`, `J/kgC`, `cal/gC`, `J/kg`, `cal/g`.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::TemperatureDifference => {
            let from = parse_temperature_diff_unit(from_unit_str)?;
            let to = parse_temperature_diff_unit(to_unit_str)?;
            Ok(convert_temperature_diff(value, from, to))
        }
        QuantityKind::Mass => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            Ok(convert_mass(value, from, to))
        }
        QuantityKind::Energy => {
            let from = parse_energy_unit(from_unit_str)?;
            let to = parse_energy_unit(to_unit_str)?;
            Ok(convert_energy(value, from, to))
        }
        QuantityKind::SpecificHeat => {
            let from = parse_specific_heat_unit(from_unit_str)?;
            let to = parse_specific_heat_unit(to_unit_str)?;
            Ok(convert_specific_heat(value, from, to))
        }
        QuantityKind::LatentHeat => {
            let from = parse_latent_heat_unit(from_unit_str)?;
            let to = parse_latent_heat_unit(to_unit_str)?;
            Ok(convert_latent_heat(value, from, to))
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['°', '(', ')', '·', ' '], "")
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match normalize(s).as_str() {
        "c" | "celsius" => Ok(TemperatureUnit::Celsius),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

fn parse_temperature_diff_unit(s: &str) -> Result<TemperatureDiffUnit, ConversionError> {
    match normalize(s).as_str() {
        "c" | "celsius" => Ok(TemperatureDiffUnit::Celsius),
        "k" | "kelvin" => Ok(TemperatureDiffUnit::Kelvin),
        "f" | "fahrenheit" => Ok(TemperatureDiffUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match normalize(s).as_str() {
        "kg" => Ok(MassUnit::Kilogram),
        "g" => Ok(MassUnit::Gram),
        "lb" | "lbs" => Ok(MassUnit::Pound),
        "oz" => Ok(MassUnit::Ounce),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

fn parse_energy_unit(s: &str) -> Result<EnergyUnit, ConversionError> {
    match normalize(s).as_str() {
        "j" => Ok(EnergyUnit::Joule),
        "kj" => Ok(EnergyUnit::Kilojoule),
        "mj" => Ok(EnergyUnit::Megajoule),
        "cal" => Ok(EnergyUnit::Calorie),
        "kcal" => Ok(EnergyUnit::KiloCalorie),
        "btu" => Ok(EnergyUnit::Btu),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

fn parse_specific_heat_unit(s: &str) -> Result<SpecificHeatUnit, ConversionError> {
    match normalize(s).as_str() {
        "j/kgc" | "j/kgk" => Ok(SpecificHeatUnit::JoulePerKgC),
        "kj/kgk" | "kj/kgc" => Ok(SpecificHeatUnit::KilojoulePerKgK),
        "cal/gc" => Ok(SpecificHeatUnit::CaloriePerGramC),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}

fn parse_latent_heat_unit(s: &str) -> Result<LatentHeatUnit, ConversionError> {
    match normalize(s).as_str() {
        "j/kg" => Ok(LatentHeatUnit::JoulePerKg),
        "kj/kg" => Ok(LatentHeatUnit::KilojoulePerKg),
        "cal/g" => Ok(LatentHeatUnit::CaloriePerGram),
        _ => Err(ConversionError::UnknownUnit(s.trim().to_string())),
    }
}
