//! 단위 정의 및 변환 모듈 모음.

pub mod energy;
pub mod latent_heat;
pub mod mass;
pub mod specific_heat;
pub mod temperature;

pub use energy::{convert_energy, EnergyUnit};
pub use latent_heat::{convert_latent_heat, LatentHeatUnit};
pub use mass::{convert_mass, MassUnit};
pub use specific_heat::{convert_specific_heat, SpecificHeatUnit};
pub use temperature::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};
