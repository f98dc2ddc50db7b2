use serde::{Deserialize, Serialize};

/// 온도 단위. 내부 기준은 섭씨이다 (상변화 경계가 °C로 정의되어 있다).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

/// 온도차 단위. 절대 기준점 없이 배율만 고려한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureDiffUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

/// 주어진 값을 섭씨로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Kelvin => value - 273.15,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Kelvin => value_c + 273.15,
        TemperatureUnit::Fahrenheit => value_c * 9.0 / 5.0 + 32.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_celsius(to_celsius(value, from), to)
}

/// 온도차를 변환한다. 섭씨/켈빈은 1:1, 화씨는 1.8:1 배율이다.
pub fn convert_temperature_diff(
    value: f64,
    from: TemperatureDiffUnit,
    to: TemperatureDiffUnit,
) -> f64 {
    let base_c = match from {
        TemperatureDiffUnit::Celsius | TemperatureDiffUnit::Kelvin => value,
        TemperatureDiffUnit::Fahrenheit => value * 5.0 / 9.0,
    };
    match to {
        TemperatureDiffUnit::Celsius | TemperatureDiffUnit::Kelvin => base_c,
        TemperatureDiffUnit::Fahrenheit => base_c * 9.0 / 5.0,
    }
}
