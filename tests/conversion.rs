use calorimetry_toolbox::conversion::{convert, ConversionError};
use calorimetry_toolbox::quantity::QuantityKind;

#[test]
fn temperature_celsius_kelvin_fahrenheit() {
    let k = convert(QuantityKind::Temperature, 0.0, "C", "K").expect("C->K");
    assert!((k - 273.15).abs() < 1e-9);
    let f = convert(QuantityKind::Temperature, 100.0, "C", "F").expect("C->F");
    assert!((f - 212.0).abs() < 1e-9);
    let c = convert(QuantityKind::Temperature, 32.0, "F", "C").expect("F->C");
    assert!(c.abs() < 1e-9);
}

#[test]
fn temperature_difference_uses_scale_only() {
    let df = convert(QuantityKind::TemperatureDifference, 10.0, "C", "F").expect("dC->dF");
    assert!((df - 18.0).abs() < 1e-9);
}

#[test]
fn mass_and_energy_units() {
    let g = convert(QuantityKind::Mass, 1.5, "kg", "g").expect("kg->g");
    assert!((g - 1500.0).abs() < 1e-9);
    let j = convert(QuantityKind::Energy, 1.0, "kcal", "J").expect("kcal->J");
    assert!((j - 4184.0).abs() < 1e-9);
    let kj = convert(QuantityKind::Energy, 3_094_800.0, "J", "kJ").expect("J->kJ");
    assert!((kj - 3094.8).abs() < 1e-9);
}

#[test]
fn imperial_mass_units() {
    let kg = convert(QuantityKind::Mass, 1.0, "lb", "kg").expect("lb->kg");
    assert!((kg - 0.453592).abs() < 1e-9);
    // 16 oz = 1 lb
    let lb = convert(QuantityKind::Mass, 16.0, "oz", "lb").expect("oz->lb");
    assert!((lb - 1.0).abs() < 1e-9);
}

#[test]
fn textbook_calorie_units_round_trip_the_water_constants() {
    // 물의 비열 1 cal/(g·°C) = 4184 J/(kg·°C)
    let c = convert(QuantityKind::SpecificHeat, 1.0, "cal/gC", "J/kgC").expect("cal/gC");
    assert!((c - 4184.0).abs() < 1e-9);
    // 얼음 융해열 80 cal/g
    let lf = convert(QuantityKind::LatentHeat, 80.0, "cal/g", "J/kg").expect("cal/g");
    assert!((lf - 334_720.0).abs() < 1e-9);
}

#[test]
fn unknown_unit_string_is_an_error() {
    match convert(QuantityKind::Energy, 1.0, "furlong", "J") {
        Err(ConversionError::UnknownUnit(u)) => assert_eq!(u, "furlong"),
        other => panic!("expected UnknownUnit, got {other:?}"),
    }
}
