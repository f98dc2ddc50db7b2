use calorimetry_toolbox::calorimetry::{
    compute_heat, compute_heat_for, report, CalorimetryError, StageKind, StageSpan,
};
use calorimetry_toolbox::i18n::Translator;
use calorimetry_toolbox::material_db;

#[test]
fn water_full_range_emits_five_stages() {
    let res = compute_heat_for("Water", 1.0, -20.0, 120.0).expect("water calc");
    let kinds: Vec<StageKind> = res.stages.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            StageKind::HeatSolid,
            StageKind::Melt,
            StageKind::HeatLiquid,
            StageKind::Vaporize,
            StageKind::HeatGas,
        ]
    );
    // 42000 + 334000 + 418600 + 2260000 + 40200
    assert_eq!(res.total_energy_j, 3_094_800.0);
    assert_eq!(res.stages[0].energy_j, 42_000.0);
    assert_eq!(res.stages[1].energy_j, 334_000.0);
    assert_eq!(res.stages[2].energy_j, 418_600.0);
    assert_eq!(res.stages[3].energy_j, 2_260_000.0);
    assert_eq!(res.stages[4].energy_j, 40_200.0);
}

#[test]
fn stage_energies_sum_to_total_in_emission_order() {
    let res = compute_heat_for("Water", 1.7, -35.0, 115.0).expect("water calc");
    let mut sum = 0.0;
    for stage in &res.stages {
        sum += stage.energy_j;
    }
    assert_eq!(sum, res.total_energy_j);
}

#[test]
fn trace_starts_at_initial_temperature_and_zero_energy() {
    let res = compute_heat_for("Water", 1.0, -20.0, 120.0).expect("water calc");
    assert_eq!(res.trace.temperatures_c[0], -20.0);
    assert_eq!(res.trace.cumulative_energy_j[0], 0.0);
    // 단계마다 체크포인트 하나씩
    assert_eq!(res.trace.len(), res.stages.len() + 1);
    let last = res.trace.cumulative_energy_j.last().copied().unwrap();
    assert_eq!(last, res.total_energy_j);
}

#[test]
fn water_liquid_only_range_is_a_single_stage() {
    let res = compute_heat_for("Water", 2.0, 10.0, 50.0).expect("water calc");
    assert_eq!(res.stages.len(), 1);
    assert_eq!(res.stages[0].kind, StageKind::HeatLiquid);
    assert_eq!(res.total_energy_j, 334_880.0); // 2 · 4186 · 40
}

#[test]
fn aluminum_crossing_melting_point_clamps_at_660() {
    let res = compute_heat_for("Aluminum", 0.5, 500.0, 800.0).expect("aluminum calc");
    assert_eq!(res.stages.len(), 3);
    match res.stages[0].span {
        StageSpan::Ramp { from_c, to_c } => {
            assert_eq!(from_c, 500.0);
            assert_eq!(to_c, 660.0);
        }
        _ => panic!("expected ramp"),
    }
    match res.stages[1].span {
        StageSpan::Transition { at_c } => assert_eq!(at_c, 660.0),
        _ => panic!("expected transition"),
    }
    match res.stages[2].span {
        StageSpan::Ramp { from_c, to_c } => {
            assert_eq!(from_c, 660.0);
            assert_eq!(to_c, 800.0);
        }
        _ => panic!("expected ramp"),
    }
    // 0.5·900·160 + 0.5·398000 + 0.5·1100·140
    assert_eq!(res.total_energy_j, 72_000.0 + 199_000.0 + 77_000.0);
}

#[test]
fn unknown_material_is_a_lookup_error() {
    match compute_heat_for("Unobtainium", 1.0, 0.0, 100.0) {
        Err(CalorimetryError::UnknownMaterial(name)) => assert_eq!(name, "Unobtainium"),
        other => panic!("expected UnknownMaterial, got {other:?}"),
    }
}

#[test]
fn equal_temperatures_yield_no_stages() {
    let res = compute_heat_for("Water", 1.0, 25.0, 25.0).expect("water calc");
    assert!(res.stages.is_empty());
    assert_eq!(res.total_energy_j, 0.0);
    assert_eq!(res.trace.len(), 1);
}

#[test]
fn zero_mass_yields_zero_energies() {
    let res = compute_heat_for("Water", 0.0, -20.0, 120.0).expect("water calc");
    assert_eq!(res.stages.len(), 5);
    assert_eq!(res.total_energy_j, 0.0);
}

#[test]
fn negative_mass_flips_the_sign_of_every_energy() {
    let res = compute_heat_for("Water", -1.0, 10.0, 50.0).expect("water calc");
    assert_eq!(res.stages.len(), 1);
    assert_eq!(res.stages[0].kind, StageKind::HeatLiquid);
    assert_eq!(res.stages[0].energy_j, -1.0 * 4186.0 * 40.0);
    assert_eq!(res.total_energy_j, -167_440.0);
}

#[test]
fn cooling_within_ice_is_a_negative_sensible_stage() {
    let res = compute_heat_for("Water", 1.0, -5.0, -20.0).expect("water calc");
    assert_eq!(res.stages.len(), 1);
    assert_eq!(res.stages[0].kind, StageKind::HeatSolid);
    assert_eq!(res.total_energy_j, 2100.0 * -15.0);
}

#[test]
fn cooling_within_liquid_is_a_negative_sensible_stage() {
    let res = compute_heat_for("Water", 1.0, 80.0, 30.0).expect("water calc");
    assert_eq!(res.stages.len(), 1);
    assert_eq!(res.stages[0].kind, StageKind::HeatLiquid);
    assert_eq!(res.total_energy_j, 4186.0 * -50.0);
}

#[test]
fn cooling_within_steam_is_a_negative_sensible_stage() {
    let res = compute_heat_for("Water", 1.0, 120.0, 110.0).expect("water calc");
    assert_eq!(res.stages.len(), 1);
    assert_eq!(res.stages[0].kind, StageKind::HeatGas);
    assert_eq!(res.total_energy_j, 2010.0 * -10.0);
}

#[test]
fn cooling_across_a_phase_boundary_is_rejected() {
    match compute_heat_for("Water", 1.0, 120.0, -20.0) {
        Err(CalorimetryError::UnsupportedCooling { from_c, to_c }) => {
            assert_eq!(from_c, 120.0);
            assert_eq!(to_c, -20.0);
        }
        other => panic!("expected UnsupportedCooling, got {other:?}"),
    }
}

#[test]
fn generic_material_above_melting_point_heats_liquid_only() {
    let res = compute_heat_for("Copper", 1.0, 1100.0, 1200.0).expect("copper calc");
    assert_eq!(res.stages.len(), 1);
    assert_eq!(res.stages[0].kind, StageKind::HeatLiquid);
    assert_eq!(res.total_energy_j, 510.0 * 100.0);
}

#[test]
fn total_magnitude_grows_with_interval_width() {
    let narrow = compute_heat_for("Iron", 1.0, 20.0, 500.0).expect("iron calc");
    let wide = compute_heat_for("Iron", 1.0, 20.0, 900.0).expect("iron calc");
    assert!(wide.total_energy_j > narrow.total_energy_j);

    let cool_narrow = compute_heat_for("Water", 1.0, 90.0, 70.0).expect("water calc");
    let cool_wide = compute_heat_for("Water", 1.0, 90.0, 40.0).expect("water calc");
    assert!(cool_wide.total_energy_j < cool_narrow.total_energy_j);
    assert!(cool_wide.total_energy_j < 0.0);
}

#[test]
fn report_renders_stage_blocks_and_totals() {
    let mat = material_db::find_material("Water").expect("water in table");
    let res = compute_heat(mat, 1.0, -20.0, 120.0).expect("water calc");
    let tr = Translator::new("en");
    let text = report::render_report(&res, &tr);
    assert!(text.contains("Stage 1"));
    assert!(text.contains("Q = m · c · ΔT = 1 kg · 2100 J/(kg·°C) · 20.00 °C"));
    assert!(text.contains("Q = m · L_v = 1 kg · 2260000 J/kg"));
    assert!(text.contains("Q_total = Q1 + Q2 + Q3 + Q4 + Q5"));
    assert!(text.contains("Q_total = 3094800.00 J"));
    assert!(text.contains("Q_total = 3094.80 kJ"));
    assert!(text.contains("Q_total = 3.09 MJ"));
}
