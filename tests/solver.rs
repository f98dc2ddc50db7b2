use calorimetry_toolbox::calorimetry::{
    solve_final_temp, solve_initial_temp, solve_mass, solve_specific_heat, SolverError,
};

#[test]
fn solve_mass_rearranges_q_mc_dt() {
    let m = solve_mass(334_880.0, 4186.0, 40.0).expect("mass");
    assert!((m - 2.0).abs() < 1e-12);
}

#[test]
fn solve_mass_with_zero_delta_t_is_an_error() {
    match solve_mass(1000.0, 4186.0, 0.0) {
        Err(SolverError::ZeroDivisor(name)) => assert_eq!(name, "ΔT"),
        other => panic!("expected ZeroDivisor, got {other:?}"),
    }
}

#[test]
fn solve_specific_heat_rearranges_q_mc_dt() {
    let c = solve_specific_heat(42_000.0, 1.0, 20.0).expect("specific heat");
    assert!((c - 2100.0).abs() < 1e-9);
}

#[test]
fn solve_specific_heat_with_zero_mass_is_an_error() {
    assert_eq!(
        solve_specific_heat(1000.0, 0.0, 10.0),
        Err(SolverError::ZeroDivisor("m"))
    );
}

#[test]
fn solve_final_temp_adds_q_over_mc() {
    let tf = solve_final_temp(418_600.0, 1.0, 4186.0, 0.0).expect("final temp");
    assert!((tf - 100.0).abs() < 1e-9);
}

#[test]
fn solve_initial_temp_subtracts_q_over_mc() {
    let ti = solve_initial_temp(418_600.0, 1.0, 4186.0, 100.0).expect("initial temp");
    assert!(ti.abs() < 1e-9);
}

#[test]
fn temperature_solvers_reject_zero_specific_heat() {
    assert_eq!(
        solve_final_temp(1000.0, 1.0, 0.0, 20.0),
        Err(SolverError::ZeroDivisor("c"))
    );
    assert_eq!(
        solve_initial_temp(1000.0, 1.0, 0.0, 20.0),
        Err(SolverError::ZeroDivisor("c"))
    );
}

#[test]
fn negative_heat_solves_to_negative_delta() {
    // 냉각: Q가 음수이면 Tf < Ti
    let tf = solve_final_temp(-83_720.0, 2.0, 4186.0, 50.0).expect("final temp");
    assert!((tf - 40.0).abs() < 1e-9);
}
