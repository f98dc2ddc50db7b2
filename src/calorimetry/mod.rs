//! 상변화를 고려한 열량 계산 핵심 모듈 모음.

pub mod integrator;
pub mod report;
pub mod solver;
pub mod stage;

pub use integrator::{compute_heat, compute_heat_for, CalorimetryError};
pub use solver::{
    solve_final_temp, solve_initial_temp, solve_mass, solve_specific_heat, SolverError,
};
pub use stage::{HeatBreakdown, ProcessTrace, Stage, StageKind, StageSpan};
