//! Q = m·c·ΔT의 한 변수를 대수적으로 풀어낸다.

/// 변수 풀이에서 발생 가능한 오류를 표현한다.
#[derive(Debug, PartialEq, Eq)]
pub enum SolverError {
    /// 0인 분모. 어떤 입력이 0이었는지 이름을 담는다.
    ZeroDivisor(&'static str),
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::ZeroDivisor(name) => write!(f, "divisor must not be zero: {name}"),
        }
    }
}

impl std::error::Error for SolverError {}

/// m = Q / (c·ΔT)
pub fn solve_mass(q_j: f64, specific_heat: f64, delta_t_c: f64) -> Result<f64, SolverError> {
    if delta_t_c == 0.0 {
        return Err(SolverError::ZeroDivisor("ΔT"));
    }
    if specific_heat == 0.0 {
        return Err(SolverError::ZeroDivisor("c"));
    }
    Ok(q_j / (specific_heat * delta_t_c))
}

/// c = Q / (m·ΔT)
pub fn solve_specific_heat(q_j: f64, mass_kg: f64, delta_t_c: f64) -> Result<f64, SolverError> {
    if mass_kg == 0.0 {
        return Err(SolverError::ZeroDivisor("m"));
    }
    if delta_t_c == 0.0 {
        return Err(SolverError::ZeroDivisor("ΔT"));
    }
    Ok(q_j / (mass_kg * delta_t_c))
}

/// Tf = Ti + Q / (m·c)
pub fn solve_final_temp(
    q_j: f64,
    mass_kg: f64,
    specific_heat: f64,
    initial_temp_c: f64,
) -> Result<f64, SolverError> {
    if mass_kg == 0.0 {
        return Err(SolverError::ZeroDivisor("m"));
    }
    if specific_heat == 0.0 {
        return Err(SolverError::ZeroDivisor("c"));
    }
    Ok(initial_temp_c + q_j / (mass_kg * specific_heat))
}

/// Ti = Tf - Q / (m·c)
pub fn solve_initial_temp(
    q_j: f64,
    mass_kg: f64,
    specific_heat: f64,
    final_temp_c: f64,
) -> Result<f64, SolverError> {
    if mass_kg == 0.0 {
        return Err(SolverError::ZeroDivisor("m"));
    }
    if specific_heat == 0.0 {
        return Err(SolverError::ZeroDivisor("c"));
    }
    Ok(final_temp_c - q_j / (mass_kg * specific_heat))
}
