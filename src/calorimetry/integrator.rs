//! 온도 구간을 상 구간으로 분할해 단계별 열량을 적분한다.

use crate::material_db::{self, MaterialData};

use super::stage::{HeatBreakdown, ProcessTrace, Stage, StageKind};

/// 열량 계산에서 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum CalorimetryError {
    /// 테이블에 없는 물질 키
    UnknownMaterial(String),
    /// 상 경계를 아래로 가로지르는 냉각 구간. 단계 술어가 가열 방향으로만
    /// 정의되어 있어 지원하지 않는다.
    UnsupportedCooling { from_c: f64, to_c: f64 },
}

impl std::fmt::Display for CalorimetryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalorimetryError::UnknownMaterial(key) => {
                write!(f, "unknown material: {key}")
            }
            CalorimetryError::UnsupportedCooling { from_c, to_c } => {
                write!(
                    f,
                    "cooling across a phase boundary is not supported ({from_c} °C -> {to_c} °C)"
                )
            }
        }
    }
}

impl std::error::Error for CalorimetryError {}

/// 물질 조회 시점에 한 번 결정되는 상 프로파일.
/// 기체상 데이터가 모두 있으면 5단계 경로, 아니면 고체/액체 경로를 쓴다.
#[derive(Debug, Clone, Copy)]
enum PhaseProfile {
    /// 고체-융해-액체-기화-기체 전 구간
    Full {
        melt_c: f64,
        boil_c: f64,
        c_gas: f64,
        latent_vaporization: f64,
    },
    /// 고체-융해-액체까지만 (비등 데이터 없음)
    SolidLiquid { melt_c: f64 },
}

impl PhaseProfile {
    fn of(mat: &MaterialData) -> Self {
        match (mat.c_gas, mat.latent_vaporization, mat.boiling_point_c) {
            (Some(c_gas), Some(latent_vaporization), Some(boil_c)) => PhaseProfile::Full {
                melt_c: mat.melting_point_c,
                boil_c,
                c_gas,
                latent_vaporization,
            },
            _ => PhaseProfile::SolidLiquid {
                melt_c: mat.melting_point_c,
            },
        }
    }
}

/// 단계를 방출 순서대로 모으면서 총량과 누적 곡선을 쌓는다.
struct Accumulator {
    total_j: f64,
    stages: Vec<Stage>,
    trace: ProcessTrace,
}

impl Accumulator {
    fn new(initial_temp_c: f64) -> Self {
        Accumulator {
            total_j: 0.0,
            stages: Vec::new(),
            trace: ProcessTrace::starting_at(initial_temp_c),
        }
    }

    fn push(&mut self, stage: Stage) {
        self.total_j += stage.energy_j;
        self.trace.push(stage.span.end_temp_c(), self.total_j);
        self.stages.push(stage);
    }

    fn finish(self) -> HeatBreakdown {
        HeatBreakdown {
            total_energy_j: self.total_j,
            stages: self.stages,
            trace: self.trace,
        }
    }
}

/// 물질 키로 조회한 뒤 열량을 계산한다. 키가 없으면 오류.
pub fn compute_heat_for(
    material_key: &str,
    mass_kg: f64,
    initial_temp_c: f64,
    final_temp_c: f64,
) -> Result<HeatBreakdown, CalorimetryError> {
    let mat = material_db::find_material(material_key)
        .ok_or_else(|| CalorimetryError::UnknownMaterial(material_key.trim().to_string()))?;
    compute_heat(mat, mass_kg, initial_temp_c, final_temp_c)
}

/// [T_initial, T_final] 구간을 상 구간으로 분할해 단계 목록, 총 열량,
/// 누적 (온도, 에너지) 곡선을 만든다. 순수 함수이며 입력을 검증하지 않는다
/// (질량 0이면 전 단계가 0 J, 음수 질량은 부호만 뒤집힌다).
pub fn compute_heat(
    mat: &MaterialData,
    mass_kg: f64,
    initial_temp_c: f64,
    final_temp_c: f64,
) -> Result<HeatBreakdown, CalorimetryError> {
    let mut acc = Accumulator::new(initial_temp_c);
    if final_temp_c == initial_temp_c {
        return Ok(acc.finish());
    }

    let profile = PhaseProfile::of(mat);
    if final_temp_c < initial_temp_c {
        cool_within_phase(mat, profile, mass_kg, initial_temp_c, final_temp_c, &mut acc)?;
    } else {
        match profile {
            PhaseProfile::Full {
                melt_c,
                boil_c,
                c_gas,
                latent_vaporization,
            } => heat_full(
                mat,
                melt_c,
                boil_c,
                c_gas,
                latent_vaporization,
                mass_kg,
                initial_temp_c,
                final_temp_c,
                &mut acc,
            ),
            PhaseProfile::SolidLiquid { melt_c } => heat_solid_liquid(
                mat,
                melt_c,
                mass_kg,
                initial_temp_c,
                final_temp_c,
                &mut acc,
            ),
        }
    }
    Ok(acc.finish())
}

/// 전 상 구간 가열 경로. 다섯 단계를 고정 순서로 검사하고 해당하는 것만
/// 방출한다. 술어와 클램프는 원 알고리즘 그대로이며, Ti < Tf가 보장된 상태로
/// 호출된다.
#[allow(clippy::too_many_arguments)]
fn heat_full(
    mat: &MaterialData,
    melt_c: f64,
    boil_c: f64,
    c_gas: f64,
    latent_vaporization: f64,
    mass_kg: f64,
    ti: f64,
    tf: f64,
    acc: &mut Accumulator,
) {
    // 1) 융점 아래 고체 가열
    if ti < melt_c && tf > melt_c {
        acc.push(Stage::sensible(
            StageKind::HeatSolid,
            mass_kg,
            mat.c_solid,
            ti,
            melt_c,
        ));
    } else if ti < melt_c && tf <= melt_c {
        acc.push(Stage::sensible(
            StageKind::HeatSolid,
            mass_kg,
            mat.c_solid,
            ti,
            tf,
        ));
    }

    // 2) 융해
    if ti <= melt_c && tf > melt_c {
        acc.push(Stage::latent(
            StageKind::Melt,
            mass_kg,
            mat.latent_fusion,
            melt_c,
        ));
    }

    // 3) 액체 가열. 부분 구간을 [max(melt,Ti), min(boil,Tf)]로 클램프한다.
    if ti < boil_c && tf > melt_c {
        let from = melt_c.max(ti);
        let to = boil_c.min(tf);
        if to > from {
            acc.push(Stage::sensible(
                StageKind::HeatLiquid,
                mass_kg,
                mat.c_liquid,
                from,
                to,
            ));
        }
    }

    // 4) 기화
    if ti < boil_c && tf > boil_c {
        acc.push(Stage::latent(
            StageKind::Vaporize,
            mass_kg,
            latent_vaporization,
            boil_c,
        ));
    }

    // 5) 비등점 위 기체 가열
    if tf > boil_c {
        let from = boil_c.max(ti);
        acc.push(Stage::sensible(StageKind::HeatGas, mass_kg, c_gas, from, tf));
    }
}

/// 고체/액체 물질 가열 경로. 비등 데이터가 없으므로 액체 가열에서 멈춘다.
/// 비등점 위를 요구해도 추가 단계나 오류 없이 액체 비열로 계속 가열된다.
fn heat_solid_liquid(
    mat: &MaterialData,
    melt_c: f64,
    mass_kg: f64,
    ti: f64,
    tf: f64,
    acc: &mut Accumulator,
) {
    if ti < melt_c && tf > ti {
        acc.push(Stage::sensible(
            StageKind::HeatSolid,
            mass_kg,
            mat.c_solid,
            ti,
            melt_c.min(tf),
        ));
    }

    if ti <= melt_c && tf > melt_c {
        acc.push(Stage::latent(
            StageKind::Melt,
            mass_kg,
            mat.latent_fusion,
            melt_c,
        ));
    }

    if tf > melt_c {
        acc.push(Stage::sensible(
            StageKind::HeatLiquid,
            mass_kg,
            mat.c_liquid,
            melt_c.max(ti),
            tf,
        ));
    }
}

/// 냉각 경로. 양 끝이 같은 상 구간 안에 있으면 민감열 단계 하나로 처리하고
/// (ΔT가 음수라 열량도 음수), 상 경계를 아래로 가로지르면 오류를 돌려준다.
fn cool_within_phase(
    mat: &MaterialData,
    profile: PhaseProfile,
    mass_kg: f64,
    ti: f64,
    tf: f64,
    acc: &mut Accumulator,
) -> Result<(), CalorimetryError> {
    let (kind, specific_heat) = match profile {
        PhaseProfile::Full {
            melt_c,
            boil_c,
            c_gas,
            ..
        } => {
            if ti <= melt_c && tf <= melt_c {
                (StageKind::HeatSolid, mat.c_solid)
            } else if ti <= boil_c && tf >= melt_c {
                (StageKind::HeatLiquid, mat.c_liquid)
            } else if ti >= boil_c && tf >= boil_c {
                (StageKind::HeatGas, c_gas)
            } else {
                return Err(CalorimetryError::UnsupportedCooling { from_c: ti, to_c: tf });
            }
        }
        PhaseProfile::SolidLiquid { melt_c } => {
            if ti <= melt_c && tf <= melt_c {
                (StageKind::HeatSolid, mat.c_solid)
            } else if ti >= melt_c && tf >= melt_c {
                (StageKind::HeatLiquid, mat.c_liquid)
            } else {
                return Err(CalorimetryError::UnsupportedCooling { from_c: ti, to_c: tf });
            }
        }
    };
    acc.push(Stage::sensible(kind, mass_kg, specific_heat, ti, tf));
    Ok(())
}
