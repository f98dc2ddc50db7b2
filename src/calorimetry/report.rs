//! 계산 결과를 사람이 읽을 보고서 문자열로 렌더링한다.
//! 수치 계산과 분리되어 있으며 Stage에 기록된 입력값만 사용한다.

use crate::i18n::{keys, Translator};

use super::stage::{HeatBreakdown, Stage, StageKind, StageSpan};

/// 단계 종류의 표시 이름을 돌려준다.
pub fn stage_label(kind: StageKind, tr: &Translator) -> &'static str {
    match kind {
        StageKind::HeatSolid => tr.t(keys::STAGE_HEAT_SOLID),
        StageKind::Melt => tr.t(keys::STAGE_MELT),
        StageKind::HeatLiquid => tr.t(keys::STAGE_HEAT_LIQUID),
        StageKind::Vaporize => tr.t(keys::STAGE_VAPORIZE),
        StageKind::HeatGas => tr.t(keys::STAGE_HEAT_GAS),
    }
}

/// 단계의 온도 구간 문자열.
pub fn stage_range(stage: &Stage, tr: &Translator) -> String {
    match stage.span {
        StageSpan::Ramp { from_c, to_c } => format!("{from_c}°C → {to_c}°C"),
        StageSpan::Transition { at_c } => {
            format!("{at_c}°C {}", tr.t(keys::REPORT_PHASE_CHANGE))
        }
    }
}

/// 기호 수식과 대입값을 한 줄로 렌더링한다.
pub fn stage_formula(stage: &Stage) -> String {
    match stage.delta_t_c {
        Some(delta_t) => format!(
            "Q = m · c · ΔT = {} kg · {} J/(kg·°C) · {:.2} °C",
            stage.mass_kg, stage.coefficient, delta_t
        ),
        None => {
            let symbol = if stage.kind == StageKind::Vaporize {
                "L_v"
            } else {
                "L_f"
            };
            format!(
                "Q = m · {symbol} = {} kg · {} J/kg",
                stage.mass_kg, stage.coefficient
            )
        }
    }
}

/// 단계별 블록과 합산 줄, J/kJ/MJ 총량으로 이루어진 전체 보고서.
pub fn render_report(breakdown: &HeatBreakdown, tr: &Translator) -> String {
    let heavy_rule = "═".repeat(80);
    let light_rule = "-".repeat(80);
    let mut text = format!("{heavy_rule}\n{}\n{heavy_rule}\n\n", tr.t(keys::REPORT_TITLE));

    for (i, stage) in breakdown.stages.iter().enumerate() {
        let n = i + 1;
        text += &format!(
            "{} {n}: {}\n",
            tr.t(keys::REPORT_STAGE),
            stage_label(stage.kind, tr)
        );
        text += &format!("{}: {}\n", tr.t(keys::REPORT_RANGE), stage_range(stage, tr));
        text += &format!("{}: {}\n", tr.t(keys::REPORT_FORMULA), stage_formula(stage));
        text += &format!(
            "Q{n} = {:.2} J = {:.2} kJ\n",
            stage.energy_j,
            stage.energy_j / 1000.0
        );
        text += &format!("{light_rule}\n\n");
    }

    let terms: Vec<String> = (1..=breakdown.stages.len()).map(|n| format!("Q{n}")).collect();
    text += &format!("{heavy_rule}\n{}\n", tr.t(keys::REPORT_TOTAL));
    if !terms.is_empty() {
        text += &format!("Q_total = {}\n", terms.join(" + "));
    }
    text += &format!("Q_total = {:.2} J\n", breakdown.total_energy_j);
    text += &format!("Q_total = {:.2} kJ\n", breakdown.total_energy_j / 1000.0);
    text += &format!("Q_total = {:.2} MJ\n", breakdown.total_energy_j / 1_000_000.0);
    text += &format!("{heavy_rule}\n");
    text
}
