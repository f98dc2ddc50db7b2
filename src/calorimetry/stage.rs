/// 가열/냉각 과정을 이루는 단계와 누적 곡선 자료형.

/// 단계 종류. 표시 문자열은 i18n/report 쪽에서 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    HeatSolid,
    Melt,
    HeatLiquid,
    Vaporize,
    HeatGas,
}

impl StageKind {
    /// 일정 온도에서 일어나는 잠열 단계이면 true.
    pub fn is_latent(&self) -> bool {
        matches!(self, StageKind::Melt | StageKind::Vaporize)
    }
}

/// 단계가 차지하는 온도 구간.
#[derive(Debug, Clone, Copy)]
pub enum StageSpan {
    /// 민감열 구간 [°C]
    Ramp { from_c: f64, to_c: f64 },
    /// 상변화가 일어나는 단일 온도 [°C]
    Transition { at_c: f64 },
}

impl StageSpan {
    /// 단계가 끝나는 온도 [°C]. 누적 곡선 체크포인트로 쓰인다.
    pub fn end_temp_c(&self) -> f64 {
        match *self {
            StageSpan::Ramp { to_c, .. } => to_c,
            StageSpan::Transition { at_c } => at_c,
        }
    }
}

/// 하나의 계산 단계. 수식 재구성에 필요한 입력값을 그대로 기록해 두어
/// 문자열 렌더링을 report 모듈이 따로 수행할 수 있게 한다.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub kind: StageKind,
    pub span: StageSpan,
    /// 질량 [kg]
    pub mass_kg: f64,
    /// 민감열이면 비열 [J/(kg·°C)], 잠열이면 잠열 [J/kg]
    pub coefficient: f64,
    /// 민감열 단계의 ΔT [°C]. 잠열 단계는 None.
    pub delta_t_c: Option<f64>,
    /// 이 단계의 열량 [J]. 냉각이면 음수.
    pub energy_j: f64,
}

impl Stage {
    /// Q = m·c·ΔT 단계를 만든다.
    pub(crate) fn sensible(
        kind: StageKind,
        mass_kg: f64,
        specific_heat: f64,
        from_c: f64,
        to_c: f64,
    ) -> Self {
        let delta_t = to_c - from_c;
        Stage {
            kind,
            span: StageSpan::Ramp { from_c, to_c },
            mass_kg,
            coefficient: specific_heat,
            delta_t_c: Some(delta_t),
            energy_j: mass_kg * specific_heat * delta_t,
        }
    }

    /// Q = m·L 단계를 만든다.
    pub(crate) fn latent(kind: StageKind, mass_kg: f64, latent_heat: f64, at_c: f64) -> Self {
        Stage {
            kind,
            span: StageSpan::Transition { at_c },
            mass_kg,
            coefficient: latent_heat,
            delta_t_c: None,
            energy_j: mass_kg * latent_heat,
        }
    }
}

/// 누적 (온도, 에너지) 곡선. 첫 체크포인트는 항상 (T_initial, 0)이다.
/// 그래프 축은 x=에너지(kJ 변환은 호출자 몫), y=온도로 쓴다.
#[derive(Debug, Clone)]
pub struct ProcessTrace {
    pub temperatures_c: Vec<f64>,
    pub cumulative_energy_j: Vec<f64>,
}

impl ProcessTrace {
    pub(crate) fn starting_at(initial_temp_c: f64) -> Self {
        ProcessTrace {
            temperatures_c: vec![initial_temp_c],
            cumulative_energy_j: vec![0.0],
        }
    }

    pub(crate) fn push(&mut self, temp_c: f64, cumulative_j: f64) {
        self.temperatures_c.push(temp_c);
        self.cumulative_energy_j.push(cumulative_j);
    }

    pub fn len(&self) -> usize {
        self.temperatures_c.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures_c.is_empty()
    }

    /// (누적 에너지 [J], 온도 [°C]) 쌍을 순서대로 돌려준다.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.cumulative_energy_j
            .iter()
            .copied()
            .zip(self.temperatures_c.iter().copied())
    }
}

/// 한 번의 계산 결과 전체.
#[derive(Debug, Clone)]
pub struct HeatBreakdown {
    /// 방출 순서대로 누적한 총 열량 [J]
    pub total_energy_j: f64,
    pub stages: Vec<Stage>,
    pub trace: ProcessTrace,
}
