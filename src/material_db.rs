/// 고정 물질 상수 테이블. 값은 교육용 근사치이며 실험 설계에는
/// 공인 물성표로 검증해야 한다.

/// 한 물질의 열역학 상수 묶음.
///
/// 기체상 데이터(`c_gas`/`latent_vaporization`/`boiling_point_c`)는
/// 물에만 존재한다. 기체상 데이터가 없는 물질은 액체 가열까지만 계산된다.
#[derive(Debug, Clone, Copy)]
pub struct MaterialData {
    /// 영문 식별자. CLI/GUI 검색 키로도 쓰인다.
    pub key: &'static str,
    /// 고체 비열 [J/(kg·°C)]
    pub c_solid: f64,
    /// 액체 비열 [J/(kg·°C)]
    pub c_liquid: f64,
    /// 기체 비열 [J/(kg·°C)]
    pub c_gas: Option<f64>,
    /// 융해 잠열 [J/kg]
    pub latent_fusion: f64,
    /// 기화 잠열 [J/kg]
    pub latent_vaporization: Option<f64>,
    /// 융점 [°C]
    pub melting_point_c: f64,
    /// 비등점 [°C]
    pub boiling_point_c: Option<f64>,
}

impl MaterialData {
    /// 기체상까지 모든 상이 모델링되어 있으면 true.
    pub fn has_gas_phase(&self) -> bool {
        self.c_gas.is_some() && self.latent_vaporization.is_some() && self.boiling_point_c.is_some()
    }
}

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

/// 키로 물질을 찾는다. 대소문자를 무시한다.
pub fn find_material(key: &str) -> Option<&'static MaterialData> {
    MATERIALS.iter().find(|m| m.key.eq_ignore_ascii_case(key.trim()))
}

const MATERIALS: &[MaterialData] = &[
    MaterialData {
        key: "Water",
        c_solid: 2100.0,
        c_liquid: 4186.0,
        c_gas: Some(2010.0),
        latent_fusion: 334_000.0,
        latent_vaporization: Some(2_260_000.0),
        melting_point_c: 0.0,
        boiling_point_c: Some(100.0),
    },
    MaterialData {
        key: "Aluminum",
        c_solid: 900.0,
        c_liquid: 1100.0,
        c_gas: None,
        latent_fusion: 398_000.0,
        latent_vaporization: None,
        melting_point_c: 660.0,
        boiling_point_c: None,
    },
    MaterialData {
        key: "Copper",
        c_solid: 385.0,
        c_liquid: 510.0,
        c_gas: None,
        latent_fusion: 205_000.0,
        latent_vaporization: None,
        melting_point_c: 1085.0,
        boiling_point_c: None,
    },
    MaterialData {
        key: "Iron",
        c_solid: 450.0,
        c_liquid: 820.0,
        c_gas: None,
        latent_fusion: 272_000.0,
        latent_vaporization: None,
        melting_point_c: 1538.0,
        boiling_point_c: None,
    },
];
