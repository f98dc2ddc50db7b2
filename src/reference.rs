//! 공식/상수 참고 텍스트. 정적 문자열이며 계산 로직과 무관하다.

use crate::i18n::Language;

/// 칼로리메트리 공식 모음 텍스트.
pub fn formulas_text(lang: Language) -> &'static str {
    match lang {
        Language::Ko => FORMULAS_KO,
        Language::En => FORMULAS_EN,
    }
}

/// 물질 상수표 텍스트.
pub fn constants_text(lang: Language) -> &'static str {
    match lang {
        Language::Ko => CONSTANTS_KO,
        Language::En => CONSTANTS_EN,
    }
}

const FORMULAS_KO: &str = "\
칼로리메트리 공식

1. 민감열 (상변화 없는 온도 변화)
   Q = m · c · ΔT = m · c · (T_final - T_initial)
   변형: m = Q/(c·ΔT),  c = Q/(m·ΔT),  ΔT = Q/(m·c)
         T_final = T_initial + Q/(m·c),  T_initial = T_final - Q/(m·c)

2. 융해 잠열 (고체 ↔ 액체)
   Q_fusion = m · L_f
   변형: m = Q_fusion/L_f,  L_f = Q_fusion/m

3. 기화 잠열 (액체 ↔ 기체)
   Q_vaporization = m · L_v
   변형: m = Q_vaporization/L_v,  L_v = Q_vaporization/m

4. 총 열량
   Q_total = Σ Q_i
   Q_total = Q_고체가열 + Q_융해 + Q_액체가열 + Q_기화 + Q_기체가열

5. 에너지 보존 (열량계)
   Q_방출 + Q_흡수 = 0

물의 상 구간 판별
   T < 0°C          → 얼음 (c_얼음 사용)
   T = 0°C          → 융해/응고 (L_f 사용)
   0°C < T < 100°C  → 액체 물 (c_물 사용)
   T = 100°C        → 기화/응축 (L_v 사용)
   T > 100°C        → 수증기 (c_증기 사용)

계산 알고리즘
   1. 초기/최종 상을 판별한다
   2. 상변화가 있으면: 경계 온도까지 가열/냉각 → 잠열 적용 → 새 상에서 계속
   3. 상변화가 없으면: Q = m · c · ΔT 한 번
";

const FORMULAS_EN: &str = "\
CALORIMETRY FORMULAS

1. Sensible heat (temperature change without phase change)
   Q = m · c · ΔT = m · c · (T_final - T_initial)
   Rearrangements: m = Q/(c·ΔT),  c = Q/(m·ΔT),  ΔT = Q/(m·c)
                   T_final = T_initial + Q/(m·c),  T_initial = T_final - Q/(m·c)

2. Latent heat of fusion (solid ↔ liquid)
   Q_fusion = m · L_f
   Rearrangements: m = Q_fusion/L_f,  L_f = Q_fusion/m

3. Latent heat of vaporization (liquid ↔ gas)
   Q_vaporization = m · L_v
   Rearrangements: m = Q_vaporization/L_v,  L_v = Q_vaporization/m

4. Total heat (complete process)
   Q_total = Σ Q_i
   Q_total = Q_heat_solid + Q_fusion + Q_heat_liquid + Q_vaporization + Q_heat_gas

5. Conservation of energy (calorimetry)
   Q_released + Q_absorbed = 0

PHASE CONDITIONS (WATER)
   T < 0°C          → ice (use c_ice)
   T = 0°C          → fusion/solidification (use L_f)
   0°C < T < 100°C  → liquid water (use c_water)
   T = 100°C        → vaporization/condensation (use L_v)
   T > 100°C        → steam (use c_steam)

CALCULATION ALGORITHM
   1. Determine the initial and final phase
   2. If there is a phase change: heat/cool to the boundary, apply the
      latent heat, continue in the new phase
   3. If there is no phase change: a single Q = m · c · ΔT
";

const CONSTANTS_KO: &str = "\
물질 상수표

물 (H₂O)
   고체 비열 (c_얼음)      : 2100 J/(kg·°C)   | 0.5 cal/(g·°C)
   액체 비열 (c_물)        : 4186 J/(kg·°C)   | 1 cal/(g·°C)
   기체 비열 (c_증기)      : 2010 J/(kg·°C)   | 0.48 cal/(g·°C)
   융해 잠열 (L_f)         : 334000 J/kg      | 80 cal/g
   기화 잠열 (L_v)         : 2260000 J/kg     | 540 cal/g
   융점                    : 0 °C             | 273.15 K
   비등점                  : 100 °C           | 373.15 K

알루미늄
   고체 비열 (c)           : 900 J/(kg·°C)    | 0.215 cal/(g·°C)
   액체 비열 (c)           : 1100 J/(kg·°C)
   융해 잠열 (L_f)         : 398000 J/kg      | 95 cal/g
   융점                    : 660 °C           | 933 K

구리
   고체 비열 (c)           : 385 J/(kg·°C)    | 0.092 cal/(g·°C)
   액체 비열 (c)           : 510 J/(kg·°C)
   융해 잠열 (L_f)         : 205000 J/kg      | 49 cal/g
   융점                    : 1085 °C          | 1358 K

철
   고체 비열 (c)           : 450 J/(kg·°C)    | 0.107 cal/(g·°C)
   액체 비열 (c)           : 820 J/(kg·°C)
   융해 잠열 (L_f)         : 272000 J/kg      | 65 cal/g
   융점                    : 1538 °C          | 1811 K
";

const CONSTANTS_EN: &str = "\
MATERIAL CONSTANTS

WATER (H₂O)
   Specific heat of ice (c_ice)       : 2100 J/(kg·°C)   | 0.5 cal/(g·°C)
   Specific heat of water (c_water)   : 4186 J/(kg·°C)   | 1 cal/(g·°C)
   Specific heat of steam (c_steam)   : 2010 J/(kg·°C)   | 0.48 cal/(g·°C)
   Latent heat of fusion (L_f)        : 334000 J/kg      | 80 cal/g
   Latent heat of vaporization (L_v)  : 2260000 J/kg     | 540 cal/g
   Melting point                      : 0 °C             | 273.15 K
   Boiling point                      : 100 °C           | 373.15 K

ALUMINUM
   Specific heat, solid (c)           : 900 J/(kg·°C)    | 0.215 cal/(g·°C)
   Specific heat, liquid (c)          : 1100 J/(kg·°C)
   Latent heat of fusion (L_f)        : 398000 J/kg      | 95 cal/g
   Melting point                      : 660 °C           | 933 K

COPPER
   Specific heat, solid (c)           : 385 J/(kg·°C)    | 0.092 cal/(g·°C)
   Specific heat, liquid (c)          : 510 J/(kg·°C)
   Latent heat of fusion (L_f)        : 205000 J/kg      | 49 cal/g
   Melting point                      : 1085 °C          | 1358 K

IRON
   Specific heat, solid (c)           : 450 J/(kg·°C)    | 0.107 cal/(g·°C)
   Specific heat, liquid (c)          : 820 J/(kg·°C)
   Latent heat of fusion (L_f)        : 272000 J/kg      | 65 cal/g
   Melting point                      : 1538 °C          | 1811 K
";
