use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_HEAT_CALC: &str = "main_menu.heat_calc";
    pub const MAIN_MENU_SOLVER: &str = "main_menu.solver";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_FORMULAS: &str = "main_menu.formulas";
    pub const MAIN_MENU_CONSTANTS: &str = "main_menu.constants";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const HEAT_CALC_HEADING: &str = "heat_calc.heading";
    pub const HEAT_CALC_MATERIALS: &str = "heat_calc.materials";
    pub const PROMPT_MATERIAL: &str = "prompt.material";
    pub const PROMPT_MASS: &str = "prompt.mass";
    pub const PROMPT_INITIAL_TEMP: &str = "prompt.initial_temp";
    pub const PROMPT_FINAL_TEMP: &str = "prompt.final_temp";
    pub const TRACE_HEADING: &str = "heat_calc.trace_heading";
    pub const TRACE_COLUMNS: &str = "heat_calc.trace_columns";

    pub const STAGE_HEAT_SOLID: &str = "stage.heat_solid";
    pub const STAGE_MELT: &str = "stage.melt";
    pub const STAGE_HEAT_LIQUID: &str = "stage.heat_liquid";
    pub const STAGE_VAPORIZE: &str = "stage.vaporize";
    pub const STAGE_HEAT_GAS: &str = "stage.heat_gas";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_STAGE: &str = "report.stage";
    pub const REPORT_RANGE: &str = "report.range";
    pub const REPORT_FORMULA: &str = "report.formula";
    pub const REPORT_TOTAL: &str = "report.total";
    pub const REPORT_PHASE_CHANGE: &str = "report.phase_change";

    pub const SOLVER_HEADING: &str = "solver.heading";
    pub const SOLVER_OPTIONS: &str = "solver.options";
    pub const SOLVER_RESULT: &str = "solver.result";
    pub const PROMPT_HEAT_Q: &str = "prompt.heat_q";
    pub const PROMPT_SPECIFIC_HEAT: &str = "prompt.specific_heat";
    pub const PROMPT_DELTA_T: &str = "prompt.delta_t";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "ko" | "ko-kr" => parse_toml_to_map(include_str!("../locales/ko.toml")),
        "en" | "en-us" | "en-uk" => parse_toml_to_map(include_str!("../locales/en.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Calorimetry Toolbox ===",
        MAIN_MENU_HEAT_CALC => "1) 열량 계산 (상변화 포함)",
        MAIN_MENU_SOLVER => "2) 변수 풀이 (Q = m·c·ΔT)",
        MAIN_MENU_UNIT_CONVERSION => "3) 단위 변환기",
        MAIN_MENU_FORMULAS => "4) 공식 모음",
        MAIN_MENU_CONSTANTS => "5) 물질 상수표",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        HEAT_CALC_HEADING => "\n-- 열량 계산 --",
        HEAT_CALC_MATERIALS => "물질: 1=Water 2=Aluminum 3=Copper 4=Iron",
        PROMPT_MATERIAL => "물질 선택: ",
        PROMPT_MASS => "질량 [kg]: ",
        PROMPT_INITIAL_TEMP => "초기 온도 [°C]: ",
        PROMPT_FINAL_TEMP => "최종 온도 [°C]: ",
        TRACE_HEADING => "누적 곡선 (그래프용):",
        TRACE_COLUMNS => "에너지 [kJ] | 온도 [°C]",
        STAGE_HEAT_SOLID => "고체 가열",
        STAGE_MELT => "융해",
        STAGE_HEAT_LIQUID => "액체 가열",
        STAGE_VAPORIZE => "기화",
        STAGE_HEAT_GAS => "기체 가열",
        REPORT_TITLE => "계산 결과",
        REPORT_STAGE => "단계",
        REPORT_RANGE => "구간",
        REPORT_FORMULA => "수식",
        REPORT_TOTAL => "총 열량:",
        REPORT_PHASE_CHANGE => "(상변화)",
        SOLVER_HEADING => "\n-- 변수 풀이 --",
        SOLVER_OPTIONS => "1) 질량 m  2) 비열 c  3) 최종 온도 Tf  4) 초기 온도 Ti",
        SOLVER_RESULT => "결과:",
        PROMPT_HEAT_Q => "열량 Q [J]: ",
        PROMPT_SPECIFIC_HEAT => "비열 c [J/(kg·°C)]: ",
        PROMPT_DELTA_T => "온도 변화 ΔT [°C]: ",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 온도  2) 온도차  3) 질량  4) 에너지  5) 비열  6) 잠열",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: C, kg, J, cal/g): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: K, g, kcal): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Calorimetry Toolbox ===",
        MAIN_MENU_HEAT_CALC => "1) Heat calculation (with phase changes)",
        MAIN_MENU_SOLVER => "2) Variable solver (Q = m·c·ΔT)",
        MAIN_MENU_UNIT_CONVERSION => "3) Unit Converter",
        MAIN_MENU_FORMULAS => "4) Formula Reference",
        MAIN_MENU_CONSTANTS => "5) Material Constants",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        HEAT_CALC_HEADING => "\n-- Heat Calculation --",
        HEAT_CALC_MATERIALS => "Materials: 1=Water 2=Aluminum 3=Copper 4=Iron",
        PROMPT_MATERIAL => "Select material: ",
        PROMPT_MASS => "Mass [kg]: ",
        PROMPT_INITIAL_TEMP => "Initial temperature [°C]: ",
        PROMPT_FINAL_TEMP => "Final temperature [°C]: ",
        TRACE_HEADING => "Cumulative curve (for plotting):",
        TRACE_COLUMNS => "Energy [kJ] | Temperature [°C]",
        STAGE_HEAT_SOLID => "Heat solid",
        STAGE_MELT => "Melting",
        STAGE_HEAT_LIQUID => "Heat liquid",
        STAGE_VAPORIZE => "Vaporization",
        STAGE_HEAT_GAS => "Heat gas",
        REPORT_TITLE => "CALCULATION RESULTS",
        REPORT_STAGE => "Stage",
        REPORT_RANGE => "Range",
        REPORT_FORMULA => "Formula",
        REPORT_TOTAL => "TOTAL HEAT:",
        REPORT_PHASE_CHANGE => "(phase change)",
        SOLVER_HEADING => "\n-- Variable Solver --",
        SOLVER_OPTIONS => "1) Mass m  2) Specific heat c  3) Final temp Tf  4) Initial temp Ti",
        SOLVER_RESULT => "Result:",
        PROMPT_HEAT_Q => "Heat Q [J]: ",
        PROMPT_SPECIFIC_HEAT => "Specific heat c [J/(kg·°C)]: ",
        PROMPT_DELTA_T => "Temperature change ΔT [°C]: ",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => {
            "1) Temperature  2) ΔTemperature  3) Mass  4) Energy  5) Specific heat  6) Latent heat"
        }
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: C, kg, J, cal/g): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: K, g, kcal): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        _ => return None,
    })
}
