use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::pump::Field;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_BANNER: &str = "general.banner";
    pub const REPORT_SAVED: &str = "general.report_saved";

    pub const PROMPT_PUMP_NAME: &str = "prompt.pump_name";
    pub const PROMPT_FLOW_RATE: &str = "prompt.flow_rate";
    pub const PROMPT_PIPE_DIAMETER: &str = "prompt.pipe_diameter";
    pub const PROMPT_STRAIGHT_LENGTH: &str = "prompt.straight_length";
    pub const PROMPT_FRICTION_RATE: &str = "prompt.friction_rate";
    pub const PROMPT_VERTICAL_HEAD: &str = "prompt.vertical_head";
    pub const PROMPT_EXTRA_LOSS: &str = "prompt.extra_loss";
    pub const PROMPT_DAILY_VOLUME: &str = "prompt.daily_volume";
    pub const PROMPT_BALL_VALVES: &str = "prompt.ball_valves";
    pub const PROMPT_CHECK_VALVES: &str = "prompt.check_valves";
    pub const PROMPT_ELBOW_90: &str = "prompt.elbow_90";
    pub const PROMPT_ELBOW_45: &str = "prompt.elbow_45";
    pub const PROMPT_Y_STRAINER: &str = "prompt.y_strainer";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_PUMP_NAME: &str = "report.pump_name";
    pub const REPORT_BASIC_SPEC: &str = "report.basic_spec";
    pub const REPORT_HEAD_SECTION: &str = "report.head_section";
    pub const REPORT_EQUIVALENT_LENGTH: &str = "report.equivalent_length";
    pub const REPORT_FRICTION_LOSS: &str = "report.friction_loss";
    pub const REPORT_VERTICAL_HEAD: &str = "report.vertical_head";
    pub const REPORT_EXTRA_LOSS: &str = "report.extra_loss";
    pub const REPORT_TOTAL_HEAD: &str = "report.total_head";
    pub const REPORT_POWER_SECTION: &str = "report.power_section";
    pub const REPORT_POWER_FORMULA: &str = "report.power_formula";
    pub const REPORT_POWER_KW: &str = "report.power_kw";
    pub const REPORT_POWER_HP: &str = "report.power_hp";
    pub const REPORT_RUNTIME_SECTION: &str = "report.runtime_section";
    pub const REPORT_DAILY_VOLUME: &str = "report.daily_volume";
    pub const REPORT_RUNTIME: &str = "report.runtime";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// 번체 중국어(계산서 원문 표기)
    Zh,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Zh
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Zh => "zh-tw",
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
    /// 언어 코드(zh/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 zh-tw로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 값이 우선이고, 영어 번역이 없으면 중국어로 폴백한다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| zh(key)),
            Language::Zh => zh(key),
        }
    }

    /// `{name}` 자리표시자를 채운 번역문.
    pub fn fill(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut out = self.t(key).to_string();
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }

    /// 입력 항목별 프롬프트.
    pub fn prompt(&self, field: Field) -> &str {
        self.t(prompt_key(field))
    }
}

fn prompt_key(field: Field) -> &'static str {
    use keys::*;
    match field {
        Field::PumpName => PROMPT_PUMP_NAME,
        Field::FlowRate => PROMPT_FLOW_RATE,
        Field::PipeDiameter => PROMPT_PIPE_DIAMETER,
        Field::StraightPipeLength => PROMPT_STRAIGHT_LENGTH,
        Field::FrictionRate => PROMPT_FRICTION_RATE,
        Field::VerticalHead => PROMPT_VERTICAL_HEAD,
        Field::ExtraLoss => PROMPT_EXTRA_LOSS,
        Field::DailyVolume => PROMPT_DAILY_VOLUME,
        Field::BallValves => PROMPT_BALL_VALVES,
        Field::CheckValves => PROMPT_CHECK_VALVES,
        Field::Elbow90 => PROMPT_ELBOW_90,
        Field::Elbow45 => PROMPT_ELBOW_45,
        Field::YStrainer => PROMPT_Y_STRAINER,
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "zh-tw".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("zh") => Some("zh-tw".into()),
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
        "zh" => Some("zh-tw".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = dir.join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., zh-tw)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., zh)
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let table: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn zh(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "錯誤",
        APP_BANNER => "--- 泵浦計算書自動產出系統 ---",
        REPORT_SAVED => "[成功] 檔案已儲存：{path}",
        PROMPT_PUMP_NAME => "請輸入泵浦編號 (例如: P-101A/B): ",
        PROMPT_FLOW_RATE => "請輸入設計流量 (CMH, m3/hr): ",
        PROMPT_PIPE_DIAMETER => "請輸入管徑 (ψ/mm): ",
        PROMPT_STRAIGHT_LENGTH => "請輸入直管長度 (m): ",
        PROMPT_FRICTION_RATE => "請輸入摩擦損失率 (m/100m, 預設 7.9): ",
        PROMPT_VERTICAL_HEAD => "請輸入垂直揚程 (m): ",
        PROMPT_EXTRA_LOSS => "請輸入多段過濾/外部單元壓損 (m): ",
        PROMPT_DAILY_VOLUME => "請輸入每日處理水量 (CMD, m3/day): ",
        PROMPT_BALL_VALVES => "球閥數量: ",
        PROMPT_CHECK_VALVES => "逆止閥數量: ",
        PROMPT_ELBOW_90 => "90°彎頭數量: ",
        PROMPT_ELBOW_45 => "45°彎頭數量: ",
        PROMPT_Y_STRAINER => "Y型過濾器數量: ",
        REPORT_TITLE => "泵浦計算書",
        REPORT_PUMP_NAME => "泵浦名稱：{name}",
        REPORT_BASIC_SPEC => "水量 = {flow} CMH  管徑 = {diameter}ψ  摩擦損失為 {rate} m/100m",
        REPORT_HEAD_SECTION => "一、 揚程計算：",
        REPORT_EQUIVALENT_LENGTH => "等價管長 = {length} m",
        REPORT_FRICTION_LOSS => "摩擦損失 = {length} m * {rate}/100 = {friction} m",
        REPORT_VERTICAL_HEAD => "垂直揚程 = {vertical} m",
        REPORT_EXTRA_LOSS => "外部單元壓損 = {extra} m",
        REPORT_TOTAL_HEAD => {
            "總揚程計算：{friction} + {vertical} + {extra} = {raw} m，實取 {design} m"
        }
        REPORT_POWER_SECTION => "二、 泵浦馬力：",
        REPORT_POWER_FORMULA => "P = 0.163 * Q * H * K / E  ， K：傳動效率(1.1)，E：泵浦效率(0.7)",
        REPORT_POWER_KW => "馬力(KW) = 0.163 * {flow_per_min} * {design} * 1.1 / 0.7 = {kw} KW",
        REPORT_POWER_HP => "約等於 {hp} HP",
        REPORT_RUNTIME_SECTION => "三、 泵浦運轉時間計算：",
        REPORT_DAILY_VOLUME => "每日處理水量 = {daily} CMD",
        REPORT_RUNTIME => "泵浦運轉時間 = {daily} / {flow} = {runtime} hr",
        _ => "(missing translation)",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_BANNER => "--- Pump Calculation Sheet Generator ---",
        REPORT_SAVED => "[OK] Report saved: {path}",
        PROMPT_PUMP_NAME => "Pump tag (e.g. P-101A/B): ",
        PROMPT_FLOW_RATE => "Design flow (CMH, m3/hr): ",
        PROMPT_PIPE_DIAMETER => "Pipe diameter (mm): ",
        PROMPT_STRAIGHT_LENGTH => "Straight pipe length (m): ",
        PROMPT_FRICTION_RATE => "Friction loss rate (m/100m, default 7.9): ",
        PROMPT_VERTICAL_HEAD => "Vertical head (m): ",
        PROMPT_EXTRA_LOSS => "Filtration / external unit loss (m): ",
        PROMPT_DAILY_VOLUME => "Daily treated volume (CMD, m3/day): ",
        PROMPT_BALL_VALVES => "Ball valves: ",
        PROMPT_CHECK_VALVES => "Check valves: ",
        PROMPT_ELBOW_90 => "90° elbows: ",
        PROMPT_ELBOW_45 => "45° elbows: ",
        PROMPT_Y_STRAINER => "Y-strainers: ",
        REPORT_TITLE => "Pump Calculation Sheet",
        REPORT_PUMP_NAME => "Pump: {name}",
        REPORT_BASIC_SPEC => {
            "Flow = {flow} CMH  Diameter = {diameter} mm  Friction loss {rate} m/100m"
        }
        REPORT_HEAD_SECTION => "1. Head calculation:",
        REPORT_EQUIVALENT_LENGTH => "Equivalent length = {length} m",
        REPORT_FRICTION_LOSS => "Friction loss = {length} m * {rate}/100 = {friction} m",
        REPORT_VERTICAL_HEAD => "Vertical head = {vertical} m",
        REPORT_EXTRA_LOSS => "External unit loss = {extra} m",
        REPORT_TOTAL_HEAD => {
            "Total head: {friction} + {vertical} + {extra} = {raw} m, design {design} m"
        }
        REPORT_POWER_SECTION => "2. Pump power:",
        REPORT_POWER_FORMULA => {
            "P = 0.163 * Q * H * K / E, K: transmission factor (1.1), E: pump efficiency (0.7)"
        }
        REPORT_POWER_KW => "Power (kW) = 0.163 * {flow_per_min} * {design} * 1.1 / 0.7 = {kw} kW",
        REPORT_POWER_HP => "approx. {hp} HP",
        REPORT_RUNTIME_SECTION => "3. Pump running time:",
        REPORT_DAILY_VOLUME => "Daily treated volume = {daily} CMD",
        REPORT_RUNTIME => "Running time = {daily} / {flow} = {runtime} hr",
        _ => return None,
    };
    Some(s)
}
