use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::category::Category;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_TITLE: &str = "app.title";
    pub const APP_SUBTITLE: &str = "app.subtitle";
    pub const APP_FOOTER: &str = "app.footer";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const ERROR_PREFIX: &str = "general.error_prefix";

    pub const MENU_TITLE: &str = "menu.title";
    pub const MENU_CATEGORY: &str = "menu.category";
    pub const MENU_VALUE: &str = "menu.value";
    pub const MENU_FROM: &str = "menu.from";
    pub const MENU_TO: &str = "menu.to";
    pub const MENU_SWAP: &str = "menu.swap";
    pub const MENU_EXIT: &str = "menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const PROMPT_UNIT: &str = "prompt.unit";
    pub const PROMPT_CATEGORY: &str = "prompt.category";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_NEGATIVE_VALUE: &str = "error.negative_value";
    pub const ERROR_UNKNOWN_UNIT: &str = "error.unknown_unit";

    pub const LABEL_CATEGORY: &str = "label.category";
    pub const LABEL_VALUE: &str = "label.value";
    pub const LABEL_FROM: &str = "label.from";
    pub const LABEL_TO: &str = "label.to";
    pub const LABEL_RESULT: &str = "label.result";
    pub const SWAP_BUTTON: &str = "swap.button";
    pub const SWAP_TIP: &str = "swap.tip";
    pub const UNITS_HEADING: &str = "units.heading";

    pub const CATEGORY_LENGTH: &str = "category.length";
    pub const CATEGORY_WEIGHT: &str = "category.weight";
    pub const CATEGORY_TEMPERATURE: &str = "category.temperature";
    pub const CATEGORY_VOLUME: &str = "category.volume";

    pub const ANIMATION_LOADING: &str = "animation.loading";
    pub const ANIMATION_NONE: &str = "animation.none";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 영어 → 키 순서로 찾는다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        let built_in = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        built_in.unwrap_or(key).to_string()
    }

    pub fn category_label(&self, category: Category) -> String {
        self.t(match category {
            Category::Length => keys::CATEGORY_LENGTH,
            Category::Weight => keys::CATEGORY_WEIGHT,
            Category::Temperature => keys::CATEGORY_TEMPERATURE,
            Category::Volume => keys::CATEGORY_VOLUME,
        })
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
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
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 테이블은 점으로 이어 붙인 키가 된다.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
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

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "Universal Converter",
        APP_SUBTITLE => "여러 단위를 손쉽게 변환하세요",
        APP_FOOTER => "Universal Converter v1.2",
        APP_EXIT => "프로그램을 종료합니다.",
        ERROR_PREFIX => "오류",
        MENU_TITLE => "\n=== Universal Converter ===",
        MENU_CATEGORY => "1) 변환 종류 변경",
        MENU_VALUE => "2) 값 입력",
        MENU_FROM => "3) 입력 단위 선택",
        MENU_TO => "4) 목표 단위 선택",
        MENU_SWAP => "5) 단위 교환",
        MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_VALUE => "값 입력: ",
        PROMPT_UNIT => "단위 번호 또는 이름: ",
        PROMPT_CATEGORY => "종류 번호: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_NEGATIVE_VALUE => "0 이상의 값을 입력하세요.",
        ERROR_UNKNOWN_UNIT => "이 종류에 없는 단위입니다.",
        LABEL_CATEGORY => "변환 종류",
        LABEL_VALUE => "값",
        LABEL_FROM => "입력 단위",
        LABEL_TO => "목표 단위",
        LABEL_RESULT => "변환 결과",
        SWAP_BUTTON => "⇄ 단위 교환",
        SWAP_TIP => "입력 단위와 목표 단위를 맞바꿉니다",
        UNITS_HEADING => "사용 가능한 단위",
        CATEGORY_LENGTH => "길이",
        CATEGORY_WEIGHT => "무게",
        CATEGORY_TEMPERATURE => "온도",
        CATEGORY_VOLUME => "체적",
        ANIMATION_LOADING => "애니메이션 불러오는 중…",
        ANIMATION_NONE => "애니메이션 없음",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "Universal Converter",
        APP_SUBTITLE => "Convert between different units with ease",
        APP_FOOTER => "Universal Converter v1.2",
        APP_EXIT => "Exiting application.",
        ERROR_PREFIX => "Error",
        MENU_TITLE => "\n=== Universal Converter ===",
        MENU_CATEGORY => "1) Change conversion type",
        MENU_VALUE => "2) Enter value",
        MENU_FROM => "3) Select from unit",
        MENU_TO => "4) Select to unit",
        MENU_SWAP => "5) Swap units",
        MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_VALUE => "Value: ",
        PROMPT_UNIT => "Unit number or name: ",
        PROMPT_CATEGORY => "Type number: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_NEGATIVE_VALUE => "Please enter a value of 0 or more.",
        ERROR_UNKNOWN_UNIT => "That unit does not belong to this type.",
        LABEL_CATEGORY => "Select Conversion Type",
        LABEL_VALUE => "Enter Value",
        LABEL_FROM => "From Unit",
        LABEL_TO => "To Unit",
        LABEL_RESULT => "Result",
        SWAP_BUTTON => "⇄ Swap Units",
        SWAP_TIP => "Click to swap units",
        UNITS_HEADING => "Available units",
        CATEGORY_LENGTH => "Length",
        CATEGORY_WEIGHT => "Weight",
        CATEGORY_TEMPERATURE => "Temperature",
        CATEGORY_VOLUME => "Volume",
        ANIMATION_LOADING => "Loading animation…",
        ANIMATION_NONE => "No animation",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_falls_back_to_english() {
        let tr = Translator::new("fr");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::SWAP_BUTTON), "⇄ Swap Units");
    }

    #[test]
    fn korean_category_labels() {
        let tr = Translator::new("ko-KR");
        assert_eq!(tr.category_label(Category::Temperature), "온도");
    }

    #[test]
    fn missing_key_returns_key() {
        let tr = Translator::new("en");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn pack_overrides_built_in_strings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("en.toml"), "[swap]\nbutton = \"Flip\"\n").unwrap();
        let tr = Translator::new_with_pack("en", Some(dir.path()));
        assert_eq!(tr.t(keys::SWAP_BUTTON), "Flip");
        assert_eq!(tr.t(keys::LABEL_TO), "To Unit");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("ko"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-US")), "en");
    }
}
