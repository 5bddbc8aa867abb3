use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

use crate::category::Category;
use crate::config::ConfigError;
use crate::conversion::{format_result, ConversionError, ConversionRequest, Converter};
use crate::i18n::{keys, Translator};
use crate::state::{SelectionState, StateError};
use crate::ui_cli::{Console, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 선택 상태 오류
    #[error("선택 오류: {0}")]
    State(#[from] StateError),
}

/// 한 번의 변환을 수행하고 결과 문자열을 돌려준다.
///
/// 카테고리를 생략하면 입력 단위 이름으로 추정한다. 단위 이름은 대소문자를 무시하고
/// `ft`, `lb`, `f` 같은 별칭도 받는다.
pub fn convert_once(
    converter: &Converter<'_>,
    value: f64,
    from: &str,
    to: &str,
    category: Option<&str>,
) -> Result<String, AppError> {
    let table = converter.table();
    let category = match category {
        Some(name) => name.parse::<Category>()?,
        None => table
            .category_of(from)
            .ok_or_else(|| ConversionError::UnresolvedUnit(from.to_string()))?,
    };
    let unknown = |unit: &str| ConversionError::UnknownUnit {
        unit: unit.to_string(),
        category,
    };
    let from_unit = table
        .canonical_unit(category, from)
        .ok_or_else(|| unknown(from))?;
    let to_unit = table
        .canonical_unit(category, to)
        .ok_or_else(|| unknown(to))?;
    let result = converter.try_convert(&ConversionRequest {
        value,
        from_unit,
        to_unit,
        category,
    })?;
    debug!(%category, value, from_unit, to_unit, result, "단일 변환");
    Ok(format_result(result, to_unit))
}

/// 카테고리별 단위 목록을 출력용 줄로 만든다. `None` 이면 전체 카테고리.
pub fn unit_listing(converter: &Converter<'_>, tr: &Translator, category: Option<Category>) -> Vec<String> {
    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };
    categories
        .into_iter()
        .map(|c| {
            let table = converter.table().table(c);
            let base = table
                .base_unit()
                .map(|b| format!(" (base: {b})"))
                .unwrap_or_default();
            format!(
                "{} [{}]{base}: {}",
                tr.category_label(c),
                c.name(),
                table.units().join(", ")
            )
        })
        .collect()
}

/// 대화형 변환 세션을 실행한다. 동작 하나가 끝날 때마다 결과를 다시 출력한다.
pub fn run_interactive<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tr: &Translator,
    converter: &Converter<'_>,
    state: &mut SelectionState<'_>,
) -> Result<(), AppError> {
    loop {
        console.render_state(tr, state, converter)?;
        match console.main_menu(tr)? {
            MenuChoice::Category => {
                if let Some(category) = console.select_category(tr)? {
                    state.set_category(category);
                }
            }
            MenuChoice::Value => {
                if let Some(v) = console.read_f64(tr, &tr.t(keys::PROMPT_VALUE))? {
                    if state.set_value(v).is_err() {
                        console.println(&tr.t(keys::ERROR_NEGATIVE_VALUE))?;
                    }
                }
            }
            MenuChoice::FromUnit => {
                if let Some(unit) = console.select_unit(tr, &state.units())? {
                    if state.set_from_unit(&unit).is_err() {
                        console.println(&tr.t(keys::ERROR_UNKNOWN_UNIT))?;
                    }
                }
            }
            MenuChoice::ToUnit => {
                if let Some(unit) = console.select_unit(tr, &state.units())? {
                    if state.set_to_unit(&unit).is_err() {
                        console.println(&tr.t(keys::ERROR_UNKNOWN_UNIT))?;
                    }
                }
            }
            MenuChoice::Swap => state.swap(),
            MenuChoice::Exit => {
                console.println(&tr.t(keys::APP_EXIT))?;
                break;
            }
        }
    }
    Ok(())
}
