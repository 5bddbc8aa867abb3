//! 변환 엔진. 변환표를 조회해 값을 다른 단위로 환산한다.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::category::Category;
use crate::units::{ConversionTable, TemperatureFormula, UnitTable};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 알 수 없는 카테고리 문자열
    #[error("알 수 없는 카테고리: {0}")]
    UnknownCategory(String),
    /// 카테고리에 없는 단위
    #[error("알 수 없는 단위: {unit} ({category})")]
    UnknownUnit { unit: String, category: Category },
    /// 어느 카테고리에도 없는 단위(카테고리 추정 실패)
    #[error("단위로 카테고리를 알 수 없음: {0}")]
    UnresolvedUnit(String),
    /// 0, 음수, 무한대 등 쓸 수 없는 배율
    #[error("잘못된 배율: {unit} = {factor}")]
    InvalidFactor { unit: String, factor: f64 },
    /// NaN 또는 무한대 입력
    #[error("유한하지 않은 입력값: {0}")]
    NonFiniteValue(f64),
}

/// 온도 변환 방식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureMode {
    /// 입력 단위에서 섭씨로 환산한 뒤 목표 단위 공식을 적용한다.
    #[default]
    Normalized,
    /// 입력값을 섭씨로 간주하고 목표 단위 공식만 적용한다(이전 버전 동작).
    Raw,
}

/// 한 번의 변환 요청. 매 계산마다 새로 만든다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest<'a> {
    pub value: f64,
    pub from_unit: &'a str,
    pub to_unit: &'a str,
    pub category: Category,
}

/// 변환표와 온도 변환 방식을 묶은 변환기.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'t> {
    table: &'t ConversionTable,
    temperature_mode: TemperatureMode,
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::builtin(TemperatureMode::default())
    }
}

impl Converter<'static> {
    /// 내장 변환표를 쓰는 변환기.
    pub fn builtin(temperature_mode: TemperatureMode) -> Self {
        Self::new(ConversionTable::builtin(), temperature_mode)
    }
}

impl<'t> Converter<'t> {
    pub fn new(table: &'t ConversionTable, temperature_mode: TemperatureMode) -> Self {
        Self {
            table,
            temperature_mode,
        }
    }

    pub fn table(&self) -> &'t ConversionTable {
        self.table
    }

    pub fn temperature_mode(&self) -> TemperatureMode {
        self.temperature_mode
    }

    /// 변환 결과 또는 실패 원인을 반환한다.
    ///
    /// 단위 이름은 대소문자와 별칭을 무시하고 표의 표기로 바꾼 뒤 비교한다.
    pub fn try_convert(&self, req: &ConversionRequest<'_>) -> Result<f64, ConversionError> {
        if req.from_unit == req.to_unit {
            return Ok(req.value);
        }
        let from_unit = self.resolve(req.from_unit, req.category)?;
        let to_unit = self.resolve(req.to_unit, req.category)?;
        if from_unit == to_unit {
            return Ok(req.value);
        }
        if !req.value.is_finite() {
            return Err(ConversionError::NonFiniteValue(req.value));
        }
        let table = self.table.table(req.category);
        match table {
            UnitTable::Linear { .. } => {
                let from = checked_factor(table, from_unit, req.category)?;
                let to = checked_factor(table, to_unit, req.category)?;
                Ok(req.value * from / to)
            }
            UnitTable::Formula { .. } => {
                let from = checked_formula(table, from_unit, req.category)?;
                let to = checked_formula(table, to_unit, req.category)?;
                let celsius = match self.temperature_mode {
                    TemperatureMode::Normalized => (from.to_celsius)(req.value),
                    TemperatureMode::Raw => req.value,
                };
                Ok((to.from_celsius)(celsius))
            }
        }
    }

    fn resolve(&self, unit: &str, category: Category) -> Result<&'static str, ConversionError> {
        self.table
            .canonical_unit(category, unit)
            .ok_or_else(|| ConversionError::UnknownUnit {
                unit: unit.to_string(),
                category,
            })
    }

    /// 변환에 실패하면 경고를 남기고 입력값을 그대로 돌려준다.
    pub fn convert(&self, req: &ConversionRequest<'_>) -> f64 {
        self.try_convert(req).unwrap_or_else(|err| {
            warn!(
                category = %req.category,
                from = req.from_unit,
                to = req.to_unit,
                error = %err,
                "변환 실패, 입력값을 그대로 사용"
            );
            req.value
        })
    }
}

fn checked_factor(table: &UnitTable, unit: &str, category: Category) -> Result<f64, ConversionError> {
    let factor = table
        .factor(unit)
        .ok_or_else(|| ConversionError::UnknownUnit {
            unit: unit.to_string(),
            category,
        })?;
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ConversionError::InvalidFactor {
            unit: unit.to_string(),
            factor,
        });
    }
    Ok(factor)
}

fn checked_formula(
    table: &UnitTable,
    unit: &str,
    category: Category,
) -> Result<TemperatureFormula, ConversionError> {
    table.formula(unit).ok_or_else(|| ConversionError::UnknownUnit {
        unit: unit.to_string(),
        category,
    })
}

/// 카테고리 이름과 단위 이름으로 변환한다. 내장 변환표와 기본 온도 방식을 쓴다.
///
/// 같은 단위끼리는 카테고리 확인 없이 입력값을 그대로 반환한다.
pub fn try_convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: &str,
) -> Result<f64, ConversionError> {
    if from_unit == to_unit {
        return Ok(value);
    }
    let category: Category = category.parse()?;
    Converter::default().try_convert(&ConversionRequest {
        value,
        from_unit,
        to_unit,
        category,
    })
}

/// `try_convert` 와 같지만 실패 시 입력값을 돌려준다. 화면에는 항상 숫자가 표시된다.
pub fn convert(value: f64, from_unit: &str, to_unit: &str, category: &str) -> f64 {
    try_convert(value, from_unit, to_unit, category).unwrap_or_else(|err| {
        warn!(category, from_unit, to_unit, error = %err, "변환 실패, 입력값을 그대로 사용");
        value
    })
}

/// 결과 표시 형식: 소수점 4자리 + 목표 단위.
pub fn format_result(value: f64, unit: &str) -> String {
    format!("{value:.4} {unit}")
}
