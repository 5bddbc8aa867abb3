//! 화면 갱신 사이에 유지되는 사용자 선택 상태.

use thiserror::Error;
use tracing::debug;

use crate::category::Category;
use crate::conversion::{format_result, ConversionRequest, Converter};
use crate::units::ConversionTable;

/// 선택 상태를 바꿀 때 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    /// 현재 카테고리에 없는 단위
    #[error("{category} 카테고리에 없는 단위: {unit}")]
    UnitNotInCategory { unit: String, category: Category },
    /// 음수, NaN 등 입력 위젯이 허용하지 않는 값
    #[error("입력값은 0 이상의 유한한 숫자여야 합니다: {0}")]
    InvalidValue(f64),
}

/// 현재 카테고리, 입력/목표 단위, 입력값.
///
/// `from_unit`, `to_unit` 은 항상 현재 카테고리의 단위이다.
#[derive(Debug, Clone)]
pub struct SelectionState<'t> {
    category: Category,
    from_unit: &'static str,
    to_unit: &'static str,
    value: f64,
    table: &'t ConversionTable,
}

impl SelectionState<'static> {
    /// 내장 변환표 기준으로 카테고리의 기본 단위를 선택한 상태를 만든다.
    pub fn new(category: Category) -> Self {
        Self::with_table(ConversionTable::builtin(), category)
    }
}

impl<'t> SelectionState<'t> {
    pub fn with_table(table: &'t ConversionTable, category: Category) -> Self {
        let mut state = Self {
            category,
            from_unit: "",
            to_unit: "",
            value: 0.0,
            table,
        };
        state.select_default_units(category);
        state
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn from_unit(&self) -> &'static str {
        self.from_unit
    }

    pub fn to_unit(&self) -> &'static str {
        self.to_unit
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// 현재 카테고리의 단위 목록.
    pub fn units(&self) -> Vec<&'static str> {
        self.table.units(self.category)
    }

    /// 카테고리를 지정하고 첫 번째 단위를 입력, 두 번째 단위를 목표로 선택한다.
    /// 단위가 하나뿐이면 둘 다 첫 번째 단위가 된다.
    pub fn select_default_units(&mut self, category: Category) {
        let units = self.table.units(category);
        self.category = category;
        self.from_unit = default_from(&units);
        self.to_unit = default_to(&units);
    }

    /// 카테고리를 바꾼다. 새 카테고리에도 있는 단위는 유지하고, 없는 단위만 기본값으로 바꾼다.
    pub fn set_category(&mut self, category: Category) {
        let units = self.table.units(category);
        if !units.contains(&self.from_unit) {
            self.from_unit = default_from(&units);
        }
        if !units.contains(&self.to_unit) {
            self.to_unit = default_to(&units);
        }
        self.category = category;
        debug!(%category, from = self.from_unit, to = self.to_unit, "카테고리 변경");
    }

    pub fn set_from_unit(&mut self, unit: &str) -> Result<(), StateError> {
        self.from_unit = self.lookup(unit)?;
        Ok(())
    }

    pub fn set_to_unit(&mut self, unit: &str) -> Result<(), StateError> {
        self.to_unit = self.lookup(unit)?;
        Ok(())
    }

    pub fn set_value(&mut self, value: f64) -> Result<(), StateError> {
        if !value.is_finite() || value < 0.0 {
            return Err(StateError::InvalidValue(value));
        }
        self.value = value;
        Ok(())
    }

    /// 입력 단위와 목표 단위를 맞바꾼다. 값과 카테고리는 그대로 둔다.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
        debug!(from = self.from_unit, to = self.to_unit, "단위 교환");
    }

    pub fn request(&self) -> ConversionRequest<'static> {
        ConversionRequest {
            value: self.value,
            from_unit: self.from_unit,
            to_unit: self.to_unit,
            category: self.category,
        }
    }

    pub fn result(&self, converter: &Converter<'_>) -> f64 {
        converter.convert(&self.request())
    }

    /// 화면에 표시할 결과 문자열(`"<값 소수점 4자리> <목표 단위>"`).
    pub fn result_label(&self, converter: &Converter<'_>) -> String {
        format_result(self.result(converter), self.to_unit)
    }

    fn lookup(&self, unit: &str) -> Result<&'static str, StateError> {
        self.table
            .canonical_unit(self.category, unit)
            .ok_or_else(|| StateError::UnitNotInCategory {
                unit: unit.to_string(),
                category: self.category,
            })
    }
}

fn default_from(units: &[&'static str]) -> &'static str {
    units.first().copied().unwrap_or_default()
}

fn default_to(units: &[&'static str]) -> &'static str {
    units
        .get(1)
        .or_else(|| units.first())
        .copied()
        .unwrap_or_default()
}
