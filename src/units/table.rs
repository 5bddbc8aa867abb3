//! 카테고리별 문자열 변환표.
//!
//! 배율 카테고리(길이/무게/체적)는 단위 → 기준 단위 배율, 온도는 단위 → 공식을
//! 담는다. 내장 표는 `units` 의 enum 정의로부터 한 번만 만들어 공유한다.

use std::sync::OnceLock;

use super::temperature::{from_celsius, to_celsius, TemperatureUnit};
use super::{LengthUnit, LinearUnit, VolumeUnit, WeightUnit};
use crate::category::Category;

/// 배율표의 한 항목.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEntry {
    pub unit: &'static str,
    pub factor: f64,
}

impl LinearEntry {
    pub const fn new(unit: &'static str, factor: f64) -> Self {
        Self { unit, factor }
    }
}

/// 섭씨 ↔ 단위 변환 공식 한 쌍.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureFormula {
    /// 섭씨 값을 이 단위로.
    pub from_celsius: fn(f64) -> f64,
    /// 이 단위 값을 섭씨로.
    pub to_celsius: fn(f64) -> f64,
}

impl TemperatureFormula {
    fn for_unit(unit: TemperatureUnit) -> Self {
        match unit {
            TemperatureUnit::Celsius => Self {
                from_celsius: |c| c,
                to_celsius: |c| c,
            },
            TemperatureUnit::Fahrenheit => Self {
                from_celsius: |c| from_celsius(c, TemperatureUnit::Fahrenheit),
                to_celsius: |f| to_celsius(f, TemperatureUnit::Fahrenheit),
            },
            TemperatureUnit::Kelvin => Self {
                from_celsius: |c| from_celsius(c, TemperatureUnit::Kelvin),
                to_celsius: |k| to_celsius(k, TemperatureUnit::Kelvin),
            },
        }
    }
}

/// 한 카테고리의 변환표.
#[derive(Debug, Clone)]
pub enum UnitTable {
    /// 기준 단위에 대한 배율로 변환한다.
    Linear {
        base: &'static str,
        entries: Vec<LinearEntry>,
    },
    /// 섭씨를 거치는 공식으로 변환한다.
    Formula {
        entries: Vec<(&'static str, TemperatureFormula)>,
    },
}

impl UnitTable {
    pub fn linear(base: &'static str, entries: Vec<LinearEntry>) -> Self {
        UnitTable::Linear { base, entries }
    }

    pub fn formulas(entries: Vec<(&'static str, TemperatureFormula)>) -> Self {
        UnitTable::Formula { entries }
    }

    fn from_linear_units<U: LinearUnit>(base: U) -> Self {
        let entries = U::ALL
            .iter()
            .map(|u| LinearEntry::new(u.code(), u.factor()))
            .collect();
        UnitTable::linear(base.code(), entries)
    }

    fn temperature() -> Self {
        let entries = TemperatureUnit::ALL
            .iter()
            .map(|u| (u.code(), TemperatureFormula::for_unit(*u)))
            .collect();
        UnitTable::formulas(entries)
    }

    /// 선택 목록 순서의 단위 이름.
    pub fn units(&self) -> Vec<&'static str> {
        match self {
            UnitTable::Linear { entries, .. } => entries.iter().map(|e| e.unit).collect(),
            UnitTable::Formula { entries } => entries.iter().map(|(u, _)| *u).collect(),
        }
    }

    pub fn contains(&self, unit: &str) -> bool {
        match self {
            UnitTable::Linear { entries, .. } => entries.iter().any(|e| e.unit == unit),
            UnitTable::Formula { entries } => entries.iter().any(|(u, _)| *u == unit),
        }
    }

    /// 대소문자를 무시하고 표에 등록된 이름을 찾는다.
    pub fn canonical_unit(&self, unit: &str) -> Option<&'static str> {
        let unit = unit.trim();
        self.units()
            .into_iter()
            .find(|u| u.eq_ignore_ascii_case(unit))
    }

    /// 배율 카테고리의 기준 단위. 공식 카테고리는 None.
    pub fn base_unit(&self) -> Option<&'static str> {
        match self {
            UnitTable::Linear { base, .. } => Some(*base),
            UnitTable::Formula { .. } => None,
        }
    }

    pub fn factor(&self, unit: &str) -> Option<f64> {
        match self {
            UnitTable::Linear { entries, .. } => {
                entries.iter().find(|e| e.unit == unit).map(|e| e.factor)
            }
            UnitTable::Formula { .. } => None,
        }
    }

    pub fn formula(&self, unit: &str) -> Option<TemperatureFormula> {
        match self {
            UnitTable::Formula { entries } => {
                entries.iter().find(|(u, _)| *u == unit).map(|(_, f)| *f)
            }
            UnitTable::Linear { .. } => None,
        }
    }
}

/// 네 카테고리의 변환표 묶음.
#[derive(Debug, Clone)]
pub struct ConversionTable {
    length: UnitTable,
    weight: UnitTable,
    temperature: UnitTable,
    volume: UnitTable,
}

impl Default for ConversionTable {
    fn default() -> Self {
        Self {
            length: UnitTable::from_linear_units(LengthUnit::Meter),
            weight: UnitTable::from_linear_units(WeightUnit::Gram),
            temperature: UnitTable::temperature(),
            volume: UnitTable::from_linear_units(VolumeUnit::Liter),
        }
    }
}

impl ConversionTable {
    /// 프로세스 전체에서 공유하는 내장 변환표.
    pub fn builtin() -> &'static ConversionTable {
        static TABLE: OnceLock<ConversionTable> = OnceLock::new();
        TABLE.get_or_init(ConversionTable::default)
    }

    /// 한 카테고리의 표를 교체한 새 변환표를 만든다.
    pub fn with_table(mut self, category: Category, table: UnitTable) -> Self {
        *self.table_mut(category) = table;
        self
    }

    pub fn table(&self, category: Category) -> &UnitTable {
        match category {
            Category::Length => &self.length,
            Category::Weight => &self.weight,
            Category::Temperature => &self.temperature,
            Category::Volume => &self.volume,
        }
    }

    fn table_mut(&mut self, category: Category) -> &mut UnitTable {
        match category {
            Category::Length => &mut self.length,
            Category::Weight => &mut self.weight,
            Category::Temperature => &mut self.temperature,
            Category::Volume => &mut self.volume,
        }
    }

    pub fn units(&self, category: Category) -> Vec<&'static str> {
        self.table(category).units()
    }

    /// 카테고리 안에서 단위 이름을 표에 등록된 표기로 바꾼다.
    ///
    /// 표 이름(대소문자 무시)을 먼저 찾고, 없으면 단위 enum 의 별칭(`ft`, `lb`, `f` 등)을
    /// 확인한다. 별칭이 가리키는 단위도 표에 있어야 한다.
    pub fn canonical_unit(&self, category: Category, unit: &str) -> Option<&'static str> {
        let table = self.table(category);
        table.canonical_unit(unit).or_else(|| {
            let code = match category {
                Category::Length => LengthUnit::from_code(unit).map(|u| u.code()),
                Category::Weight => WeightUnit::from_code(unit).map(|u| u.code()),
                Category::Volume => VolumeUnit::from_code(unit).map(|u| u.code()),
                Category::Temperature => TemperatureUnit::from_code(unit).map(|u| u.code()),
            }?;
            table.canonical_unit(code)
        })
    }

    /// 단위 이름이 속한 카테고리를 찾는다. 단위 이름과 별칭은 카테고리 사이에 겹치지 않는다.
    pub fn category_of(&self, unit: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| self.canonical_unit(*c, unit).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_unit_order() {
        let table = ConversionTable::builtin();
        assert_eq!(
            table.units(Category::Length),
            ["mm", "cm", "m", "km", "inch", "foot", "yard", "mile"]
        );
        assert_eq!(
            table.units(Category::Weight),
            ["mg", "g", "kg", "ton", "ounce", "pound"]
        );
        assert_eq!(
            table.units(Category::Temperature),
            ["celsius", "fahrenheit", "kelvin"]
        );
        assert_eq!(
            table.units(Category::Volume),
            ["ml", "l", "m3", "gallon", "quart", "pint", "cup"]
        );
    }

    #[test]
    fn base_units_have_factor_one() {
        let table = ConversionTable::builtin();
        for c in [Category::Length, Category::Weight, Category::Volume] {
            let t = table.table(c);
            let base = t.base_unit().unwrap();
            assert_eq!(t.factor(base), Some(1.0));
        }
        assert!(table.table(Category::Temperature).base_unit().is_none());
    }

    #[test]
    fn temperature_formulas_are_celsius_to_unit() {
        let t = ConversionTable::builtin().table(Category::Temperature);
        assert_eq!((t.formula("celsius").unwrap().from_celsius)(25.0), 25.0);
        assert_eq!((t.formula("fahrenheit").unwrap().from_celsius)(0.0), 32.0);
        assert_eq!((t.formula("kelvin").unwrap().from_celsius)(0.0), 273.15);
        assert!(t.factor("celsius").is_none());
    }

    #[test]
    fn category_lookup_by_unit() {
        let table = ConversionTable::builtin();
        assert_eq!(table.category_of("KM"), Some(Category::Length));
        assert_eq!(table.category_of("m3"), Some(Category::Volume));
        assert_eq!(table.category_of("pound"), Some(Category::Weight));
        assert_eq!(table.category_of("kelvin"), Some(Category::Temperature));
        assert_eq!(table.category_of("furlong"), None);
        assert_eq!(table.category_of("lbs"), Some(Category::Weight));
        assert_eq!(table.category_of("F"), Some(Category::Temperature));
    }

    #[test]
    fn aliases_resolve_to_table_names() {
        let table = ConversionTable::builtin();
        assert_eq!(table.canonical_unit(Category::Length, "Feet"), Some("foot"));
        assert_eq!(table.canonical_unit(Category::Length, "KM"), Some("km"));
        assert_eq!(table.canonical_unit(Category::Weight, "oz"), Some("ounce"));
        assert_eq!(table.canonical_unit(Category::Volume, "litre"), Some("l"));
        assert_eq!(table.canonical_unit(Category::Temperature, "°c"), Some("celsius"));
        assert_eq!(table.canonical_unit(Category::Temperature, "ft"), None);
    }

    #[test]
    fn alias_needs_unit_in_table() {
        let table = ConversionTable::default().with_table(
            Category::Length,
            UnitTable::linear("m", vec![LinearEntry::new("m", 1.0)]),
        );
        assert_eq!(table.canonical_unit(Category::Length, "metre"), Some("m"));
        assert_eq!(table.canonical_unit(Category::Length, "ft"), None);
    }

    #[test]
    fn with_table_replaces_one_category() {
        let table = ConversionTable::default().with_table(
            Category::Length,
            UnitTable::linear("m", vec![LinearEntry::new("m", 1.0)]),
        );
        assert_eq!(table.units(Category::Length), ["m"]);
        assert_eq!(table.units(Category::Weight).len(), 6);
    }
}
