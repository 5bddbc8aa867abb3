use serde::{Deserialize, Serialize};

use super::LinearUnit;

/// 무게(질량) 단위. 내부 기준은 g 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Milligram,
    Gram,
    Kilogram,
    Ton,
    Ounce,
    Pound,
}

impl LinearUnit for WeightUnit {
    const ALL: &'static [Self] = &[
        WeightUnit::Milligram,
        WeightUnit::Gram,
        WeightUnit::Kilogram,
        WeightUnit::Ton,
        WeightUnit::Ounce,
        WeightUnit::Pound,
    ];

    fn code(self) -> &'static str {
        match self {
            WeightUnit::Milligram => "mg",
            WeightUnit::Gram => "g",
            WeightUnit::Kilogram => "kg",
            WeightUnit::Ton => "ton",
            WeightUnit::Ounce => "ounce",
            WeightUnit::Pound => "pound",
        }
    }

    fn factor(self) -> f64 {
        match self {
            WeightUnit::Milligram => 0.001,
            WeightUnit::Gram => 1.0,
            WeightUnit::Kilogram => 1000.0,
            WeightUnit::Ton => 1_000_000.0,
            WeightUnit::Ounce => 28.3495,
            WeightUnit::Pound => 453.592,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            WeightUnit::Milligram => &["milligram"],
            WeightUnit::Gram => &["gram"],
            WeightUnit::Kilogram => &["kilogram"],
            WeightUnit::Ton => &["tonne", "t"],
            WeightUnit::Ounce => &["oz"],
            WeightUnit::Pound => &["lb", "lbs"],
        }
    }
}
