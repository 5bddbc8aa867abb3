use serde::{Deserialize, Serialize};

use super::LinearUnit;

/// 체적 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    Milliliter,
    Liter,
    CubicMeter,
    Gallon,
    Quart,
    Pint,
    Cup,
}

impl LinearUnit for VolumeUnit {
    const ALL: &'static [Self] = &[
        VolumeUnit::Milliliter,
        VolumeUnit::Liter,
        VolumeUnit::CubicMeter,
        VolumeUnit::Gallon,
        VolumeUnit::Quart,
        VolumeUnit::Pint,
        VolumeUnit::Cup,
    ];

    fn code(self) -> &'static str {
        match self {
            VolumeUnit::Milliliter => "ml",
            VolumeUnit::Liter => "l",
            VolumeUnit::CubicMeter => "m3",
            VolumeUnit::Gallon => "gallon",
            VolumeUnit::Quart => "quart",
            VolumeUnit::Pint => "pint",
            VolumeUnit::Cup => "cup",
        }
    }

    // 갤런/쿼트/파인트는 미국 액량 기준, 컵은 미터법 컵(240 ml)
    fn factor(self) -> f64 {
        match self {
            VolumeUnit::Milliliter => 0.001,
            VolumeUnit::Liter => 1.0,
            VolumeUnit::CubicMeter => 1000.0,
            VolumeUnit::Gallon => 3.78541,
            VolumeUnit::Quart => 0.946353,
            VolumeUnit::Pint => 0.473176,
            VolumeUnit::Cup => 0.24,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            VolumeUnit::Milliliter => &["milliliter", "millilitre"],
            VolumeUnit::Liter => &["liter", "litre"],
            VolumeUnit::CubicMeter => &["m³"],
            VolumeUnit::Gallon => &["gal"],
            VolumeUnit::Quart => &["qt"],
            VolumeUnit::Pint => &["pt"],
            VolumeUnit::Cup => &["cups"],
        }
    }
}
