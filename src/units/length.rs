use serde::{Deserialize, Serialize};

use super::LinearUnit;

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LinearUnit for LengthUnit {
    const ALL: &'static [Self] = &[
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    fn code(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Inch => "inch",
            LengthUnit::Foot => "foot",
            LengthUnit::Yard => "yard",
            LengthUnit::Mile => "mile",
        }
    }

    fn factor(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            // 국제 마일(1609.344)이 아닌 반올림 값을 쓴다.
            LengthUnit::Mile => 1609.34,
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            LengthUnit::Millimeter => &["millimeter", "millimetre"],
            LengthUnit::Centimeter => &["centimeter", "centimetre"],
            LengthUnit::Meter => &["meter", "metre"],
            LengthUnit::Kilometer => &["kilometer", "kilometre"],
            LengthUnit::Inch => &["in", "inches"],
            LengthUnit::Foot => &["ft", "feet"],
            LengthUnit::Yard => &["yd", "yards"],
            LengthUnit::Mile => &["mi", "miles"],
        }
    }
}
