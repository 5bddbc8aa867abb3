//! 단위 정의 및 변환 모듈 모음.
//!
//! 카테고리별 단위는 타입 있는 enum 으로 정의하고, 문자열 기반 변환표
//! (`table`)는 이 enum 들로부터 만들어진다.

pub mod length;
pub mod table;
pub mod temperature;
pub mod volume;
pub mod weight;

pub use length::LengthUnit;
pub use table::{ConversionTable, LinearEntry, TemperatureFormula, UnitTable};
pub use temperature::TemperatureUnit;
pub use volume::VolumeUnit;
pub use weight::WeightUnit;

/// 기준 단위에 대한 배율 하나로 변환되는 단위.
pub trait LinearUnit: Copy + PartialEq + 'static {
    /// 선택 목록 순서대로 나열한 전체 단위.
    const ALL: &'static [Self];

    /// 표와 화면에 쓰이는 단위 이름.
    fn code(self) -> &'static str;

    /// 이 단위 1 이 기준 단위 몇 개인지.
    fn factor(self) -> f64;

    /// 표에 올리지 않는 별칭(전체 이름, 약어).
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// 단위 이름 또는 별칭(대소문자 무시)으로 찾는다.
    fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.iter().copied().find(|u| {
            u.code().eq_ignore_ascii_case(code)
                || u.aliases().iter().any(|a| a.eq_ignore_ascii_case(code))
        })
    }
}
