use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::conversion::ConversionError;

/// 변환 카테고리. 카테고리마다 단위 집합과 변환 방식(배율/공식)이 정해진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
}

impl Category {
    /// 선택 목록에 표시되는 순서.
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
    ];

    /// 표 조회에 쓰는 소문자 이름.
    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(Category::Length),
            "weight" | "mass" => Ok(Category::Weight),
            "temperature" | "temp" => Ok(Category::Temperature),
            "volume" => Ok(Category::Volume),
            _ => Err(ConversionError::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Length".parse::<Category>().unwrap(), Category::Length);
        assert_eq!(" weight ".parse::<Category>().unwrap(), Category::Weight);
        assert_eq!("mass".parse::<Category>().unwrap(), Category::Weight);
        assert!("speed".parse::<Category>().is_err());
    }

    #[test]
    fn display_matches_name() {
        for c in Category::ALL {
            assert_eq!(c.to_string(), c.name());
            assert_eq!(c.name().parse::<Category>().unwrap(), c);
        }
    }
}
