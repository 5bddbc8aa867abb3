//! 단위 변환 로직을 라이브러리로 분리하여 CLI 와 GUI 가 함께 사용한다.

pub mod app;
pub mod assets;
pub mod category;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod logging;
pub mod state;
pub mod ui_cli;
pub mod units;

pub use category::Category;
pub use conversion::{convert, try_convert, ConversionError, ConversionRequest, Converter, TemperatureMode};
pub use state::SelectionState;
