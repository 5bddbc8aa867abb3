use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::category::Category;
use crate::conversion::{format_result, Converter};
use crate::i18n::{keys, Translator};
use crate::state::SelectionState;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Category,
    Value,
    FromUnit,
    ToUnit,
    Swap,
    Exit,
}

/// 프롬프트 입출력. 표준 입출력 외에 테스트용 버퍼도 받는다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn println(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// 한 줄을 읽는다. 입력이 끝나면 None.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료로 본다.
    pub fn main_menu(&mut self, tr: &Translator) -> Result<MenuChoice, AppError> {
        for key in [
            keys::MENU_TITLE,
            keys::MENU_CATEGORY,
            keys::MENU_VALUE,
            keys::MENU_FROM,
            keys::MENU_TO,
            keys::MENU_SWAP,
            keys::MENU_EXIT,
        ] {
            self.println(&tr.t(key))?;
        }
        loop {
            let Some(sel) = self.read_line(&tr.t(keys::PROMPT_MENU_SELECT))? else {
                return Ok(MenuChoice::Exit);
            };
            match sel.as_str() {
                "1" => return Ok(MenuChoice::Category),
                "2" => return Ok(MenuChoice::Value),
                "3" => return Ok(MenuChoice::FromUnit),
                "4" => return Ok(MenuChoice::ToUnit),
                "5" => return Ok(MenuChoice::Swap),
                "0" => return Ok(MenuChoice::Exit),
                _ => self.println(&tr.t(keys::INVALID_SELECTION_RETRY))?,
            }
        }
    }

    /// 카테고리 목록을 보여주고 번호로 선택받는다.
    pub fn select_category(&mut self, tr: &Translator) -> Result<Option<Category>, AppError> {
        let line = Category::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}) {}", i + 1, tr.category_label(*c)))
            .collect::<Vec<_>>()
            .join("  ");
        self.println(&line)?;
        loop {
            let Some(sel) = self.read_line(&tr.t(keys::PROMPT_CATEGORY))? else {
                return Ok(None);
            };
            let picked = sel
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| Category::ALL.get(i).copied())
                .or_else(|| sel.parse::<Category>().ok());
            match picked {
                Some(c) => return Ok(Some(c)),
                None => self.println(&tr.t(keys::INVALID_SELECTION_RETRY))?,
            }
        }
    }

    /// 단위 목록을 보여주고 번호 또는 이름을 받는다. 이름 검증은 호출 측에서 한다.
    pub fn select_unit(
        &mut self,
        tr: &Translator,
        units: &[&'static str],
    ) -> Result<Option<String>, AppError> {
        let line = units
            .iter()
            .enumerate()
            .map(|(i, u)| format!("{}) {u}", i + 1))
            .collect::<Vec<_>>()
            .join("  ");
        self.println(&line)?;
        let Some(sel) = self.read_line(&tr.t(keys::PROMPT_UNIT))? else {
            return Ok(None);
        };
        let by_number = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| units.get(i))
            .map(|u| u.to_string());
        Ok(Some(by_number.unwrap_or(sel)))
    }

    /// 유한한 숫자를 입력받는다. 숫자가 아니거나 nan/inf 이면 다시 묻는다.
    pub fn read_f64(&mut self, tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
        loop {
            let Some(s) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match s.parse::<f64>() {
                Ok(v) if v.is_finite() => return Ok(Some(v)),
                _ => self.println(&tr.t(keys::ERROR_INVALID_NUMBER))?,
            }
        }
    }

    /// 현재 선택과 변환 결과를 한 줄로 출력한다.
    pub fn render_state(
        &mut self,
        tr: &Translator,
        state: &SelectionState<'_>,
        converter: &Converter<'_>,
    ) -> Result<(), AppError> {
        let line = format!(
            "[{}] {} → {}: {}",
            tr.category_label(state.category()),
            format_result(state.value(), state.from_unit()),
            tr.t(keys::LABEL_RESULT),
            state.result_label(converter)
        );
        self.println(&line)
    }
}
