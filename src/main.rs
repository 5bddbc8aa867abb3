use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;
use universal_converter::{
    app::{self, AppError},
    category::Category,
    config::{self, Config},
    conversion::{Converter, TemperatureMode},
    i18n::{self, keys, Translator},
    logging,
    state::SelectionState,
    ui_cli::Console,
};

/// 터미널용 단위 변환기.
#[derive(Debug, Parser)]
#[command(name = "universal_converter_cli", version, about)]
struct Cli {
    /// 표시 언어 (auto, ko, en)
    #[arg(long, short = 'L', global = true)]
    lang: Option<String>,
    /// 설정 파일 경로
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// 온도 입력값을 섭씨로 간주한다(이전 버전 동작)
    #[arg(long, global = true)]
    raw_temperature: bool,
    /// 디버그 로그 출력
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 값 하나를 변환해 출력한다
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
        /// length, weight, temperature, volume (생략 시 단위로 추정)
        #[arg(long, short)]
        category: Option<String>,
    },
    /// 카테고리별 단위 목록을 출력한다
    Units { category: Option<Category> },
    /// 대화형 변환기 (기본값)
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let cfg = load_config(&cli);
    logging::init(if cli.verbose { "debug" } else { cfg.log_level.as_str() });

    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, None);
    match try_run(cli, &cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Config {
    let loaded = match &cli.config {
        Some(path) => config::load_or_default_at(path),
        None => config::load_or_default(),
    };
    // 로깅 초기화 전이므로 경고는 stderr 로 직접 남긴다.
    loaded.unwrap_or_else(|err| {
        eprintln!("config: {err}");
        Config::default()
    })
}

fn try_run(cli: Cli, cfg: &Config, tr: &Translator) -> Result<(), AppError> {
    let mode = if cli.raw_temperature {
        TemperatureMode::Raw
    } else {
        cfg.temperature_mode
    };
    let converter = Converter::builtin(mode);
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Convert {
            value,
            from,
            to,
            category,
        } => {
            let label = app::convert_once(&converter, value, &from, &to, category.as_deref())?;
            println!("{label}");
        }
        Command::Units { category } => {
            for line in app::unit_listing(&converter, tr, category) {
                println!("{line}");
            }
        }
        Command::Interactive => {
            if mode == TemperatureMode::Raw {
                warn!("온도 입력값을 섭씨로 간주하는 모드로 실행 중");
            }
            let mut state = SelectionState::new(cfg.default_category);
            let mut console = Console::stdio();
            app::run_interactive(&mut console, tr, &converter, &mut state)?;
        }
    }
    Ok(())
}
