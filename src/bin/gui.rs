#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use universal_converter::{
    assets::{self, Animation},
    category::Category,
    config::{self, Config},
    conversion::Converter,
    i18n::{self, keys, Translator},
    logging,
    state::SelectionState,
};

/// 데스크톱 단위 변환기.
#[derive(Debug, Parser)]
#[command(name = "universal_converter", version, about)]
struct Args {
    /// 표시 언어 (auto, ko, en)
    #[arg(long, short = 'L')]
    lang: Option<String>,
    /// 설정 파일 경로
    #[arg(long)]
    config: Option<PathBuf>,
    /// 언어팩 디렉터리
    #[arg(long)]
    locales: Option<PathBuf>,
}

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();
    let loaded = match &args.config {
        Some(path) => config::load_or_default_at(path),
        None => config::load_or_default(),
    };
    let load_error = loaded.as_ref().err().map(|e| e.to_string());
    let app_cfg = loaded.unwrap_or_default();
    logging::init(&app_cfg.log_level);
    if let Some(err) = load_error {
        warn!(error = %err, "설정을 읽지 못해 기본값 사용");
    }

    let lang = i18n::resolve_language(args.lang.as_deref(), Some(&app_cfg.language));
    let tr = Translator::new_with_pack(&lang, args.locales.as_deref());
    info!(%lang, "GUI 시작");

    let viewport = egui::ViewportBuilder::default()
        .with_title(tr.t(keys::APP_TITLE))
        .with_inner_size([560.0, 620.0]);
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Universal Converter",
        options,
        Box::new(move |cc| {
            setup_fonts(&cc.egui_ctx);
            Box::new(GuiApp::new(app_cfg, tr, &cc.egui_ctx))
        }),
    )
}

/// 한글 표시용 폰트를 기본 폰트 뒤에 예비 폰트로 등록한다.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(font_name.clone());
    }
    ctx.set_fonts(fonts);
}

/// 시스템에 설치된 한글 폰트를 찾아 적용한다. 찾지 못하면 기본 폰트만 쓴다.
fn setup_fonts(ctx: &egui::Context) {
    const CANDIDATES: &[&str] = &[
        "assets/fonts/malgun.ttf",
        "C:/Windows/Fonts/malgun.ttf",
        "C:/Windows/Fonts/gulim.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    ];
    let found = CANDIDATES
        .iter()
        .map(Path::new)
        .find_map(|p| std::fs::read(p).ok().map(|bytes| (p, bytes)));
    match found {
        Some((path, bytes)) => {
            info!(path = %path.display(), "한글 폰트 적용");
            apply_font_bytes(ctx, bytes, "cjk_fallback");
        }
        None => warn!("한글 폰트를 찾지 못해 기본 폰트 사용"),
    }
}

/// 장식용 애니메이션의 로드 상태.
enum AnimationSlot {
    Disabled,
    Loading(Receiver<Option<Animation>>),
    Ready(Animation),
    Missing,
}

impl AnimationSlot {
    fn spawn(url: &str, timeout: Duration, ctx: &egui::Context) -> Self {
        let ctx = ctx.clone();
        AnimationSlot::Loading(assets::spawn_load(url.to_string(), timeout, move || {
            ctx.request_repaint()
        }))
    }

    /// 백그라운드 로드 결과를 확인한다. 기다리지 않는다.
    fn poll(&mut self) {
        let AnimationSlot::Loading(rx) = self else {
            return;
        };
        match rx.try_recv() {
            Ok(Some(anim)) => *self = AnimationSlot::Ready(anim),
            Ok(None) | Err(TryRecvError::Disconnected) => *self = AnimationSlot::Missing,
            Err(TryRecvError::Empty) => {}
        }
    }

    fn is_animating(&self) -> bool {
        matches!(self, AnimationSlot::Loading(_) | AnimationSlot::Ready(_))
    }
}

struct GuiApp {
    tr: Translator,
    converter: Converter<'static>,
    state: SelectionState<'static>,
    header_anim: AnimationSlot,
    conversion_anim: AnimationSlot,
    started: Instant,
}

impl GuiApp {
    fn new(config: Config, tr: Translator, ctx: &egui::Context) -> Self {
        let (header_anim, conversion_anim) = if config.animation.enabled {
            let timeout = Duration::from_secs(config.animation.timeout_secs);
            (
                AnimationSlot::spawn(&config.animation.header_url, timeout, ctx),
                AnimationSlot::spawn(&config.animation.conversion_url, timeout, ctx),
            )
        } else {
            (AnimationSlot::Disabled, AnimationSlot::Disabled)
        };
        Self {
            tr,
            converter: Converter::builtin(config.temperature_mode),
            state: SelectionState::new(config.default_category),
            header_anim,
            conversion_anim,
            started: Instant::now(),
        }
    }

    fn ui_header(&mut self, ui: &mut egui::Ui) {
        let elapsed = self.started.elapsed().as_secs_f64();
        ui.horizontal(|ui| {
            animation_strip(ui, &self.header_anim, elapsed, &self.tr, 120.0);
            ui.vertical(|ui| {
                ui.heading(self.tr.t(keys::APP_TITLE));
                ui.label(egui::RichText::new(self.tr.t(keys::APP_SUBTITLE)).strong());
            });
        });
    }

    fn ui_converter(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(tr.t(keys::LABEL_CATEGORY));
                    let mut category = self.state.category();
                    egui::ComboBox::from_id_source("category")
                        .selected_text(tr.category_label(category))
                        .show_ui(ui, |ui| {
                            for c in Category::ALL {
                                ui.selectable_value(&mut category, c, tr.category_label(c));
                            }
                        });
                    if category != self.state.category() {
                        self.state.set_category(category);
                    }
                    ui.end_row();

                    ui.label(tr.t(keys::LABEL_VALUE));
                    let mut value = self.state.value();
                    let response = ui.add(
                        egui::DragValue::new(&mut value)
                            .clamp_range(0.0..=f64::MAX)
                            .fixed_decimals(4)
                            .speed(0.1),
                    );
                    if response.changed() {
                        if let Err(err) = self.state.set_value(value) {
                            warn!(error = %err, "입력값 무시");
                        }
                    }
                    ui.end_row();

                    let units = self.state.units();

                    ui.label(tr.t(keys::LABEL_FROM));
                    if let Some(unit) = unit_combo(ui, "from_unit", self.state.from_unit(), &units) {
                        if let Err(err) = self.state.set_from_unit(unit) {
                            warn!(error = %err, "입력 단위 무시");
                        }
                    }
                    ui.end_row();

                    ui.label(tr.t(keys::LABEL_TO));
                    if let Some(unit) = unit_combo(ui, "to_unit", self.state.to_unit(), &units) {
                        if let Err(err) = self.state.set_to_unit(unit) {
                            warn!(error = %err, "목표 단위 무시");
                        }
                    }
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(self.state.result_label(&self.converter))
                    .size(24.0)
                    .strong(),
            );
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui
                    .button(tr.t(keys::SWAP_BUTTON))
                    .on_hover_text(tr.t(keys::SWAP_TIP))
                    .clicked()
                {
                    self.state.swap();
                }
            });
        });
    }
}

/// 단위 선택 콤보. 선택이 바뀌면 새 단위를 돌려준다.
fn unit_combo(
    ui: &mut egui::Ui,
    id: &str,
    current: &'static str,
    units: &[&'static str],
) -> Option<&'static str> {
    let mut selected = current;
    egui::ComboBox::from_id_source(id)
        .selected_text(current)
        .show_ui(ui, |ui| {
            for unit in units {
                ui.selectable_value(&mut selected, *unit, *unit);
            }
        });
    (selected != current).then_some(selected)
}

/// 애니메이션 상태를 진행 막대로 표시한다. 비활성화된 경우 아무것도 그리지 않는다.
fn animation_strip(
    ui: &mut egui::Ui,
    slot: &AnimationSlot,
    elapsed: f64,
    tr: &Translator,
    width: f32,
) {
    match slot {
        AnimationSlot::Disabled => {}
        AnimationSlot::Loading(_) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.weak(tr.t(keys::ANIMATION_LOADING));
            });
        }
        AnimationSlot::Missing => {
            ui.weak(tr.t(keys::ANIMATION_NONE));
        }
        AnimationSlot::Ready(anim) => {
            let name = anim.name.clone().unwrap_or_default();
            ui.add(
                egui::ProgressBar::new(anim.progress_at(elapsed))
                    .desired_width(width)
                    .text(name),
            );
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.header_anim.poll();
        self.conversion_anim.poll();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            self.ui_header(ui);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.small(self.tr.t(keys::APP_FOOTER));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_converter(ui);
            ui.add_space(12.0);
            let elapsed = self.started.elapsed().as_secs_f64();
            ui.vertical_centered(|ui| {
                animation_strip(ui, &self.conversion_anim, elapsed, &self.tr, 240.0);
            });
        });

        if self.header_anim.is_animating() || self.conversion_anim.is_animating() {
            ctx.request_repaint_after(Duration::from_millis(33));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn app_with(config: Config) -> GuiApp {
        GuiApp::new(config, Translator::new("en"), &egui::Context::default())
    }

    #[test]
    fn disabled_animation_does_not_spawn_loaders() {
        let mut cfg = Config::default();
        cfg.animation.enabled = false;
        let app = app_with(cfg);
        assert!(matches!(app.header_anim, AnimationSlot::Disabled));
        assert!(matches!(app.conversion_anim, AnimationSlot::Disabled));
    }

    #[test]
    fn starts_with_configured_category_defaults() {
        let mut cfg = Config::default();
        cfg.animation.enabled = false;
        cfg.default_category = Category::Volume;
        let app = app_with(cfg);
        assert_eq!(app.state.category(), Category::Volume);
        assert_eq!(app.state.from_unit(), "ml");
        assert_eq!(app.state.to_unit(), "l");
        assert_eq!(app.state.result_label(&app.converter), "0.0000 l");
    }

    #[test]
    fn failed_fetch_becomes_missing() {
        let (tx, rx) = mpsc::channel();
        let mut slot = AnimationSlot::Loading(rx);
        slot.poll();
        assert!(matches!(slot, AnimationSlot::Loading(_)));
        tx.send(None).unwrap();
        slot.poll();
        assert!(matches!(slot, AnimationSlot::Missing));
    }

    #[test]
    fn dropped_sender_becomes_missing() {
        let (tx, rx) = mpsc::channel::<Option<Animation>>();
        drop(tx);
        let mut slot = AnimationSlot::Loading(rx);
        slot.poll();
        assert!(matches!(slot, AnimationSlot::Missing));
    }

    #[test]
    fn loaded_animation_is_ready() {
        let (tx, rx) = mpsc::channel();
        let mut slot = AnimationSlot::Loading(rx);
        let anim = assets::parse_animation(br#"{"fr":30,"ip":0,"op":30}"#);
        tx.send(anim).unwrap();
        slot.poll();
        assert!(matches!(slot, AnimationSlot::Ready(_)));
        assert!(slot.is_animating());
    }
}
