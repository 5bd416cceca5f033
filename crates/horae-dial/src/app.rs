use std::path::PathBuf;
use std::time::{Duration, Instant};

use horae_engine::core::{App as EngineApp, AppControl, FrameCtx};
use horae_engine::logging::{LoggingConfig, init_logging};
use horae_engine::paint::Color;
use horae_engine::raster::draw_scene;
use horae_engine::scene::Scene;
use horae_engine::text::FontSystem;
use horae_engine::time::Interval;
use horae_engine::tween::Tweens;
use horae_engine::window::{Runtime, RuntimeConfig};

use crate::asset;
use crate::dial::DialRenderer;
use crate::sample::{Sampler, SystemClock, sample_at};
use crate::theme::Theme;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Top-level clock application builder.
///
/// Configure the window and assets, then start the event loop with
/// [`run`](Self::run):
///
/// ```rust,ignore
/// ClockApp::new()
///     .title("horae")
///     .width(900)
///     .font(load_font())
///     .face_image("assets/clock-face.svg")
///     .run();
/// ```
pub struct ClockApp {
    title:      String,
    width:      u32,
    font:       Option<Vec<u8>>,
    face_image: Option<PathBuf>,
}

impl ClockApp {
    pub fn new() -> Self {
        Self {
            title:      "horae".to_string(),
            width:      900,
            font:       None,
            face_image: None,
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the dial width in logical pixels. The face is always half as tall.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Register TTF/OTF bytes for the counter and caption text.
    ///
    /// Empty or unparsable data degrades to a dial without text.
    pub fn font(mut self, data: Vec<u8>) -> Self {
        self.font = Some(data);
        self
    }

    /// Point at the face artwork (SVG or raster image).
    ///
    /// A missing or broken file degrades to a blank face.
    pub fn face_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.face_image = Some(path.into());
        self
    }

    /// Start the event loop.
    ///
    /// This never returns.
    pub fn run(self) -> ! {
        init_logging(LoggingConfig::default());

        let config = RuntimeConfig {
            title:        self.title.clone(),
            frame_width:  self.width,
            frame_height: self.width / 2,
        };
        let state = ClockState::new(self);

        Runtime::run(config, state).unwrap_or_else(|e| {
            eprintln!("horae runtime error: {e}");
            std::process::exit(1);
        });
        // run() only returns on a fatal error path; exits requested through
        // AppControl go through the event loop. The compiler cannot see
        // that, so close the loop for it.
        std::process::exit(0);
    }
}

impl Default for ClockApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Internal state implementing `horae_engine::core::App`.
///
/// User code never sees this type.
struct ClockState {
    sampler: Sampler<SystemClock>,
    dial:    DialRenderer,
    scene:   Scene,
    tweens:  Tweens,
    fonts:   FontSystem,
    ticker:  Interval,
}

impl ClockState {
    fn new(app: ClockApp) -> Self {
        let theme = Theme::new(app.width);

        let mut fonts = FontSystem::new();
        let font = app.font.and_then(|data| match fonts.load_font(&data) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("font unavailable: {e}");
                None
            }
        });

        let face = app.face_image.and_then(|path| {
            match asset::load_face_image(&path, theme.face_side as u32) {
                Ok(image) => Some(image),
                Err(e) => {
                    log::warn!("face artwork unavailable, rendering a blank dial: {e}");
                    None
                }
            }
        });

        let mut scene = Scene::new();
        let mut dial = DialRenderer::new(theme, font);
        dial.setup(&mut scene, face);

        log::info!("dial ready: {}x{} logical pixels", app.width, app.width / 2);

        Self {
            sampler: Sampler::new(SystemClock),
            dial,
            scene,
            tweens: Tweens::new(),
            fonts,
            ticker: Interval::new(TICK_PERIOD),
        }
    }
}

impl EngineApp for ClockState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if self.ticker.due(ctx.time.now) {
            let now = self.sampler.now();
            let samples = sample_at(now);
            log::debug!("tick {}:{}:{}", samples[1].text, samples[0].text, samples[2].text);

            self.dial.render(&mut self.scene, &mut self.tweens, &samples, now);
        }

        self.tweens.advance(&mut self.scene, ctx.time.dt);

        ctx.frame.clear(Color::from_srgb(1.0, 1.0, 1.0, 1.0));
        draw_scene(&mut ctx.frame, &mut self.scene, &self.fonts);

        AppControl::Continue
    }

    fn next_wake(&self, _now: Instant) -> Option<Instant> {
        if self.tweens.is_animating() {
            // Animate at frame rate until the counter settles.
            return None;
        }
        Some(self.ticker.next_deadline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horae_engine::raster::Frame;
    use horae_engine::time::FrameTime;

    use crate::dial;

    #[test]
    fn builder_defaults_describe_the_reference_dial() {
        let app = ClockApp::new();
        assert_eq!(app.title, "horae");
        assert_eq!(app.width, 900);
        assert!(app.font.is_none());
        assert!(app.face_image.is_none());
    }

    #[test]
    fn state_without_assets_starts_with_an_empty_scene() {
        let state = ClockState::new(ClockApp::new());
        assert!(state.scene.is_empty());
        assert!(!state.tweens.is_animating());
    }

    #[test]
    fn first_frame_ticks_and_draws_the_dial() {
        let mut state = ClockState::new(ClockApp::new().width(400));

        let mut buf = vec![0u8; 400 * 200 * 4];
        let mut ctx = FrameCtx {
            frame: Frame::new(&mut buf, 400, 200),
            time: FrameTime {
                dt: 0.016,
                now: Instant::now(),
                frame_index: 0,
            },
        };

        assert_eq!(state.on_frame(&mut ctx), AppControl::Continue);
        assert_eq!(state.scene.count_tagged(dial::HAND), 3);

        // Hands and dots left non-white pixels on the cleared frame.
        assert!(buf.chunks_exact(4).any(|px| px[0] != 0xff));
    }

    #[test]
    fn wake_deadline_follows_the_tick_schedule_when_idle() {
        let state = ClockState::new(ClockApp::new());
        assert_eq!(state.next_wake(Instant::now()), Some(state.ticker.next_deadline()));
    }
}
