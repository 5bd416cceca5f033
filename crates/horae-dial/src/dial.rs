//! Dial rendering.
//!
//! The scene persists across ticks; each tick fully replaces the moving
//! groups (hands, shadows, center dots) by tag and retargets the counter
//! tween. The face artwork and text nodes are appended once at setup.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;

use horae_engine::coords::Vec2;
use horae_engine::scene::{NodeId, RasterImage, Scene, Stroke, Tag, TextAnchor, ZIndex};
use horae_engine::text::FontId;
use horae_engine::tween::Tweens;

use crate::counter::counter_value;
use crate::sample::{TimeSample, Unit};
use crate::scale::AngleScale;
use crate::theme::Theme;

/// Scene tags for the persistent face layers.
pub const FACE: Tag = Tag::new("face");
pub const COUNTER: Tag = Tag::new("counter");
pub const CAPTION: Tag = Tag::new("caption");

/// Scene tags for the per-tick groups.
pub const HAND_SHADOW: Tag = Tag::new("hand-shadow");
pub const HAND: Tag = Tag::new("hand");
pub const CENTER_DOT: Tag = Tag::new("center-dot");

// Paint planes, back to front. Text sits under the hands so the seconds
// hand sweeps over the counter, while the center dots cap everything.
const Z_FACE: ZIndex = ZIndex(0);
const Z_TEXT: ZIndex = ZIndex(10);
const Z_SHADOW: ZIndex = ZIndex(20);
const Z_HAND: ZIndex = ZIndex(30);
const Z_DOT: ZIndex = ZIndex(40);

const CAPTION_LINES: [&str; 2] = ["so far this", "month"];

const COUNTER_TWEEN: Duration = Duration::from_millis(500);
const COUNTER_PAD: usize = 4;

/// Draws the clock face and keeps it current, one tick at a time.
///
/// Owns the theme and both angle scales; everything else (scene, tween set)
/// is passed in per call.
pub struct DialRenderer {
    theme: Theme,
    secs_mins: AngleScale,
    hours: AngleScale,
    font: Option<FontId>,
    counter: Option<NodeId>,
}

impl DialRenderer {
    pub fn new(theme: Theme, font: Option<FontId>) -> Self {
        Self {
            theme,
            secs_mins: AngleScale::SECS_MINS,
            hours: AngleScale::HOURS,
            font,
            counter: None,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Appends the persistent face layers: artwork, counter, captions.
    ///
    /// Call once before the first [`render`](Self::render). Without a font
    /// the dial still works, minus its text.
    pub fn setup(&mut self, scene: &mut Scene, face: Option<Arc<RasterImage>>) {
        if let Some(image) = face {
            scene.push_image(FACE, Z_FACE, self.theme.face_origin, image);
        }

        let Some(font) = self.font else {
            log::warn!("no font loaded; dial renders without counter or captions");
            return;
        };

        let t = &self.theme;
        self.counter = Some(scene.push_text(
            COUNTER,
            Z_TEXT,
            "0000",
            font,
            t.counter_size,
            t.text_color,
            t.center + t.counter_offset,
            TextAnchor::Middle,
        ));

        for (offset, line) in t.caption_offsets.iter().zip(CAPTION_LINES) {
            scene.push_text(
                CAPTION,
                Z_TEXT,
                line,
                font,
                t.caption_size,
                t.text_color,
                t.center + *offset,
                TextAnchor::Start,
            );
        }
    }

    /// One tick: drop and rebuild the moving groups, then retarget the
    /// counter toward the value derived from `now`.
    ///
    /// Pure scene mutation; nothing here can fail.
    pub fn render(
        &mut self,
        scene: &mut Scene,
        tweens: &mut Tweens,
        samples: &[TimeSample; 3],
        now: NaiveDateTime,
    ) {
        scene.remove_tagged(HAND_SHADOW);
        scene.remove_tagged(HAND);
        scene.remove_tagged(CENTER_DOT);

        let t = &self.theme;
        let shadow_center = t.center + t.shadow_offset;

        for sample in samples {
            scene.push_hand(
                HAND_SHADOW,
                Z_SHADOW,
                shadow_center,
                t.hand_radius(sample.unit),
                self.angle_of(sample),
                Stroke::new(t.hand_stroke_width(sample.unit), t.shadow),
            );
        }

        for sample in samples {
            scene.push_hand(
                HAND,
                Z_HAND,
                t.center,
                t.hand_radius(sample.unit),
                self.angle_of(sample),
                Stroke::new(t.hand_stroke_width(sample.unit), t.hand_color(sample.unit)),
            );
        }

        // Inner dot first, accent dot on top of it.
        scene.push_circle(CENTER_DOT, Z_DOT, t.center, t.inner_dot_radius, t.neutral);
        scene.push_circle(CENTER_DOT, Z_DOT, t.center, t.accent_dot_radius, t.accent);

        if let Some(counter) = self.counter {
            tweens.animate_number(
                scene,
                counter,
                counter_value(now) as f64,
                COUNTER_TWEEN,
                COUNTER_PAD,
            );
        }
    }

    fn angle_of(&self, sample: &TimeSample) -> f32 {
        match sample.unit {
            Unit::Hours => self.hours.angle(sample.numeric),
            Unit::Minutes | Unit::Seconds => self.secs_mins.angle(sample.numeric),
        }
    }
}
