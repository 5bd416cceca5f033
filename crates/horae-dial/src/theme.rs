use horae_engine::coords::Vec2;
use horae_engine::paint::Color;

use crate::sample::Unit;

/// Face layout and styling, resolved once from the dial width.
///
/// Every length on the face scales linearly with `width`: the reference
/// drawing is 400 units wide and `height` is always half of `width`. Offsets
/// named `*_offset` are relative to `center`; `face_origin` is relative to
/// the frame's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub width: f32,
    pub height: f32,

    /// Pivot the hands rotate around, in frame coordinates.
    pub center: Vec2,

    /// Seconds hand and small center dot color.
    pub accent: Color,
    /// Hour/minute hands and large center dot color.
    pub neutral: Color,
    /// Hand shadow color, already carrying its reduced opacity.
    pub shadow: Color,
    pub shadow_offset: Vec2,

    pub inner_dot_radius: f32,
    pub accent_dot_radius: f32,

    pub text_color: Color,
    pub counter_offset: Vec2,
    pub counter_size: f32,
    pub caption_offsets: [Vec2; 2],
    pub caption_size: f32,

    /// Top-left corner of the face artwork's destination square.
    pub face_origin: Vec2,
    /// Side length of that square.
    pub face_side: f32,
}

impl Theme {
    pub fn new(width: u32) -> Self {
        let w = width as f32;
        let h = w / 2.0;
        let s = |units: f32| units / 400.0 * w;

        Self {
            width: w,
            height: h,
            center: Vec2::new(s(293.0), 100.5 / 200.0 * h),

            accent: Color::from_srgb_u8(0x00, 0x72, 0xc6, 0xff),
            neutral: Color::from_srgb_u8(0x00, 0x00, 0x00, 0xff),
            shadow: Color::from_srgb_u8(0x99, 0x99, 0x99, 0xff).with_opacity(0.7),
            shadow_offset: Vec2::new(s(1.0), s(1.0)),

            inner_dot_radius: s(5.5),
            accent_dot_radius: s(3.0),

            text_color: Color::from_srgb_u8(0x00, 0x00, 0x00, 0xff),
            counter_offset: Vec2::new(s(42.0), 1.0 / 400.0 * h),
            counter_size: s(18.0),
            caption_offsets: [
                Vec2::new(s(19.0), 40.0 / 400.0 * h),
                Vec2::new(s(19.0), 68.0 / 400.0 * h),
            ],
            caption_size: s(11.0),

            face_origin: Vec2::new(s(-213.0), -213.0 / 200.0 * h),
            face_side: 2.0 * w,
        }
    }

    /// Hand length for a unit. The hour hand is the short one.
    pub fn hand_radius(&self, unit: Unit) -> f32 {
        match unit {
            Unit::Hours => self.scaled(50.0),
            Unit::Minutes | Unit::Seconds => self.scaled(70.0),
        }
    }

    /// Stroke width for a unit. Slower hands are heavier.
    pub fn hand_stroke_width(&self, unit: Unit) -> f32 {
        match unit {
            Unit::Seconds => self.scaled(2.0),
            Unit::Minutes => self.scaled(3.0),
            Unit::Hours => self.scaled(4.0),
        }
    }

    /// Foreground stroke color for a unit.
    pub fn hand_color(&self, unit: Unit) -> Color {
        match unit {
            Unit::Seconds => self.accent,
            Unit::Hours | Unit::Minutes => self.neutral,
        }
    }

    fn scaled(&self, units: f32) -> f32 {
        units / 400.0 * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_scale_linearly_with_width() {
        let reference = Theme::new(400);
        let doubled = Theme::new(800);

        assert_eq!(reference.hand_radius(Unit::Seconds), 70.0);
        assert_eq!(doubled.hand_radius(Unit::Seconds), 140.0);
        assert_eq!(reference.inner_dot_radius, 5.5);
        assert_eq!(doubled.counter_size, reference.counter_size * 2.0);
    }

    #[test]
    fn hour_hand_is_shorter_and_heavier() {
        let theme = Theme::new(900);
        assert!(theme.hand_radius(Unit::Hours) < theme.hand_radius(Unit::Minutes));
        assert!(theme.hand_stroke_width(Unit::Hours) > theme.hand_stroke_width(Unit::Minutes));
        assert!(theme.hand_stroke_width(Unit::Minutes) > theme.hand_stroke_width(Unit::Seconds));
    }

    #[test]
    fn only_the_seconds_hand_wears_the_accent() {
        let theme = Theme::new(900);
        assert_eq!(theme.hand_color(Unit::Seconds), theme.accent);
        assert_eq!(theme.hand_color(Unit::Minutes), theme.neutral);
        assert_eq!(theme.hand_color(Unit::Hours), theme.neutral);
    }

    #[test]
    fn center_sits_off_the_frame_middle() {
        // The face artwork crowds the dial toward the right side.
        let theme = Theme::new(900);
        assert_eq!(theme.center, Vec2::new(659.25, 226.125));
        assert_eq!(theme.height, 450.0);
    }

    #[test]
    fn shadow_carries_reduced_opacity() {
        let theme = Theme::new(900);
        assert!((theme.shadow.a - 0.7).abs() < 1e-6);
        assert_eq!(theme.neutral.a, 1.0);
    }

    #[test]
    fn face_square_doubles_the_frame_width() {
        let theme = Theme::new(900);
        assert_eq!(theme.face_side, 1800.0);
        assert!(theme.face_origin.x < 0.0);
        assert!(theme.face_origin.y < 0.0);
    }
}
