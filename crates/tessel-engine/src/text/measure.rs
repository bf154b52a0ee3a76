use crate::coords::Vec2;

use super::FontId;

/// Measures laid-out text in logical pixels.
pub trait TextMeasure {
    /// Extent of `text` at `size`, wrapped at `wrap` when given.
    fn text_size(&self, font: FontId, size: f32, text: &str, wrap: Option<f32>) -> Vec2;
}

/// Monospace metrics: every character advances by `advance * size / 13`.
///
/// Lines are `size` tall. Used for headless hosts and deterministic tests,
/// where exact glyph shapes do not matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    /// Advance per character at the reference size of 13 px.
    pub advance: f32,
}

impl FixedMetrics {
    const REFERENCE_SIZE: f32 = 13.0;

    pub const fn new(advance: f32) -> Self {
        Self { advance }
    }

    fn char_advance(&self, size: f32) -> f32 {
        self.advance * size / Self::REFERENCE_SIZE
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new(7.0)
    }
}

impl TextMeasure for FixedMetrics {
    fn text_size(&self, _font: FontId, size: f32, text: &str, wrap: Option<f32>) -> Vec2 {
        if text.is_empty() {
            return Vec2::new(0.0, size);
        }
        let adv = self.char_advance(size);
        let per_line = match wrap {
            Some(w) if w > 0.0 && adv > 0.0 => ((w / adv).floor() as usize).max(1),
            _ => usize::MAX,
        };

        let mut width = 0.0f32;
        let mut lines = 0usize;
        for line in text.split('\n') {
            let chars = line.chars().count();
            let wrapped = if chars == 0 { 1 } else { chars.div_ceil(per_line) };
            lines += wrapped;
            width = width.max(chars.min(per_line) as f32 * adv);
        }
        Vec2::new(width, lines as f32 * size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m() -> FixedMetrics { FixedMetrics::new(7.0) }

    #[test]
    fn single_line_width_is_char_count_times_advance() {
        assert_eq!(m().text_size(FontId::default(), 13.0, "Hello", None), Vec2::new(35.0, 13.0));
    }

    #[test]
    fn advance_scales_with_size() {
        assert_eq!(m().text_size(FontId::default(), 26.0, "ab", None), Vec2::new(28.0, 26.0));
    }

    #[test]
    fn newlines_take_widest_line() {
        assert_eq!(m().text_size(FontId::default(), 13.0, "abc\nabcdef", None), Vec2::new(42.0, 26.0));
    }

    #[test]
    fn wrap_splits_long_lines() {
        // 10 chars at 7 px with a 35 px wrap → 5 per line, 2 lines.
        assert_eq!(m().text_size(FontId::default(), 13.0, "abcdefghij", Some(35.0)), Vec2::new(35.0, 26.0));
    }

    #[test]
    fn empty_text_has_line_height() {
        assert_eq!(m().text_size(FontId::default(), 13.0, "", None), Vec2::new(0.0, 13.0));
    }
}
