use tessel_engine::coords::{Rect, Vec2};
use tessel_engine::paint::Color;
use tessel_engine::scene::{DrawList, LayerId, TextureId};

use crate::style::{Style, ThemeColor};

/// Color source for a draw call: a theme slot resolved against the current
/// style, or an explicit color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Ink {
    Theme(ThemeColor),
    Color(Color),
}

impl From<ThemeColor> for Ink {
    fn from(slot: ThemeColor) -> Self {
        Ink::Theme(slot)
    }
}

impl From<Color> for Ink {
    fn from(color: Color) -> Self {
        Ink::Color(color)
    }
}

/// Drawing surface for one layer.
///
/// Wraps the engine's `DrawList` with style-aware helpers so widgets can
/// draw with theme slots and the style font directly.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    style: &'a Style,
    layer: LayerId,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList, layer: LayerId, style: &'a Style) -> Self {
        Self { draw_list, style, layer }
    }

    #[inline]
    fn resolve(&self, ink: impl Into<Ink>) -> Color {
        match ink.into() {
            Ink::Theme(slot) => self.style.colors[slot],
            Ink::Color(c) => c,
        }
    }

    // ── shapes ────────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, ink: impl Into<Ink>) {
        let color = self.resolve(ink);
        self.draw_list.add_rect_filled(self.layer, rect, color);
    }

    /// Rectangle outline of the given stroke width.
    pub fn rect_outline(&mut self, rect: Rect, ink: impl Into<Ink>, thickness: f32) {
        let color = self.resolve(ink);
        self.draw_list.add_rect(self.layer, rect, color, thickness);
    }

    pub fn line(&mut self, p0: Vec2, p1: Vec2, ink: impl Into<Ink>, thickness: f32) {
        let color = self.resolve(ink);
        self.draw_list.add_line(self.layer, p0, p1, color, thickness);
    }

    pub fn triangle(&mut self, p0: Vec2, p1: Vec2, p2: Vec2, ink: impl Into<Ink>) {
        let color = self.resolve(ink);
        self.draw_list.add_triangle_filled(self.layer, p0, p1, p2, color);
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, ink: impl Into<Ink>) {
        let color = self.resolve(ink);
        self.draw_list.add_circle_filled(self.layer, center, radius, color, 12);
    }

    pub fn image(&mut self, texture: TextureId, rect: Rect, uv0: Vec2, uv1: Vec2, tint: Color) {
        self.draw_list.add_image(self.layer, texture, rect, uv0, uv1, tint);
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Text in the style font, top-left at `origin`.
    pub fn text(&mut self, origin: Vec2, text: &str, ink: impl Into<Ink>) {
        let color = self.resolve(ink);
        let (font, size) = (self.style.font, self.style.font_size);
        self.draw_list.add_text(self.layer, font, size, origin, color, text, None);
    }

    /// Text wrapped at `width`.
    pub fn wrapped_text(&mut self, origin: Vec2, width: f32, text: &str, ink: impl Into<Ink>) {
        let color = self.resolve(ink);
        let (font, size) = (self.style.font, self.style.font_size);
        self.draw_list.add_text(self.layer, font, size, origin, color, text, Some(width));
    }

    /// Text clipped to `clip` as well as the current clip region.
    pub fn clipped_text(&mut self, origin: Vec2, clip: Rect, text: &str, ink: impl Into<Ink>) {
        let color = self.resolve(ink);
        let (font, size) = (self.style.font, self.style.font_size);
        self.draw_list.add_clipped_text(self.layer, font, size, origin, clip, color, text, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_engine::scene::DrawCmd;

    #[test]
    fn theme_slots_resolve_against_style() {
        let mut list = DrawList::new();
        let layer = list.request_layer("fg");
        let style = Style::default();
        Painter::new(&mut list, layer, &style).fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), ThemeColor::Button);

        match &list.layer_items(layer)[0].cmd {
            DrawCmd::Rect(r) => assert_eq!(r.color, style.colors[ThemeColor::Button]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn clipped_text_leaves_clip_stack_balanced() {
        let mut list = DrawList::new();
        let layer = list.request_layer("fg");
        let style = Style::default();
        Painter::new(&mut list, layer, &style).clipped_text(
            Vec2::zero(),
            Rect::new(0.0, 0.0, 10.0, 10.0),
            "hi",
            Color::WHITE,
        );
        assert_eq!(list.clip_depth(), 0);
        assert_eq!(list.layer_items(layer).len(), 1);
    }
}
