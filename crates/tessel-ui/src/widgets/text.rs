use tessel_engine::coords::{Rect, Vec2};
use tessel_engine::paint::Color;

use crate::context::Context;
use crate::painter::Ink;
use crate::style::ThemeColor;

impl Context {
    /// A line of text in the theme text color.
    pub fn text(&mut self, text: &str) {
        self.text_ink(text, ThemeColor::Text.into());
    }

    /// A line of text in an explicit color.
    pub fn color_text(&mut self, color: Color, text: &str) {
        self.text_ink(text, color.into());
    }

    fn text_ink(&mut self, text: &str, ink: Ink) {
        let pos = self.cursor_pos();
        let text_size = self.text_size(text);
        let size = self.calculate_item_size(text_size.y);
        if self.should_render(pos, size) {
            let clip = Rect::from_origin_size(pos, Vec2::new(size.x, size.y.max(text_size.y)));
            self.painter().clipped_text(pos, clip, text, ink);
        }
        self.advance_cursor(size.x, size.y);
    }

    /// `value` followed by `label` at two thirds of the cell width.
    pub fn labeled_text(&mut self, label: &str, value: &str) {
        let pos = self.cursor_pos();
        let text_size = self.text_size(value);
        let size = self.calculate_item_size(text_size.y);
        if self.should_render(pos, size) {
            let label_x = pos.x + (size.x * 2.0 / 3.0).floor() + self.style.inner_spacing.x;
            let mut painter = self.painter();
            painter.text(pos, value, ThemeColor::Text);
            painter.text(Vec2::new(label_x, pos.y), label, ThemeColor::Text);
        }
        self.advance_cursor(size.x, size.y);
    }
}
