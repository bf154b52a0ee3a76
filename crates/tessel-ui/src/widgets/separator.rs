use tessel_engine::coords::Vec2;

use crate::context::Context;
use crate::style::ThemeColor;

impl Context {
    /// A horizontal rule across the cell.
    pub fn separator(&mut self) {
        let pos = self.cursor_pos();
        let spacing = self.style.item_spacing.y;
        let size = self.calculate_item_size(spacing * 2.0);
        let y = pos.y + spacing;
        if self.should_render(pos, size) {
            self.painter().line(Vec2::new(pos.x, y), Vec2::new(pos.x + size.x, y), ThemeColor::ScrollbarHandle, 1.0);
        }
        self.advance_cursor(size.x, spacing * 2.0);
    }

    /// A rule with `label` set into it near the left end.
    pub fn separator_text(&mut self, label: &str) {
        let pos = self.cursor_pos();
        let text_size = self.text_size(label);
        let size = self.calculate_item_size(text_size.y);
        let pad = self.style.frame_padding.x;
        let lead = 2.0 * pad;
        let y = pos.y + (size.y * 0.5).floor();
        if self.should_render(pos, size) {
            let text_x = pos.x + lead + pad;
            let mut painter = self.painter();
            painter.line(Vec2::new(pos.x, y), Vec2::new(pos.x + lead, y), ThemeColor::ScrollbarHandle, 1.0);
            painter.text(Vec2::new(text_x, y - (text_size.y * 0.5).floor()), label, ThemeColor::Text);
            let tail = text_x + text_size.x + pad;
            if tail < pos.x + size.x {
                painter.line(Vec2::new(tail, y), Vec2::new(pos.x + size.x, y), ThemeColor::ScrollbarHandle, 1.0);
            }
        }
        self.advance_cursor(size.x, size.y);
    }
}
