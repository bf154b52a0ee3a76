use tessel_engine::coords::{Rect, Vec2};

use crate::context::Context;
use crate::style::ThemeColor;

impl Context {
    /// A bar filled to `fraction` (clamped to `0..=1`).
    ///
    /// A zero `size.y` uses the frame height and a negative `size.x` the
    /// cell width. Without `overlay` the percentage is shown.
    pub fn progress_bar(&mut self, fraction: f32, size: Vec2, overlay: Option<&str>) {
        let pos = self.cursor_pos();
        let cell = self.calculate_item_size(self.frame_height());
        let size = Vec2::new(
            if size.x < 0.0 { cell.x } else { size.x },
            if size.y == 0.0 { self.frame_height() } else { size.y },
        );
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };

        if self.should_render(pos, size) {
            let percent;
            let text = match overlay {
                Some(t) => t,
                None => {
                    percent = format!("{:.1}%", fraction * 100.0);
                    &percent
                }
            };
            let text_size = self.text_size(text);
            let text_pos = (pos + (size - text_size) * 0.5).floor();
            let bb = Rect::from_origin_size(pos, size);
            let fill = Rect::from_origin_size(pos, Vec2::new(size.x * fraction, size.y));
            let mut painter = self.painter();
            painter.fill_rect(bb, ThemeColor::FrameBg);
            painter.fill_rect(fill, ThemeColor::ProgressBar);
            painter.clipped_text(text_pos, bb, text, ThemeColor::Text);
        }
        self.advance_cursor(size.x, size.y);
    }
}
