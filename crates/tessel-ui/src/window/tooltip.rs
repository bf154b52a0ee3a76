use tessel_engine::coords::{Rect, Vec2};

use crate::context::Context;
use crate::layout::LayoutRow;
use crate::style::ThemeColor;

use super::begin::DEFAULT_ROW_WIDTH;

impl Context {
    /// Opens the tooltip window at the pointer. It is drawn above every
    /// other window this frame and sizes itself to its content.
    pub fn begin_tooltip(&mut self) {
        let idx = self.tooltip;
        let mouse = self.input.mouse_pos();
        let viewport = self.input.viewport();
        let (hpad, vpad) = (self.style.window_horizontal_padding, self.style.window_vertical_padding);

        let w = &mut self.windows[idx.0];
        debug_assert!(!w.active, "begin_tooltip called twice in one frame");
        w.active = true;
        w.pos = mouse;
        w.title_bar_height = 0.0;
        w.layout.reset((mouse + Vec2::new(hpad, vpad)).floor());
        w.layout.set_row(LayoutRow::static_width(0.0, DEFAULT_ROW_WIDTH, 1));
        let id = w.id;

        let clip = Rect::from_origin_size(mouse, (viewport.size() - mouse).max(Vec2::zero()));
        self.draw_list.push_clip(clip, false);
        self.window_stack.push(idx);
        self.ids.push(id);
    }

    pub fn end_tooltip(&mut self) {
        let idx = self.current();
        assert_eq!(idx, self.tooltip, "end_tooltip without begin_tooltip");
        let (hpad, vpad) = (self.style.window_horizontal_padding, self.style.window_vertical_padding);

        let w = &mut self.windows[idx.0];
        w.content_size = Vec2::new(hpad, vpad) + (w.layout.cursor_max - w.layout.cursor_start);
        w.size = w.content_size + Vec2::new(hpad, vpad);
        let rect = Rect::from_origin_size(w.pos, w.size);
        w.outer_rect = rect;
        w.inner_rect = rect;
        let layer = w.bg_layer;

        self.draw_list.pop_clip();
        let mut painter = self.painter_on(layer);
        painter.fill_rect(rect, ThemeColor::WindowBg);
        painter.rect_outline(rect, ThemeColor::WindowBorder, 1.0);

        self.ids.pop();
        self.window_stack.pop();
    }

    /// Shows `text` in a tooltip when the last item is hovered.
    pub fn tooltip_text(&mut self, text: &str) {
        if !self.was_last_item_hovered() {
            return;
        }
        let width = self.text_size(text).x;
        self.begin_tooltip();
        self.layout_static(0.0, width, 1);
        self.text(text);
        self.end_tooltip();
    }
}
