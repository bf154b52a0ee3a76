use tessel_engine::coords::Vec2;

use crate::context::Context;
use crate::layout::LayoutRow;
use crate::style::ThemeColor;

use super::{Cond, WindowFlags, DEFAULT_ROW_WIDTH};

/// Default height of a child region when the row gives none.
const CHILD_DEFAULT_HEIGHT: f32 = 200.0;

impl Context {
    /// Opens a scrollable child region in the next layout cell of the
    /// current window.
    ///
    /// The region takes the cell unless `set_next_window_pos` or
    /// `set_next_window_size` gave it a placement; a negative dimension
    /// fills the parent minus that amount. Returns false when the region is
    /// clipped away entirely, in which case it is already closed.
    pub fn begin_child(&mut self, name: &str) -> bool {
        if self.next_window.size.is_none() {
            let size = self.calculate_item_size(CHILD_DEFAULT_HEIGHT);
            self.set_next_window_size(size, Cond::ALWAYS);
        }
        if self.next_window.pos.is_none() {
            let pos = self.cursor_pos();
            self.set_next_window_pos(pos, Cond::ALWAYS);
        }

        let flags = WindowFlags::CHILD
            | WindowFlags::NO_TITLE_BAR
            | WindowFlags::NO_RESIZE
            | WindowFlags::NO_COLLAPSE
            | WindowFlags::NO_MOVE;
        let visible = self.begin_window_ex(name, None, flags);
        if visible {
            self.cur_win_mut().layout.set_row(LayoutRow::static_width(0.0, DEFAULT_ROW_WIDTH, 1));
        } else {
            self.end_child();
        }
        visible
    }

    /// Closes the child region and advances the parent's cursor past it.
    pub fn end_child(&mut self) {
        let idx = self.current();
        assert!(
            self.windows[idx.0].flags.contains(WindowFlags::CHILD),
            "end_child called on a top-level window; use end_window"
        );

        let (hpad, vpad) = (self.style.window_horizontal_padding, self.style.window_vertical_padding);
        let scrollbar_size = self.style.scrollbar_size;
        let w = &mut self.windows[idx.0];
        w.content_size = Vec2::new(hpad, vpad) + (w.layout.cursor_max - w.layout.cursor_start);
        let visible = w.size;
        w.update_scroll_range(visible, scrollbar_size);
        let (size, rect, parent) = (w.size, w.inner_rect, w.parent);

        // Drawn under the parent's clip, behind the parent's widgets.
        self.draw_list.pop_clip();
        let parent_bg = self.windows[parent.0].bg_layer;
        self.painter_on(parent_bg).fill_rect(rect, ThemeColor::ChildBg);
        self.window_scrollbars(idx);

        let w = &mut self.windows[idx.0];
        w.full_size = w.size;
        self.ids.pop();
        self.window_stack.pop();

        self.advance_cursor(size.x, size.y);
    }

    /// Runs `f` inside the child region `name` when any of it is visible.
    pub fn child<R>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        if !self.begin_child(name) {
            return None;
        }
        let r = f(self);
        self.end_child();
        Some(r)
    }
}
