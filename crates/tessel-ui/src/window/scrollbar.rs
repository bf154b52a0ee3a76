use tessel_engine::coords::Rect;
use tessel_engine::input::MouseButton;

use crate::context::Context;
use crate::style::ThemeColor;

use super::WindowIdx;

/// Shortest a scrollbar handle is drawn.
const MIN_HANDLE: f32 = 5.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Axis {
    X,
    Y,
}

impl Context {
    /// Draws and drives the window's scrollbars, if any are needed.
    pub(crate) fn window_scrollbars(&mut self, idx: WindowIdx) {
        let w = &self.windows[idx.0];
        let (show_x, show_y) = (w.scrollbar_x, w.scrollbar_y);
        if show_y {
            self.window_scrollbar(idx, Axis::Y);
        }
        if show_x {
            self.window_scrollbar(idx, Axis::X);
        }
    }

    fn window_scrollbar(&mut self, idx: WindowIdx, axis: Axis) {
        let size = self.style.scrollbar_size;
        let gutter = size + 2.0;
        let w = &self.windows[idx.0];
        let (pos, dim, title) = (w.pos, w.size, w.title_bar_height);

        let (track, scroll, scroll_max, id) = match axis {
            Axis::Y => {
                let len = dim.y - title - if w.scrollbar_x { gutter } else { 0.0 };
                let track = Rect::new(pos.x + dim.x - size - 2.0, pos.y + title, size, len);
                (track, w.scroll.y, w.scroll_max.y, w.id.offset(6))
            }
            Axis::X => {
                let len = dim.x - if w.scrollbar_y { gutter } else { 0.0 };
                let track = Rect::new(pos.x, pos.y + dim.y - size - 2.0, len, size);
                (track, w.scroll.x, w.scroll_max.x, w.id.offset(7))
            }
        };
        let layer = w.fg_layer;

        let track_len = match axis {
            Axis::Y => track.size.y,
            Axis::X => track.size.x,
        };
        if track_len <= 0.0 || scroll_max <= 0.0 {
            return;
        }
        let content = track_len + scroll_max;
        let handle_len = (track_len * track_len / content).floor().max(MIN_HANDLE).min(track_len);
        let travel = track_len - handle_len;
        let start = handle_offset(track_len, handle_len, scroll, scroll_max);
        let handle = match axis {
            Axis::Y => Rect::new(track.origin.x, track.origin.y + start, size, handle_len),
            Axis::X => Rect::new(track.origin.x + start, track.origin.y, handle_len, size),
        };

        let state = self.button_behavior(handle, id);

        if self.active_id == Some(id) && self.input.is_mouse_dragging(MouseButton::Left, 1.0) && travel > 0.0 {
            let delta = self.input.mouse_drag_delta(MouseButton::Left, 1.0);
            let d = match axis {
                Axis::Y => delta.y,
                Axis::X => delta.x,
            };
            let w = &mut self.windows[idx.0];
            match axis {
                Axis::Y => w.scroll.y += d * scroll_max / travel,
                Axis::X => w.scroll.x += d * scroll_max / travel,
            }
            w.clamp_scroll();
            self.input.reset_mouse_drag_delta(MouseButton::Left);
            self.scrolling_window = Some(idx);
        }

        let slot = if self.active_id == Some(id) {
            ThemeColor::ScrollbarActive
        } else if state.hovered {
            ThemeColor::ScrollbarHovered
        } else {
            ThemeColor::ScrollbarHandle
        };
        let mut painter = self.painter_on(layer);
        painter.fill_rect(track, ThemeColor::ScrollbarBg);
        painter.rect_outline(track, ThemeColor::ScrollbarFrame, 1.0);
        painter.fill_rect(handle, slot);
    }
}

/// Offset of the handle along a track, for a scroll position.
fn handle_offset(track_len: f32, handle_len: f32, scroll: f32, scroll_max: f32) -> f32 {
    if scroll_max <= 0.0 { 0.0 } else { ((track_len - handle_len) * scroll / scroll_max).floor() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_sits_at_ends_of_travel() {
        assert_eq!(handle_offset(200.0, 50.0, 0.0, 100.0), 0.0);
        assert_eq!(handle_offset(200.0, 50.0, 100.0, 100.0), 150.0);
        assert_eq!(handle_offset(200.0, 50.0, 50.0, 100.0), 75.0);
    }

    #[test]
    fn no_range_means_no_offset() {
        assert_eq!(handle_offset(200.0, 50.0, 10.0, 0.0), 0.0);
    }
}
