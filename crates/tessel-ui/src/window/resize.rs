use tessel_engine::coords::{Rect, Vec2};
use tessel_engine::input::{CursorShape, MouseButton};

use crate::context::Context;
use crate::id::WidgetId;
use crate::style::ThemeColor;

use super::WindowIdx;

/// Side of the square grip in the bottom-right corner.
const GRIP_SIZE: f32 = 15.0;
/// Thickness of the invisible border handles.
const BORDER_HIT: f32 = 4.0;
const DRAG_THRESHOLD: f32 = 2.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Handle {
    Corner,
    West,
    East,
    North,
    South,
}

impl Handle {
    const ALL: [Handle; 5] = [Handle::Corner, Handle::West, Handle::East, Handle::North, Handle::South];

    /// Id offset from the window id; the scrollbars use 6 and 7.
    fn id(self, window: WidgetId) -> WidgetId {
        window.offset(match self {
            Handle::Corner => 1,
            Handle::West => 2,
            Handle::East => 3,
            Handle::North => 4,
            Handle::South => 5,
        })
    }

    fn cursor(self) -> CursorShape {
        match self {
            Handle::Corner => CursorShape::ResizeNwse,
            Handle::West | Handle::East => CursorShape::ResizeEw,
            Handle::North | Handle::South => CursorShape::ResizeNs,
        }
    }

    fn rect(self, pos: Vec2, size: Vec2, title: f32) -> Rect {
        let half = BORDER_HIT * 0.5;
        let side_h = (size.y - title - GRIP_SIZE).max(0.0);
        let side_w = (size.x - GRIP_SIZE).max(0.0);
        match self {
            Handle::Corner => Rect::new(pos.x + size.x - GRIP_SIZE, pos.y + size.y - GRIP_SIZE, GRIP_SIZE, GRIP_SIZE),
            Handle::West => Rect::new(pos.x - half, pos.y + title, BORDER_HIT, side_h),
            Handle::East => Rect::new(pos.x + size.x - half, pos.y + title, BORDER_HIT, side_h),
            Handle::North => Rect::new(pos.x, pos.y - half, side_w, BORDER_HIT),
            Handle::South => Rect::new(pos.x, pos.y + size.y - half, side_w, BORDER_HIT),
        }
    }
}

/// New `(pos, size)` after dragging `handle` by `delta`. The edge opposite
/// the handle stays put, also when the size hits its limits.
fn resize(handle: Handle, pos: Vec2, size: Vec2, delta: Vec2, min: Vec2, max: Vec2) -> (Vec2, Vec2) {
    let far = pos + size;
    match handle {
        Handle::Corner => (pos, (size + delta).clamp(min, max)),
        Handle::East => (pos, Vec2::new((size.x + delta.x).clamp(min.x, max.x), size.y)),
        Handle::South => (pos, Vec2::new(size.x, (size.y + delta.y).clamp(min.y, max.y))),
        Handle::West => {
            let w = (size.x - delta.x).clamp(min.x, max.x);
            (Vec2::new(far.x - w, pos.y), Vec2::new(w, size.y))
        }
        Handle::North => {
            let h = (size.y - delta.y).clamp(min.y, max.y);
            (Vec2::new(pos.x, far.y - h), Vec2::new(size.x, h))
        }
    }
}

impl Context {
    /// Corner grip and edge handles of a resizable window.
    pub(crate) fn window_resize_handles(&mut self, idx: WindowIdx) {
        let w = &self.windows[idx.0];
        let (wid, pos, size, title, layer) = (w.id, w.pos, w.size, w.title_bar_height, w.fg_layer);

        for handle in Handle::ALL {
            let id = handle.id(wid);
            let bb = handle.rect(pos, size, title);
            let state = self.button_behavior(bb, id);
            let active = self.active_id == Some(id);

            if state.hovered || active {
                self.input.set_cursor(handle.cursor());
            }

            if handle == Handle::Corner {
                let slot = if active {
                    ThemeColor::ScrollbarActive
                } else if state.hovered {
                    ThemeColor::ScrollbarHovered
                } else {
                    ThemeColor::ScrollbarHandle
                };
                let max = bb.max();
                self.painter_on(layer).triangle(
                    Vec2::new(max.x, bb.origin.y),
                    max,
                    Vec2::new(bb.origin.x, max.y),
                    slot,
                );
            } else if state.hovered || active {
                self.painter_on(layer).fill_rect(bb, ThemeColor::ScrollbarHovered);
            }

            if active && self.input.is_mouse_dragging(MouseButton::Left, DRAG_THRESHOLD) {
                let delta = self.input.mouse_drag_delta(MouseButton::Left, DRAG_THRESHOLD);
                let w = &mut self.windows[idx.0];
                let (new_pos, new_size) = resize(handle, w.pos, w.size, delta, w.min_size, w.max_size);
                w.pos = new_pos;
                w.size = new_size;
                w.clamp_scroll();
                self.input.reset_mouse_drag_delta(MouseButton::Left);
                self.sizing_window = Some(idx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Vec2 = Vec2::new(200.0, 200.0);
    const MAX: Vec2 = Vec2::new(10_000.0, 10_000.0);

    fn drag(handle: Handle, delta: Vec2) -> (Vec2, Vec2) {
        resize(handle, Vec2::new(100.0, 100.0), Vec2::new(400.0, 300.0), delta, MIN, MAX)
    }

    #[test]
    fn corner_grows_both_axes() {
        assert_eq!(drag(Handle::Corner, Vec2::new(20.0, 30.0)), (Vec2::new(100.0, 100.0), Vec2::new(420.0, 330.0)));
    }

    #[test]
    fn west_edge_keeps_right_edge_fixed() {
        let (pos, size) = drag(Handle::West, Vec2::new(50.0, 0.0));
        assert_eq!(pos.x, 150.0);
        assert_eq!(size.x, 350.0);
        assert_eq!(pos.x + size.x, 500.0);
    }

    #[test]
    fn north_edge_stops_at_min_size() {
        let (pos, size) = drag(Handle::North, Vec2::new(0.0, 250.0));
        assert_eq!(size.y, 200.0);
        assert_eq!(pos.y, 200.0);
    }

    #[test]
    fn handles_have_distinct_ids() {
        let base = WidgetId::from_raw(0x1000);
        let ids: Vec<u32> = Handle::ALL.iter().map(|h| h.id(base).raw()).collect();
        assert_eq!(ids, vec![0x1001, 0x1002, 0x1003, 0x1004, 0x1005]);
    }

    #[test]
    fn border_handles_straddle_the_edge() {
        let r = Handle::East.rect(Vec2::zero(), Vec2::new(300.0, 300.0), 33.0);
        assert!(r.contains(Vec2::new(299.0, 100.0)));
        assert!(r.contains(Vec2::new(301.0, 100.0)));
    }
}
