//! Horizontal sliders.
//!
//! The frame takes two thirds of the cell with the label after it. While
//! the slider is active and the pointer drags, the value follows the
//! pointer's position along the frame.

use tessel_engine::coords::{Rect, Vec2};
use tessel_engine::input::MouseButton;

use crate::context::{ButtonState, Context};
use crate::id::visible_label;
use crate::style::ThemeColor;

use super::{state_slot, FRAME_SLOTS};

/// Geometry shared by the slider variants for one frame.
struct SliderFrame {
    pos: Vec2,
    size: Vec2,
    frame: Rect,
    active: bool,
    dragging: bool,
    mouse_x: f32,
}

impl Context {
    fn slider_frame(&mut self, label: &str) -> (SliderFrame, ButtonState) {
        let pos = self.cursor_pos();
        let size = self.calculate_item_size(self.frame_height());
        let id = self.ids.id_of(label);
        let frame = Rect::from_origin_size(pos, Vec2::new((size.x * 2.0 / 3.0).floor(), size.y));
        let state = self.button_behavior(frame, id);
        let active = self.active_id == Some(id);
        let dragging = active && self.input.is_mouse_dragging(MouseButton::Left, 1.0);
        let mouse_x = self.input.mouse_pos().x;
        (SliderFrame { pos, size, frame, active, dragging, mouse_x }, state)
    }

    fn finish_slider(
        &mut self,
        f: &SliderFrame,
        state: ButtonState,
        label: &str,
        grab: Rect,
        value_text: &str,
    ) {
        if f.dragging {
            self.input.reset_mouse_drag_delta(MouseButton::Left);
        }
        if self.should_render(f.pos, f.size) {
            let pad = self.style.frame_padding;
            let value_size = self.text_size(value_text);
            let value_pos = Vec2::new(
                (f.frame.center().x - value_size.x * 0.5).floor(),
                f.pos.y + pad.y,
            );
            let label_pos = Vec2::new(f.frame.max().x + self.style.inner_spacing.x, f.pos.y + pad.y);
            let grab_slot = if f.active { ThemeColor::ScrollbarActive } else { ThemeColor::ScrollbarHandle };
            let mut painter = self.painter();
            painter.fill_rect(f.frame, state_slot(state, f.active, FRAME_SLOTS));
            painter.fill_rect(grab, grab_slot);
            painter.clipped_text(value_pos, f.frame, value_text, ThemeColor::Text);
            painter.text(label_pos, visible_label(label), ThemeColor::Text);
        }
        self.advance_cursor(f.size.x, f.size.y);
    }

    /// Returns true when `value` changed this frame.
    pub fn slider_float(&mut self, label: &str, value: &mut f32, min: f32, max: f32) -> bool {
        let before = *value;
        let (min, max) = (min.min(max), max.max(min));
        *value = value.clamp(min, max);
        let (f, state) = self.slider_frame(label);
        let grab_w = self.style.slider_size.min(f.frame.size.x);
        let travel = f.frame.size.x - grab_w;
        let range = max - min;

        if f.dragging && travel > 0.0 {
            let ratio = ((f.mouse_x - f.frame.origin.x - grab_w * 0.5) / travel).clamp(0.0, 1.0);
            *value = (min + ratio * range).clamp(min, max);
        }

        let offset = if range != 0.0 { (*value - min) / range * travel } else { 0.0 };
        let grab = Rect::new(f.frame.origin.x + offset.floor(), f.pos.y, grab_w, f.size.y);
        self.finish_slider(&f, state, label, grab, &format!("{value:.3}"));
        *value != before
    }

    /// Integer slider; each value gets an equal block of the frame.
    pub fn slider_int(&mut self, label: &str, value: &mut i32, min: i32, max: i32) -> bool {
        let mut wide = i64::from(*value);
        let changed = self.slider_steps(label, &mut wide, i64::from(min), i64::from(max));
        *value = wide as i32;
        changed
    }

    pub fn slider_uint(&mut self, label: &str, value: &mut u32, min: u32, max: u32) -> bool {
        let mut wide = i64::from(*value);
        let changed = self.slider_steps(label, &mut wide, i64::from(min), i64::from(max));
        *value = wide as u32;
        changed
    }

    fn slider_steps(&mut self, label: &str, value: &mut i64, min: i64, max: i64) -> bool {
        let before = *value;
        let (min, max) = (min.min(max), max.max(min));
        *value = (*value).clamp(min, max);
        let (f, state) = self.slider_frame(label);
        let steps = (max - min + 1) as f32;
        let block = f.frame.size.x / steps;

        if f.dragging && block > 0.0 {
            let step = ((f.mouse_x - f.frame.origin.x) / block).floor() as i64;
            *value = (min + step).clamp(min, max);
        }

        let grab = Rect::new(
            f.frame.origin.x + ((*value - min) as f32 * block).floor(),
            f.pos.y,
            block.max(1.0),
            f.size.y,
        );
        self.finish_slider(&f, state, label, grab, &value.to_string());
        *value != before
    }
}
