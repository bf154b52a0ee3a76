use tessel_engine::coords::{Rect, Vec2};
use tessel_engine::paint::Color;
use tessel_engine::scene::TextureId;

use crate::context::Context;

use super::{state_slot, BUTTON_SLOTS};

/// Padding between an image button's frame and its image.
const IMAGE_BUTTON_PADDING: f32 = 2.0;

impl Context {
    /// Draws the whole of `texture` at `size`.
    pub fn image(&mut self, texture: TextureId, size: Vec2) {
        self.image_ex(texture, size, Vec2::zero(), Vec2::splat(1.0), Color::WHITE, None);
    }

    /// Draws the `uv0..uv1` region of `texture`, tinted, with an optional border.
    pub fn image_ex(
        &mut self,
        texture: TextureId,
        size: Vec2,
        uv0: Vec2,
        uv1: Vec2,
        tint: Color,
        border: Option<Color>,
    ) {
        let pos = self.cursor_pos();
        if self.should_render(pos, size) {
            let rect = Rect::from_origin_size(pos, size);
            let mut painter = self.painter();
            painter.image(texture, rect, uv0, uv1, tint);
            if let Some(border) = border {
                painter.rect_outline(rect, border, 1.0);
            }
        }
        self.advance_cursor(size.x, size.y);
    }

    /// A button showing `texture`. `label` only provides the id.
    pub fn image_button(&mut self, label: &str, texture: TextureId, size: Vec2) -> bool {
        self.image_button_ex(label, texture, size, Vec2::zero(), Vec2::splat(1.0), Color::WHITE)
    }

    pub fn image_button_ex(
        &mut self,
        label: &str,
        texture: TextureId,
        size: Vec2,
        uv0: Vec2,
        uv1: Vec2,
        tint: Color,
    ) -> bool {
        let pos = self.cursor_pos();
        let outer = size + Vec2::splat(2.0 * IMAGE_BUTTON_PADDING);
        let id = self.ids.id_of(label);
        let bb = Rect::from_origin_size(pos, outer);
        let state = self.button_behavior(bb, id);

        if self.should_render(pos, outer) {
            let active = self.active_id == Some(id);
            let inner = Rect::from_origin_size(pos + Vec2::splat(IMAGE_BUTTON_PADDING), size);
            let mut painter = self.painter();
            painter.fill_rect(bb, state_slot(state, active, BUTTON_SLOTS));
            painter.image(texture, inner, uv0, uv1, tint);
        }
        self.advance_cursor(outer.x, outer.y);
        state.pressed
    }
}
