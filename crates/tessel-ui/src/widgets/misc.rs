use tessel_engine::coords::{Rect, Vec2};

use crate::context::Context;

impl Context {
    /// An undrawn clickable area of `size`. Useful as a custom hit target.
    pub fn invisible_button(&mut self, label: &str, size: Vec2) -> bool {
        let pos = self.cursor_pos();
        let id = self.ids.id_of(label);
        let state = self.button_behavior(Rect::from_origin_size(pos, size), id);
        self.advance_cursor(size.x, size.y);
        state.pressed
    }

    /// Advances the cursor by an empty cell of `size`.
    pub fn dummy(&mut self, size: Vec2) {
        self.advance_cursor(size.x, size.y);
    }
}
