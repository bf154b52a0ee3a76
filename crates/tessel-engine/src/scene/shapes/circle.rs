use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, LayerId};

/// Filled circle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Tessellation hint; 0 lets the renderer choose.
    pub segments: u32,
}

impl DrawList {
    #[inline]
    pub fn add_circle_filled(&mut self, layer: LayerId, center: Vec2, radius: f32, color: Color, segments: u32) {
        self.push(layer, DrawCmd::Circle(CircleCmd { center, radius, color, segments }));
    }
}
