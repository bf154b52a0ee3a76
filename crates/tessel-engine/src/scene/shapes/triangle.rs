use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, LayerId};

/// Filled triangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
    pub color: Color,
}

impl DrawList {
    #[inline]
    pub fn add_triangle_filled(&mut self, layer: LayerId, p0: Vec2, p1: Vec2, p2: Vec2, color: Color) {
        self.push(layer, DrawCmd::Triangle(TriangleCmd { points: [p0, p1, p2], color }));
    }
}
