use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, LayerId};

/// Line segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub p0: Vec2,
    pub p1: Vec2,
    pub color: Color,
    pub thickness: f32,
}

impl DrawList {
    #[inline]
    pub fn add_line(&mut self, layer: LayerId, p0: Vec2, p1: Vec2, color: Color, thickness: f32) {
        self.push(layer, DrawCmd::Line(LineCmd { p0, p1, color, thickness }));
    }
}
