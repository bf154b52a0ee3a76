use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, LayerId};

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
    /// Outline thickness; `None` fills the rect.
    pub stroke: Option<f32>,
}

impl DrawList {
    /// Records a filled rectangle.
    #[inline]
    pub fn add_rect_filled(&mut self, layer: LayerId, rect: Rect, color: Color) {
        self.push(layer, DrawCmd::Rect(RectCmd { rect, color, stroke: None }));
    }

    /// Records a rectangle outline of the given thickness.
    #[inline]
    pub fn add_rect(&mut self, layer: LayerId, rect: Rect, color: Color, thickness: f32) {
        self.push(layer, DrawCmd::Rect(RectCmd { rect, color, stroke: Some(thickness) }));
    }
}
