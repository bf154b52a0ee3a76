use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, LayerId};
use crate::text::FontId;

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Top-left of the text block in logical pixels.
    pub origin: Vec2,
    /// Wrapping width in logical pixels. `None` = no wrapping.
    pub max_width: Option<f32>,
}

impl DrawList {
    /// Records a text draw command.
    #[allow(clippy::too_many_arguments)]
    pub fn add_text(
        &mut self,
        layer: LayerId,
        font: FontId,
        size: f32,
        origin: Vec2,
        color: Color,
        text: impl Into<String>,
        max_width: Option<f32>,
    ) {
        self.push(layer, DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            origin,
            max_width,
        }));
    }

    /// Records text clipped to `clip` (intersected with the current clip).
    #[allow(clippy::too_many_arguments)]
    pub fn add_clipped_text(
        &mut self,
        layer: LayerId,
        font: FontId,
        size: f32,
        origin: Vec2,
        clip: Rect,
        color: Color,
        text: impl Into<String>,
        max_width: Option<f32>,
    ) {
        self.push_clip(clip, true);
        self.add_text(layer, font, size, origin, color, text, max_width);
        self.pop_clip();
    }
}
