use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, LayerId};

/// Host-defined texture handle; the draw list never interprets it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextureId(pub u64);

/// Textured quad payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub texture: TextureId,
    pub rect: Rect,
    pub uv0: Vec2,
    pub uv1: Vec2,
    pub tint: Color,
}

impl DrawList {
    #[inline]
    pub fn add_image(&mut self, layer: LayerId, texture: TextureId, rect: Rect, uv0: Vec2, uv1: Vec2, tint: Color) {
        self.push(layer, DrawCmd::Image(ImageCmd { texture, rect, uv0, uv1, tint }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipped_text_restores_clip_stack() {
        let mut list = DrawList::new();
        let layer = list.request_layer("text");
        list.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0), true);
        list.add_clipped_text(
            layer,
            Default::default(),
            13.0,
            Vec2::new(5.0, 5.0),
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Color::WHITE,
            "label",
            None,
        );
        assert_eq!(list.clip_depth(), 1);
        assert_eq!(list.layer_items(layer)[0].clip_rect, Some(Rect::new(0.0, 0.0, 20.0, 20.0)));
        list.pop_clip();
    }

    #[test]
    fn image_keeps_uvs_and_tint() {
        let mut list = DrawList::new();
        let layer = list.request_layer("img");
        list.add_image(layer, TextureId(7), Rect::new(0.0, 0.0, 4.0, 4.0), Vec2::zero(), Vec2::splat(1.0), Color::WHITE);
        match &list.layer_items(layer)[0].cmd {
            DrawCmd::Image(img) => {
                assert_eq!(img.texture, TextureId(7));
                assert_eq!(img.uv1, Vec2::splat(1.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
