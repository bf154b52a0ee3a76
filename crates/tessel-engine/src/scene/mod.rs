//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in named layers
//! - track the clip stack each command is recorded under
//! - hand submitted layers to the host renderer in submission order
//!
//! Shape-specific helpers live in their own file under `scene::shapes`.

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList, LayerId};
pub use shapes::image::TextureId;
