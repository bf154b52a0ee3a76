//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts translate platform events into
//! `InputEvent`s and feed them to [`Input`], which the UI queries once per frame
//! for edges, drags, double clicks and the wheel.

mod frame;
mod state;
mod tracker;
mod types;

pub use frame::{Edges, InputFrame};
pub use state::InputState;
pub use tracker::{Input, DOUBLE_CLICK_DISTANCE, DOUBLE_CLICK_TIME};
pub use types::{
    CursorShape,
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
    TextEvent,
};
