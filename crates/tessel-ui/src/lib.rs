//! Tessel UI: immediate-mode windows, layout and widgets on top of `tessel-engine`.
//!
//! The application owns nothing but its own data. Every frame it calls
//! widget functions on a [`Context`]; the context keeps the state that must
//! survive between frames (window placement, scroll, which header is open,
//! who holds the mouse) keyed by hashed labels.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tessel_ui::prelude::*;
//!
//! let mut ctx = Context::new(Box::new(FixedMetrics::default()));
//! ctx.input_mut().set_viewport(Viewport::new(1280.0, 720.0));
//!
//! // Each frame:
//! ctx.new_frame(dt);
//! if ctx.begin_window("Stats", None, WindowFlags::empty()) {
//!     ctx.layout_dynamic(0.0, 1);
//!     ctx.text("Hello!");
//!     if ctx.button("Reset") { counter = 0; }
//!     ctx.end_window();
//! }
//! ctx.render();
//! // Hand ctx.draw_list().submitted() to your renderer.
//! ```
//!
//! # Labels and ids
//!
//! A label is hashed with the id of the enclosing scope (window, header,
//! tree node, tab bar, `push_id_*`). Text after `##` is hashed but not
//! shown; `###` restarts the hash so only the text after it counts.
//!
//! # Keyboard
//!
//! Widgets are mouse driven except text fields, which read editing keys and
//! committed text from the input layer while they hold the keyboard. Check
//! [`Context::wants_keyboard_capture`] before acting on keys in the host.

pub mod clipper;
pub mod context;
pub mod id;
pub mod layout;
pub mod painter;
pub mod storage;
pub mod style;
pub mod widgets;
pub mod window;

pub use context::Context;

/// Everything an application needs, in one import.
pub mod prelude {
    pub use crate::clipper::ListClipper;
    pub use crate::context::{install_context, take_context, with_context, ButtonState, Context};
    pub use crate::id::WidgetId;
    pub use crate::layout::{RowType, TemplateEntry};
    pub use crate::painter::Ink;
    pub use crate::style::{Style, Theme, ThemeColor};
    pub use crate::widgets::combo::ComboFlags;
    pub use crate::widgets::filter::TextFilter;
    pub use crate::widgets::input_text::InputTextFlags;
    pub use crate::window::{Cond, Window, WindowFlags, WindowIdx};

    pub use tessel_engine::coords::{Rect, Vec2, Viewport};
    pub use tessel_engine::input::{InputEvent, Key, MouseButton};
    pub use tessel_engine::paint::Color;
    pub use tessel_engine::scene::TextureId;
    pub use tessel_engine::text::{FixedMetrics, FontId, TextMeasure};
}
