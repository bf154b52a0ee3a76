//! Widget library.
//!
//! Every widget follows the same shape: ask the row for a size, hash the
//! label into an id, run [`Context::button_behavior`] over the hit rectangle,
//! draw (only when inside the window) and finally advance the cursor.
//!
//! [`Context::button_behavior`]: crate::Context::button_behavior

pub mod button;
pub mod checkbox;
pub mod combo;
pub mod drag;
pub mod filter;
pub mod image;
pub mod input_text;
pub mod menu;
pub mod misc;
pub mod progress;
pub mod selectable;
pub mod separator;
pub mod slider;
pub mod tabs;
pub mod text;
pub mod tree;

use crate::context::ButtonState;
use crate::style::ThemeColor;

/// Picks the active, hovered or idle slot for an interaction state.
#[inline]
pub(crate) fn state_slot(state: ButtonState, active: bool, slots: [ThemeColor; 3]) -> ThemeColor {
    let [idle, hovered, held] = slots;
    if state.held || active {
        held
    } else if state.hovered {
        hovered
    } else {
        idle
    }
}

pub(crate) const BUTTON_SLOTS: [ThemeColor; 3] =
    [ThemeColor::Button, ThemeColor::ButtonHovered, ThemeColor::ButtonActive];
pub(crate) const FRAME_SLOTS: [ThemeColor; 3] =
    [ThemeColor::FrameBg, ThemeColor::FrameBgHovered, ThemeColor::FrameBgActive];
pub(crate) const HEADER_SLOTS: [ThemeColor; 3] =
    [ThemeColor::Header, ThemeColor::HeaderHovered, ThemeColor::HeaderActive];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_wins_over_hover() {
        let held = ButtonState { hovered: true, held: true, pressed: false };
        assert_eq!(state_slot(held, false, BUTTON_SLOTS), ThemeColor::ButtonActive);
        let hovered = ButtonState { hovered: true, ..Default::default() };
        assert_eq!(state_slot(hovered, false, BUTTON_SLOTS), ThemeColor::ButtonHovered);
        assert_eq!(state_slot(ButtonState::default(), false, FRAME_SLOTS), ThemeColor::FrameBg);
        assert_eq!(state_slot(ButtonState::default(), true, HEADER_SLOTS), ThemeColor::HeaderActive);
    }
}
