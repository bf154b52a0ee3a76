//! Style: metrics and the theme color table.

use std::ops::{Index, IndexMut};

use tessel_engine::coords::Vec2;
use tessel_engine::paint::Color;
use tessel_engine::text::FontId;

/// Slot in the theme color table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ThemeColor {
    TitleActive,
    TitleBg,
    TitleBgCollapsed,
    WindowBg,
    WindowBorder,
    ChildBg,
    Button,
    ButtonHovered,
    ButtonActive,
    Text,
    ProgressBar,
    CheckMark,
    FrameBg,
    FrameBgHovered,
    FrameBgActive,
    Header,
    HeaderHovered,
    HeaderActive,
    ScrollbarBg,
    ScrollbarHandle,
    ScrollbarFrame,
    ScrollbarActive,
    ScrollbarHovered,
    PopupBg,
    TextDisabled,
    TextSelectedBg,
}

impl ThemeColor {
    pub const COUNT: usize = 26;
}

/// Full theme color table.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    colors: [Color; ThemeColor::COUNT],
}

impl Index<ThemeColor> for Theme {
    type Output = Color;

    fn index(&self, slot: ThemeColor) -> &Color {
        &self.colors[slot as usize]
    }
}

impl IndexMut<ThemeColor> for Theme {
    fn index_mut(&mut self, slot: ThemeColor) -> &mut Color {
        &mut self.colors[slot as usize]
    }
}

impl Theme {
    /// Dark theme with crimson accents.
    pub fn dark() -> Self {
        let c = Color::from_straight;
        let button_hovered = c(0.61, 0.02, 0.10, 1.00);
        let button_active = c(0.87, 0.02, 0.10, 1.00);
        let mut theme = Self { colors: [Color::transparent(); ThemeColor::COUNT] };

        theme[ThemeColor::TitleActive] = c(0.33, 0.02, 0.10, 1.00);
        theme[ThemeColor::TitleBg] = c(0.04, 0.04, 0.04, 1.00);
        theme[ThemeColor::TitleBgCollapsed] = c(0.04, 0.04, 0.04, 1.00);
        theme[ThemeColor::WindowBg] = c(0.10, 0.10, 0.10, 0.78);
        theme[ThemeColor::WindowBorder] = c(0.33, 0.02, 0.10, 1.00);
        theme[ThemeColor::ChildBg] = c(0.10, 0.10, 0.10, 0.78);
        theme[ThemeColor::Button] = c(0.51, 0.02, 0.10, 1.00);
        theme[ThemeColor::ButtonHovered] = button_hovered;
        theme[ThemeColor::ButtonActive] = button_active;
        theme[ThemeColor::Text] = Color::WHITE;
        theme[ThemeColor::ProgressBar] = c(0.90, 0.70, 0.00, 1.00);
        theme[ThemeColor::CheckMark] = c(0.87, 0.02, 0.10, 1.00);
        theme[ThemeColor::FrameBg] = c(0.23, 0.02, 0.10, 1.00);
        theme[ThemeColor::FrameBgHovered] = c(0.26, 0.59, 0.98, 0.40);
        theme[ThemeColor::FrameBgActive] = c(0.26, 0.59, 0.98, 0.67);
        theme[ThemeColor::Header] = c(0.51, 0.02, 0.10, 1.00);
        theme[ThemeColor::HeaderHovered] = c(0.26, 0.59, 0.98, 0.80);
        theme[ThemeColor::HeaderActive] = c(0.26, 0.59, 0.98, 1.00);
        theme[ThemeColor::ScrollbarBg] = c(0.05, 0.05, 0.05, 0.85);
        theme[ThemeColor::ScrollbarHandle] = c(0.51, 0.02, 0.10, 1.00);
        theme[ThemeColor::ScrollbarFrame] = Color::transparent();
        theme[ThemeColor::ScrollbarActive] = button_active;
        theme[ThemeColor::ScrollbarHovered] = button_hovered;
        theme[ThemeColor::PopupBg] = c(0.08, 0.08, 0.08, 0.94);
        theme[ThemeColor::TextDisabled] = c(0.50, 0.50, 0.50, 1.00);
        theme[ThemeColor::TextSelectedBg] = c(0.26, 0.59, 0.98, 0.35);
        theme
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Metrics and colors shared by every window and widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub font: FontId,
    pub font_size: f32,
    /// Vertical padding around the title text.
    pub title_padding: f32,
    pub window_horizontal_padding: f32,
    pub window_vertical_padding: f32,
    /// Horizontal offset applied per tree level and by `indent(0.0)`.
    pub indent: f32,
    pub scrollbar_size: f32,
    pub slider_size: f32,
    pub item_spacing: Vec2,
    pub inner_spacing: Vec2,
    pub frame_padding: Vec2,
    pub colors: Theme,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font: FontId::default(),
            font_size: 13.0,
            title_padding: 10.0,
            window_horizontal_padding: 5.0,
            window_vertical_padding: 5.0,
            indent: 15.0,
            scrollbar_size: 10.0,
            slider_size: 12.0,
            item_spacing: Vec2::new(8.0, 4.0),
            inner_spacing: Vec2::new(4.0, 4.0),
            frame_padding: Vec2::new(4.0, 4.0),
            colors: Theme::dark(),
        }
    }
}

impl Style {
    /// Height of framed widgets: one text line plus vertical frame padding.
    #[inline]
    pub fn frame_height(&self) -> f32 {
        self.font_size + 2.0 * self.frame_padding.y
    }

    #[inline]
    pub fn title_bar_height(&self) -> f32 {
        self.font_size + 2.0 * self.title_padding
    }

    #[inline]
    pub fn color(&self, slot: ThemeColor) -> Color {
        self.colors[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slot_indexes_inside_the_table() {
        let theme = Theme::dark();
        assert_eq!(theme[ThemeColor::ScrollbarHovered], theme[ThemeColor::ButtonHovered]);
        assert_eq!(theme[ThemeColor::ScrollbarActive], theme[ThemeColor::ButtonActive]);
        assert_eq!(theme[ThemeColor::Text], Color::WHITE);
        assert_ne!(theme[ThemeColor::TextSelectedBg], Color::transparent());
    }

    #[test]
    fn derived_heights() {
        let style = Style::default();
        assert_eq!(style.frame_height(), 21.0);
        assert_eq!(style.title_bar_height(), 33.0);
    }
}
