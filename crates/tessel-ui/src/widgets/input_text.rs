//! Single-line text fields and the numeric fields built on them.
//!
//! A click on the frame takes the keyboard: the field becomes the active
//! widget and edits a private copy of the text. Every edit is written back
//! to the caller's buffer on the frame it happens. Enter or a click
//! elsewhere keeps the edit, Escape restores the text the field started with.

use tessel_engine::coords::{Rect, Vec2};
use tessel_engine::input::{CursorShape, Input, Key, MouseButton};

use crate::context::{ButtonState, Context};
use crate::id::{visible_label, WidgetId};
use crate::style::ThemeColor;

use super::{state_slot, FRAME_SLOTS};

bitflags::bitflags! {
    /// Behavior flags of the text fields.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InputTextFlags: u32 {
        /// `0-9 . + - * /`
        const CHARS_DECIMAL      = 1 << 0;
        /// `0-9 a-f A-F`
        const CHARS_HEXADECIMAL  = 1 << 1;
        /// Lowercase letters are entered as uppercase.
        const CHARS_UPPERCASE    = 1 << 2;
        /// Spaces and tabs are dropped.
        const CHARS_NO_BLANK     = 1 << 3;
        /// Select the whole text when the field takes the keyboard.
        const AUTO_SELECT_ALL    = 1 << 4;
        /// Report true on Enter rather than on every edit.
        const ENTER_RETURNS_TRUE = 1 << 5;
        const READ_ONLY          = 1 << 6;
        /// Draw every character as `*`.
        const PASSWORD           = 1 << 7;
        /// Decimal characters plus `e E`.
        const CHARS_SCIENTIFIC   = 1 << 8;
        /// Escape clears the text first and releases on the second press.
        const ESCAPE_CLEARS_ALL  = 1 << 9;
        /// Accept tab characters.
        const ALLOW_TAB_INPUT    = 1 << 10;
    }
}

/// Applies the character filters of `flags`. Returns the character to
/// insert, which may differ from `c` (uppercase), or `None` to drop it.
pub(crate) fn filter_char(c: char, flags: InputTextFlags) -> Option<char> {
    let code = c as u32;
    if code < 0x20 && !(c == '\t' && flags.contains(InputTextFlags::ALLOW_TAB_INPUT)) {
        return None;
    }
    // DEL and the private use area carry no printable glyph.
    if code == 0x7f || (0xE000..=0xF8FF).contains(&code) {
        return None;
    }

    if flags.contains(InputTextFlags::CHARS_NO_BLANK) && (c == ' ' || c == '\t') {
        return None;
    }
    if flags.intersects(InputTextFlags::CHARS_DECIMAL | InputTextFlags::CHARS_SCIENTIFIC) {
        let scientific = flags.contains(InputTextFlags::CHARS_SCIENTIFIC) && matches!(c, 'e' | 'E');
        if !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | '*' | '/') || scientific) {
            return None;
        }
    }
    if flags.contains(InputTextFlags::CHARS_HEXADECIMAL) && !c.is_ascii_hexdigit() {
        return None;
    }
    if flags.contains(InputTextFlags::CHARS_UPPERCASE) {
        return Some(c.to_ascii_uppercase());
    }
    Some(c)
}

/// How an edit session ended this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Finish {
    Validated,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Default)]
struct EditResult {
    changed: bool,
    finish: Option<Finish>,
}

/// Private copy of the text being edited, plus caret and selection.
/// Positions count characters, not bytes.
#[derive(Debug, Clone)]
pub(crate) struct TextEditState {
    pub id: WidgetId,
    text: Vec<char>,
    initial: String,
    cursor: usize,
    /// Other end of the selection; the caret is one end.
    anchor: Option<usize>,
    scroll_x: f32,
    flags: InputTextFlags,
}

impl TextEditState {
    pub fn new(id: WidgetId, initial: &str, flags: InputTextFlags) -> Self {
        let text: Vec<char> = initial.chars().collect();
        let cursor = text.len();
        let anchor = flags.contains(InputTextFlags::AUTO_SELECT_ALL).then_some(0);
        Self { id, text, initial: initial.to_owned(), cursor, anchor, scroll_x: 0.0, flags }
    }

    #[inline]
    pub fn read_only(&self) -> bool {
        self.flags.contains(InputTextFlags::READ_ONLY)
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Ordered selection bounds, when anything is selected.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor.filter(|&a| a != self.cursor)?;
        Some((anchor.min(self.cursor), anchor.max(self.cursor)))
    }

    pub fn select_all(&mut self) {
        self.anchor = Some(0);
        self.cursor = self.text.len();
    }

    /// Replaces the text, keeping the caret inside it.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().collect();
        self.cursor = self.cursor.min(self.text.len());
        self.anchor = None;
    }

    fn move_to(&mut self, pos: usize, extend: bool) {
        if extend {
            self.anchor.get_or_insert(self.cursor);
        } else {
            self.anchor = None;
        }
        self.cursor = pos.min(self.text.len());
    }

    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection() else {
            return false;
        };
        self.text.drain(start..end);
        self.cursor = start;
        self.anchor = None;
        true
    }

    fn insert(&mut self, c: char) {
        self.delete_selection();
        self.text.insert(self.cursor, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.text.remove(self.cursor);
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    /// Applies this frame's keys and committed text.
    fn handle_input(&mut self, input: &Input) -> EditResult {
        let mut result = EditResult::default();
        let editable = !self.read_only();
        let shift = input.modifiers().shift;
        let ctrl = input.modifiers().ctrl || input.modifiers().meta;
        let before = self.text.clone();

        if input.is_key_pressed(Key::Escape, false) {
            if self.flags.contains(InputTextFlags::ESCAPE_CLEARS_ALL) {
                if self.text.is_empty() {
                    result.finish = Some(Finish::Cancelled);
                } else if editable {
                    self.text.clear();
                    self.cursor = 0;
                    self.anchor = None;
                }
            } else {
                if editable {
                    let initial = self.initial.clone();
                    self.set_text(&initial);
                }
                result.finish = Some(Finish::Cancelled);
            }
            result.changed = self.text != before;
            return result;
        }

        if ctrl && input.is_key_pressed(Key::Char('a'), false) {
            self.select_all();
        }
        if input.is_key_pressed(Key::ArrowLeft, true) {
            match self.selection() {
                Some((start, _)) if !shift => self.move_to(start, false),
                _ => self.move_to(self.cursor.saturating_sub(1), shift),
            }
        }
        if input.is_key_pressed(Key::ArrowRight, true) {
            match self.selection() {
                Some((_, end)) if !shift => self.move_to(end, false),
                _ => self.move_to(self.cursor + 1, shift),
            }
        }
        if input.is_key_pressed(Key::Home, false) {
            self.move_to(0, shift);
        }
        if input.is_key_pressed(Key::End, false) {
            self.move_to(self.text.len(), shift);
        }

        if editable {
            if input.is_key_pressed(Key::Backspace, true) {
                self.backspace();
            }
            if input.is_key_pressed(Key::Delete, true) {
                self.delete_forward();
            }
            if !ctrl {
                for c in input.text_chars() {
                    if let Some(c) = filter_char(c, self.flags) {
                        self.insert(c);
                    }
                }
            }
        }

        if input.is_key_pressed(Key::Enter, false) {
            result.finish = Some(Finish::Validated);
        }
        result.changed = self.text != before;
        result
    }
}

impl Context {
    /// A single-line text field editing `buf`. Returns true on the frames
    /// `buf` changes.
    pub fn input_text(&mut self, label: &str, buf: &mut String, flags: InputTextFlags) -> bool {
        self.input_text_ex(label, None, buf, flags)
    }

    /// Like [`input_text`](Self::input_text), showing `hint` while the text is empty.
    pub fn input_text_hint(&mut self, label: &str, hint: &str, buf: &mut String, flags: InputTextFlags) -> bool {
        self.input_text_ex(label, Some(hint), buf, flags)
    }

    /// A text field holding a float shown with three decimals. Returns true
    /// when the typed text parsed to a new value.
    pub fn input_float(&mut self, label: &str, value: &mut f32, flags: InputTextFlags) -> bool {
        let mut text = format!("{:.3}", *value);
        if !self.input_text_ex(label, None, &mut text, flags | InputTextFlags::CHARS_SCIENTIFIC) {
            return false;
        }
        match text.trim().parse::<f32>() {
            Ok(v) if v != *value => {
                *value = v;
                true
            }
            _ => false,
        }
    }

    pub fn input_int(&mut self, label: &str, value: &mut i32, flags: InputTextFlags) -> bool {
        let mut text = value.to_string();
        if !self.input_text_ex(label, None, &mut text, flags | InputTextFlags::CHARS_DECIMAL) {
            return false;
        }
        match parse_integer(&text).map(|v| v.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32) {
            Some(v) if v != *value => {
                *value = v;
                true
            }
            _ => false,
        }
    }

    /// Negative input is clamped to zero.
    pub fn input_uint(&mut self, label: &str, value: &mut u32, flags: InputTextFlags) -> bool {
        let mut text = value.to_string();
        if !self.input_text_ex(label, None, &mut text, flags | InputTextFlags::CHARS_DECIMAL) {
            return false;
        }
        match parse_integer(&text).map(|v| v.clamp(0.0, f64::from(u32::MAX)) as u32) {
            Some(v) if v != *value => {
                *value = v;
                true
            }
            _ => false,
        }
    }

    fn input_text_ex(&mut self, label: &str, hint: Option<&str>, buf: &mut String, flags: InputTextFlags) -> bool {
        let pos = self.cursor_pos();
        let size = self.calculate_item_size(self.frame_height());
        let id = self.ids.id_of(label);
        let text = visible_label(label);
        let frame_w = if text.is_empty() { size.x } else { (size.x * 2.0 / 3.0).floor() };
        let bb = Rect::from_origin_size(pos, Vec2::new(frame_w, size.y));
        let pad = self.style.frame_padding;

        let hovered = self.is_item_hoverable(bb, id);
        if hovered {
            self.next_hovered_id = Some(id);
            self.input.set_cursor(CursorShape::TextInput);
        }
        self.prev_item.hovered = hovered;
        self.prev_item.active = false;

        let clicked = self.input.is_mouse_clicked(MouseButton::Left);
        let mut editing = self.active_id == Some(id) && self.text_input.as_ref().is_some_and(|s| s.id == id);
        if hovered && clicked {
            if !editing {
                log::trace!("text field {label:?} took the keyboard");
                self.text_input = Some(TextEditState::new(id, buf, flags));
                self.set_active_id(Some(id));
                editing = true;
            }
            if !flags.contains(InputTextFlags::AUTO_SELECT_ALL) {
                let local_x = self.input.mouse_pos().x - (bb.origin.x + pad.x);
                self.place_caret(local_x, flags);
            }
        } else if editing && clicked {
            self.release_text_input(id);
            editing = false;
        }

        let mut changed = false;
        let mut validated = false;
        if editing {
            self.active_id_alive = true;
            self.prev_item.active = true;
            self.active_id_allow_overlap = !self.input.is_mouse_down(MouseButton::Left);
            if let Some(state) = self.text_input.as_mut() {
                if state.read_only() {
                    state.set_text(buf);
                }
                let edit = state.handle_input(&self.input);
                if edit.changed {
                    *buf = state.text();
                    changed = true;
                }
                match edit.finish {
                    Some(Finish::Validated) => {
                        validated = true;
                        self.release_text_input(id);
                        editing = false;
                    }
                    Some(Finish::Cancelled) => {
                        self.release_text_input(id);
                        editing = false;
                    }
                    None => {}
                }
            }
        }

        if self.should_render(pos, size) {
            self.draw_text_field(bb, hovered, editing, hint, buf, flags);
            if !text.is_empty() {
                let label_pos = Vec2::new(bb.max().x + self.style.inner_spacing.x, pos.y + pad.y);
                self.painter().text(label_pos, text, ThemeColor::Text);
            }
        }

        self.advance_cursor(size.x, size.y);
        if flags.contains(InputTextFlags::ENTER_RETURNS_TRUE) { validated } else { changed }
    }

    /// Drops the edit session of `id` and frees the active id at once, so a
    /// widget evaluated later this frame can take the press.
    fn release_text_input(&mut self, id: WidgetId) {
        self.text_input = None;
        self.active_id_allow_overlap = false;
        if self.active_id == Some(id) {
            self.active_id = None;
        }
        if self.next_active_id == Some(id) {
            self.next_active_id = None;
        }
    }

    /// Moves the caret to the character boundary nearest `local_x` pixels
    /// into the text.
    fn place_caret(&mut self, local_x: f32, flags: InputTextFlags) {
        let Some(state) = self.text_input.as_ref() else {
            return;
        };
        let target = local_x + state.scroll_x;
        let shown = display_text(&state.text, flags);
        let mut best = (0, f32::MAX);
        for (i, (byte, _)) in shown.char_indices().chain(std::iter::once((shown.len(), ' '))).enumerate() {
            let dist = (self.measure_raw(&shown[..byte]) - target).abs();
            if dist < best.1 {
                best = (i, dist);
            }
        }
        if let Some(state) = self.text_input.as_mut() {
            state.move_to(best.0, false);
        }
    }

    fn draw_text_field(
        &mut self,
        bb: Rect,
        hovered: bool,
        editing: bool,
        hint: Option<&str>,
        buf: &str,
        flags: InputTextFlags,
    ) {
        let pad = self.style.frame_padding;
        let inner_w = (bb.size.x - 2.0 * pad.x).max(0.0);
        let origin = bb.origin + pad;

        let (shown, caret, selection) = match self.text_input.as_ref().filter(|_| editing) {
            Some(state) => {
                let shown = display_text(&state.text, flags);
                let offset = |n: usize| byte_offset(&shown, n);
                let caret = self.measure_raw(&shown[..offset(state.cursor)]);
                let selection = state.selection().map(|(a, b)| {
                    (self.measure_raw(&shown[..offset(a)]), self.measure_raw(&shown[..offset(b)]))
                });
                (shown, Some(caret), selection)
            }
            None => (display_text(&buf.chars().collect::<Vec<_>>(), flags), None, None),
        };

        let mut scroll_x = 0.0;
        if let (Some(caret), Some(state)) = (caret, self.text_input.as_mut().filter(|_| editing)) {
            if caret - state.scroll_x > inner_w {
                state.scroll_x = caret - inner_w;
            } else if caret < state.scroll_x {
                state.scroll_x = caret;
            }
            scroll_x = state.scroll_x;
        }

        let state = ButtonState { hovered, held: hovered && self.input.is_mouse_down(MouseButton::Left), pressed: false };
        let line_h = self.style.font_size;
        let mut painter = self.painter();
        painter.fill_rect(bb, state_slot(state, editing, FRAME_SLOTS));
        if let Some((x0, x1)) = selection {
            let sel = Rect::new(origin.x + x0 - scroll_x, origin.y, x1 - x0, line_h).clip_to(bb);
            painter.fill_rect(sel, ThemeColor::TextSelectedBg);
        }
        let text_pos = Vec2::new(origin.x - scroll_x, origin.y);
        match hint {
            Some(hint) if shown.is_empty() => painter.clipped_text(origin, bb, hint, ThemeColor::TextDisabled),
            _ => painter.clipped_text(text_pos, bb, &shown, ThemeColor::Text),
        }
        if let Some(caret) = caret {
            let x = (origin.x + caret - scroll_x).floor();
            painter.line(Vec2::new(x, origin.y), Vec2::new(x, origin.y + line_h), ThemeColor::Text, 1.0);
        }
    }

    /// Width of `s` in the style font, `##` included.
    fn measure_raw(&self, s: &str) -> f32 {
        self.text.text_size(self.style.font, self.style.font_size, s, None).x
    }
}

fn display_text(text: &[char], flags: InputTextFlags) -> String {
    if flags.contains(InputTextFlags::PASSWORD) {
        "*".repeat(text.len())
    } else {
        text.iter().collect()
    }
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

/// Integer fields accept a fractional entry and truncate it.
fn parse_integer(text: &str) -> Option<f64> {
    let text = text.trim();
    text.parse::<i64>().map(|v| v as f64).ok().or_else(|| text.parse::<f64>().ok().map(f64::trunc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_engine::input::InputEvent;

    fn state(text: &str) -> TextEditState {
        TextEditState::new(WidgetId::from_raw(1), text, InputTextFlags::empty())
    }

    fn feed(state: &mut TextEditState, events: &[InputEvent]) -> EditResult {
        let mut input = Input::new();
        for ev in events {
            input.apply_event(ev.clone());
        }
        input.new_frame(0.016);
        state.handle_input(&input)
    }

    // ── character filter ──────────────────────────────────────────────────

    #[test]
    fn control_and_private_use_chars_are_dropped() {
        let none = InputTextFlags::empty();
        assert_eq!(filter_char('\n', none), None);
        assert_eq!(filter_char('\u{7f}', none), None);
        assert_eq!(filter_char('\u{E000}', none), None);
        assert_eq!(filter_char('\t', none), None);
        assert_eq!(filter_char('\t', InputTextFlags::ALLOW_TAB_INPUT), Some('\t'));
        assert_eq!(filter_char('é', none), Some('é'));
    }

    #[test]
    fn decimal_scientific_and_hex_filters() {
        let dec = InputTextFlags::CHARS_DECIMAL;
        assert_eq!(filter_char('7', dec), Some('7'));
        assert_eq!(filter_char('-', dec), Some('-'));
        assert_eq!(filter_char('e', dec), None);
        assert_eq!(filter_char('e', InputTextFlags::CHARS_SCIENTIFIC), Some('e'));
        assert_eq!(filter_char('x', InputTextFlags::CHARS_SCIENTIFIC), None);
        assert_eq!(filter_char('F', InputTextFlags::CHARS_HEXADECIMAL), Some('F'));
        assert_eq!(filter_char('g', InputTextFlags::CHARS_HEXADECIMAL), None);
    }

    #[test]
    fn uppercase_and_no_blank() {
        assert_eq!(filter_char('q', InputTextFlags::CHARS_UPPERCASE), Some('Q'));
        assert_eq!(filter_char(' ', InputTextFlags::CHARS_NO_BLANK), None);
        assert_eq!(filter_char('a', InputTextFlags::CHARS_NO_BLANK), Some('a'));
    }

    // ── editing ───────────────────────────────────────────────────────────

    #[test]
    fn typing_inserts_at_the_caret() {
        let mut s = state("ac");
        feed(&mut s, &[InputEvent::key_press(Key::ArrowLeft)]);
        let r = feed(&mut s, &[InputEvent::text("b")]);
        assert!(r.changed);
        assert_eq!(s.text(), "abc");
    }

    #[test]
    fn backspace_and_delete() {
        let mut s = state("abc");
        feed(&mut s, &[InputEvent::key_press(Key::Backspace)]);
        assert_eq!(s.text(), "ab");
        feed(&mut s, &[InputEvent::key_press(Key::Home)]);
        feed(&mut s, &[InputEvent::key_press(Key::Delete)]);
        assert_eq!(s.text(), "b");
        let r = feed(&mut s, &[InputEvent::key_press(Key::End)]);
        assert!(!r.changed);
    }

    #[test]
    fn auto_select_all_replaces_on_first_char() {
        let mut s = TextEditState::new(WidgetId::from_raw(1), "old", InputTextFlags::AUTO_SELECT_ALL);
        assert_eq!(s.selection(), Some((0, 3)));
        feed(&mut s, &[InputEvent::text("n")]);
        assert_eq!(s.text(), "n");
        assert_eq!(s.selection(), None);
    }

    #[test]
    fn shift_arrows_extend_the_selection() {
        let mut s = state("hello");
        let shift = tessel_engine::input::Modifiers { shift: true, ..Default::default() };
        let left = InputEvent::Key {
            key: Key::ArrowLeft,
            state: tessel_engine::input::KeyState::Pressed,
            modifiers: shift,
            repeat: false,
        };
        feed(&mut s, &[left.clone()]);
        feed(&mut s, &[InputEvent::key_release(Key::ArrowLeft), left]);
        assert_eq!(s.selection(), Some((3, 5)));
        feed(&mut s, &[InputEvent::key_press(Key::Backspace)]);
        assert_eq!(s.text(), "hel");
    }

    #[test]
    fn escape_restores_the_initial_text() {
        let mut s = state("keep");
        feed(&mut s, &[InputEvent::text("xyz")]);
        let r = feed(&mut s, &[InputEvent::key_press(Key::Escape)]);
        assert_eq!(r.finish, Some(Finish::Cancelled));
        assert!(r.changed);
        assert_eq!(s.text(), "keep");
    }

    #[test]
    fn escape_clears_all_first_then_releases() {
        let mut s = TextEditState::new(WidgetId::from_raw(1), "abc", InputTextFlags::ESCAPE_CLEARS_ALL);
        let r = feed(&mut s, &[InputEvent::key_press(Key::Escape)]);
        assert_eq!(r.finish, None);
        assert_eq!(s.text(), "");
        let r = feed(&mut s, &[InputEvent::key_release(Key::Escape), InputEvent::key_press(Key::Escape)]);
        assert_eq!(r.finish, Some(Finish::Cancelled));
    }

    #[test]
    fn read_only_ignores_edits_but_moves_the_caret() {
        let mut s = TextEditState::new(WidgetId::from_raw(1), "ro", InputTextFlags::READ_ONLY);
        let r = feed(&mut s, &[InputEvent::text("x"), InputEvent::key_press(Key::Backspace)]);
        assert!(!r.changed);
        feed(&mut s, &[InputEvent::key_press(Key::Home)]);
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn enter_validates() {
        let mut s = state("");
        let r = feed(&mut s, &[InputEvent::text("1"), InputEvent::key_press(Key::Enter)]);
        assert_eq!(r.finish, Some(Finish::Validated));
        assert_eq!(s.text(), "1");
    }

    #[test]
    fn integer_parse_truncates_fractions() {
        assert_eq!(parse_integer(" 42 "), Some(42.0));
        assert_eq!(parse_integer("-3.9"), Some(-3.0));
        assert_eq!(parse_integer("-"), None);
    }
}
