/// Keyboard key identifier.
///
/// Text fields read editing keys from here; printable input arrives
/// separately as [`TextEvent`]s. For unsupported keys, use `Key::Unknown(u32)` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,
    Delete,
    Home,
    End,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    /// Letter or digit key, carried as its lowercase character.
    Char(char),

    /// Platform-dependent key not yet represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Mouse wheel delta.
///
/// `Line` corresponds to "scroll lines" style input; `Pixel` is high precision.
/// Positive `y` scrolls toward the top of the content.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

/// Pointer move event in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button event.
///
/// Coordinates are included so a press is attributed to where it happened,
/// even without a preceding move event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

/// Committed text (not IME composition).
#[derive(Debug, Clone, PartialEq)]
pub struct TextEvent {
    pub text: String,
}

/// Mouse cursor shape the UI asks the host to display.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum CursorShape {
    #[default]
    Arrow,
    Hand,
    TextInput,
    ResizeAll,
    /// Vertical resize (north/south border).
    ResizeNs,
    /// Horizontal resize (east/west border).
    ResizeEw,
    /// Diagonal resize (corner grip).
    ResizeNwse,
}

/// Platform-agnostic input events.
///
/// The host translates window system events into these.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    MouseWheel {
        delta: MouseWheelDelta,
        modifiers: Modifiers,
    },

    Text(TextEvent),

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),

    /// Host surface resized, in logical pixels.
    Resized { width: f32, height: f32 },
}

impl InputEvent {
    /// Shorthand for a left-button press at `(x, y)`.
    pub fn left_press(x: f32, y: f32) -> Self {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    /// Shorthand for a left-button release at `(x, y)`.
    pub fn left_release(x: f32, y: f32) -> Self {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Released,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    pub fn pointer_moved(x: f32, y: f32) -> Self {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    /// Key press with no modifiers held.
    pub fn key_press(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Pressed, modifiers: Modifiers::default(), repeat: false }
    }

    pub fn key_release(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Released, modifiers: Modifiers::default(), repeat: false }
    }

    /// Auto-repeat of a key that is already held.
    pub fn key_repeat(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Pressed, modifiers: Modifiers::default(), repeat: true }
    }

    pub fn text(text: impl Into<String>) -> Self {
        InputEvent::Text(TextEvent { text: text.into() })
    }

    pub fn wheel_lines(y: f32) -> Self {
        InputEvent::MouseWheel {
            delta: MouseWheelDelta::Line { x: 0.0, y },
            modifiers: Modifiers::default(),
        }
    }
}
