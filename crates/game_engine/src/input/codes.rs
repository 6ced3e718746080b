//! Key and mouse button codes (GLFW numbering)

use std::fmt;

/// Keyboard key code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub i32);

impl KeyCode {
    /// Unknown key
    pub const UNKNOWN: Self = Self(-1);
    /// Space key
    pub const SPACE: Self = Self(32);
    /// Apostrophe key
    pub const APOSTROPHE: Self = Self(39);
    /// Comma key
    pub const COMMA: Self = Self(44);
    /// Minus key
    pub const MINUS: Self = Self(45);
    /// Period key
    pub const PERIOD: Self = Self(46);
    /// Slash key
    pub const SLASH: Self = Self(47);
    /// 0 key
    pub const D0: Self = Self(48);
    /// 1 key
    pub const D1: Self = Self(49);
    /// 2 key
    pub const D2: Self = Self(50);
    /// 3 key
    pub const D3: Self = Self(51);
    /// 4 key
    pub const D4: Self = Self(52);
    /// 5 key
    pub const D5: Self = Self(53);
    /// 6 key
    pub const D6: Self = Self(54);
    /// 7 key
    pub const D7: Self = Self(55);
    /// 8 key
    pub const D8: Self = Self(56);
    /// 9 key
    pub const D9: Self = Self(57);
    /// Semicolon key
    pub const SEMICOLON: Self = Self(59);
    /// Equal key
    pub const EQUAL: Self = Self(61);
    /// A key
    pub const A: Self = Self(65);
    /// B key
    pub const B: Self = Self(66);
    /// C key
    pub const C: Self = Self(67);
    /// D key
    pub const D: Self = Self(68);
    /// E key
    pub const E: Self = Self(69);
    /// F key
    pub const F: Self = Self(70);
    /// G key
    pub const G: Self = Self(71);
    /// H key
    pub const H: Self = Self(72);
    /// I key
    pub const I: Self = Self(73);
    /// J key
    pub const J: Self = Self(74);
    /// K key
    pub const K: Self = Self(75);
    /// L key
    pub const L: Self = Self(76);
    /// M key
    pub const M: Self = Self(77);
    /// N key
    pub const N: Self = Self(78);
    /// O key
    pub const O: Self = Self(79);
    /// P key
    pub const P: Self = Self(80);
    /// Q key
    pub const Q: Self = Self(81);
    /// R key
    pub const R: Self = Self(82);
    /// S key
    pub const S: Self = Self(83);
    /// T key
    pub const T: Self = Self(84);
    /// U key
    pub const U: Self = Self(85);
    /// V key
    pub const V: Self = Self(86);
    /// W key
    pub const W: Self = Self(87);
    /// X key
    pub const X: Self = Self(88);
    /// Y key
    pub const Y: Self = Self(89);
    /// Z key
    pub const Z: Self = Self(90);
    /// Escape key
    pub const ESCAPE: Self = Self(256);
    /// Enter key
    pub const ENTER: Self = Self(257);
    /// Tab key
    pub const TAB: Self = Self(258);
    /// Backspace key
    pub const BACKSPACE: Self = Self(259);
    /// Insert key
    pub const INSERT: Self = Self(260);
    /// Delete key
    pub const DELETE: Self = Self(261);
    /// Right arrow
    pub const RIGHT: Self = Self(262);
    /// Left arrow
    pub const LEFT: Self = Self(263);
    /// Down arrow
    pub const DOWN: Self = Self(264);
    /// Up arrow
    pub const UP: Self = Self(265);
    /// Page up key
    pub const PAGE_UP: Self = Self(266);
    /// Page down key
    pub const PAGE_DOWN: Self = Self(267);
    /// Home key
    pub const HOME: Self = Self(268);
    /// End key
    pub const END: Self = Self(269);
    /// F1 key
    pub const F1: Self = Self(290);
    /// F12 key
    pub const F12: Self = Self(301);
    /// Left shift
    pub const LEFT_SHIFT: Self = Self(340);
    /// Left control
    pub const LEFT_CONTROL: Self = Self(341);
    /// Left alt
    pub const LEFT_ALT: Self = Self(342);
    /// Left super
    pub const LEFT_SUPER: Self = Self(343);
    /// Right shift
    pub const RIGHT_SHIFT: Self = Self(344);
    /// Right control
    pub const RIGHT_CONTROL: Self = Self(345);
    /// Right alt
    pub const RIGHT_ALT: Self = Self(346);
    /// Right super
    pub const RIGHT_SUPER: Self = Self(347);

    /// Raw GLFW key value
    pub const fn code(self) -> i32 {
        self.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mouse button code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MouseButton(pub i32);

impl MouseButton {
    /// Left mouse button
    pub const LEFT: Self = Self(0);
    /// Right mouse button
    pub const RIGHT: Self = Self(1);
    /// Middle mouse button
    pub const MIDDLE: Self = Self(2);
    /// Extra button 4
    pub const BUTTON_4: Self = Self(3);
    /// Extra button 5
    pub const BUTTON_5: Self = Self(4);

    /// Raw GLFW button value
    pub const fn code(self) -> i32 {
        self.0
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
