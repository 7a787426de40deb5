//! Palette shared by game state (message colours) and every renderer.

/// 24-bit colour stored alongside messages and entity glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Scales every channel by `percent` / 100, saturating at full intensity.
    pub fn scaled(self, percent: u16) -> Self {
        let scale = |c: u8| ((c as u16 * percent) / 100).min(u8::MAX as u16) as u8;
        Self(scale(self.0), scale(self.1), scale(self.2))
    }
}

pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);

pub const PLAYER_ATK: Rgb = Rgb(0xE0, 0xE0, 0xE0);

pub const INVALID: Rgb = Rgb(0xFF, 0xFF, 0x00);
pub const IMPOSSIBLE: Rgb = Rgb(0x80, 0x80, 0x80);
pub const ERROR: Rgb = Rgb(0xFF, 0x40, 0x40);

pub const WELCOME_TEXT: Rgb = Rgb(0x20, 0xA0, 0xFF);
pub const HEALTH_RECOVERED: Rgb = Rgb(0x00, 0xFF, 0x00);

pub const BAR_TEXT: Rgb = WHITE;
pub const BAR_FILLED: Rgb = Rgb(0x00, 0x60, 0x00);
pub const BAR_EMPTY: Rgb = Rgb(0x40, 0x10, 0x10);

pub const MENU_TITLE: Rgb = Rgb(0xFF, 0xFF, 0x3F);
pub const MENU_TEXT: Rgb = WHITE;

pub const FLOOR: Rgb = Rgb(0xC8, 0xB4, 0x32);
pub const WALL: Rgb = Rgb(0x82, 0x6E, 0x32);
