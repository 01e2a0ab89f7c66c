/// The sixteen text-mode colors, numbered as the attribute controller expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    LightBrown = 14,
    White = 15,
}

impl Color {
    /// Decodes the low four bits of `nibble`.
    pub fn from_nibble(nibble: u8) -> Color {
        match nibble & 0x0f {
            0 => Color::Black,
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Cyan,
            4 => Color::Red,
            5 => Color::Magenta,
            6 => Color::Brown,
            7 => Color::LightGray,
            8 => Color::DarkGray,
            9 => Color::LightBlue,
            10 => Color::LightGreen,
            11 => Color::LightCyan,
            12 => Color::LightRed,
            13 => Color::LightMagenta,
            14 => Color::LightBrown,
            _ => Color::White,
        }
    }
}

/// Attribute byte of a cell: foreground in the low nibble, background in the high nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((foreground as u8) | ((background as u8) << 4))
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    pub fn foreground(self) -> Color {
        Color::from_nibble(self.0)
    }

    pub fn background(self) -> Color {
        Color::from_nibble(self.0 >> 4)
    }
}

impl Default for ColorCode {
    fn default() -> ColorCode {
        ColorCode::new(Color::LightGray, Color::Black)
    }
}
