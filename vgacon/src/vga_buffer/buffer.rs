use super::helper::ColorCode;
use volatile::Volatile;

pub const BUFFER_HEIGHT: usize = 25;
pub const BUFFER_WIDTH: usize = 80;

/// Physical address of the colour text-mode frame buffer.
pub const BUFFER_ADDR: usize = 0xb8000;

/// One display cell. `repr(C)` puts the glyph in the low byte and the attribute in the high
/// byte of the little-endian 16-bit cell the display controller reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    pub ascii_character: u8,
    pub color_code: ColorCode,
}

impl ScreenChar {
    pub const fn new(ascii_character: u8, color_code: ColorCode) -> ScreenChar {
        ScreenChar { ascii_character, color_code }
    }

    pub const fn blank(color_code: ColorCode) -> ScreenChar {
        ScreenChar::new(b' ', color_code)
    }

    /// `(attribute << 8) | glyph`
    pub const fn as_u16(self) -> u16 {
        ((self.color_code.as_u8() as u16) << 8) | self.ascii_character as u16
    }
}

/// The memory-mapped cell grid. Only ever reached through a reference into mapped memory.
#[repr(transparent)]
pub struct Buffer {
    chars: [[Volatile<ScreenChar>; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

assert_eq_size!(ScreenChar, u16);
assert_eq_size!(Buffer, [u16; BUFFER_WIDTH * BUFFER_HEIGHT]);

impl Buffer {
    /// # Safety
    ///
    /// `addr` must point to `BUFFER_WIDTH * BUFFER_HEIGHT` writable, 2-byte cells that stay
    /// mapped for the rest of the program and are not referenced by anything else.
    pub unsafe fn from_addr(addr: usize) -> &'static mut Buffer {
        &mut *(addr as *mut Buffer)
    }

    /// Writes `character` at column `x`, row `y`. Out-of-range positions are rejected.
    pub fn put(&mut self, character: ScreenChar, x: usize, y: usize) -> bool {
        if x >= BUFFER_WIDTH || y >= BUFFER_HEIGHT {
            return false;
        }
        self.chars[y][x].write(character);
        true
    }

    pub fn get(&self, x: usize, y: usize) -> Option<ScreenChar> {
        if x >= BUFFER_WIDTH || y >= BUFFER_HEIGHT {
            return None;
        }
        Some(self.chars[y][x].read())
    }

    pub fn fill(&mut self, character: ScreenChar) {
        for row in self.chars.iter_mut() {
            for cell in row.iter_mut() {
                cell.write(character);
            }
        }
    }

    /// Drops the top row, moves every other row up by one and clears the bottom row to `blank`.
    pub fn scroll_up(&mut self, blank: ScreenChar) {
        for row in 1..BUFFER_HEIGHT {
            for col in 0..BUFFER_WIDTH {
                let character = self.chars[row][col].read();
                self.chars[row - 1][col].write(character);
            }
        }
        self.clear_row(BUFFER_HEIGHT - 1, blank);
    }

    fn clear_row(&mut self, row: usize, blank: ScreenChar) {
        for cell in self.chars[row].iter_mut() {
            cell.write(blank);
        }
    }
}
