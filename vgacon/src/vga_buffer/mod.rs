pub mod buffer;
pub mod cursor;
pub mod helper;

use self::buffer::{Buffer, ScreenChar, BUFFER_HEIGHT, BUFFER_WIDTH};
use self::cursor::CursorController;
use self::helper::{Color, ColorCode};
use crate::port::PortIo;
use core::fmt;

pub const DEFAULT_FOREGROUND: Color = Color::LightGray;
pub const DEFAULT_BACKGROUND: Color = Color::Black;

/// Shown in place of non-ASCII characters, which have no single-byte glyph.
const SUBSTITUTE_GLYPH: u8 = 0xfe;

/// The console: a logical cursor and colour state rendered into a frame buffer.
///
/// Text is written at the logical cursor, wraps at the right edge and scrolls the screen up
/// once the bottom row overflows. After each write the hardware cursor is moved to where the
/// next character will go.
pub struct Writer<'a, P: PortIo> {
    column_position: usize,
    row_position: usize,
    foreground: Color,
    background: Color,
    buffer: &'a mut Buffer,
    cursor: CursorController<P>,
}

#[cfg(target_arch = "x86_64")]
impl Writer<'static, crate::port::X86PortIo> {
    /// Console on the VGA text buffer at `0xb8000`, driving the real CRT controller.
    ///
    /// # Safety
    ///
    /// The text buffer must be identity mapped and the caller must be allowed to perform port
    /// I/O. At most one console may exist at a time.
    pub unsafe fn hardware() -> Self {
        Writer::new(
            Buffer::from_addr(buffer::BUFFER_ADDR),
            crate::port::X86PortIo::new(),
        )
    }
}

impl<'a, P: PortIo> Writer<'a, P> {
    /// Takes over `buffer`: hides the hardware cursor and blanks the screen.
    pub fn new(buffer: &'a mut Buffer, port: P) -> Writer<'a, P> {
        let mut writer = Writer {
            column_position: 0,
            row_position: 0,
            foreground: DEFAULT_FOREGROUND,
            background: DEFAULT_BACKGROUND,
            buffer,
            cursor: CursorController::new(port),
        };
        writer.cursor.disable();
        let blank = writer.blank();
        writer.buffer.fill(blank);
        debug!("console ready, {}x{} cells", BUFFER_WIDTH, BUFFER_HEIGHT);
        writer
    }

    /// Writes `text` at the logical cursor. ASCII goes to the screen as is; any other character
    /// is shown as one block glyph.
    pub fn print(&mut self, text: &str) {
        for c in text.chars() {
            if c.is_ascii() {
                self.write_byte(c as u8);
            } else {
                self.write_byte(SUBSTITUTE_GLYPH);
            }
        }
        self.sync_cursor();
    }

    /// Writes raw code page 437 glyphs at the logical cursor; only `\n` is interpreted.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
        self.sync_cursor();
    }

    /// Colours used by every following write. Cells already on screen keep theirs.
    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.foreground = foreground;
        self.background = background;
    }

    pub fn color(&self) -> (Color, Color) {
        (self.foreground, self.background)
    }

    pub fn color_code(&self) -> ColorCode {
        ColorCode::new(self.foreground, self.background)
    }

    /// Writes one glyph at `(x, y)` in the current colours without moving the logical cursor.
    pub fn write_char(&mut self, byte: u8, x: usize, y: usize) -> bool {
        let written = self.buffer.put(ScreenChar::new(byte, self.color_code()), x, y);
        if !written {
            trace!("rejected write at ({}, {})", x, y);
        }
        written
    }

    /// Logical cursor as `(column, row)`.
    pub fn position(&self) -> (usize, usize) {
        (self.column_position, self.row_position)
    }

    pub fn enable_cursor(&mut self, start: u8, end: u8) {
        self.cursor.enable(start, end);
    }

    pub fn disable_cursor(&mut self) {
        self.cursor.disable();
    }

    /// Hardware cursor as `(column, row)`, read back from the CRT controller.
    pub fn get_cursor_position(&mut self) -> (usize, usize) {
        self.cursor.position()
    }

    /// Moves the hardware cursor and the logical cursor with it, so the next `print` continues
    /// where the cursor is shown.
    pub fn set_cursor_position(&mut self, column: usize, row: usize) -> bool {
        if !self.cursor.set_position(column, row) {
            trace!("rejected cursor position ({}, {})", column, row);
            return false;
        }
        self.column_position = column;
        self.row_position = row;
        true
    }

    /// Blanks the screen in the current colours and homes both cursors.
    pub fn clear(&mut self) {
        let blank = self.blank();
        self.buffer.fill(blank);
        self.column_position = 0;
        self.row_position = 0;
        self.sync_cursor();
        debug!("console cleared");
    }

    pub fn buffer(&self) -> &Buffer {
        &*self.buffer
    }

    pub fn cursor(&self) -> &CursorController<P> {
        &self.cursor
    }

    fn write_byte(&mut self, byte: u8) {
        match byte {
            b'\n' => self.new_line(),
            byte => {
                let character = ScreenChar::new(byte, self.color_code());
                self.buffer
                    .put(character, self.column_position, self.row_position);
                self.column_position += 1;
            }
        }

        if self.column_position >= BUFFER_WIDTH {
            self.new_line();
        }

        if self.row_position >= BUFFER_HEIGHT {
            trace!("scrolling");
            let blank = self.blank();
            self.buffer.scroll_up(blank);
            self.row_position = BUFFER_HEIGHT - 1;
        }
    }

    fn new_line(&mut self) {
        self.column_position = 0;
        self.row_position += 1;
    }

    fn blank(&self) -> ScreenChar {
        ScreenChar::blank(self.color_code())
    }

    fn sync_cursor(&mut self) {
        let in_range = self
            .cursor
            .set_position(self.column_position, self.row_position);
        debug_assert!(in_range, "logical cursor left the screen");
    }
}

impl<'a, P: PortIo> fmt::Write for Writer<'a, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s);
        Ok(())
    }
}
