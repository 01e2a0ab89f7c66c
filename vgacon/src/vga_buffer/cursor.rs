//! Hardware cursor, programmed through the CRT controller's index/data register pair.

use super::buffer::{BUFFER_HEIGHT, BUFFER_WIDTH};
use crate::port::PortIo;

pub const CRTC_INDEX: u16 = 0x3d4;
pub const CRTC_DATA: u16 = 0x3d5;

pub const CURSOR_START: u8 = 0x0a;
pub const CURSOR_END: u8 = 0x0b;
pub const CURSOR_LOCATION_HIGH: u8 = 0x0e;
pub const CURSOR_LOCATION_LOW: u8 = 0x0f;

bitflags! {
    /// Cursor start register bits outside the start scanline field.
    pub struct CursorStart: u8 {
        const DISABLE = 0x20;
        const RESERVED = 0xc0;
    }
}

bitflags! {
    /// Cursor end register bits outside the end scanline field.
    pub struct CursorEnd: u8 {
        const RESERVED = 0xe0;
    }
}

pub struct CursorController<P: PortIo> {
    port: P,
}

impl<P: PortIo> CursorController<P> {
    pub fn new(port: P) -> CursorController<P> {
        CursorController { port }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Sets the disable bit in the cursor start register.
    pub fn disable(&mut self) {
        self.write_register(CURSOR_START, CursorStart::DISABLE.bits());
    }

    /// Shows the cursor as scanlines `start..=end` of the character cell, keeping the
    /// reserved bits of both registers.
    pub fn enable(&mut self, start: u8, end: u8) {
        self.update_register(CURSOR_START, |current| {
            (current & CursorStart::RESERVED.bits()) | start
        });
        self.update_register(CURSOR_END, |current| {
            (current & CursorEnd::RESERVED.bits()) | end
        });
    }

    /// Moves the cursor to `(col, row)`. Positions off the grid are rejected without touching
    /// the registers.
    pub fn set_position(&mut self, col: usize, row: usize) -> bool {
        if col >= BUFFER_WIDTH || row >= BUFFER_HEIGHT {
            return false;
        }
        let offset = (row * BUFFER_WIDTH + col) as u16;
        self.write_register(CURSOR_LOCATION_HIGH, (offset >> 8) as u8);
        self.write_register(CURSOR_LOCATION_LOW, (offset & 0xff) as u8);
        true
    }

    /// Reads the cursor location back as `(col, row)`.
    pub fn position(&mut self) -> (usize, usize) {
        let high = self.read_register(CURSOR_LOCATION_HIGH) as usize;
        let low = self.read_register(CURSOR_LOCATION_LOW) as usize;
        let offset = (high << 8) | low;
        (offset % BUFFER_WIDTH, offset / BUFFER_WIDTH)
    }

    fn read_register(&mut self, index: u8) -> u8 {
        self.port.out_byte(CRTC_INDEX, index);
        self.port.in_byte(CRTC_DATA)
    }

    fn write_register(&mut self, index: u8, value: u8) {
        self.port.out_byte(CRTC_INDEX, index);
        self.port.out_byte(CRTC_DATA, value);
    }

    // index stays selected between the read and the write back
    fn update_register<F: FnOnce(u8) -> u8>(&mut self, index: u8, f: F) {
        let current = self.read_register(index);
        self.port.out_byte(CRTC_DATA, f(current));
    }
}
