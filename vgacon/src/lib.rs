//! Text-mode console for the VGA-compatible 80x25 frame buffer.
//!
//! The crate is `no_std`; the host standard library is only linked for its own tests.

#![cfg_attr(not(test), no_std)]
#![warn(unused_import_braces,unused_qualifications)]
#![deny(keyword_idents)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate static_assertions;

pub mod port;
pub mod vga_buffer;

pub use crate::port::PortIo;
#[cfg(target_arch = "x86_64")]
pub use crate::port::X86PortIo;
pub use crate::vga_buffer::buffer::{Buffer, ScreenChar, BUFFER_HEIGHT, BUFFER_WIDTH};
pub use crate::vga_buffer::helper::{Color, ColorCode};
pub use crate::vga_buffer::Writer;
