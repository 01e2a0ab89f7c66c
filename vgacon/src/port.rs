//! Port-mapped I/O.
//!
//! Everything that touches device registers goes through [`PortIo`], so the console logic can
//! run against an in-memory register file as easily as against the real CRT controller.

/// Single-byte access to 16-bit I/O ports.
///
/// Accesses are unchecked and unacknowledged; a missing device is indistinguishable from one
/// that ignores the write.
pub trait PortIo {
    fn out_byte(&mut self, port: u16, value: u8);
    fn in_byte(&mut self, port: u16) -> u8;
}

#[cfg(target_arch = "x86_64")]
pub use self::native::X86PortIo;

#[cfg(target_arch = "x86_64")]
mod native {
    use super::PortIo;
    use x86_64::instructions::port::Port;

    /// Port I/O through the `in`/`out` instructions.
    #[derive(Debug)]
    pub struct X86PortIo {
        _private: (),
    }

    impl X86PortIo {
        /// # Safety
        ///
        /// Grants unchecked access to every I/O port. The caller must run at an I/O privilege
        /// level that permits `in`/`out` and must own the devices it talks to.
        pub const unsafe fn new() -> X86PortIo {
            X86PortIo { _private: () }
        }
    }

    impl PortIo for X86PortIo {
        #[inline]
        fn out_byte(&mut self, port: u16, value: u8) {
            let mut port = Port::<u8>::new(port);
            unsafe { port.write(value) }
        }

        #[inline]
        fn in_byte(&mut self, port: u16) -> u8 {
            let mut port = Port::<u8>::new(port);
            unsafe { port.read() }
        }
    }
}
