use x86_64::instructions::port::Port;

/// `iobase` of the `isa-debug-exit` device in the bootimage run command.
const ISA_DEBUG_EXIT: u16 = 0xf4;

/// QEMU exits with status `(code << 1) | 1`, so `Success` reports 33.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum QemuExitCode {
  Success = 0x10,
  Failed = 0x11,
}

pub fn exit_qemu(code: QemuExitCode) {
  let mut port = Port::<u32>::new(ISA_DEBUG_EXIT);
  unsafe { port.write(code as u32) }
}
