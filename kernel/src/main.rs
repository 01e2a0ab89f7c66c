#![cfg_attr(test, feature(custom_test_frameworks))]
#![cfg_attr(test, test_runner(crate::test::test_runner))]
#![cfg_attr(test, reexport_test_harness_main = "test_main")]

#![warn(unused_import_braces)]
#![deny(keyword_idents,unused_extern_crates)]

#![no_std]
#![no_main]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[macro_use]
mod common;
mod bindriver;
mod version;
#[cfg(test)]
mod test;

use vgacon::{Color, PortIo, Writer};

bootloader::entry_point!(kernel_main);

fn kernel_main(_boot_info: &'static bootloader::BootInfo) -> ! {
  // serial first, everything after this can log
  bindriver::init();
  info!("vgaboot v{}", version::VERSION);
  #[cfg(test)]
  {
    info!("Running test harness");
    test_main();
    hlt_cpu!();
  }
  #[cfg(not(test))]
  {
    // the one console for the lifetime of the system
    let mut console = unsafe { Writer::hardware() };
    greet(&mut console);
    info!("console at {:?}, halting", console.position());
    hlt_cpu!();
  }
}

fn greet<P: PortIo>(console: &mut Writer<'_, P>) {
  console.print("vgaboot v");
  console.print(version::VERSION);
  console.print("\n");
  console.print("VGA console ");
  console.set_color(Color::LightGreen, Color::Black);
  console.print("[ OK ]\n");
  console.set_color(Color::LightGray, Color::Black);
  console.enable_cursor(14, 15);
  console.print("Hello, World!\n");
}

use core::panic::PanicInfo;

/// This function is called on panic.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
  error!("Panic occured: {}", info);
  #[cfg(test)]
  {
    use crate::bindriver::qemu::*;
    exit_qemu(QemuExitCode::Failed);
  }
  hlt_cpu!();
}
