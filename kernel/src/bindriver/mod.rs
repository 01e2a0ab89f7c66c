#[cfg(test)]
pub mod qemu;
pub mod serial;

pub fn init() {
  crate::bindriver::serial::init();
  debug!("serial logger online");
}
