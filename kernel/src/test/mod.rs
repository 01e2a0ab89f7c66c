mod console;

pub fn test_runner(tests: &[&dyn Fn()]) {
  info!("Running {} tests", tests.len());
  for test in tests {
    test();
  }
  info!("All tests passed");
  use crate::bindriver::qemu::*;
  exit_qemu(QemuExitCode::Success);
}
