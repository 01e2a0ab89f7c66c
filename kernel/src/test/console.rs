//! Runs against the emulated VGA adapter. Each test builds its own console on the text buffer
//! and drops it before the next one starts.

use vgacon::{Color, PortIo, Writer, X86PortIo, BUFFER_HEIGHT, BUFFER_WIDTH};

fn console() -> Writer<'static, X86PortIo> {
  unsafe { Writer::hardware() }
}

fn cell(console: &Writer<'static, X86PortIo>, x: usize, y: usize) -> Option<u16> {
  console.buffer().get(x, y).map(|c| c.as_u16())
}

#[test_case]
fn prints_into_text_buffer() {
  let mut console = console();
  console.print("Hi\n");
  assert_eq!(cell(&console, 0, 0), Some(0x0748));
  assert_eq!(cell(&console, 1, 0), Some(0x0769));
  assert_eq!(console.position(), (0, 1));
  assert_eq!(console.get_cursor_position(), (0, 1));
}

#[test_case]
fn greeting_lands_on_screen() {
  let mut console = console();
  crate::greet(&mut console);
  assert_eq!(cell(&console, 0, 0), Some(0x0776));
  assert_eq!(cell(&console, 12, 1), Some(0x0a5b), "status in light green");
  assert_eq!(console.position(), (0, 3));
  assert_eq!(console.color(), (Color::LightGray, Color::Black));
}

#[test_case]
fn hardware_cursor_round_trips() {
  let mut console = console();
  assert!(console.set_cursor_position(17, 9));
  assert_eq!(console.get_cursor_position(), (17, 9));
  assert!(!console.set_cursor_position(BUFFER_WIDTH, 0));
  assert_eq!(console.get_cursor_position(), (17, 9));
}

#[test_case]
fn cursor_shape_is_programmed() {
  let mut console = console();
  console.disable_cursor();
  console.enable_cursor(14, 15);
  let mut port = unsafe { X86PortIo::new() };
  port.out_byte(0x3d4, 0x0a);
  assert_eq!(port.in_byte(0x3d5) & 0x3f, 14);
  port.out_byte(0x3d4, 0x0b);
  assert_eq!(port.in_byte(0x3d5) & 0x1f, 15);
}

#[test_case]
fn scrolls_on_overflow() {
  let mut console = console();
  console.print("top\n");
  for _ in 0..BUFFER_HEIGHT - 1 {
    console.print("filler\n");
  }
  assert_eq!(console.position(), (0, BUFFER_HEIGHT - 1));
  assert_eq!(cell(&console, 0, 0), Some(0x0766), "top line scrolled off");
  assert_eq!(cell(&console, 0, BUFFER_HEIGHT - 1), Some(0x0720));
}
