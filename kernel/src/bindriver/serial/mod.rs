use log::{Level, LevelFilter, Metadata, Record};
use spin::Mutex;
use uart_16550::SerialPort;

pub type SafeSerialPort = Mutex<SerialPort>;

/// COM1
const SERIAL1_BASE: u16 = 0x3f8;

lazy_static! {
    pub static ref SERIAL1: SafeSerialPort = {
        let mut serial_port = unsafe { SerialPort::new(SERIAL1_BASE) };
        serial_port.init();
        Mutex::new(serial_port)
    };
}

pub fn init() {
    log::set_logger(&SERIAL1).expect("could not setup logging");
    log::set_max_level(LevelFilter::Trace);
}

impl log::Log for SERIAL1 {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
            && (cfg!(feature = "console-trace") || !metadata.target().starts_with("vgacon"))
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            use core::fmt::Write;
            // a panic may have left the port locked mid-record
            unsafe { self.force_unlock() };
            if let Some(mut fmt) = self.try_lock() {
                let _ = fmt.write_fmt(format_args!(
                    "{:6} {:>30}~{:04} - {}\n",
                    record.level(),
                    record
                        .module_path()
                        .unwrap_or("?")
                        .trim_start_matches("vgaboot::"),
                    record.line().unwrap_or(0),
                    record.args(),
                ));
            }
        }
    }

    fn flush(&self) {}
}
