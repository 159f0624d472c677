#![no_std]
#![no_main]

mod entry;

use core::fmt::Write;
use usys::{terminate, Sbi, Writer};

#[no_mangle]
extern "C" fn rust_main() -> ! {
    #[cfg(feature = "verbose")]
    usys::logging::set_log_level(usys::LogLevel::Debug);

    hello_lib::run(&mut Sbi)
}

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    let mut sbi = Sbi;
    let mut w = Writer(&mut sbi);
    let _ = writeln!(w, "panic: {}", info);
    terminate(&mut sbi)
}
