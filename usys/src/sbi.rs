// usys/src/sbi.rs

use crate::Environment;
use uapi::nr;

/// Legacy SBI console and shutdown calls.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sbi;

impl Environment for Sbi {
    #[inline(always)]
    fn putchar(&mut self, c: u8) {
        unsafe {
            core::arch::asm!(
                "ecall",
                in("a7") nr::CONSOLE_PUTCHAR,
                inlateout("a0") c as usize => _,
                options(nostack),
            );
        }
    }

    // Not `noreturn`: the caller parks if the firmware ignores the request.
    #[inline(always)]
    fn shutdown(&mut self) {
        unsafe {
            core::arch::asm!(
                "ecall",
                in("a7") nr::SHUTDOWN,
                lateout("a0") _,
                options(nostack),
            );
        }
    }

    fn park(&mut self) -> ! {
        loop {
            unsafe { riscv::asm::wfi(); }
        }
    }
}
