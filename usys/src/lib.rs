//! Environment-call primitives for freestanding RISC-V programs.
//!
//! Everything above this crate talks to the supervising environment through
//! the [`Environment`] trait; only [`Sbi`] issues raw `ecall`s. Tests run on
//! the host against [`Capture`].

#![cfg_attr(not(test), no_std)]

use core::fmt;

pub use uapi::{nr, LogLevel, SysErr, SysResult};

pub mod capture;
pub mod logging;
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub mod sbi;

pub use capture::Capture;
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub use sbi::Sbi;

/// The supervising environment, as seen from the program.
pub trait Environment {
    /// Emit one character. The outcome is never checked.
    fn putchar(&mut self, c: u8);

    /// Ask the environment to stop the program. Returns only if the request
    /// was not honoured.
    fn shutdown(&mut self);

    /// Idle forever.
    fn park(&mut self) -> ! {
        loop {
            core::hint::spin_loop();
        }
    }
}

/* -------- output primitives ---------- */

#[inline(always)]
pub fn putchar<E: Environment>(env: &mut E, c: u8) {
    env.putchar(c);
}

/// Write the first three characters of `s` followed by a newline.
///
/// Only indices 0, 1 and 2 are ever read; anything after them, a NUL
/// terminator included, is ignored. Sequences shorter than three characters
/// are rejected before anything is written.
pub fn puts<E: Environment>(env: &mut E, s: &[u8]) -> SysResult<()> {
    match s {
        [a, b, c, ..] => {
            env.putchar(*a);
            env.putchar(*b);
            env.putchar(*c);
            env.putchar(b'\n');
            Ok(())
        }
        _ => Err(SysErr::ShortString { len: s.len() }),
    }
}

/* -------- termination ---------- */

/// Request shutdown, then park if the environment hands control back.
pub fn terminate<E: Environment>(env: &mut E) -> ! {
    env.shutdown();
    env.park()
}

/* -------- formatted output ---------- */

/// `fmt::Write` adapter that emits every byte with `putchar`.
pub struct Writer<'a, E: Environment>(pub &'a mut E);

impl<E: Environment> fmt::Write for Writer<'_, E> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for b in s.bytes() {
            self.0.putchar(b);
        }
        Ok(())
    }
}
