//! An [`Environment`] that records requests instead of trapping.

use crate::Environment;
use heapless::Vec;

/// Records up to `N` emitted bytes and every shutdown request.
///
/// `park` panics with `"parked"`, and a honoured shutdown (see
/// [`Capture::halting`]) panics with `"shutdown"`, so a host harness can
/// observe the end of a program with `catch_unwind`.
pub struct Capture<const N: usize> {
    out: Vec<u8, N>,
    dropped: usize,
    shutdowns: usize,
    honour_shutdown: bool,
}

impl<const N: usize> Capture<N> {
    /// Shutdown requests are counted and then return, as if ignored.
    pub const fn new() -> Self {
        Capture {
            out: Vec::new(),
            dropped: 0,
            shutdowns: 0,
            honour_shutdown: false,
        }
    }

    /// Shutdown requests stop the program.
    pub const fn halting() -> Self {
        Capture {
            out: Vec::new(),
            dropped: 0,
            shutdowns: 0,
            honour_shutdown: true,
        }
    }

    pub fn output(&self) -> &[u8] {
        &self.out
    }

    /// Bytes that did not fit.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn shutdowns(&self) -> usize {
        self.shutdowns
    }

    pub fn clear(&mut self) {
        self.out.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> Default for Capture<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Environment for Capture<N> {
    fn putchar(&mut self, c: u8) {
        if self.out.push(c).is_err() {
            self.dropped += 1;
        }
    }

    fn shutdown(&mut self) {
        self.shutdowns += 1;
        if self.honour_shutdown {
            panic!("shutdown");
        }
    }

    fn park(&mut self) -> ! {
        panic!("parked")
    }
}
