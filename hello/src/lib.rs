//! Program logic: print two fixed lines, then halt.
//!
//! Kept apart from the binary so it runs on host against `usys::Capture`.

#![cfg_attr(not(test), no_std)]

use usys::{puts, terminate, udebug, Environment};

pub const FIRST: &[u8] = b"ABC";
pub const SECOND: &[u8] = b"XYZ";

// `puts` reads exactly three characters.
const _: () = assert!(FIRST.len() >= 3 && SECOND.len() >= 3);

/// Start -> first line -> second line -> terminated. Never returns.
pub fn run<E: Environment>(env: &mut E) -> ! {
    udebug!(env, "hello: start");
    let _ = puts(env, FIRST);
    let _ = puts(env, SECOND);
    udebug!(env, "hello: shutdown");
    terminate(env)
}
