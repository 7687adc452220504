//! Helios Clocks
//!
//! Implementations of the `Clock` port: real wall-clock time for
//! production and a manually driven clock for deterministic tests.

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;
