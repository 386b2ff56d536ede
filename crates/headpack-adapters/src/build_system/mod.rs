//! Build system adapters.
//!
//! The production `CMakeDriver` shells out to `cmake` and `ctest`; the
//! `RecordingBuildSystem` captures phase calls for tests without touching
//! any toolchain.

mod cmake;
mod recording;

pub use cmake::CMakeDriver;
pub use recording::{RecordedPhase, RecordingBuildSystem};
