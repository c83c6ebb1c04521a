//! Public runtime API surface.
//!
//! This module gathers the types exposed to hosts so the orchestrator can stay
//! focused on driving frames.

pub mod audio;
pub mod errors;

pub use audio::{AudioSink, SilentAudio};
pub use errors::{Result, RuntimeError};
