//! Frame driver for the chase game.
//!
//! This crate wires content loading, the core engine, audio forwarding and
//! logging into a single synchronous [`Runtime`]. Hosts own the window, the
//! input devices and the clock; they call [`Runtime::step`] once per frame.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream hosts interact with
//! - [`config`] reads host overrides from the environment
//! - [`logging`] installs the tracing subscriber
pub mod api;
pub mod config;
pub mod logging;
pub mod runtime;

pub use api::{AudioSink, Result, RuntimeError, SilentAudio};
pub use config::RuntimeConfig;
pub use runtime::{Runtime, RuntimeBuilder};
