//! Scripting runtime: engine lifecycle and the synchronous-to-asynchronous
//! bridge for host operations.

pub mod deferred;
pub mod engine;

pub use engine::{HostPhase, Platform, ScriptHost};
