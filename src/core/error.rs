//! Unified error handling for the embedding host.
//!
//! Two layers, mirroring the fault taxonomy of the runtime:
//!
//! - [`EngineError`]: fatal startup faults (double bootstrap, runtime or
//!   context creation failure) plus infrastructure errors. These abort
//!   startup; no recovery is attempted.
//! - [`ScriptError`]: non-fatal script compilation/execution faults. The
//!   host stays alive and may be asked to run further source.
//!
//! Domain precondition failures live in [`crate::domain::errors`] and are
//! surfaced to script code as rejected deferred results, never as host
//! errors.

use thiserror::Error;

use crate::config::ConfigError;

/// Host infrastructure errors; fatal during startup.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The process-wide engine platform was bootstrapped twice.
    #[error("script platform already initialized in this process")]
    AlreadyInitialized,

    /// The underlying engine rejected a runtime or context operation.
    #[error("engine fault: {0}")]
    Engine(#[from] rquickjs::Error),

    /// Script-level failure bubbled up to a caller that treats it as fatal.
    #[error("script error: {0}")]
    Script(#[from] ScriptError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Non-fatal script faults reported by [`crate::scripting::ScriptHost::run`].
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Compilation failed or the script threw without catching.
    #[error("script evaluation failed: {0}")]
    Eval(String),

    /// The host was asked to run source after disposal.
    #[error("script host already disposed")]
    HostDisposed,
}
