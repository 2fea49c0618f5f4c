//! Engine runtime lifecycle.
//!
//! The embedding walks a strict phase ladder:
//!
//! ```text
//! Uninitialized -> EnvironmentReady -> ContextBound -> Running -> Disposed
//!        Platform::init()   create_host()      run()        dispose()
//! ```
//!
//! [`Platform`] is the process-wide engine bootstrap: it exists exactly once
//! per process and must outlive every [`ScriptHost`] created from it. A
//! [`ScriptHost`] owns one isolated runtime (an independently
//! garbage-collected heap with its own allocator) and one long-lived
//! execution context whose global object carries the installed bindings.
//!
//! Teardown order is an invariant of the underlying engine: the context
//! handle is released first, then a final collection pass runs so that
//! pending ownership-bridge releases fire, and only then is the runtime,
//! and with it the allocator, dropped.

use std::sync::atomic::{AtomicBool, Ordering};

use rquickjs::{CatchResultExt, Context, Ctx, Runtime};

use crate::bindings;
use crate::config::HostConfig;
use crate::core::{EngineError, ScriptError};

static PLATFORM_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Lifecycle phases of a [`ScriptHost`]. The two earlier phases of the
/// ladder are represented by types rather than values: `Uninitialized` is
/// the absence of a [`Platform`], `EnvironmentReady` a [`Platform`] with no
/// hosts yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPhase {
    ContextBound,
    Running,
    Disposed,
}

/// Process-wide script engine state.
///
/// `init` is a one-time global bootstrap; attempting it twice in one process
/// is a fatal startup fault. Hosts are created from the platform so that the
/// environment demonstrably exists before any isolate does.
pub struct Platform {
    _private: (),
}

impl Platform {
    pub fn init() -> Result<Self, EngineError> {
        if PLATFORM_INITIALIZED.swap(true, Ordering::SeqCst) {
            return Err(EngineError::AlreadyInitialized);
        }
        tracing::debug!(target: "barista.engine", "script platform initialized");
        Ok(Self { _private: () })
    }

    /// Creates an isolated runtime plus its execution context and installs
    /// every native binding on the context's global scope.
    ///
    /// Failure here is fatal: a host that cannot bind its context is never
    /// handed out.
    pub fn create_host(&self, config: &HostConfig) -> Result<ScriptHost, EngineError> {
        let runtime = Runtime::new()?;
        if let Some(limit) = config.memory_limit {
            runtime.set_memory_limit(limit);
        }
        if let Some(threshold) = config.gc_threshold {
            runtime.set_gc_threshold(threshold);
        }

        let context = Context::full(&runtime)?;
        context.with(|ctx| bindings::install(&ctx))?;

        tracing::debug!(target: "barista.engine", "context bound, bindings installed");
        Ok(ScriptHost {
            runtime: Some(runtime),
            context: Some(context),
            phase: HostPhase::ContextBound,
        })
    }
}

/// One isolated runtime with one bound execution context.
pub struct ScriptHost {
    runtime: Option<Runtime>,
    context: Option<Context>,
    phase: HostPhase,
}

impl ScriptHost {
    pub fn phase(&self) -> HostPhase {
        self.phase
    }

    /// Compiles and runs script source inside the bound context, then drains
    /// the engine's pending-job queue so promise reactions execute before
    /// control returns to the host.
    ///
    /// A compilation failure or an uncaught script exception is non-fatal:
    /// it is logged, reported as `Err`, and the host stays usable for
    /// further runs.
    pub fn run(&mut self, source: &str) -> Result<(), ScriptError> {
        // Context handles are cheap reference-counted clones.
        let Some(context) = self.context.clone() else {
            return Err(ScriptError::HostDisposed);
        };

        self.phase = HostPhase::Running;
        let result = context.with(|ctx| match ctx.eval::<(), _>(source).catch(&ctx) {
            Ok(()) => Ok(()),
            Err(caught) => Err(ScriptError::Eval(caught.to_string())),
        });
        self.drain_jobs();
        self.phase = HostPhase::ContextBound;

        if let Err(err) = &result {
            tracing::error!(target: "barista.engine", "{err}");
        }
        result
    }

    /// Enters the bound context for direct host-side work.
    pub fn with<R>(&self, f: impl for<'js> FnOnce(Ctx<'js>) -> R) -> Result<R, ScriptError> {
        match self.context.as_ref() {
            Some(context) => Ok(context.with(f)),
            None => Err(ScriptError::HostDisposed),
        }
    }

    /// Executes queued promise-reaction jobs until none remain. Must run
    /// outside any context entry; job execution enters the runtime itself.
    fn drain_jobs(&self) {
        let Some(runtime) = self.runtime.as_ref() else {
            return;
        };
        while runtime.is_job_pending() {
            if runtime.execute_pending_job().is_err() {
                tracing::error!(
                    target: "barista.engine",
                    "pending job raised an uncaught exception"
                );
            }
        }
    }

    /// Order-sensitive teardown: context handle first, then a final
    /// collection pass so ownership-bridge releases fire, then the runtime.
    /// Idempotent; also invoked on drop.
    pub fn dispose(&mut self) {
        if self.phase == HostPhase::Disposed {
            return;
        }

        drop(self.context.take());
        if let Some(runtime) = self.runtime.take() {
            runtime.run_gc();
            drop(runtime);
        }

        self.phase = HostPhase::Disposed;
        tracing::debug!(target: "barista.engine", "script host disposed");
    }
}

impl Drop for ScriptHost {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    fn platform() -> &'static Platform {
        static PLATFORM: OnceLock<Platform> = OnceLock::new();
        PLATFORM.get_or_init(|| Platform::init().expect("first init must succeed"))
    }

    fn host() -> ScriptHost {
        platform()
            .create_host(&HostConfig::default())
            .expect("host creation")
    }

    #[test]
    fn second_platform_init_is_fatal() {
        let _ = platform();
        assert!(matches!(
            Platform::init(),
            Err(EngineError::AlreadyInitialized)
        ));
    }

    #[test]
    fn failed_run_leaves_host_usable() {
        let mut host = host();
        assert!(host.run("this is { not javascript").is_err());
        assert_eq!(host.phase(), HostPhase::ContextBound);
        assert!(host.run("globalThis.x = 1 + 1;").is_ok());
        let x: i32 = host.with(|ctx| ctx.globals().get("x").unwrap()).unwrap();
        assert_eq!(x, 2);
    }

    #[test]
    fn uncaught_script_exception_is_non_fatal() {
        let mut host = host();
        assert!(host.run("throw new Error('steam leak');").is_err());
        assert!(host.run("globalThis.alive = true;").is_ok());
    }

    #[test]
    fn dispose_is_idempotent_and_blocks_further_runs() {
        let mut host = host();
        host.run("1;").unwrap();
        host.dispose();
        host.dispose();
        assert_eq!(host.phase(), HostPhase::Disposed);
        assert!(matches!(host.run("1;"), Err(ScriptError::HostDisposed)));
    }

    #[test]
    fn one_platform_supports_multiple_hosts() {
        let mut first = host();
        let mut second = host();
        assert!(first.run("globalThis.tag = 'a';").is_ok());
        assert!(second.run("globalThis.tag = 'b';").is_ok());
        let a: String = first.with(|ctx| ctx.globals().get("tag").unwrap()).unwrap();
        let b: String = second.with(|ctx| ctx.globals().get("tag").unwrap()).unwrap();
        assert_eq!((a.as_str(), b.as_str()), ("a", "b"));
    }
}
