//! Deferred-result adapter.
//!
//! Host operations physically block the calling thread, but present
//! themselves to script code as promises. Each bridged call creates one
//! promise, runs the operation synchronously, and settles the promise,
//! exactly once, before handing it back. There is no event loop behind
//! this: "asynchronous" is a presentation contract, so a later move to a
//! real task queue would not change the surface script code sees.
//!
//! Recoverable failures are converted into rejections carrying the failure's
//! display string; they never unwind across the embedding boundary.

use std::fmt::Display;

use rquickjs::{Ctx, IntoJs, Promise};

/// Runs `thunk` on the calling thread and returns a promise already settled
/// with its outcome: resolved with the success value, or rejected with the
/// failure's display string.
pub fn settle<'js, T, E, F>(ctx: &Ctx<'js>, thunk: F) -> rquickjs::Result<Promise<'js>>
where
    T: IntoJs<'js>,
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    let (promise, resolve, reject) = ctx.promise()?;
    match thunk() {
        Ok(value) => resolve.call::<_, ()>((value,))?,
        Err(reason) => reject.call::<_, ()>((reason.to_string(),))?,
    }
    Ok(promise)
}

/// Returns a promise rejected with `reason`, for preconditions that fail
/// before the operation itself is allowed to run.
pub fn rejected<'js>(ctx: &Ctx<'js>, reason: impl Display) -> rquickjs::Result<Promise<'js>> {
    let (promise, _resolve, reject) = ctx.promise()?;
    reject.call::<_, ()>((reason.to_string(),))?;
    Ok(promise)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rquickjs::{Context, Runtime};
    use std::convert::Infallible;

    /// Attaches reaction handlers to the promise stored under `__probe`,
    /// drains the job queue, and reads back the captured outcome.
    fn observe(runtime: &Runtime, context: &Context) -> (Option<String>, Option<String>) {
        context.with(|ctx| {
            ctx.eval::<(), _>(
                "__probe.then(\
                     v => { globalThis.__ok = String(v); },\
                     e => { globalThis.__err = String(e); },\
                 );",
            )
            .unwrap();
        });
        while runtime.is_job_pending() {
            let _ = runtime.execute_pending_job();
        }
        context.with(|ctx| {
            (
                ctx.globals().get::<_, Option<String>>("__ok").unwrap(),
                ctx.globals().get::<_, Option<String>>("__err").unwrap(),
            )
        })
    }

    #[test]
    fn thunk_success_resolves() {
        let runtime = Runtime::new().unwrap();
        let context = Context::full(&runtime).unwrap();
        context.with(|ctx| {
            let promise = settle(&ctx, || Ok::<_, Infallible>("done")).unwrap();
            ctx.globals().set("__probe", promise).unwrap();
        });
        let (ok, err) = observe(&runtime, &context);
        assert_eq!(ok.as_deref(), Some("done"));
        assert_eq!(err, None);
    }

    #[test]
    fn thunk_failure_rejects_with_reason() {
        let runtime = Runtime::new().unwrap();
        let context = Context::full(&runtime).unwrap();
        context.with(|ctx| {
            let promise = settle(&ctx, || Err::<String, _>("boiler offline")).unwrap();
            ctx.globals().set("__probe", promise).unwrap();
        });
        let (ok, err) = observe(&runtime, &context);
        assert_eq!(ok, None);
        assert_eq!(err.as_deref(), Some("boiler offline"));
    }

    #[test]
    fn rejected_skips_the_operation_entirely() {
        let runtime = Runtime::new().unwrap();
        let context = Context::full(&runtime).unwrap();
        context.with(|ctx| {
            let promise = rejected(&ctx, "No recipe provided").unwrap();
            ctx.globals().set("__probe", promise).unwrap();
        });
        let (ok, err) = observe(&runtime, &context);
        assert_eq!(ok, None);
        assert_eq!(err.as_deref(), Some("No recipe provided"));
    }
}
