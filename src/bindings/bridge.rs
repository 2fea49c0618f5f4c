//! Object ownership bridge.
//!
//! A host object reachable from script is always held through
//! reference-counted shared ownership, never a unique owner: the moment the
//! last script reference disappears is decided by the engine's collector,
//! which the host can neither predict nor serialize against. The
//! script-visible handle is an engine class instance whose single reserved
//! native slot stores the `Arc`; the slot is opaque to script code, so it
//! cannot be forged or corrupted from the script side.
//!
//! Release is collector-driven: when the collector proves no live script
//! reference to the handle remains, the instance's finalizer drops the
//! `Arc`, releasing the bridge's share of the host object. That finalizer is
//! the only path by which the last native reference may be dropped when sole
//! ownership lives on the script side; host code that keeps its own clone of
//! the `Arc` naturally keeps the object alive past the script handle.
//! Several script handles may alias one host object; the object is shared,
//! not duplicated.

use std::sync::{Arc, Mutex};

use rquickjs::{class::JsClass, Class, Ctx, FromJs, Value};

/// Shared-ownership handle for a mutable host object.
pub type Shared<T> = Arc<Mutex<T>>;

pub fn share<T>(value: T) -> Shared<T> {
    Arc::new(Mutex::new(value))
}

/// Resolves the class instance bound to `value`.
///
/// Returns `None` when the value carries no attachment of type `C`: a
/// plain object, a primitive, or an instance of some other class. Never
/// raises; callers treat `None` as a recoverable precondition failure, not a
/// fault.
pub fn resolve<'js, C>(ctx: &Ctx<'js>, value: &Value<'js>) -> Option<Class<'js, C>>
where
    C: JsClass<'js>,
{
    Class::<C>::from_js(ctx, value.clone()).ok()
}
