//! Native binding registry.
//!
//! Declares, per host type, the script-callable surface (constructor,
//! methods, declaration text) and installs it on a context's global scope.
//! Installation happens exactly once, while the context is being bound;
//! installing a name that already exists overwrites it, which is acceptable
//! only at startup and never at steady state.

pub mod bridge;
pub mod declarations;
pub mod globals;
pub mod machine;
pub mod marshal;
pub mod recipe;

use rquickjs::Ctx;

/// Publishes every constructor and global function on the context's global
/// scope. Must run before any script code in this context can reference
/// them.
pub fn install(ctx: &Ctx<'_>) -> rquickjs::Result<()> {
    globals::install(ctx)?;
    machine::install(ctx)?;
    recipe::install(ctx)?;
    Ok(())
}
