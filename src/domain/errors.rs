//! Domain-specific error types.
//!
//! These errors describe recoverable precondition failures in the brewing
//! domain. They are converted into rejected deferred results at the binding
//! boundary and must never cross into the script engine as native faults.

use thiserror::Error;

/// Precondition failures raised by a brew request.
///
/// The `Display` strings double as the rejection reasons visible to script
/// code, so they are phrased for script authors rather than for host logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrewError {
    /// The machine is powered off or already brewing.
    #[error("Machine not ready to brew")]
    NotReady,

    /// The brew request carried no bound recipe object.
    #[error("No recipe provided")]
    MissingRecipe,
}
