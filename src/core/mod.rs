//! Core host functionality: the error taxonomy shared by every layer.

pub mod error;

pub use error::{EngineError, ScriptError};
