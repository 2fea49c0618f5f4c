//! # Barista
//!
//! A scriptable coffee-brewing host: embeds the QuickJS engine and exposes
//! native appliances, a coffee machine and recipe records, as constructs
//! JavaScript can create, call, and await.
//!
//! ## Architecture
//!
//! - **Ownership bridge** ([`bindings::bridge`]): host objects are shared
//!   (`Arc`) between the host and the engine's collector; release is driven
//!   by collection, never by script-side disposal.
//! - **Binding registry** ([`bindings`]): installs constructors and global
//!   functions on the context's global scope once, at startup, and marshals
//!   arguments in both directions.
//! - **Deferred adapter** ([`scripting::deferred`]): blocking host
//!   operations settle a promise before returning it, so script code gets a
//!   uniform async surface without a host event loop.
//! - **Runtime lifecycle** ([`scripting::engine`]): one process-wide
//!   platform, one isolated runtime, one bound context, and order-sensitive
//!   teardown.
//!
//! ## Modules
//!
//! - [`core`]: error taxonomy
//! - [`config`]: TOML host configuration
//! - [`domain`]: the host-owned appliance and recipe objects
//! - [`scripting`]: engine lifecycle and the deferred-result adapter
//! - [`bindings`]: the script-callable surface

/// Core host functionality and error types
pub mod core;
/// Host configuration
pub mod config;
/// Host-owned domain objects driven by script code
pub mod domain;
/// Engine lifecycle and the synchronous-to-asynchronous bridge
pub mod scripting;
/// Native bindings installed into the script environment
pub mod bindings;

use std::fs;

use crate::config::HostConfig;
use crate::core::EngineError;
use crate::scripting::Platform;

/// Boots the platform, binds a host, runs the configured script, and tears
/// everything down in order.
///
/// A failing script is logged but does not fail the process; only startup
/// faults surface as errors here.
pub fn run() -> Result<(), EngineError> {
    init_tracing();

    let config = HostConfig::load("barista.toml")?;
    bindings::declarations::write(&config.declarations_path)?;

    let platform = Platform::init()?;
    let mut host = platform.create_host(&config)?;

    tracing::info!(
        target: "barista",
        "running script {}",
        config.script_path.display()
    );
    let source = fs::read_to_string(&config.script_path)?;
    if let Err(err) = host.run(&source) {
        tracing::error!(target: "barista", "script run failed: {err}");
    }

    host.dispose();
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
