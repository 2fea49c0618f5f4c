//! The coffee machine appliance.

use std::thread;
use std::time::Duration;

use super::errors::BrewError;
use super::recipe::Recipe;

/// A stateful brewing appliance with on/off/busy state.
///
/// The machine owns its own state transitions: `brew` validates readiness,
/// walks through busy and back to idle, and reports the outcome as a value.
/// Callers present that value to script code however they see fit.
#[derive(Debug)]
pub struct CoffeeMachine {
    name: String,
    powered: bool,
    brewing: bool,
}

impl CoffeeMachine {
    pub const DEFAULT_NAME: &'static str = "Coffee Machine";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            powered: false,
            brewing: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn turn_on(&mut self) {
        self.powered = true;
    }

    /// Powering off also aborts any busy flag left behind.
    pub fn turn_off(&mut self) {
        self.powered = false;
        self.brewing = false;
    }

    pub fn is_on(&self) -> bool {
        self.powered
    }

    pub fn is_brewing(&self) -> bool {
        self.brewing
    }

    /// The machine accepts a brew only when powered and idle.
    pub fn is_ready(&self) -> bool {
        self.powered && !self.brewing
    }

    /// Brews the given recipe, blocking the calling thread for its brew time.
    ///
    /// Fails without mutating any state when the machine is not ready.
    pub fn brew(&mut self, recipe: &Recipe) -> Result<String, BrewError> {
        if !self.is_ready() {
            return Err(BrewError::NotReady);
        }

        self.brewing = true;
        thread::sleep(Duration::from_millis(u64::from(recipe.brew_time_ms())));
        self.brewing = false;

        Ok(format!("Coffee ready! Brewed {}", recipe.name()))
    }
}
