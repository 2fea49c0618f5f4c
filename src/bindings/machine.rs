//! Script binding for the coffee machine appliance.

use std::sync::Arc;

use rquickjs::{class::Trace, function::Opt, Class, Ctx, Promise, Value};

use crate::bindings::bridge::{self, Shared};
use crate::bindings::marshal;
use crate::bindings::recipe::RecipeBinding;
use crate::domain::{BrewError, CoffeeMachine};
use crate::scripting::deferred;

pub const DECLARATION: &str = r#"/**
 * Represents a coffee machine that can brew recipes.
 */
declare class CoffeeMachine {
    /**
     * Creates a new coffee machine instance.
     * @param name The name of the coffee machine
     */
    constructor(name?: string);

    /** Turns on the coffee machine. */
    turnOn(): void;

    /** Turns off the coffee machine, aborting any brew in progress. */
    turnOff(): void;

    /** Reports whether the machine is powered on. */
    isOn(): boolean;

    /** Reports whether a brew is in progress. */
    isBrewing(): boolean;

    /** Gets the name of the coffee machine. */
    getName(): string;

    /**
     * Brews coffee using the specified recipe.
     * @param recipe The recipe to brew
     * @returns A promise that resolves with a success message when brewing
     *          is complete, or rejects with the reason the brew was refused
     */
    brew(recipe: Recipe): Promise<string>;
}
"#;

/// Script-visible handle around a shared, stateful [`CoffeeMachine`].
#[derive(Trace)]
#[rquickjs::class(rename = "CoffeeMachine")]
pub struct MachineBinding {
    #[qjs(skip_trace)]
    machine: Shared<CoffeeMachine>,
}

#[rquickjs::methods]
impl MachineBinding {
    #[qjs(constructor)]
    pub fn new<'js>(name: Opt<Value<'js>>) -> Self {
        let name = marshal::string_arg(&name, CoffeeMachine::DEFAULT_NAME);
        Self {
            machine: bridge::share(CoffeeMachine::new(name)),
        }
    }

    #[qjs(rename = "turnOn")]
    pub fn turn_on(&self) {
        self.machine.lock().unwrap().turn_on();
    }

    #[qjs(rename = "turnOff")]
    pub fn turn_off(&self) {
        self.machine.lock().unwrap().turn_off();
    }

    #[qjs(rename = "isOn")]
    pub fn is_on(&self) -> bool {
        self.machine.lock().unwrap().is_on()
    }

    #[qjs(rename = "isBrewing")]
    pub fn is_brewing(&self) -> bool {
        self.machine.lock().unwrap().is_brewing()
    }

    #[qjs(rename = "getName")]
    pub fn get_name(&self) -> String {
        self.machine.lock().unwrap().name().to_owned()
    }

    /// Bridged brew operation. The argument is resolved through the
    /// ownership bridge first: a call without a bound recipe rejects
    /// immediately and the appliance is never touched. Readiness itself is
    /// the machine's own precondition and surfaces the same way, as a
    /// rejection rather than an engine-level exception.
    #[qjs(rename = "brew")]
    pub fn brew<'js>(
        &self,
        ctx: Ctx<'js>,
        recipe: Opt<Value<'js>>,
    ) -> rquickjs::Result<Promise<'js>> {
        let recipe = recipe
            .0
            .as_ref()
            .and_then(|value| bridge::resolve::<RecipeBinding>(&ctx, value));
        let Some(recipe) = recipe else {
            return deferred::rejected(&ctx, BrewError::MissingRecipe);
        };

        let recipe = recipe.borrow().recipe();
        let machine = Arc::clone(&self.machine);
        deferred::settle(&ctx, move || machine.lock().unwrap().brew(&recipe))
    }
}

impl MachineBinding {
    /// Host-side view of the bridged appliance. Cloning the handle keeps the
    /// machine alive past its script handle.
    pub fn shared(&self) -> &Shared<CoffeeMachine> {
        &self.machine
    }
}

pub fn install(ctx: &Ctx<'_>) -> rquickjs::Result<()> {
    Class::<MachineBinding>::define(&ctx.globals())
}
