//! Script binding for the immutable recipe record.

use std::sync::Arc;

use rquickjs::{class::Trace, function::Opt, Class, Ctx, Value};

use crate::bindings::marshal;
use crate::domain::Recipe;

/// Documented constructor defaults; any missing or wrong-typed positional
/// argument falls back to these independently.
pub const DEFAULT_NAME: &str = "Custom Recipe";
pub const DEFAULT_STRENGTH: i32 = 50;
pub const DEFAULT_WATER_ML: i32 = 250;
pub const DEFAULT_BREW_TIME_MS: i32 = 2000;

pub const DECLARATION: &str = r#"/**
 * Represents a coffee recipe with brewing parameters.
 */
declare class Recipe {
    /**
     * Creates a new recipe. Out-of-range values are clamped on construction.
     * @param name The name of the recipe
     * @param strength The coffee strength (0-100)
     * @param waterAmount The amount of water in milliliters
     * @param brewTime The brewing time in milliseconds
     */
    constructor(name?: string, strength?: number, waterAmount?: number, brewTime?: number);

    /** Gets the recipe name. */
    getName(): string;

    /** Gets the coffee strength percentage (0-100). */
    getStrength(): number;

    /** Gets the water amount in milliliters. */
    getWaterAmount(): number;

    /** Gets the brewing time in milliseconds. */
    getBrewTime(): number;

    /** Gets a formatted description of the recipe. */
    getDescription(): string;
}
"#;

/// Script-visible handle around a shared, immutable [`Recipe`].
#[derive(Trace)]
#[rquickjs::class(rename = "Recipe")]
pub struct RecipeBinding {
    #[qjs(skip_trace)]
    recipe: Arc<Recipe>,
}

#[rquickjs::methods]
impl RecipeBinding {
    #[qjs(constructor)]
    pub fn new<'js>(
        name: Opt<Value<'js>>,
        strength: Opt<Value<'js>>,
        water: Opt<Value<'js>>,
        brew_time: Opt<Value<'js>>,
    ) -> Self {
        let recipe = Recipe::new(
            marshal::string_arg(&name, DEFAULT_NAME),
            marshal::int_arg(&strength, DEFAULT_STRENGTH),
            marshal::int_arg(&water, DEFAULT_WATER_ML),
            marshal::int_arg(&brew_time, DEFAULT_BREW_TIME_MS),
        );
        Self {
            recipe: Arc::new(recipe),
        }
    }

    #[qjs(rename = "getName")]
    pub fn get_name(&self) -> String {
        self.recipe.name().to_owned()
    }

    #[qjs(rename = "getStrength")]
    pub fn get_strength(&self) -> i32 {
        i32::from(self.recipe.strength())
    }

    #[qjs(rename = "getWaterAmount")]
    pub fn get_water_amount(&self) -> i32 {
        self.recipe.water_ml() as i32
    }

    #[qjs(rename = "getBrewTime")]
    pub fn get_brew_time(&self) -> i32 {
        self.recipe.brew_time_ms() as i32
    }

    #[qjs(rename = "getDescription")]
    pub fn get_description(&self) -> String {
        self.recipe.description()
    }
}

impl RecipeBinding {
    /// Host-side view of the shared record.
    pub fn recipe(&self) -> Arc<Recipe> {
        Arc::clone(&self.recipe)
    }
}

pub fn install(ctx: &Ctx<'_>) -> rquickjs::Result<()> {
    Class::<RecipeBinding>::define(&ctx.globals())
}

#[cfg(test)]
mod tests {
    use crate::bindings;
    use rquickjs::{Context, Runtime};

    fn bound_context() -> (Runtime, Context) {
        let runtime = Runtime::new().unwrap();
        let context = Context::full(&runtime).unwrap();
        context.with(|ctx| bindings::install(&ctx).unwrap());
        (runtime, context)
    }

    #[test]
    fn construction_clamps_and_reads_back() {
        let (_runtime, context) = bound_context();
        context.with(|ctx| {
            ctx.eval::<(), _>("globalThis.r = new Recipe('House Blend', 120, 300, -10);")
                .unwrap();
            assert_eq!(ctx.eval::<String, _>("r.getName()").unwrap(), "House Blend");
            assert_eq!(ctx.eval::<i32, _>("r.getStrength()").unwrap(), 100);
            assert_eq!(ctx.eval::<i32, _>("r.getWaterAmount()").unwrap(), 300);
            assert_eq!(ctx.eval::<i32, _>("r.getBrewTime()").unwrap(), 0);
        });
    }

    #[test]
    fn description_comes_from_the_clamped_record() {
        let (_runtime, context) = bound_context();
        context.with(|ctx| {
            let description: String = ctx
                .eval("new Recipe('Espresso', 150, 30, 2000).getDescription()")
                .unwrap();
            assert_eq!(description, "Espresso - Strength: 100%, Water: 30ml, Time: 2000ms");
        });
    }

    #[test]
    fn missing_arguments_use_documented_defaults() {
        let (_runtime, context) = bound_context();
        context.with(|ctx| {
            let description: String = ctx.eval("new Recipe().getDescription()").unwrap();
            assert_eq!(
                description,
                "Custom Recipe - Strength: 50%, Water: 250ml, Time: 2000ms"
            );
        });
    }

    #[test]
    fn wrong_typed_arguments_fall_back_independently() {
        let (_runtime, context) = bound_context();
        context.with(|ctx| {
            ctx.eval::<(), _>("globalThis.r = new Recipe(42, 'strong', 180, null);")
                .unwrap();
            assert_eq!(ctx.eval::<String, _>("r.getName()").unwrap(), "Custom Recipe");
            assert_eq!(ctx.eval::<i32, _>("r.getStrength()").unwrap(), 50);
            assert_eq!(ctx.eval::<i32, _>("r.getWaterAmount()").unwrap(), 180);
            assert_eq!(ctx.eval::<i32, _>("r.getBrewTime()").unwrap(), 2000);
        });
    }
}
