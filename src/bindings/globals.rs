//! Global script functions: `wait` and `console.log`.

use std::convert::Infallible;
use std::thread;
use std::time::Duration;

use rquickjs::convert::Coerced;
use rquickjs::function::{Opt, Rest};
use rquickjs::{Ctx, FromJs, Function, IntoJs, Object, Value};

use crate::bindings::marshal;
use crate::scripting::deferred;

pub const DECLARATION: &str = r#"/**
 * Waits for the specified number of milliseconds.
 * @param milliseconds The number of milliseconds to wait
 * @returns A promise that resolves after the specified delay
 */
declare function wait(milliseconds: number): Promise<void>;

/**
 * Console object for logging.
 */
declare const console: {
    /**
     * Logs messages to the console.
     * @param args The values to log
     */
    log(...args: any[]): void;
};
"#;

pub fn install(ctx: &Ctx<'_>) -> rquickjs::Result<()> {
    let globals = ctx.globals();
    globals.set("wait", Function::new(ctx.clone(), wait)?)?;

    let console = Object::new(ctx.clone())?;
    console.set("log", Function::new(ctx.clone(), log)?)?;
    globals.set("console", console)?;

    Ok(())
}

/// Pure time-delay operation: blocks the calling thread, presented to script
/// as a deferred result that always resolves, including for a zero delay.
/// A missing or non-numeric argument degrades to `undefined`.
fn wait<'js>(ctx: Ctx<'js>, millis: Opt<Value<'js>>) -> rquickjs::Result<Value<'js>> {
    let Some(millis) = millis.0.as_ref().and_then(marshal::number) else {
        return Ok(Value::new_undefined(ctx.clone()));
    };

    let millis = millis.max(0.0) as u64;
    let promise = deferred::settle(&ctx, move || {
        thread::sleep(Duration::from_millis(millis));
        Ok::<_, Infallible>(())
    })?;
    promise.into_js(&ctx)
}

/// Writes one line to stdout with space-separated fields. Plain objects are
/// serialized as JSON text; everything else uses the engine's default string
/// coercion.
fn log<'js>(ctx: Ctx<'js>, values: Rest<Value<'js>>) -> rquickjs::Result<()> {
    let mut line = String::new();
    for (index, value) in values.0.iter().enumerate() {
        if index > 0 {
            line.push(' ');
        }
        line.push_str(&format_field(&ctx, value)?);
    }
    println!("{line}");
    Ok(())
}

fn format_field<'js>(ctx: &Ctx<'js>, value: &Value<'js>) -> rquickjs::Result<String> {
    if value.is_object() && !value.is_array() && !value.is_function() {
        if let Some(json) = ctx.json_stringify(value.clone())? {
            return json.to_string();
        }
    }
    Ok(Coerced::<String>::from_js(ctx, value.clone())?.0)
}
