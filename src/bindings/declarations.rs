//! Generated type-declaration artifact.
//!
//! Each binding module carries the declaration block for its installed
//! surface; this module assembles them into one `.d.ts` stub for editor
//! tooling. The file is purely descriptive; the runtime never reads it.

use std::fs;
use std::io;
use std::path::Path;

use super::{globals, machine, recipe};

const HEADER: &str = "// Auto-generated TypeScript declarations for the barista bindings.\n";

pub fn render() -> String {
    let mut out = String::from(HEADER);
    for block in [
        globals::DECLARATION,
        machine::DECLARATION,
        recipe::DECLARATION,
    ] {
        out.push('\n');
        out.push_str(block);
    }
    out
}

pub fn write(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_covers_every_installed_binding() {
        let stub = render();
        assert!(stub.contains("declare function wait"));
        assert!(stub.contains("declare const console"));
        assert!(stub.contains("declare class CoffeeMachine"));
        assert!(stub.contains("declare class Recipe"));
    }

    #[test]
    fn write_creates_the_stub_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stubs").join("types.d.ts");
        write(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, render());
    }
}
