//! Example: list the built-in plugins and what each one registers.

use std::sync::Arc;
use tidewind_plugins::{apply_plugins, PluginRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = PluginRegistry::with_builtins();

    println!("{} built-in plugins:\n", registry.count());

    for name in registry.names() {
        let plugin = registry.get(&name)?;
        let api = apply_plugins(&[Arc::clone(&plugin)])?;

        println!("  • {name}");
        println!("    Utilities: {}", api.utility_count());
        println!("    Variants: {}", api.variant_count());
    }

    Ok(())
}
