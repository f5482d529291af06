use console::style;
use miette::Result;
use themecut::Engine;

use crate::cli::EngineArgs;

pub fn run(namespace: String, args: EngineArgs) -> Result<()> {
    let engine = super::open_engine(&args)?;
    let resources = engine.list_resources(&namespace, args.theme.as_deref())?;

    if resources.is_empty() {
        println!(
            "No templates with extension '{}' below '{}'.",
            style(engine.config().extension()).cyan(),
            namespace
        );
        return Ok(());
    }

    println!(
        "{} ({} resource{})\n",
        style("Templates").bold(),
        resources.len(),
        if resources.len() == 1 { "" } else { "s" }
    );

    let width = resources.keys().map(String::len).max().unwrap_or(0);
    for (resource, name) in &resources {
        println!("  {:<width$}  {}", resource, style(name).dim());
    }

    Ok(())
}
