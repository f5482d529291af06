use console::style;
use miette::Result;
use themecut::Engine;

use crate::cli::EngineArgs;

pub fn run(resource: String, args: EngineArgs) -> Result<()> {
    let engine = super::open_engine(&args)?;
    let template = super::template_for(resource, &args)?;

    let hierarchy = engine.theme_hierarchy(template.theme())?;
    if !hierarchy.is_empty() {
        eprintln!(
            "{} {}",
            style("themes:").dim(),
            hierarchy.join(" -> ")
        );
    }

    let path = engine.resolve_file(&template)?;
    println!("{}", style(path.display()).cyan());

    Ok(())
}
