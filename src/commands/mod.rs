pub mod list;
pub mod render;
pub mod resolve;

use std::path::Path;

use miette::Result;
use themecut::{Template, TeraEngine};

use crate::cli::EngineArgs;

fn open_engine(args: &EngineArgs) -> Result<TeraEngine> {
    Ok(themecut::open(Path::new(&args.root))?)
}

fn template_for(resource: String, args: &EngineArgs) -> Result<Template> {
    let mut template = Template::new(resource);
    template.set_theme(args.theme.as_deref())?;
    Ok(template)
}
