use std::io::Write;

use miette::{IntoDiagnostic, Result};
use tera::Value;
use themecut::Engine;

use crate::cli::EngineArgs;

pub fn run(resource: String, data: Vec<String>, args: EngineArgs) -> Result<()> {
    let engine = super::open_engine(&args)?;
    let mut template = super::template_for(resource, &args)?;

    for (key, value) in parse_data(data) {
        template.set_variable(key, value);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    engine.render_to(&template, &mut out)?;
    out.flush().into_diagnostic()?;

    Ok(())
}

/// Split `key=value` pairs. Values that parse as JSON keep their type,
/// everything else is taken as a string.
fn parse_data(data: Vec<String>) -> Vec<(String, Value)> {
    data.into_iter()
        .filter_map(|kv| {
            let mut parts = kv.splitn(2, '=');
            let key = parts.next()?.to_string();
            let raw = parts.next()?;
            let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.into()));
            Some((key, value))
        })
        .collect()
}
