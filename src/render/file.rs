use std::io::Write;

use tera::{Context, Tera};

use crate::browser::FileHandle;
use crate::error::{Result, ThemecutError};

/// Compile `file` as a standalone Tera template and render it into `out`.
///
/// Every call builds its own `Tera` instance; nothing is shared between renders.
/// Variables are substituted raw whatever the file suffix; templates escape
/// explicitly with the `escape` filter.
pub fn render_file_to<W: Write>(file: &FileHandle, context: &Context, out: W) -> Result<()> {
    let absolute = file.absolute_path();
    let content = std::fs::read_to_string(absolute).map_err(|e| ThemecutError::Io {
        context: format!("reading {}", absolute.display()),
        source: e,
    })?;

    let mut tera = Tera::default();
    tera.autoescape_on(Vec::new());
    let template_name = file.path();
    tera.add_raw_template(template_name, &content)
        .and_then(|_| tera.render_to(template_name, context, out))
        .map_err(|e| ThemecutError::RenderFailure {
            file: template_name.to_string(),
            source: e,
        })
}

/// Render `file` into a freshly allocated string.
pub fn render_file(file: &FileHandle, context: &Context) -> Result<String> {
    let mut buffer = Vec::new();
    render_file_to(file, context, &mut buffer)?;

    String::from_utf8(buffer).map_err(|e| ThemecutError::Io {
        context: format!("decoding output of {}", file.path()),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })
}
