#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ThemecutError {
    #[error("Invalid configuration: {reason}")]
    #[diagnostic(help("Paths, themes and extensions must be non-empty strings"))]
    InvalidConfiguration { reason: String },

    #[error("No resource set on the template")]
    #[diagnostic(help("Set a resource name before rendering or resolving the template"))]
    ResourceNotSet,

    #[error("Template resource not found: {path}")]
    #[diagnostic(help(
        "No theme in the hierarchy provides this resource and no theme-less fallback exists"
    ))]
    ResourceNotFound { path: String },

    #[error("Failed to render template {file}")]
    #[diagnostic(help("Check your Tera template syntax"))]
    RenderFailure {
        file: String,
        #[source]
        source: tera::Error,
    },

    #[error("Unknown theme '{name}'")]
    #[diagnostic(help("Declare the theme under [themes.{name}] in themecut.toml"))]
    UnknownTheme { name: String },

    #[error("Circular theme parents detected: {}", chain.join(" -> "))]
    #[diagnostic(help("Remove the cycle from the `parent` entries of your themes"))]
    CircularTheme { chain: Vec<String> },

    #[error("Engine config not found at {path}")]
    #[diagnostic(help("Ensure the project root contains a themecut.toml file"))]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse themecut.toml")]
    #[diagnostic(help("Check the TOML syntax in your themecut.toml file"))]
    ConfigParse {
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ThemecutError>;
