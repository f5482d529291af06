use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "themecut",
    about = "Resolve and render themed Tera templates",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args)]
pub struct EngineArgs {
    /// Project root containing themecut.toml
    #[arg(long, default_value = ".")]
    pub root: String,

    /// Theme to resolve with (default: the configured default theme)
    #[arg(short, long)]
    pub theme: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template resource to stdout
    Render {
        /// Resource name, e.g. page/header
        resource: String,

        /// Set variable values (can be repeated: -d key=value)
        #[arg(short, long = "data", value_name = "KEY=VALUE")]
        data: Vec<String>,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Print the file a resource resolves to
    Resolve {
        /// Resource name, e.g. page/header
        resource: String,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// List the resources available below a namespace
    List {
        /// Namespace directory, e.g. page
        #[arg(default_value = "")]
        namespace: String,

        #[command(flatten)]
        engine: EngineArgs,
    },
}
