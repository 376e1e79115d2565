mod generate;
mod resolve;
mod routes;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "apiscope",
    version,
    about = "Describe a web application's API surface from its routes and presenters",
    long_about = "Apiscope reads a route manifest exported from the host application, resolves \
                  the presenter behind every API endpoint and renders the result as JSON or as \
                  a table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate API documentation
    #[command(
        long_about = "Builds the endpoint atlas for one namespace and renders it. Flags override \
                            values from the optional JSON config file."
    )]
    Generate {
        /// Route manifest exported from the host application
        #[arg(long, value_name = "MANIFEST")]
        manifest: Option<PathBuf>,
        /// JSON config file
        #[arg(long, value_name = "CONFIG")]
        config: Option<PathBuf>,
        /// Namespace to document (defaults to the configured default namespace)
        #[arg(long)]
        namespace: Option<String>,
        /// Output format: json or table
        #[arg(long)]
        format: Option<String>,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
        /// Write to this file instead of standard output
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Show which presenter serves a resource type
    Resolve {
        #[arg(long, value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Resource type, e.g. Post
        #[arg(value_name = "RESOURCE")]
        resource: String,
        #[arg(long)]
        namespace: Option<String>,
    },
    /// List introspected routes and whether each one is documented
    Routes {
        #[arg(long, value_name = "MANIFEST")]
        manifest: PathBuf,
        /// Required ancestor of documented controllers
        #[arg(long)]
        base_controller: Option<String>,
    },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = apiscope_runtime::init_logging("cli", false);

    match cli.command {
        Commands::Generate {
            manifest,
            config,
            namespace,
            format,
            pretty,
            output,
        } => generate::run(generate::Overrides {
            manifest,
            config,
            namespace,
            format,
            pretty,
            output,
        }),
        Commands::Resolve {
            manifest,
            resource,
            namespace,
        } => resolve::run(&manifest, &resource, namespace.as_deref()),
        Commands::Routes {
            manifest,
            base_controller,
        } => routes::run(&manifest, base_controller),
    }
}
