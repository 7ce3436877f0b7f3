//! Scriptdoc CLI - generate command reference docs and parameter schema
//! from a module metadata dump.

use std::{error::Error, path::PathBuf, process};

use clap::Parser;
use scriptdoc::{docs::DocsGenerator, tracing_config};
use tracing::error;

#[derive(Parser)]
#[command(name = "scriptdoc")]
#[command(about = "Generate command reference docs and parameter schema from a module metadata dump")]
struct Cli {
    /// Path to the module metadata dump (JSON descriptor list)
    metadata: PathBuf,

    /// Path to the XML documentation file; defaults to the dump path with
    /// an .xml extension
    #[arg(short, long)]
    docs: Option<PathBuf>,

    /// Output directory for the markdown reference
    #[arg(short, long, default_value = "docs/api")]
    output: PathBuf,

    /// Output directory for the machine-readable schema
    #[arg(long, default_value = "docs/api")]
    schema_out: PathBuf,

    /// Regular expression matched against type namespaces
    #[arg(short, long)]
    namespace: Option<String>,

    /// Path to intro text prepended to the generated index
    #[arg(short, long)]
    intro: Option<PathBuf>,

    /// Enable verbose diagnostic output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_config::init()?;
    } else {
        tracing_config::init_cli_mode()?;
    }

    let mut generator = DocsGenerator::new()
        .with_output_dir(&cli.output)
        .with_schema_dir(&cli.schema_out);
    if let Some(intro_path) = &cli.intro {
        let intro = std::fs::read_to_string(intro_path)?;
        generator = generator.with_intro(intro);
    }

    let result = generator.generate_from_paths(
        &cli.metadata,
        cli.docs.as_deref(),
        cli.namespace.as_deref(),
    );

    match result {
        Ok(summary) => {
            println!(
                "Generated documentation for {} commands and {} types",
                summary.commands, summary.types
            );
            Ok(())
        }
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    }
}
