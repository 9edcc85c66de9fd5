use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use apollo_compiler::Schema;
use clap::Parser;
use fusion_composition::CompositionConfig;
use fusion_composition::FusionSchema;
use fusion_composition::compose::compose;
use fusion_composition::compose::names::FusionTypeNames;
use fusion_composition::compose::templates::BuiltinDirectiveTemplates;
use tracing_subscriber::EnvFilter;

/// CLI arguments. See <https://docs.rs/clap/latest/clap/_derive/index.html>
#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Adds the fusion directive vocabulary to a schema and prints the result
    Compose {
        /// The path to the schema file, or `-` for stdin
        schema: PathBuf,
        /// Prefix for every fusion type and directive name
        #[arg(long)]
        prefix: Option<String>,
        /// Also prefix the root `@fusion` directive
        #[arg(long, requires = "prefix")]
        prefix_self: bool,
        /// Print the schema without fusion types and directives
        #[arg(long)]
        hide_fusion: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Compose {
            schema,
            prefix,
            prefix_self,
            hide_fusion,
        } => {
            let output = cmd_compose(
                &schema,
                CompositionConfig::new(prefix.as_deref(), prefix_self),
                hide_fusion,
            )?;
            println!("{}", output);
        }
    }
    Ok(())
}

fn read_input(input_path: &Path) -> anyhow::Result<String> {
    if input_path == Path::new("-") {
        io::read_to_string(io::stdin()).context("reading schema from stdin")
    } else {
        fs::read_to_string(input_path)
            .with_context(|| format!("reading schema from {}", input_path.display()))
    }
}

/// Composes the schema at `input_path` and returns the SDL to print.
fn cmd_compose(
    input_path: &Path,
    config: CompositionConfig,
    hide_fusion: bool,
) -> anyhow::Result<String> {
    let input = read_input(input_path)?;
    let schema = Schema::parse(input, input_path).map_err(|e| anyhow::anyhow!("{}", e.errors))?;
    let mut schema = FusionSchema::new(schema);

    let names = FusionTypeNames::new(&config)?;
    compose(&mut schema, &names, &BuiltinDirectiveTemplates)?;

    if hide_fusion {
        Ok(schema.without_fusion_members().to_string())
    } else {
        Ok(schema.validate()?.to_string())
    }
}
