use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use schema2ts::config::{load_config, merge_with_cli_args, CliOverrides, PropertyFormat};
use schema2ts::Destination;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the API metadata file (JSON or YAML)
    #[arg(short, long)]
    spec: Option<PathBuf>,

    /// Output directory for generated declarations
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to config file (overrides default location)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input format: "api" or "api-docs" (detected when omitted)
    #[arg(long)]
    format: Option<String>,

    /// API name; selects one API of a bundle
    #[arg(short, long)]
    api: Option<String>,

    /// Tera template wrapping each generated file
    #[arg(long)]
    template: Option<PathBuf>,

    /// Prefix for every generated interface name
    #[arg(long)]
    prefix: Option<String>,

    /// Casing of property keys
    #[arg(long, value_enum)]
    property_format: Option<PropertyFormat>,

    /// Do not mark declarations with `export`
    #[arg(long)]
    no_export: bool,

    /// Do not emit doc comments
    #[arg(long)]
    no_comments: bool,

    /// Include `@example` blocks in doc comments
    #[arg(long)]
    insert_example: bool,

    /// Emit literal unions instead of enum declarations
    #[arg(long)]
    no_enum: bool,

    /// Print generated declarations instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Load configuration
    let config = load_config(args.config.as_deref())?;
    let config = merge_with_cli_args(
        config,
        CliOverrides {
            spec: args.spec,
            output: args.output,
            format: args.format,
            api: args.api,
            template: args.template,
            prefix: args.prefix,
            property_format: args.property_format,
            no_export: args.no_export,
            no_comments: args.no_comments,
            insert_example: args.insert_example,
            no_enum: args.no_enum,
        },
    );

    let destination = if args.stdout {
        Destination::Stdout
    } else {
        Destination::Directory(config.output.clone().unwrap_or_else(|| PathBuf::from("generated")))
    };

    schema2ts::run(&config, &destination)?;

    Ok(())
}
