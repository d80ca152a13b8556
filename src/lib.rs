//! Generates TypeScript interfaces and enums from API metadata.
//!
//! An API document (parameters plus a `200` response schema) is walked once
//! per API; every walk emits a `<Name>Response` and a `<Name>Parameters`
//! declaration along with the nested interfaces and enums they reference.

pub mod config;
pub mod generators;
pub mod parsers;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use config::Config;
use generators::{generate_file, FileRenderer};
use parsers::ParserRegistry;

/// Where generated files go.
#[derive(Debug, Clone)]
pub enum Destination {
    Directory(PathBuf),
    Stdout,
}

/// Generate every API selected by `config`. Returns the number of files produced.
pub fn run(config: &Config, destination: &Destination) -> Result<usize> {
    // Validate we have input
    let input_config = config
        .input
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("No input source specified. Use --spec or configure input in config file"))?;

    tracing::info!("📖 Reading input from: {:?}", input_config.source);

    let parser_registry = ParserRegistry::new();
    let document = parsers::read_document(&input_config.source)?;

    // Determine input format (explicit or auto-detect)
    let format = match &input_config.format {
        Some(format) => format.clone(),
        None => parser_registry
            .detect_format(&document)
            .ok_or_else(|| anyhow::anyhow!("Could not detect input format of {:?}", input_config.source))?
            .to_string(),
    };

    tracing::info!("🔍 Input format: {}", format);

    let parser = parser_registry.get(&format).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown input format: {} (available: {})",
            format,
            parser_registry.available_formats().join(", ")
        )
    })?;

    let apis = parser
        .parse(&input_config.source, document, input_config.api.as_deref())
        .with_context(|| format!("Failed to parse {} input", format))?;

    tracing::info!("✅ Found {} API(s)", apis.len());

    let renderer = FileRenderer::new(config.template.as_deref())?;

    if let Destination::Directory(output_dir) = destination {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;
    }

    // Execute before hooks
    for hook in &config.hooks.before_generate {
        tracing::info!("🎣 Running before hook: {}", hook);
        execute_hook(hook)?;
    }

    let mut generated_count = 0;
    for api in &apis {
        tracing::info!("🔧 Generating {}...", api.name);

        let output = generate_file(api, &config.render, &renderer)
            .with_context(|| format!("Failed to generate {}", api.name))?;

        match destination {
            Destination::Directory(output_dir) => {
                let output_path = output_dir.join(&output.filename);
                fs::write(&output_path, output.content)
                    .with_context(|| format!("Failed to write output file: {:?}", output_path))?;
                tracing::info!("✅ Generated: {:?}", output_path);
            }
            Destination::Stdout => print!("{}", output.content),
        }
        generated_count += 1;
    }

    // Execute after hooks
    for hook in &config.hooks.after_generate {
        tracing::info!("🎣 Running after hook: {}", hook);
        execute_hook(hook)?;
    }

    if generated_count == 0 {
        tracing::warn!("⚠️  No APIs found in the input.");
    } else {
        tracing::info!("🎉 Successfully generated {} file(s)!", generated_count);
    }

    Ok(generated_count)
}

fn execute_hook(command: &str) -> Result<()> {
    use std::process::Command;

    let mut cmd = if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    };

    let output = cmd
        .output()
        .with_context(|| format!("Failed to start hook: {}", command))?;

    if !output.status.success() {
        anyhow::bail!(
            "Hook failed: {}\nStderr: {}",
            command,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}
