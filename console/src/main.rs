use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use gbson::prelude::*;
use log::{error, info};

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    /// GenBank flat files to convert (glob patterns are expanded)
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Write JSON to stdout instead of a sibling .json file
    #[arg(long)]
    stdout: bool,

    /// Pretty-print the emitted JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse_from(wild::args_os());

    let mut failed = 0usize;
    for path in expand_inputs(&cli.inputs)? {
        if let Err(e) = convert(&path, &cli) {
            error!("{}: {:#}", path.display(), e);
            failed += 1;
        }
    }
    if failed > 0 {
        anyhow::bail!("{} file(s) failed to convert", failed);
    }
    Ok(())
}

/// Expands glob patterns; a pattern with no matches is kept verbatim so
/// the conversion step reports the missing file.
fn expand_inputs(patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let matched: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("invalid pattern '{}'", pattern))?
            .filter_map(Result::ok)
            .collect();
        if matched.is_empty() {
            paths.push(PathBuf::from(pattern));
        }
        else {
            paths.extend(matched);
        }
    }
    Ok(paths)
}

fn convert(
    path: &Path,
    cli: &Cli,
) -> anyhow::Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document = Gbson::from_genbank(&text)?;

    let json = if cli.pretty {
        document.to_json_pretty()?
    }
    else {
        document.to_json()?
    };

    if cli.stdout {
        println!("{}", json);
    }
    else {
        let output = path.with_extension("json");
        fs::write(&output, json)
            .with_context(|| format!("failed to write {}", output.display()))?;
        info!("{} -> {}", path.display(), output.display());
    }
    Ok(())
}
