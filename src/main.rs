use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use nmox::demo::render_sample;
use nmox::RenderConfig;

#[derive(Debug, Parser)]
#[command(name = "nmox", version, about = "Render the sample markup tree")]
struct Args {
    /// Omit the space in attribute-less open tags
    #[arg(short, long)]
    compact: bool,
    /// Prefix the output with an HTML5 doctype
    #[arg(long)]
    html5: bool,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Log tree construction and rendering to stderr
    #[arg(short, long)]
    trace: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.trace {
        init_tracing();
    }

    let config = if args.compact {
        RenderConfig::compact()
    } else {
        RenderConfig::default()
    };
    let rendered = render_sample(&config, args.html5).context("failed to render sample")?;

    write_output(&args.output, rendered.as_bytes())
}

/// Logs at DEBUG unless `RUST_LOG` says otherwise
fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    info!("Logger initialized");
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            stdout.write_all(b"\n").context("failed to write stdout")?;
            Ok(())
        }
    }
}
