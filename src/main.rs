mod cli;
mod config;
mod display;
mod error;
mod markdown;
mod renderer;

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::ColorMode;

/// Environment variable holding the log filter (e.g. `debug`)
const LOG_ENV: &str = "MD2TEXT_LOG";

#[derive(Parser)]
#[command(name = "md2text")]
#[command(
    about = "Render Markdown as styled text for the terminal",
    long_about = "Render Markdown as styled text for the terminal.\n\n\
                  Without FILE a built-in sample document is rendered."
)]
struct Cli {
    /// Markdown file to render (UTF-8)
    file: Option<PathBuf>,

    /// Wrap paragraphs at this column (defaults to the terminal width)
    #[arg(short, long)]
    width: Option<usize>,

    /// When to use terminal styling
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let result = cli::render::run(cli.file, cli.width, cli.color, cli.config);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
