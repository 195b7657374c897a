use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use tally::cli::{run_session, SessionOptions};
use tally::config::paths::{self, TallyPaths};
use tally::config::settings::Settings;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Interactive monthly expense logger with styled spreadsheet export",
    long_about = "tally runs a single interactive session: it asks for a month, \
                  collects expense entries until you type 'done', and writes the \
                  raw entries plus a per-category analytics summary into a styled \
                  spreadsheet on your desktop."
)]
struct Cli {
    /// Previous-month baseline the category totals are compared to
    #[arg(long, env = "TALLY_BASELINE")]
    baseline: Option<f64>,

    /// Directory the spreadsheet is written into (defaults to the desktop)
    #[arg(long, env = "TALLY_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Prefix prepended to the output filename
    #[arg(long, env = "TALLY_PREFIX")]
    prefix: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Errors reaching the top are printed with their context chain; the
    // process still exits normally.
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let options = SessionOptions {
        baseline: cli.baseline.unwrap_or(settings.baseline),
        output_dir: cli.output_dir.unwrap_or_else(paths::resolve_output_dir),
        filename_prefix: cli.prefix.unwrap_or(settings.filename_prefix),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    run_session(&mut input, &mut output, &options)?;

    Ok(())
}
