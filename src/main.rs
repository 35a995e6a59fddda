use anyhow::Result;
use clap::Parser;
use project_search::{
    Config, InteractiveSearch, formatters::OutputFormat, headless::run_headless, logging,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "project-search",
    version,
    about = "Terminal mockup of an AI-assisted project search",
    long_about = None
)]
struct Cli {
    /// Duration of the simulated search in milliseconds
    #[arg(long, env = "PROJECT_SEARCH_DELAY_MS", default_value = "2000")]
    delay_ms: u64,

    /// Run the search without the TUI and print the analysis
    #[arg(long)]
    print: bool,

    /// Output format for --print
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Write logs to this file
    #[arg(long, env = "PROJECT_SEARCH_LOG")]
    log_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        delay_ms: cli.delay_ms,
        log_file: cli.log_file,
        verbose: cli.verbose,
    };

    logging::init_tracing(&config, !cli.print)?;

    if cli.print {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        return run_headless(&config, cli.format, !cli.no_color, &mut handle);
    }

    let mut interactive = InteractiveSearch::new(&config);
    interactive.run()
}
