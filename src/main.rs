// tracetty: step-by-step terminal visualizer for sorting and searching algorithms

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tracetty::algorithms::Algorithm;
use tracetty::config::Config;
use tracetty::error::AppError;
use tracetty::logging;
use tracetty::replay::Replay;
use tracetty::ui::App;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Open this algorithm directly instead of the selection screen
    #[arg(long, short = 'a', value_enum)]
    algorithm: Option<Algorithm>,

    /// Comma-separated input array
    #[arg(long)]
    array: Option<String>,

    /// Search target (searching algorithms only)
    #[arg(long)]
    target: Option<String>,

    /// Delay between auto-play steps in milliseconds
    #[arg(long = "interval-ms")]
    interval_ms: Option<u64>,

    /// Config file (defaults to ./tracetty.toml when present)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Print the full trace to stdout and exit without starting the TUI
    #[arg(long, requires = "algorithm")]
    dump: bool,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut config = Config::discover(cli.config.as_deref())?;
    if let Some(ms) = cli.interval_ms {
        config.playback.interval_ms = ms;
    }
    if let Some(path) = cli.log_file.clone() {
        config.log.file = Some(path);
    }
    if let Some(path) = &config.log.file {
        logging::init(path, &config.log.filter)?;
    }

    let algorithm = cli.algorithm.unwrap_or(Algorithm::Bubble);
    let (default_array, default_target) = if algorithm.needs_target() {
        (&config.searching.array, &config.searching.target)
    } else {
        (&config.sorting.array, &config.searching.target)
    };
    let array = cli.array.clone().unwrap_or_else(|| default_array.clone());
    let target = cli.target.clone().unwrap_or_else(|| default_target.clone());

    let mut replay = Replay::new(algorithm, array, target, config.play_interval());

    if cli.dump {
        let trace = replay.ensure_trace()?;
        for (idx, step) in trace.steps().iter().enumerate() {
            println!("[{:03}] {}", idx, step);
        }
        return Ok(());
    }

    tracing::info!(algorithm = algorithm.name(), "starting TUI");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(replay, config, cli.algorithm.is_none());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with an error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
