use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four_minimax::config::AppConfig;
use connect_four_minimax::game::Player;
use connect_four_minimax::ui::{console, App};

/// Play Connect Four against a minimax opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax opponent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Seat the computer plays: red (moves first) or yellow
    #[arg(long)]
    computer: Option<String>,

    /// Play on stdin/stdout instead of the terminal UI
    #[arg(long)]
    headless: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(seat) = cli.computer.as_deref() {
        config.play.computer = match seat {
            "red" => Player::Red,
            "yellow" => Player::Yellow,
            other => bail!("unknown seat '{}' (expected 'red' or 'yellow')", other),
        };
    }
    config.validate().context("invalid command-line overrides")?;

    if cli.headless {
        console::run(&config, io::stdin().lock(), io::stdout())?;
        return Ok(());
    }

    run_tui(config).context("terminal UI failed")
}

fn run_tui(config: AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal even if the game loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
