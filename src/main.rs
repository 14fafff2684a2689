use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use mc_connect_four::ai::{MonteCarloAgent, StdRandomSource};
use mc_connect_four::config::Settings;
use mc_connect_four::stats::Statistics;
use mc_connect_four::ui::App;

#[derive(Parser)]
#[command(about = "Connect Four with a Monte-Carlo computer opponent")]
struct Args {
    /// Directory holding settings.toml and stats.json
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Seed the opponent's random source for repeatable games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings_path = args.data_dir.join("settings.toml");
    let stats_path = args.data_dir.join("stats.json");

    let settings = Settings::load_or_default(&settings_path)
        .with_context(|| format!("loading {}", settings_path.display()))?;
    let stats = Statistics::load_or_default(&stats_path)
        .with_context(|| format!("loading {}", stats_path.display()))?;

    let source = match args.seed {
        Some(seed) => StdRandomSource::seeded(seed),
        None => StdRandomSource::new(),
    };
    let mut app = App::new(settings, stats, MonteCarloAgent::new(source));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res?;

    app.settings()
        .save(&settings_path)
        .with_context(|| format!("saving {}", settings_path.display()))?;
    app.stats()
        .save(&stats_path)
        .with_context(|| format!("saving {}", stats_path.display()))?;

    Ok(())
}
