use anyhow::Context;
use clap::Parser;
use rogue_blackjack::{Command, GameConfig, GameRng, Response, RoundEngine, StateView};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

const HELP: &str = "\
commands:
  new             start a new run at room 1
  deal | d        deal the current room
  hit | h         take a card
  stand | s       let the dealer play
  use | u <item>  use an item (Extra Hit, Peek, Re-roll)
  status          show the table
  help            show this text
  quit | q        leave";

#[derive(Parser, Debug)]
#[command(author, version, about = "Play roguelike blackjack in the terminal", long_about = None)]
struct Args {
    /// Seed for a reproducible session. Random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file overriding the default game configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = tracing::Level::WARN)]
    log_level: tracing::Level,

    /// Print the table as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    // Load config
    let config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            GameConfig::from_json(&json)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    let engine = RoundEngine::new(config).context("invalid game configuration")?;
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), "starting session");
    let mut state = engine.create_state_with_rng(rng);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    render(&mut stdout, &engine.view(&state), args.json)?;
    writeln!(stdout, "Type `help` for commands.")?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match line.trim().to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "q" => break,
            "help" => {
                writeln!(stdout, "{HELP}")?;
                continue;
            }
            "status" => {
                render(&mut stdout, &engine.view(&state), args.json)?;
                continue;
            }
            _ => {}
        }

        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        };

        if let Response::Rejected(err) = engine.apply(&mut state, command) {
            writeln!(stdout, "({err})")?;
        }
        render(&mut stdout, &engine.view(&state), args.json)?;
    }

    Ok(())
}

fn render(out: &mut impl Write, view: &StateView, json: bool) -> anyhow::Result<()> {
    if json {
        let text = serde_json::to_string(view).context("failed to serialize state")?;
        writeln!(out, "{text}")?;
    } else {
        writeln!(out, "\n{view}")?;
    }
    Ok(())
}
