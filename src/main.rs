use anyhow::{Context, Result};
use catmaze::{
    GameMode, JsonlStore, KeyboardInput, MatchConfig, MatchRunner, MatchStore, MinimaxBot,
    MoveInput, Position, ScriptedInput, StatsReport,
};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "catmaze")]
#[command(version, about = "Cat and mouse pursuit on a grid maze", long_about = None)]
struct Cli {
    /// Directory where moves and match results are logged
    #[arg(long, global = true, default_value = "catmaze-data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match
    Play(PlayArgs),

    /// Show statistics over the logged matches
    Stats,
}

#[derive(Args)]
struct PlayArgs {
    #[arg(long, value_enum, default_value_t = GameMode::AiVsAi)]
    mode: GameMode,

    #[arg(long, default_value_t = 8)]
    rows: i32,

    #[arg(long, default_value_t = 8)]
    cols: i32,

    /// Cat start as ROW,COL
    #[arg(long, default_value = "0,0", value_parser = parse_position)]
    cat: Position,

    /// Mouse start as ROW,COL
    #[arg(long, default_value = "5,5", value_parser = parse_position)]
    mouse: Position,

    #[arg(long, default_value_t = 10)]
    obstacles: usize,

    /// Plies searched by the minimax bot
    #[arg(long, default_value_t = 4)]
    depth: u8,

    /// Rounds added to (rows + cols) / 2 before the mouse wins
    #[arg(long, default_value_t = 3)]
    grace: u32,

    /// Seed for obstacles and bot tie-breaks
    #[arg(long)]
    seed: Option<u64>,
}

impl PlayArgs {
    fn config(&self) -> MatchConfig {
        let config = MatchConfig::default()
            .with_board(self.rows, self.cols)
            .with_starts(self.cat, self.mouse)
            .with_obstacles(self.obstacles)
            .with_depth(self.depth)
            .with_turn_grace(self.grace);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn parse_position(value: &str) -> std::result::Result<Position, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{value}'"))?;
    let row = row.trim().parse().map_err(|_| format!("invalid row '{row}'"))?;
    let col = col.trim().parse().map_err(|_| format!("invalid column '{col}'"))?;
    Ok(Position::new(row, col))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => play(&args.config(), args.mode, &cli.data_dir),
        Some(Commands::Stats) => show_stats(&cli.data_dir),
        None => main_menu(&cli.data_dir),
    }
}

fn play(config: &MatchConfig, mode: GameMode, data_dir: &Path) -> Result<()> {
    let mut store = JsonlStore::open(data_dir)
        .with_context(|| format!("opening match log in {}", data_dir.display()))?;
    let bot = MinimaxBot::new(config.search_depth);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut input: Box<dyn MoveInput> = match mode {
        GameMode::AiVsAi => Box::new(ScriptedInput::default()),
        GameMode::HumanMouseVsAi | GameMode::HumanCatVsAi => Box::new(KeyboardInput::new()?),
    };
    let mut out = io::stdout();

    MatchRunner::new(config, &bot, &mut store, input.as_mut(), &mut out)
        .run(mode, &mut rng)
        .context("match aborted")?;
    Ok(())
}

fn show_stats(data_dir: &Path) -> Result<()> {
    let store = JsonlStore::open(data_dir)
        .with_context(|| format!("opening match log in {}", data_dir.display()))?;
    let report = StatsReport::from_summaries(&store.summaries()?);
    println!("{report}");
    Ok(())
}

fn main_menu(data_dir: &Path) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let config = MatchConfig::default();

    loop {
        println!();
        println!("--- CAT AND MOUSE MAZE ---");
        println!("1. AI vs AI");
        println!("2. Human (mouse) vs AI (cat)");
        println!("3. Human (cat) vs AI (mouse)");
        println!("4. Statistics");
        println!("5. Quit");

        let choice = match editor.readline("Choose an option (1-5): ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        let outcome = match choice.trim() {
            "1" => play(&config, GameMode::AiVsAi, data_dir),
            "2" => play(&config, GameMode::HumanMouseVsAi, data_dir),
            "3" => play(&config, GameMode::HumanCatVsAi, data_dir),
            "4" => show_stats(data_dir),
            "5" => break,
            _ => {
                println!("Invalid option.");
                continue;
            }
        };

        if let Err(err) = outcome {
            eprintln!("error: {err:#}");
        }
    }

    println!("Thanks for playing!");
    Ok(())
}
