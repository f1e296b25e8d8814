//! wheel-game CLI - play the high/low wheel at the terminal.
//!
//! Humans take the first seats and are prompted for their names; bots fill
//! the rest of the table. With `--humans 0` the game plays itself, and
//! `--games N` runs several bot-only games and prints a win tally.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use wheel_game::{
    ConsoleInput, ConsoleObserver, GameBuilder, GameConfig, GameError, GameOutcome, GameRng, NullObserver,
    Observer, ScriptedInput,
};

#[derive(Parser)]
#[command(name = "wheel-game")]
#[command(about = "Turn-based high/low wheel game against personality-driven bots")]
struct Args {
    /// Number of human players; bots fill the remaining seats
    #[arg(long, default_value = "1")]
    humans: usize,

    /// Number of games to play (bot-only when more than one)
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Score needed at round end to win
    #[arg(long)]
    win_threshold: Option<u32>,

    /// Stop a game after this many rounds
    #[arg(long)]
    max_rounds: Option<u32>,

    /// JSON game configuration; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Suppress game narration
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Narration goes to stdout; logs are warnings-only unless asked for
    let default_filter = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = load_config(&args)?;

    if args.humans > config.max_participants {
        return Err(GameError::Config(format!(
            "{} humans requested but the table holds {}",
            args.humans, config.max_participants
        ))
        .into());
    }
    if args.games > 1 && args.humans > 0 {
        return Err(GameError::Config("multiple games are bot-only; pass --humans 0".to_string()).into());
    }

    info!(
        humans = args.humans,
        games = args.games,
        win_threshold = config.win_threshold,
        "starting wheel-game"
    );

    if args.humans > 0 {
        play_interactive(&args, config)?;
    } else {
        simulate(&args, config)?;
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<GameConfig, GameError> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(threshold) = args.win_threshold {
        config.win_threshold = threshold;
    }
    if let Some(rounds) = args.max_rounds {
        config.max_rounds = Some(rounds);
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    config.validate()?;
    Ok(config)
}

fn narrator(quiet: bool) -> Box<dyn Observer> {
    if quiet {
        Box::new(NullObserver)
    } else {
        Box::new(ConsoleObserver::new(BufWriter::new(io::stdout())))
    }
}

fn play_interactive(args: &Args, config: GameConfig) -> Result<(), GameError> {
    let rng = GameRng::from_optional_seed(config.seed);
    debug!(seed = ?rng.seed(), "rng ready");
    let input = ConsoleInput::new(io::stdin().lock(), io::stdout());

    let mut game = GameBuilder::new()
        .config(config)
        .humans(args.humans)
        .build(rng, input, narrator(args.quiet))?;

    match game.play()? {
        GameOutcome::Winner { name, score, round, .. } => {
            info!(winner = %name, score, round, "game finished");
        }
        GameOutcome::NoWinner { rounds } => {
            info!(rounds, "game finished without a winner");
        }
    }
    Ok(())
}

fn simulate(args: &Args, config: GameConfig) -> Result<(), GameError> {
    let start = Instant::now();
    let mut wins: FxHashMap<String, u32> = FxHashMap::default();
    let mut unfinished = 0u32;
    let mut total_rounds = 0u64;

    for game_num in 0..args.games {
        let seed = config.seed.map(|s| s.wrapping_add(u64::from(game_num)));
        let rng = GameRng::from_optional_seed(seed);

        let mut game = GameBuilder::new()
            .config(config.clone())
            .build(rng, ScriptedInput::new(), narrator(args.quiet || args.games > 1))?;

        match game.play() {
            Ok(GameOutcome::Winner { name, .. }) => *wins.entry(name).or_default() += 1,
            Ok(GameOutcome::NoWinner { .. }) => unfinished += 1,
            Err(e) => {
                warn!(game = game_num + 1, error = %e, "game failed");
                return Err(e);
            }
        }
        total_rounds += u64::from(game.rounds_played());
    }

    if args.games > 1 {
        print_summary(&wins, unfinished, total_rounds, args.games, start.elapsed());
    }
    Ok(())
}

fn print_summary(
    wins: &FxHashMap<String, u32>,
    unfinished: u32,
    total_rounds: u64,
    games: u32,
    elapsed: std::time::Duration,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games played: {games}");
    println!("Total time: {elapsed:?}");
    println!("Average rounds per game: {:.1}", total_rounds as f64 / f64::from(games));
    if unfinished > 0 {
        println!("Games without a winner: {unfinished}");
    }

    let mut tally: Vec<_> = wins.iter().collect();
    tally.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    println!("\n=== Wins by Seat ===");
    for (name, count) in tally {
        let rate = f64::from(*count) / f64::from(games) * 100.0;
        println!("{name}: {count} ({rate:.1}%)");
    }
}
