//! Wordle Openings - CLI
//!
//! Plays, simulates, and assists Wordle games, and searches for the best
//! letter-disjoint opening around a seed word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use wordle_openings::{
    commands::{
        Assistant, SimulationConfig, choose_solution, play_game, run_assist, run_search,
        run_simulation,
    },
    core::Word,
    output::{print_game_record, print_search_report, print_simulation_statistics},
    search::SearchConfig,
    solver::{GameConfig, GamePlayer, Strategy, StrategyType},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_openings",
    about = "Wordle solver and letter-disjoint opening search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: simple, entropy (default), minmax
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: StrategyType,

    /// Word list used for guesses
    #[arg(short, long, global = true, default_value = "wordlewords.txt")]
    guesses: PathBuf,

    /// Word list of possible solutions (defaults to the guess list)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Word length
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game against a given or random solution
    Play {
        /// The solution to play against (random if omitted)
        solution: Option<String>,

        /// Fixed first guess
        #[arg(short, long)]
        opening: Option<String>,

        /// Also prune the guess pool after each turn
        #[arg(long)]
        prune_guesses: bool,

        /// Give up after this many turns
        #[arg(long, default_value_t = 20)]
        max_turns: usize,
    },

    /// Play every solution and report statistics
    Simulate {
        /// Limit number of solutions to play
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Only play every Nth solution
        #[arg(short, long, default_value_t = 1)]
        every: usize,

        /// Fixed first guess
        #[arg(short, long)]
        opening: Option<String>,
    },

    /// Search for the best opening around each seed word
    Search {
        /// Comma-separated seed words
        #[arg(value_delimiter = ',', default_value = "roate")]
        seeds: Vec<String>,

        /// Words added to the seed
        #[arg(short = 'k', long, default_value_t = 2)]
        size: usize,

        /// Directory for cached combinations
        #[arg(long, default_value = "combinations")]
        cache_dir: PathBuf,

        /// Always enumerate, never read or write the cache
        #[arg(long)]
        no_cache: bool,

        /// Update progress after this many solutions
        #[arg(long, default_value_t = 50)]
        progress_every: usize,
    },

    /// Suggest guesses for a game played elsewhere
    Assist {
        /// Fixed first suggestion
        #[arg(short, long)]
        opening: Option<String>,
    },
}

/// Guess list and solution list from the CLI paths
fn load_wordlists(cli: &Cli) -> Result<(Vec<Word>, Vec<Word>)> {
    let guesses = load_from_file(&cli.guesses, cli.length)?;
    let solutions = match &cli.solutions {
        Some(path) => load_from_file(path, cli.length)?,
        None => guesses.clone(),
    };
    info!(
        "{} guesses, {} solutions of length {}",
        guesses.len(),
        solutions.len(),
        cli.length
    );
    Ok((guesses, solutions))
}

fn parse_opening(opening: Option<&str>, length: usize) -> Result<Option<Word>> {
    opening
        .map(|text| {
            Word::with_length(text, length).with_context(|| format!("invalid opening '{text}'"))
        })
        .transpose()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure the thread pool")?;
    }

    let (guesses, solutions) = load_wordlists(&cli)?;

    match &cli.command {
        Commands::Play {
            solution,
            opening,
            prune_guesses,
            max_turns,
        } => {
            let config = GameConfig {
                opening: parse_opening(opening.as_deref(), cli.length)?,
                max_turns: *max_turns,
                prune_guess_pool: *prune_guesses,
            };
            let solution = choose_solution(&solutions, solution.as_deref(), cli.length)?;
            let player = GamePlayer::new(cli.strategy, &guesses, &solutions).with_config(config);

            let record = play_game(&player, &solution)?;
            print_game_record(&record, cli.strategy.name());
        }
        Commands::Simulate {
            limit,
            every,
            opening,
        } => {
            let config = GameConfig {
                opening: parse_opening(opening.as_deref(), cli.length)?,
                ..GameConfig::default()
            };
            let player = GamePlayer::new(cli.strategy, &guesses, &solutions).with_config(config);
            let simulation = SimulationConfig {
                limit: *limit,
                every: *every,
                ..SimulationConfig::default()
            };

            let stats = run_simulation(&player, &solutions, &simulation);
            print_simulation_statistics(&stats, cli.strategy.name());
        }
        Commands::Search {
            seeds,
            size,
            cache_dir,
            no_cache,
            progress_every,
        } => {
            let config = SearchConfig {
                combination_size: *size,
                progress_interval: *progress_every,
                cache_dir: cache_dir.clone(),
                use_cache: !no_cache,
            };

            for text in seeds {
                let seed = Word::with_length(text, cli.length)
                    .with_context(|| format!("invalid seed '{text}'"))?;
                let report = run_search(&seed, &guesses, &solutions, &config, true)?;
                print_search_report(&report);
            }
        }
        Commands::Assist { opening } => {
            let opening = parse_opening(opening.as_deref(), cli.length)?;
            let mut assistant =
                Assistant::new(cli.strategy, &guesses, &solutions, cli.length, opening);
            run_assist(&mut assistant)?;
        }
    }

    Ok(())
}
