//! Command-line front end: serve a random puzzle or print a hint for a FEN.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use puzzle_tutor::engines::puzzle_tutor::PuzzleTutor;
use puzzle_tutor::errors::TutorResult;
use puzzle_tutor::hints::hint_tier::HintTier;
use puzzle_tutor::search::minimax::{SearchConfig, SearchEngine};
use puzzle_tutor::tables::puzzle_catalog::PuzzleCatalog;

#[derive(Debug, Parser)]
#[command(name = "puzzle_tutor", version, about = "Chess puzzles with tiered hints")]
struct Cli {
    /// Log search progress (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a random puzzle from the catalog.
    Puzzle {
        /// Seed for a reproducible pick.
        #[arg(long)]
        seed: Option<u64>,
        /// TSV file with `fen` and `theme` columns.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Search a position and print a hint for the best move.
    Hint {
        #[arg(long)]
        fen: String,
        /// 1 = piece and square, 2 = adds destination, 3 = full solution.
        #[arg(long, default_value_t = 1)]
        level: u8,
        /// Search depth in plies.
        #[arg(long, default_value_t = SearchConfig::default().depth)]
        depth: u8,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> TutorResult<()> {
    let mut out = io::stdout().lock();

    match command {
        Command::Puzzle { seed, catalog } => {
            let catalog = match catalog {
                Some(path) => PuzzleCatalog::from_tsv_path(path)?,
                None => PuzzleCatalog::load_default(),
            };
            let tutor = PuzzleTutor::new(SearchEngine::default(), SearchConfig::default(), catalog);
            let puzzle = match seed {
                Some(seed) => tutor.puzzle(&mut StdRng::seed_from_u64(seed))?,
                None => tutor.puzzle(&mut rand::rng())?,
            };

            writeln!(out, "Puzzle: {}", puzzle.theme)?;
            writeln!(out, "FEN: {}", puzzle.fen)?;
            writeln!(
                out,
                "Hint: puzzle_tutor hint --fen \"{}\" --level 1",
                puzzle.fen
            )?;
        }
        Command::Hint {
            fen,
            level,
            depth,
            format,
        } => {
            let tier = HintTier::try_from(level)?;
            let tutor = PuzzleTutor::new(
                SearchEngine::default(),
                SearchConfig { depth },
                PuzzleCatalog::default(),
            );
            let report = tutor.hint(&fen, tier)?;

            match format {
                OutputFormat::Text => writeln!(out, "{}", report.render_text())?,
                OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
            }
        }
    }

    Ok(())
}
