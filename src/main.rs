//! Word Grid - CLI
//!
//! Letter-grid word game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use word_grid::{
    commands::{check_word, load_word_list, run_batch, run_simple},
    config::{self, Config, ThemeName},
    core::{LetterGrid, Selection},
    dictionary::DictionaryStore,
    game::GameSession,
    logging::{self, LogTarget},
    morph::{LEXICON_COUNT, LexiconAnalyzer, WordValidator},
    output::{print_batch_result, print_check_result, print_dictionary, print_grid, print_rules},
};

#[derive(Parser)]
#[command(
    name = "word_grid",
    about = "Build words from a grid of Cyrillic letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file for accepted words (default: platform data directory)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Extra lexicon file merged over the built-in one ("form lemma TAG [weight]" per line)
    #[arg(short, long, global = true)]
    lexicon: Option<PathBuf>,

    /// Shuffle the grid letters
    #[arg(long, global = true)]
    shuffle: bool,

    /// Seed for the grid shuffle (implies --shuffle)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Color theme for the TUI
    #[arg(short, long, global = true, value_enum)]
    theme: Option<ThemeName>,

    /// Config file (default: platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check whether a word would be accepted
    Check {
        /// Word to check
        word: String,
    },

    /// Validate every word in a file
    Batch {
        /// File with one word per line
        file: PathBuf,

        /// Save accepted words to the dictionary
        #[arg(short, long)]
        save: bool,
    },

    /// List the saved dictionary
    Dictionary,

    /// Print the letter grid
    Grid,

    /// Print the rules
    Rules,
}

impl Cli {
    /// Config file merged with command-line overrides
    fn resolve_config(&self) -> Config {
        let mut cfg = match &self.config {
            Some(path) => config::load_or_create(path),
            None => config::load_or_create_default(),
        };

        if let Some(path) = &self.dictionary {
            cfg.dictionary_path = Some(path.clone());
        }
        if let Some(path) = &self.lexicon {
            cfg.lexicon_path = Some(path.clone());
        }
        if let Some(theme) = self.theme {
            cfg.theme = theme;
        }
        if self.shuffle || self.seed.is_some() {
            cfg.shuffle_grid = true;
        }
        cfg
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it logs to a file
    let target = match command {
        Commands::Play => LogTarget::File(logging::default_log_file()),
        _ => LogTarget::Stderr,
    };
    logging::init(&target, cli.verbose);

    let cfg = cli.resolve_config();
    debug!(?cfg, "resolved configuration");

    match command {
        Commands::Play => run_play_command(&cfg, cli.seed),
        Commands::Simple => run_simple_command(&cfg, cli.seed),
        Commands::Check { word } => run_check_command(&cfg, &word, cli.seed),
        Commands::Batch { file, save } => run_batch_command(&cfg, &file, save),
        Commands::Dictionary => run_dictionary_command(&cfg),
        Commands::Grid => {
            print_grid(&build_grid(&cfg, cli.seed), &Selection::new());
            Ok(())
        }
        Commands::Rules => {
            print_rules();
            Ok(())
        }
    }
}

fn build_validator(cfg: &Config) -> Result<WordValidator<LexiconAnalyzer>> {
    let mut analyzer = LexiconAnalyzer::embedded();
    if let Some(path) = &cfg.lexicon_path {
        let added = analyzer
            .load_file(path)
            .with_context(|| format!("Failed to load lexicon {}", path.display()))?;
        info!(added, path = %path.display(), "merged user lexicon");
    }
    debug!(
        embedded_lines = LEXICON_COUNT,
        forms = analyzer.len(),
        "analyzer ready"
    );
    Ok(WordValidator::new(
        analyzer.with_prediction_weight(cfg.prediction_weight),
    ))
}

fn build_grid(cfg: &Config, seed: Option<u64>) -> LetterGrid {
    if !cfg.shuffle_grid {
        return LetterGrid::default();
    }
    match seed {
        Some(seed) => LetterGrid::shuffled(&mut StdRng::seed_from_u64(seed)),
        None => LetterGrid::shuffled(&mut rand::rng()),
    }
}

fn build_session(cfg: &Config, seed: Option<u64>) -> Result<GameSession<LexiconAnalyzer>> {
    let validator = build_validator(cfg)?;
    let store = DictionaryStore::open(cfg.dictionary_file());
    Ok(GameSession::new(build_grid(cfg, seed), validator, store))
}

fn run_play_command(cfg: &Config, seed: Option<u64>) -> Result<()> {
    use word_grid::interactive::{App, Theme, run_tui};

    let session = build_session(cfg, seed)?;
    let app = App::new(session, Theme::from_name(cfg.theme));
    run_tui(app)
}

fn run_simple_command(cfg: &Config, seed: Option<u64>) -> Result<()> {
    let mut session = build_session(cfg, seed)?;
    run_simple(&mut session)
}

fn run_check_command(cfg: &Config, word: &str, seed: Option<u64>) -> Result<()> {
    let validator = build_validator(cfg)?;
    let store = DictionaryStore::new(cfg.dictionary_file());
    let result = check_word(word, &validator, &build_grid(cfg, seed), &store)?;
    print_check_result(&result);
    Ok(())
}

fn run_batch_command(cfg: &Config, file: &Path, save: bool) -> Result<()> {
    let words = load_word_list(file)?;
    let validator = build_validator(cfg)?;
    let store = save.then(|| DictionaryStore::open(cfg.dictionary_file()));

    println!("Checking {} words from {}...", words.len(), file.display());
    let result = run_batch(&words, &validator, store.as_ref(), true);
    print_batch_result(&result, save);
    Ok(())
}

fn run_dictionary_command(cfg: &Config) -> Result<()> {
    let store = DictionaryStore::new(cfg.dictionary_file());
    let words = store
        .list_sorted()
        .with_context(|| format!("Failed to read {}", store.path().display()))?;
    print_dictionary(&words, store.path());
    Ok(())
}
