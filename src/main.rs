//! Steal Explorer - CLI
//!
//! Explore word steals from the command line: print steal trees, export them
//! for visualisation, look up definitions and check draw probabilities.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use steal_explorer::{
    commands::{
        ExportFormat, define_word, explore_word, export_word, parse_word_list, pick_random_word,
        run_batch, simulate_draw,
    },
    config::{BlankMode, DEFAULT_LEXICON, ExploreConfig, KNOWN_LEXICONS, SearchMode},
    core::LetterBag,
    lexicon::{DirectorySource, LexiconCache, LexiconIndex},
    output::{
        print_batch_summary, print_define_result, print_explore_result, print_simulation_result,
    },
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "steal_explorer",
    about = "Explore every word reachable by stealing letters, weighted by draw probability",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Lexicon name: CSW19 (default), NWL18, LONG, or any <NAME>.txt in the lexicon directory
    #[arg(short, long, global = true, default_value = DEFAULT_LEXICON)]
    lexicon: String,

    /// Directory holding <NAME>.txt lexicon files
    #[arg(
        long,
        global = true,
        env = "STEAL_EXPLORER_LEXICONS",
        default_value = "lexicons"
    )]
    lexicon_dir: PathBuf,

    /// Steal search: descendants (default) or supersets
    #[arg(long, global = true, default_value = "descendants")]
    search: String,

    /// Blank tiles: inert (default) or wildcard
    #[arg(long, global = true, default_value = "inert")]
    blanks: String,

    /// Tiles already seen, removed from the unseen pool
    #[arg(long, global = true)]
    seen: Option<String>,

    /// Maximum tree depth (unbounded by default)
    #[arg(short, long, global = true)]
    depth: Option<usize>,

    /// Log more (-v info, -vv debug); RUST_LOG overrides when no -v is given
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the steal tree of a word
    Explore {
        /// Word to explore (4 or more letters)
        word: String,
    },

    /// Look up a word's definition
    Define {
        /// Word to define
        word: String,
    },

    /// Export a steal tree as an indented list or visualisation JSON
    Export {
        /// Word to explore
        word: String,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Explore every word in a file in parallel
    Batch {
        /// File with one word per line
        file: PathBuf,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Explore a random dictionary word
    Random {
        /// Only pick words of this length
        #[arg(short = 'n', long)]
        length: Option<usize>,
    },

    /// Compare the analytic draw probability with a Monte-Carlo estimate
    Simulate {
        /// Letters to draw
        letters: String,

        /// Number of random draws
        #[arg(short = 'n', long, default_value = "100000")]
        trials: usize,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;
    let lexicons = Lexicons::new(DirectorySource::new(&cli.lexicon_dir));
    let name = cli.lexicon.as_str();

    match &cli.command {
        Commands::Explore { word } => run_explore_command(&lexicons, name, word, &config),
        Commands::Define { word } => run_define_command(&lexicons, name, word),
        Commands::Export {
            word,
            format,
            output,
        } => run_export_command(
            &lexicons,
            name,
            word,
            format,
            output.as_deref(),
            &config,
        ),
        Commands::Batch { file, no_progress } => {
            run_batch_command(&lexicons, name, file, !no_progress, &config)
        }
        Commands::Random { length } => run_random_command(&lexicons, name, *length, &config),
        Commands::Simulate {
            letters,
            trials,
            seed,
        } => {
            let result = simulate_draw(letters, &config, *trials, *seed)?;
            print_simulation_result(&result);
            Ok(())
        }
    }
}

/// Logs go to stderr so exports on stdout stay clean
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<ExploreConfig> {
    let seen = match &cli.seen {
        Some(letters) => LetterBag::from_word(letters)
            .with_context(|| format!("invalid --seen tiles '{letters}'"))?,
        None => LetterBag::new(),
    };

    Ok(ExploreConfig::default()
        .with_search(SearchMode::from_name(&cli.search))
        .with_blanks(BlankMode::from_name(&cli.blanks))
        .with_max_depth(cli.depth)
        .with_seen(seen))
}

/// One cache per process, shared by every command
type Lexicons = LexiconCache<DirectorySource>;

fn load_lexicon(lexicons: &Lexicons, name: &str) -> Result<Arc<LexiconIndex>> {
    let name = name.to_uppercase();
    let bundled = KNOWN_LEXICONS.contains(&name.as_str());
    if !bundled {
        debug!(lexicon = %name, "not a bundled lexicon, looking in lexicon directory");
    }

    let index = lexicons.get(&name).with_context(|| {
        if bundled {
            format!("failed to load lexicon {name}")
        } else {
            format!(
                "failed to load lexicon {name} (bundled: {})",
                KNOWN_LEXICONS.join(", ")
            )
        }
    })?;
    info!(lexicon = %name, words = index.len(), "lexicon ready");
    Ok(index)
}

fn run_explore_command(
    lexicons: &Lexicons,
    name: &str,
    word: &str,
    config: &ExploreConfig,
) -> Result<()> {
    let index = load_lexicon(lexicons, name)?;
    let result = explore_word(word, &index, config)?;
    print_explore_result(&result);
    Ok(())
}

fn run_define_command(lexicons: &Lexicons, name: &str, word: &str) -> Result<()> {
    let index = load_lexicon(lexicons, name)?;
    let result = define_word(word, &index)?;
    print_define_result(&result);
    Ok(())
}

fn run_export_command(
    lexicons: &Lexicons,
    name: &str,
    word: &str,
    format: &str,
    output: Option<&Path>,
    config: &ExploreConfig,
) -> Result<()> {
    let index = load_lexicon(lexicons, name)?;
    let rendered = export_word(word, &index, config, ExportFormat::from_name(format))?;

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "export written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn run_batch_command(
    lexicons: &Lexicons,
    name: &str,
    file: &Path,
    show_progress: bool,
    config: &ExploreConfig,
) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read word list {}", file.display()))?;
    let words = parse_word_list(&text);
    if words.is_empty() {
        bail!("no words found in {}", file.display());
    }

    let index = load_lexicon(lexicons, name)?;
    println!("🎯 Exploring {} words...", words.len());
    let summary = run_batch(&words, &index, config, show_progress);
    print_batch_summary(&summary);
    Ok(())
}

fn run_random_command(
    lexicons: &Lexicons,
    name: &str,
    length: Option<usize>,
    config: &ExploreConfig,
) -> Result<()> {
    let index = load_lexicon(lexicons, name)?;
    let mut rng = rand::rng();
    let Some(word) = pick_random_word(&index, length, &mut rng) else {
        bail!("no word of the requested length in lexicon {}", index.name());
    };

    let result = explore_word(word, &index, config)?;
    print_explore_result(&result);
    Ok(())
}
