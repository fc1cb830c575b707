use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::Env;
use log::error;
use stemtok::{
    load_words, Merger, MergerConfig, Orientation, StemSplitter, WordSource, DEFAULT_MAX_ROUNDS,
};

const DEFAULT_WORD_FILE: &str = "brown_nouns.txt";

/// Corpus the merge experiment runs on when no input is supplied.
const SAMPLE_CORPUS: &str = "Luna the robot woke up early today. She wanted to explore the forest near her home. The forest  was  quiet,  but  Luna  heard  a  soft  humming  sound  behind  the  old  oak  tree.    She discovered a tiny drone trying to send a distress signal. Its battery was almost empty. Luna carried  the  drone  back  to  her  workshop  and  repaired  it  using  spare  parts.    The  drone introduced itself as Pico and thanked Luna for saving it. Together, Luna and Pico built a small map of the forest using their sensors. They collected location data, sensor readings, and  signal  strength  values.  These  readings  helped  them  detect  forest  paths,  forest clearings,  and  drone-safe  zones.  By  evening, they  returned  home  with  new  data  and a plan for tomorrow's adventure. Luna stored the drone's data in her robot log, while Pico processed the map for better accuracy.";

#[derive(Parser, Debug)]
#[command(author, version, about = "Stem segmentation and pair-merge experiments", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Segment a word list into stems and suffixes
    Stem(StemArgs),
    /// Run the iterative pair-merge loop over a corpus
    Merge(MergeArgs),
}

#[derive(Args, Debug)]
struct StemArgs {
    /// Word list file (whitespace-separated, lowercased on load)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_WORD_FILE)]
    words: PathBuf,
}

#[derive(Args, Debug)]
struct MergeArgs {
    /// Corpus text supplied directly
    #[arg(long, value_name = "TEXT", conflicts_with = "file")]
    text: Option<String>,

    /// Corpus text read from a file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Number of merge rounds
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_ROUNDS)]
    rounds: usize,

    /// Disable per-round logging
    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Stem(args) => run_stem(&args),
        Commands::Merge(args) => run_merge(&args),
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    use log::LevelFilter;

    let level = if quiet > 0 {
        match quiet {
            1 => LevelFilter::Warn,
            _ => LevelFilter::Error,
        }
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .filter_level(level)
        .init();
}

fn run_stem(args: &StemArgs) -> Result<()> {
    // A missing word list is reported but not fatal; the run continues with
    // an empty vocabulary and produces no segmentation lines.
    let words = match load_words(&WordSource::Path(args.words.clone())) {
        Ok(words) => words,
        Err(err) => {
            error!("{err}");
            Vec::new()
        }
    };

    let splitter = StemSplitter::from_words(&words);

    println!("--- Prefix Trie Stemming ---");
    for word in &words {
        println!("{word}={}", splitter.split(word, Orientation::Prefix));
    }

    println!();
    println!("--- Suffix Trie Stemming ---");
    for word in &words {
        println!("{word}={}", splitter.split(word, Orientation::Suffix));
    }

    Ok(())
}

fn run_merge(args: &MergeArgs) -> Result<()> {
    let corpus = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("reading corpus from {}", path.display()))?,
        (None, None) => SAMPLE_CORPUS.to_string(),
    };

    let cfg = MergerConfig::builder()
        .max_rounds(args.rounds)
        .show_progress(!args.no_progress)
        .build()?;
    let outcome = Merger::new(cfg).run(&corpus)?;

    for token in &outcome.tokens {
        println!("{token}");
    }

    Ok(())
}
