use anyhow::{Context, Result};
use clap::Parser;
use five_clique::output::{print_solutions, write_csv};
use five_clique::progress::Logged;
use five_clique::{run, SearchOptions, Shard};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Find five words that together use 25 different letters.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Dictionary, one word per line.
    words: PathBuf,

    /// Show statistics only, not the solutions.
    #[arg(long)]
    quiet: bool,

    /// Letters at which to split pairing into separate passes. More letters
    /// means less memory held at once.
    #[arg(long)]
    shard: Option<Shard>,

    /// Only one solution per set of anagrams.
    #[arg(long)]
    no_anagrams: bool,

    /// Write solutions to this CSV file instead of printing them.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Worker threads, defaults to one per core.
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to start worker threads")?;
    }

    let start = Instant::now();
    let options = SearchOptions {
        anagrams: !args.no_anagrams,
        shard: args.shard.unwrap_or_default(),
    };
    let solutions = run(&args.words, &options, &Logged::new())
        .with_context(|| format!("searching {}", args.words.display()))?;

    match &args.output {
        Some(path) => write_csv(path, &solutions)?,
        None if !args.quiet => print_solutions(io::stdout().lock(), &solutions)?,
        None => {}
    }

    println!("Found {} solutions", solutions.len());
    println!("Total elapsed time: {:?}", start.elapsed());
    Ok(())
}
