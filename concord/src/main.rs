mod render;
mod session;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use concord_core::output::{save_concordance, save_extra_lists, write_concordance, write_extra_lists, write_json, OutputPaths};
use concord_core::{is_text_file, query, AggregateReport, Concordance, Corpus, FsStorage, QueryLog, MAX_DOCUMENTS, TOP_N};
use render::{write_query_result, write_query_summary, write_summaries};
use session::Session;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "concord")]
#[command(about = "Word counts, queries and a concordance for up to 10 text files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Sources {
    /// Input .txt file (repeatable)
    #[arg(long = "file")]
    files: Vec<PathBuf>,
    /// Directory searched recursively for .txt files
    #[arg(long)]
    dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Total and distinct word counts per file
    Summary {
        #[command(flatten)]
        sources: Sources,
    },
    /// Count words in every file
    Query {
        #[command(flatten)]
        sources: Sources,
        /// Word to count (repeatable)
        #[arg(long = "word", required = true)]
        words: Vec<String>,
    },
    /// Build the concordance and the extra lists
    Concordance {
        #[command(flatten)]
        sources: Sources,
        /// Directory receiving CONCORDANCE.TXT and ExtraLists.txt
        #[arg(long, default_value = ".")]
        output: PathBuf,
        /// Length of the frequency ranking
        #[arg(long, default_value_t = TOP_N)]
        top: usize,
        /// Print JSON to stdout instead of writing files
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Interactive menu: add and close files, query words, build the concordance
    Session {
        #[arg(long, default_value = ".")]
        output: PathBuf,
        #[arg(long, default_value_t = TOP_N)]
        top: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Summary { sources } => {
            let corpus = load_corpus(&sources)?;
            write_summaries(&mut out, &corpus.summaries())?;
        }
        Commands::Query { sources, words } => {
            let corpus = load_corpus(&sources)?;
            let mut log = QueryLog::new();
            for word in &words {
                let result = query(&corpus, word.trim()).with_context(|| format!("cannot query '{word}'"))?;
                log.record(&result.word);
                write_query_result(&mut out, &result)?;
            }
            writeln!(out)?;
            write_query_summary(&mut out, &log.summary(&corpus))?;
        }
        Commands::Concordance { sources, output, top, json } => {
            let corpus = load_corpus(&sources)?;
            build_concordance(&corpus, &OutputPaths::new(output), top, json, &mut out)?;
        }
        Commands::Session { output, top } => {
            let mut session = Session::new(FsStorage::new(), OutputPaths::new(output), top);
            session.run(io::stdin().lock(), &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Explicit files first, then directory matches sorted by path.
fn collect_paths(sources: &Sources) -> Vec<PathBuf> {
    let mut paths = sources.files.clone();
    if let Some(dir) = &sources.dir {
        let mut found: Vec<PathBuf> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| is_text_file(&p.to_string_lossy()))
            .collect();
        found.sort();
        paths.extend(found);
    }
    paths
}

fn load_corpus(sources: &Sources) -> Result<Corpus> {
    let paths = collect_paths(sources);
    if paths.is_empty() {
        bail!("no input files: pass --file or --dir");
    }
    if paths.len() > MAX_DOCUMENTS {
        bail!("{} input files given, at most {MAX_DOCUMENTS} are allowed", paths.len());
    }
    let storage = FsStorage::new();
    let mut corpus = Corpus::new();
    for path in paths {
        let name = path.to_string_lossy();
        corpus.open(&storage, &name).with_context(|| format!("cannot add {name}"))?;
    }
    tracing::info!(num_docs = corpus.len(), "loaded corpus");
    Ok(corpus)
}

fn build_concordance<W: Write>(corpus: &Corpus, paths: &OutputPaths, top: usize, json: bool, out: &mut W) -> Result<()> {
    let concordance = Concordance::for_corpus(corpus);
    let report = AggregateReport::compute_with_limit(corpus, &concordance, top);
    if json {
        write_json(out, &concordance, &report)?;
        return Ok(());
    }
    write_concordance(out, &concordance)?;
    writeln!(out)?;
    write_extra_lists(out, &report)?;
    let c = save_concordance(paths, &concordance)?;
    let e = save_extra_lists(paths, &report)?;
    writeln!(out, "\nConcordance written to {}\nExtra lists written to {}", c.display(), e.display())?;
    Ok(())
}
