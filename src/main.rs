//! CLI entry point for doctoc

use std::path::PathBuf;
use std::process;

use clap::Parser;
use doctoc::output::{print_documents, print_json};
use doctoc::{OsFileSystem, TocConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "doctoc")]
#[command(about = "Generate README table-of-contents indices for a documentation tree")]
#[command(version)]
struct Args {
    /// Documentation root
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Heading of the root index
    #[arg(long = "title")]
    title: Option<String>,

    /// Word appended to subdirectory headings
    #[arg(long = "noun")]
    noun: Option<String>,

    /// Ignore file, relative to the root, listing paths to exclude
    #[arg(long = "ignore-file", value_name = "FILE")]
    ignore_file: Option<String>,

    /// Print the generated documents instead of writing them
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Print documents as JSON (implies --dry-run)
    #[arg(long = "json")]
    json: bool,

    /// Number of parallel workers for writing indices
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Log every skipped and written path
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(args: &Args) {
    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    let defaults = TocConfig::default();
    let config = TocConfig {
        main_title: args.title.clone().unwrap_or(defaults.main_title),
        section_noun: args.noun.clone().unwrap_or(defaults.section_noun),
        ignore_file: args.ignore_file.clone().unwrap_or(defaults.ignore_file),
        parallel_workers: args.jobs,
        ..TocConfig::default()
    };

    let dry_run = args.dry_run || args.json;
    let summary = match doctoc::run(&OsFileSystem, &config, &args.path, dry_run) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("doctoc: {}", e);
            process::exit(1);
        }
    };

    if dry_run {
        let result = if args.json {
            print_json(&summary.documents)
        } else {
            print_documents(&summary.documents)
        };
        if let Err(e) = result {
            eprintln!("doctoc: error writing output: {}", e);
            process::exit(1);
        }
    }
}
