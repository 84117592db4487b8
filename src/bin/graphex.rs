//! Graphex CLI: exchange files, label tables, rerun state and reports.
//!
//! Usage:
//!   graphex parse <file>
//!   graphex write <query.json> [--out path]
//!   graphex labels <dataset>
//!   graphex rerun <status|toggle|reset|init|complete>
//!   graphex verify <report|->
//!   graphex timings <stdout|->
//!   graphex replacements <database>
//!   graphex defaults [pattern-file]
//!   graphex compact <pattern-list>

use clap::{Parser, Subcommand};
use graphex::{
    default_patterns, detect_variant, load_default_patterns, parse_file, save_query,
    write_query, CompactPatterns, Config, LabelVocabulary, MatcherTimings, QueryGraph,
    ReplacementPolicy, SessionState, VerificationReport,
};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "graphex",
    version,
    about = "Graph exchange format engine"
)]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log parser diagnostics and state changes
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an exchange file (any variant) and print its records as JSON
    Parse {
        /// Pattern-set, result or database file
        file: PathBuf,
    },
    /// Write a UI query graph (JSON) in canonical exchange form
    Write {
        /// JSON file with `nodes` and `edges`
        graph: PathBuf,
        /// Output path (defaults to the configured query file)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "out")]
        stdout: bool,
    },
    /// Print the label vocabulary for a dataset name
    Labels {
        /// Dataset or database file name, e.g. AIDS10K.txt
        dataset: String,
    },
    /// Inspect or change the reuse-previous-matches flag
    Rerun {
        #[command(subcommand)]
        action: RerunAction,
    },
    /// Analyze a TED verifier report
    Verify {
        /// Report file, or `-` for stdin
        input: PathBuf,
    },
    /// Extract timing figures from matcher output
    Timings {
        /// Matcher stdout file, or `-` for stdin
        input: PathBuf,
    },
    /// Propose replacement graphs from a database file
    Replacements {
        database: PathBuf,
    },
    /// List starter patterns, from a dataset pattern file when given
    Defaults {
        file: Option<PathBuf>,
    },
    /// Read a one-line-per-pattern listing
    Compact {
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum RerunAction {
    /// Print the current flag and search mode
    Status,
    /// Flip the flag
    Toggle,
    /// Force a full search next time
    Reset,
    /// Process-start initialization (always false)
    Init,
    /// Record a finished match run
    Complete {
        /// The run did not succeed
        #[arg(long)]
        failed: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "graphex=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Read a file, or stdin for `-`
fn read_input(path: &Path) -> Result<String, String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("cannot read stdin: {}", e))?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path.display(), e))
    }
}

fn cmd_parse(file: &Path) -> i32 {
    let records = parse_file(file);
    if let Ok(text) = std::fs::read_to_string(file) {
        if let Some(variant) = detect_variant(&text) {
            eprintln!("{} records ({} variant)", records.len(), variant);
        }
    }
    print_json(&records)
}

fn cmd_write(config: &Config, graph: &Path, out: Option<PathBuf>, stdout: bool) -> i32 {
    let text = match read_input(graph) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let query: QueryGraph = match serde_json::from_str(&text) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("Error: invalid query graph: {}", e);
            return 1;
        }
    };

    if stdout {
        return match write_query(&query) {
            Ok(text) => {
                print!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        };
    }

    let path = out.unwrap_or_else(|| config.query_file());
    match save_query(&query, &path) {
        Ok(()) => {
            println!("Wrote query graph to {}", path.display());
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_labels(dataset: &str) -> i32 {
    print_json(&LabelVocabulary::for_name(dataset).snapshot())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RerunStatus {
    is_rerun: bool,
    search_mode: &'static str,
}

fn cmd_rerun(config: &Config, action: RerunAction) -> i32 {
    let state = match SessionState::open(config.state_file()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let result = match action {
        RerunAction::Status => Ok(()),
        RerunAction::Toggle => state.toggle().map(|_| ()),
        RerunAction::Reset => state.reset(),
        RerunAction::Init => state.initialize(),
        RerunAction::Complete { failed } => state.record_match_outcome(!failed).map(|_| ()),
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        return 1;
    }

    print_json(&RerunStatus {
        is_rerun: state.read(),
        search_mode: state.search_mode().describe(),
    })
}

fn cmd_verify(input: &Path) -> i32 {
    match read_input(input) {
        Ok(text) => print_json(&VerificationReport::analyze(&text)),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_timings(input: &Path) -> i32 {
    match read_input(input) {
        Ok(text) => print_json(&MatcherTimings::parse(&text)),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_replacements(database: &Path) -> i32 {
    let mut rng = rand::thread_rng();
    print_json(&ReplacementPolicy::default().select_from_file(database, &mut rng))
}

fn cmd_defaults(file: Option<&Path>) -> i32 {
    match file {
        Some(path) => print_json(&load_default_patterns(path)),
        None => print_json(&default_patterns()),
    }
}

fn cmd_compact(file: &Path) -> i32 {
    let patterns: Vec<_> = CompactPatterns::open(file).collect();
    eprintln!("{} patterns", patterns.len());
    print_json(&patterns)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::resolve(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Parse { file } => cmd_parse(&file),
        Commands::Write { graph, out, stdout } => cmd_write(&config, &graph, out, stdout),
        Commands::Labels { dataset } => cmd_labels(&dataset),
        Commands::Rerun { action } => cmd_rerun(&config, action),
        Commands::Verify { input } => cmd_verify(&input),
        Commands::Timings { input } => cmd_timings(&input),
        Commands::Replacements { database } => cmd_replacements(&database),
        Commands::Defaults { file } => cmd_defaults(file.as_deref()),
        Commands::Compact { file } => cmd_compact(&file),
    };
    std::process::exit(code);
}
