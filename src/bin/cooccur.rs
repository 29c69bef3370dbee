//! cooccur CLI: label co-occurrence graphs and statistics from a feed file.
//!
//! Usage:
//!   cooccur graph --feed feed.yaml
//!   cooccur stats --feed feed.json [--entry-ids]
//!   cooccur connections --feed feed.yaml (--label <id> | --name <name>)

use clap::{Args, Parser, Subcommand};
use cooccur::{Feed, JournalConfig, LabelId};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "cooccur",
    version,
    about = "Label co-occurrence graph engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args)]
struct FeedArgs {
    /// Path to a JSON or YAML feed of labels and entries
    #[arg(long)]
    feed: PathBuf,
    /// Path to a YAML journal config; warn about feed label names outside its bounds
    #[arg(long)]
    config: Option<PathBuf>,
    /// Recount label frequencies from the feed's entries
    #[arg(long)]
    recount: bool,
    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the co-occurrence graph
    Graph {
        #[command(flatten)]
        feed: FeedArgs,
    },
    /// Print per-label statistics, most frequent first
    Stats {
        #[command(flatten)]
        feed: FeedArgs,
        /// Include every entry id carrying each label
        #[arg(long)]
        entry_ids: bool,
    },
    /// Print one label's connections, strongest first
    Connections {
        #[command(flatten)]
        feed: FeedArgs,
        /// Label id
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        label: Option<u64>,
        /// Label name
        #[arg(long)]
        name: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_feed(args: &FeedArgs) -> Result<Feed, String> {
    let config = match &args.config {
        Some(path) => Some(
            JournalConfig::from_path(path)
                .map_err(|e| format!("Failed to load config {}: {}", path.display(), e))?,
        ),
        None => None,
    };

    let mut feed = Feed::from_path(&args.feed)
        .map_err(|e| format!("Failed to load feed {}: {}", args.feed.display(), e))?;

    if let Some(config) = &config {
        warn_out_of_bounds(&feed, config);
    }

    if args.recount {
        feed.recount();
    }
    Ok(feed)
}

fn warn_out_of_bounds(feed: &Feed, config: &JournalConfig) {
    for label in &feed.labels {
        let len = label.name.chars().count();
        if len < config.min_label_len || len > config.max_label_len {
            tracing::warn!(
                label = %label.id,
                name = %label.name,
                "label name outside configured length bounds"
            );
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> i32 {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match rendered {
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

fn cmd_graph(feed: &Feed, pretty: bool) -> i32 {
    print_json(&feed.build_graph(), pretty)
}

fn cmd_stats(feed: &Feed, entry_ids: bool, pretty: bool) -> i32 {
    print_json(&feed.statistics(entry_ids), pretty)
}

fn cmd_connections(feed: &Feed, label: Option<u64>, name: Option<&str>, pretty: bool) -> i32 {
    // clap guarantees exactly one of --label and --name
    let found = match label {
        Some(id) => feed
            .label(LabelId::new(id))
            .ok_or_else(|| format!("label {} not found", id)),
        None => {
            let name = name.unwrap_or_default();
            feed.label_by_name(name)
                .ok_or_else(|| format!("label '{}' not found", name))
        }
    };
    match found {
        Ok(l) => print_json(&feed.connections(l.id), pretty),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn with_feed(args: &FeedArgs, run: impl FnOnce(&Feed) -> i32) -> i32 {
    match load_feed(args) {
        Ok(feed) => run(&feed),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match &cli.command {
        Commands::Graph { feed } => with_feed(feed, |f| cmd_graph(f, feed.pretty)),
        Commands::Stats { feed, entry_ids } => {
            with_feed(feed, |f| cmd_stats(f, *entry_ids, feed.pretty))
        }
        Commands::Connections { feed, label, name } => with_feed(feed, |f| {
            cmd_connections(f, *label, name.as_deref(), feed.pretty)
        }),
    };
    std::process::exit(code);
}
