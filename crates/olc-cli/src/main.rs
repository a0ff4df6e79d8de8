mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use olc_config::{CliConfig, LoadedConfig, OutputFormat, UnusedKeyPolicy};
use tracing::warn;

use commands::replay::{replay_lines, ReplayOptions};
use commands::Output;

#[derive(Parser)]
#[command(name = "olc")]
#[command(about = "Order lifecycle classification tools", long_about = None)]
struct Cli {
    /// Layered config paths in merge order (base -> env -> local)
    #[arg(long = "config", global = true)]
    config_paths: Vec<String>,

    /// Fail instead of warn when config carries keys nothing reads
    #[arg(long, global = true, default_value_t = false)]
    strict_config: bool,

    /// Output format override (text | json)
    #[arg(long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an order snapshot into its UI stage and copy
    Classify {
        /// Snapshot JSON file, or `-` for stdin
        input: String,
    },

    /// Normalize one realtime event and decide whether it triggers a refetch
    Event {
        /// Event JSON file, or `-` for stdin
        input: String,

        /// Order id the screen is showing; adds a refetch decision
        #[arg(long)]
        watch: Option<String>,
    },

    /// Replay an NDJSON event log, one summary line per event
    Replay {
        /// NDJSON file, or `-` for stdin
        input: String,

        /// Order id the screen is showing; decisions are made for this order
        #[arg(long)]
        watch: Option<String>,

        /// Print only events that would refetch (errors are always printed).
        /// Overrides `replay.only_refresh`; `--only-refresh=false` turns it off.
        #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        only_refresh: Option<bool>,
    },

    /// Print the canonical event catalog
    Catalog {
        /// Print the legacy alias table instead
        #[arg(long, default_value_t = false, conflicts_with = "triggers")]
        aliases: bool,

        /// Print the refresh-trigger set instead
        #[arg(long, default_value_t = false)]
        triggers: bool,
    },

    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Load .env.local if present (dev convenience); silent when absent.
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    let loaded = load_config(&cli.config_paths)?;
    let mut cfg = CliConfig::from_config_json(&loaded.config_json)?;
    if let Some(f) = cli.format.as_deref() {
        cfg.format = OutputFormat::parse(f)?;
    }

    init_tracing(&cfg.log_filter);

    let policy = if cli.strict_config {
        UnusedKeyPolicy::Fail
    } else {
        UnusedKeyPolicy::Warn
    };
    let report = olc_config::report_unused_keys(&loaded.config_json, policy)?;
    for ptr in &report.unused_leaf_pointers {
        warn!(pointer = %ptr, "config key is not read by olc");
    }

    let out = Output {
        format: cfg.format,
        pretty: cfg.pretty,
    };

    match cli.cmd {
        Commands::Classify { input } => {
            let raw = commands::read_input(&input)?;
            out.print_block(&commands::classify::run(&raw)?)?;
        }

        Commands::Event { input, watch } => {
            let raw = commands::read_input(&input)?;
            out.print_block(&commands::event::run(&raw, watch.as_deref())?)?;
        }

        Commands::Replay {
            input,
            watch,
            only_refresh,
        } => {
            let raw = commands::read_input(&input)?;
            let opts = ReplayOptions {
                watch: watch.as_deref(),
                only_refresh: only_refresh.unwrap_or(cfg.only_refresh),
            };
            let (records, totals) = replay_lines(&raw, opts);
            for r in &records {
                out.print_inline(r)?;
            }
            out.print_inline(&totals.record())?;
        }

        Commands::Catalog { aliases, triggers } => {
            let records = if aliases {
                commands::catalog::alias_records()
            } else if triggers {
                commands::catalog::trigger_records()
            } else {
                commands::catalog::catalog_records()
            };
            for r in &records {
                out.print_inline(r)?;
            }
        }

        Commands::ConfigHash { paths } => {
            let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
            let loaded = olc_config::load_layered_yaml(&path_refs)?;
            println!("config_hash={}", loaded.config_hash);
            println!("{}", loaded.canonical_json);
        }
    }

    Ok(())
}

fn load_config(paths: &[String]) -> Result<LoadedConfig> {
    if paths.is_empty() {
        return LoadedConfig::empty();
    }
    let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
    olc_config::load_layered_yaml(&path_refs)
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over config.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
