use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anirec_cli::{commands, interactive};
use anirec_core::config::CliOverrides;
use anirec_observability::init_tracing;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "anirec")]
#[command(about = "anirec - synopsis-based anime recommendations\nTF-IDF similarity over a CSV catalog")]
#[command(version)]
struct Cli {
    /// Catalog CSV file
    #[arg(long, global = true, env = "ANIREC_CATALOG_PATH")]
    catalog: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true, env = "ANIREC_CONFIG")]
    config: Option<PathBuf>,

    /// Log level when ANIREC_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Explanation provider (none, template, ollama)
    #[arg(long, global = true)]
    explain_provider: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend titles similar to your favorites
    Recommend {
        /// A favorite title, exactly as in the catalog (repeatable)
        #[arg(short, long = "favorite", required = true)]
        favorites: Vec<String>,
        /// Number of recommendations
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
        /// Attach a short explanation to each recommendation
        #[arg(short, long)]
        explain: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Search synopses with free text
    Search {
        /// Query terms
        #[arg(required = true)]
        terms: Vec<String>,
        /// Number of results
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the first catalog entries
    Head {
        #[arg(short, default_value = "5")]
        n: usize,
    },
    /// Short pitch for one title
    Pitch {
        /// Title exactly as in the catalog
        title: String,
    },
    /// Catalog and index statistics
    Stats {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Explain how recommendations are computed
    About,
    /// Interactive menu
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        catalog_path: cli.catalog.clone(),
        explain_provider: cli.explain_provider.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = commands::load_config(cli.config.as_deref(), &overrides)?;
    init_tracing(&config.observability);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::About => commands::about(&mut out)?,
        Command::Recommend {
            favorites,
            top_n,
            explain,
            json,
        } => {
            let mut engine = commands::build_engine(config, explain)?;
            commands::recommend(&mut engine, &favorites, top_n, json, &mut out)?;
        }
        Command::Search { terms, top_k, json } => {
            let engine = commands::build_engine(config, false)?;
            commands::search(&engine, &terms.join(" "), top_k, json, &mut out)?;
        }
        Command::Head { n } => {
            let engine = commands::build_engine(config, false)?;
            commands::head(&engine, n, &mut out)?;
        }
        Command::Pitch { title } => {
            let mut engine = commands::build_engine(config, true)?;
            commands::pitch(&mut engine, &title, &mut out)?;
        }
        Command::Stats { json } => {
            let engine = commands::build_engine(config, false)?;
            commands::stats(&engine, json, &mut out)?;
        }
        Command::Interactive => {
            let explain = config.explain.provider != "none";
            let mut engine = commands::build_engine(config, explain)?;
            let stdin = io::stdin();
            interactive::run(&mut engine, stdin.lock(), &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
