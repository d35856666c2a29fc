use std::path::PathBuf;

use chrono::Local;
use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moonphase::{
    cli, config, error, management::PhaseCacheManager, types::OutputMode, usno::UsnoClient,
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
  args_conflicts_with_subcommands = true // phase options apply to the default command only
)]
struct Cli {
    /// Print the phase name in plain English instead of a moon glyph
    #[clap(long)]
    plaintext: bool,

    /// File to cache the resolved phase in (defaults to ~/.moonphase)
    #[clap(long, value_name = "PATH")]
    savefile: Option<PathBuf>,

    /// Date to get the phase for (YYYY-MM-DD), defaults to today
    #[clap(long)]
    date: Option<String>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the major phase events around a date
    Events(EventsOptions),

    /// Show or clear the cached phase
    Cache(CacheOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct EventsOptions {
    /// Date to list events around (YYYY-MM-DD), defaults to today
    #[clap(long)]
    pub date: Option<String>,

    /// Number of events to request
    #[clap(long)]
    pub count: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CacheOptions {
    /// Remove the cache file
    #[clap(long)]
    pub clear: bool,

    /// Cache file to inspect (defaults to ~/.moonphase)
    #[clap(long, value_name = "PATH")]
    pub savefile: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn cache_manager(savefile: Option<PathBuf>) -> PhaseCacheManager {
    match savefile {
        Some(path) => PhaseCacheManager::new(path),
        None => PhaseCacheManager::from_config(),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Ignoring configuration file: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        None => {
            let request = cli::PhaseRequest {
                date: cli.date,
                mode: OutputMode::from_plaintext_flag(cli.plaintext),
                count: config::phase_count(),
                lookback_days: config::lookback_days(),
            };
            let cache = cache_manager(cli.savefile);
            match cli::phase(&request, &Local, &UsnoClient::from_env(), &cache).await {
                Ok(line) => println!("{}", line),
                Err(e) => error!("Cannot determine moon phase: {}", e),
            }
        }
        Some(Command::Events(opt)) => {
            let count = opt.count.unwrap_or_else(config::phase_count);
            match cli::events(
                opt.date.as_deref(),
                count,
                config::lookback_days(),
                &Local,
                &UsnoClient::from_env(),
            )
            .await
            {
                Ok(output) => println!("{}", output),
                Err(e) => error!("Cannot list phase events: {}", e),
            }
        }
        Some(Command::Cache(opt)) => {
            if let Err(e) = cli::cache(opt.clear, &cache_manager(opt.savefile)).await {
                error!("{}", e);
            }
        }
        Some(Command::Completions(opt)) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
