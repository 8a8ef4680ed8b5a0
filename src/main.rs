use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use binrelease::config::{WrapperConfig, log_path};
use binrelease::install::Installer;
use binrelease::install::platform::current_label;
use binrelease::logging::{LogConfig, init_logging};
use binrelease::release::GitHubReleases;
use binrelease::version::{NormalizeStrategy, PrefixStrippingStrategy, get_normalized_version};

#[derive(Parser)]
#[command(name = "binrelease")]
#[command(version, about = "Install the latest GitHub release binary into a wrapper package")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to a daily-rolling file instead of stderr
    /// (defaults to the binrelease data directory when no path is given)
    #[arg(long, global = true, num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch, extract and record the latest release
    Install {
        /// Path to the wrapper config file
        #[arg(short, long, default_value = "binrelease.json")]
        config: PathBuf,

        /// Platform label to install for (defaults to the current platform)
        #[arg(long)]
        platform: Option<String>,
    },
    /// Print the normalized form of a version string
    Normalize {
        #[arg(value_name = "VERSION")]
        raw: String,

        /// Tag prefix to strip before normalizing, e.g. "v"
        #[arg(long)]
        prefix: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli.log_file.map(|path| path.unwrap_or_else(log_path));
    let log_config = LogConfig::from_cli(cli.verbose, cli.log_json, log_file);
    let _guard = init_logging(&log_config)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command))
}

async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Install { config, platform } => install(&config, platform).await,
        Command::Normalize { raw, prefix } => {
            let strategy: Option<Box<dyn NormalizeStrategy>> =
                prefix.map(|p| Box::new(PrefixStrippingStrategy::new(p)) as _);
            let normalized = get_normalized_version(&raw, strategy.as_deref()).await?;
            println!("{}", normalized);
            Ok(())
        }
    }
}

async fn install(config_path: &Path, platform: Option<String>) -> anyhow::Result<()> {
    let config = WrapperConfig::load(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let root = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let platform = platform.unwrap_or_else(current_label);

    let source = GitHubReleases::new(&config.github.base_url).with_token(config.github.token());
    let installer = Installer::new(config, root, Arc::new(source));

    info!("Installing for platform {}", platform);
    let outcome = installer.install(&platform).await?;

    println!("{} -> {}", outcome.tag, outcome.version);
    for (command, path) in &outcome.executables {
        println!("  {}: {}", command, path.display());
    }
    Ok(())
}
