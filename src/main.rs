use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::{Level, error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use unifi_release_watch::checker::{self, Outcome};
use unifi_release_watch::config::{
    DEFAULT_DOCKERFILE_PATH, DEFAULT_LEDGER_PATH, DOCKERFILE_VERSION_MARKER, ResolverConfig,
};
use unifi_release_watch::output::OutputTarget;
use unifi_release_watch::release::resolver::ReleaseResolver;
use unifi_release_watch::store::{ledger, pin};

#[derive(Parser)]
#[command(name = "unifi-release-watch")]
#[command(version, about = "Watches for new UniFi Network Application GA releases")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the newest GA release and report whether it is new
    Check {
        /// File recording already processed versions
        #[arg(long, default_value = DEFAULT_LEDGER_PATH)]
        ledger: PathBuf,
    },
    /// Pin a version in the Dockerfile and record it in the versions file
    Update {
        /// Version to pin
        version: String,

        /// Dockerfile carrying the version pin
        #[arg(long, default_value = DEFAULT_DOCKERFILE_PATH)]
        dockerfile: PathBuf,

        /// File recording already processed versions
        #[arg(long, default_value = DEFAULT_LEDGER_PATH)]
        ledger: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Check { ledger } => tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(cmd_check(&ledger)),
        Command::Update {
            version,
            dockerfile,
            ledger,
        } => cmd_update(&version, &dockerfile, &ledger),
    }
}

async fn cmd_check(ledger_path: &Path) -> anyhow::Result<()> {
    let resolver = ReleaseResolver::new(&ResolverConfig::default());

    let latest = resolver.resolve_latest_ga().await?;
    let known = ledger::load_known_versions(ledger_path)?;
    let outcome = checker::detect(&latest, &known);

    match &outcome {
        Outcome::Unchanged => info!("Version {} has already been processed", latest.version),
        Outcome::NewVersion { version, .. } => info!("Version {} is new", version),
    }

    OutputTarget::from_env().emit(&outcome)?;
    Ok(())
}

fn cmd_update(version: &str, dockerfile: &Path, ledger_path: &Path) -> anyhow::Result<()> {
    let version = version.trim();
    if version.is_empty() {
        bail!("version must not be empty");
    }

    // Both files get their attempt even when one fails, so a broken
    // Dockerfile does not block the ledger and vice versa.
    let pin_result = pin::update_version_pin(dockerfile, DOCKERFILE_VERSION_MARKER, version);
    let ledger_result = ledger::append_if_absent(ledger_path, version);

    match (pin_result, ledger_result) {
        (Ok(()), Ok(_)) => Ok(()),
        (Err(pin_err), Ok(_)) => Err(pin_err.into()),
        (Ok(()), Err(ledger_err)) => Err(ledger_err.into()),
        (Err(pin_err), Err(ledger_err)) => {
            error!("{}", ledger_err);
            Err(pin_err.into())
        }
    }
}

/// Logs go to stderr so stdout stays a pure data channel.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .ok();
}
