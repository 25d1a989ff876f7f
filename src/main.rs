use std::fs::File;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use syncboard::{App, Config, NoopHook};

#[derive(Parser, Debug)]
#[command(
    name = "syncboard",
    version,
    about = "Terminal dashboard where every panel follows one shared state"
)]
struct Cli {
    /// TOML file with buttons, quick-fills and the select hook
    #[arg(long, short = 'c', global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file (interactive mode logs nowhere otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the dashboard for a given state as plain text, without a terminal
    Snapshot(SnapshotArgs),
}

#[derive(Parser, Debug)]
struct SnapshotArgs {
    /// Button to select: its display text, or a 1-based index
    #[arg(long, value_name = "TEXT|INDEX")]
    select: Option<String>,

    /// Input text
    #[arg(long, value_name = "TEXT")]
    text: Option<String>,

    /// Width of the dashboard in cells
    #[arg(long, default_value_t = 100)]
    width: u16,
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs go to `log_file` when given, else to stderr if `stderr_fallback`.
fn init_tracing(verbose: bool, log_file: Option<&Path>, stderr_fallback: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|err| anyhow!(err))
        }
        None if stderr_fallback => tracing_subscriber::fmt()
            .with_env_filter(env_filter(verbose))
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .map_err(|err| anyhow!(err)),
        None => Ok(()),
    }
}

fn run_interactive(config: Config) -> Result<()> {
    let app = Rc::new(App::new(config));
    let handle = syncboard::mount(app).context("failed to take over the terminal")?;
    let result = syncboard::run(&handle);
    handle.unmount();
    result.context("event loop failed")
}

fn run_snapshot(config: Config, args: SnapshotArgs) -> Result<()> {
    let selection = args
        .select
        .as_deref()
        .map(|reference| config.find_button(reference))
        .transpose()?;

    // A preview never fires the select hook
    let app = App::with_hook(config, Box::new(NoopHook));
    if let Some(index) = selection {
        app.selector().select(index);
    }
    if let Some(text) = args.text {
        app.input().set_text(text);
    }

    info!(width = args.width, revision = app.store().revision(), "snapshot");
    println!("{}", app.render_text(args.width));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = cli.command.is_none();
    init_tracing(cli.verbose, cli.log_file.as_deref(), !interactive)?;

    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        None => run_interactive(config),
        Some(Commands::Snapshot(args)) => run_snapshot(config, args),
    }
}
