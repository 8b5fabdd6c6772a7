use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use url::Url;

use threatdeck::app::core::panel::PanelController;
use threatdeck::app::{registry, settings, types};
use threatdeck::export;
use threatdeck::fetch;
use threatdeck::runner;

#[derive(Parser)]
#[command(
    name = "threatdeck",
    version,
    about = "Terminal dashboard for cyber threat intelligence visualizations"
)]
struct Cli {
    /// Settings file to use instead of the platform default.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the dashboard host from settings.
    #[arg(long, value_name = "URL")]
    base_url: Option<Url>,

    /// Override the auto-refresh cadence, in seconds.
    #[arg(long, value_name = "SECS")]
    refresh_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Probe every registered dashboard and report reachability.
    Check,
    /// Export the demo dashboard to a document without opening the UI.
    Export {
        /// Output directory (defaults to the configured export dir).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => settings::load_settings_from(path)?,
        None => settings::load_settings()?,
    };
    if let Some(base) = cli.base_url {
        settings.base_url = base;
    }
    if let Some(secs) = cli.refresh_secs {
        settings.refresh_secs = secs;
    }

    // Subcommands log to stderr; the TUI owns the terminal, so it logs
    // to a file instead.
    let headless = cli.command.is_some();
    let _guard = init_tracing(headless)?;

    match cli.command {
        None => runner::run_app(settings),
        Some(Command::Check) => run_check(&settings),
        Some(Command::Export { out }) => run_export(&settings, out),
    }
}

fn init_tracing(
    headless: bool,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        Ok(None)
    } else {
        let dir = settings::log_dir().context("locating log directory")?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(&dir, "threatdeck.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Ok(Some(guard))
    }
}

fn run_check(settings: &settings::Settings) -> anyhow::Result<()> {
    let catalogue = registry::builtin(&settings.base_url)?;
    // Probes get a bounded timeout so an unreachable host reports
    // instead of hanging; a configured load timeout takes precedence.
    let timeout = settings
        .load_timeout()
        .unwrap_or(Duration::from_secs(10));
    let client = fetch::build_client(Some(timeout))?;

    let reports = fetch::probe_registry(&client, &catalogue);
    let mut failures = 0usize;
    for report in &reports {
        match &report.result {
            Ok(summary) => println!(
                "ok      {:<22} HTTP {} · {}",
                report.panel_id,
                summary.http_status,
                types::human_bytes(summary.bytes)
            ),
            Err(e) => {
                failures += 1;
                println!("failed  {:<22} {e}", report.panel_id);
            }
        }
    }
    println!(
        "{} of {} dashboards reachable",
        reports.len() - failures,
        reports.len()
    );
    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn run_export(settings: &settings::Settings, out: Option<PathBuf>) -> anyhow::Result<()> {
    let catalogue = registry::builtin(&settings.base_url)?;
    let panels: Vec<PanelController> = catalogue.into_iter().map(PanelController::new).collect();
    let snapshot = export::capture(&panels, "", false);
    let dir = out
        .or_else(|| settings.export_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let path = export::write_document(&snapshot, &dir)
        .with_context(|| format!("writing document into {}", dir.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
