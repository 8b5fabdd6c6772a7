use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use tracing::{info, warn};
use url::Url;

use crate::app::settings::{self, Settings};
use crate::app::{registry, Action, App};
use crate::export;
use crate::fetch;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal};
use crate::ui;

/// Cadence of the cooperative loop: how long one iteration waits for
/// input before re-checking timers and load outcomes.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app(settings: Settings) -> anyhow::Result<()> {
    let catalogue = registry::builtin(&settings.base_url)?;
    let client = fetch::build_client(settings.load_timeout())?;
    let export_dir = settings
        .export_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let mut app = App::new(catalogue, settings);

    // Load outcomes flow back from the fetch workers through this
    // channel and are drained once per loop iteration.
    let (tx, rx) = mpsc::channel();

    let mut terminal = init_terminal()?;

    loop {
        terminal.draw(|f| ui::ui(f, &app))?;

        while let Ok(outcome) = rx.try_recv() {
            app.on_load_outcome(outcome);
        }

        // Metric jitter and the auto-refresh cycle; a due refresh fans
        // out one reload per live panel.
        for request in app.tick(Instant::now()) {
            fetch::spawn_load(&client, request, tx.clone());
        }

        if poll(POLL_INTERVAL)? {
            if let InputEvent::Key(key) = read_event()? {
                match handlers::handle_key(&mut app, key.code)? {
                    Action::Quit => {
                        persist_theme(&mut app);
                        break;
                    }
                    Action::Load(requests) => {
                        for request in requests {
                            fetch::spawn_load(&client, request, tx.clone());
                        }
                    }
                    Action::Export => {
                        let snapshot =
                            export::capture(&app.panels, &app.query, app.scheduler.is_enabled());
                        export::spawn_export(snapshot, export_dir.clone());
                    }
                    Action::OpenExternal(url) => open_in_browser(&url),
                    Action::None => {}
                }
            }
        }
    }

    restore_terminal(terminal)?;
    Ok(())
}

/// Carry a runtime theme switch back into the settings file so the next
/// session starts the same way. Best-effort on exit.
fn persist_theme(app: &mut App) {
    let theme = if app.dark_theme { "dark" } else { "light" };
    if app.settings.theme != theme {
        app.settings.theme = theme.to_string();
        if let Err(e) = settings::save_settings(&app.settings) {
            warn!(error = %e, "could not persist settings");
        }
    }
}

/// Hand the locator to the system browser. Fire-and-forget: a missing
/// opener is logged, never surfaced as an application error.
fn open_in_browser(url: &Url) {
    #[cfg(target_os = "macos")]
    let spawned = std::process::Command::new("open").arg(url.as_str()).spawn();
    #[cfg(all(unix, not(target_os = "macos")))]
    let spawned = std::process::Command::new("xdg-open")
        .arg(url.as_str())
        .spawn();
    #[cfg(windows)]
    let spawned = std::process::Command::new("cmd")
        .args(["/C", "start", "", url.as_str()])
        .spawn();

    match spawned {
        Ok(_) => info!(%url, "opened dashboard in external browser"),
        Err(e) => warn!(error = %e, "could not launch external browser"),
    }
}
