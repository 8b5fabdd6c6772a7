use ratatui::backend::TestBackend;
use ratatui::Terminal;
use threatdeck::app::registry;
use threatdeck::app::settings::Settings;
use threatdeck::fetch::{FetchError, LoadOutcome};
use threatdeck::{ui, App};

fn app() -> App {
    let settings = Settings::default();
    let catalogue = registry::builtin(&settings.base_url).unwrap();
    App::new(catalogue, settings)
}

/// Draw one frame into a test backend and flatten it to a string.
fn draw(app: &App) -> String {
    let backend = TestBackend::new(110, 45);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::ui(f, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer.content.iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn dashboard_shows_panel_titles_and_metrics() {
    let screen = draw(&app());
    assert!(screen.contains("Global Threat Map"));
    assert!(screen.contains("Threat Distribution"));
    assert!(screen.contains("Active Threats"));
    assert!(screen.contains("auto-refresh off"));
}

#[test]
fn failed_live_panel_offers_retry() {
    let mut app = app();
    let req = app.panels[0].toggle_mode().unwrap();
    app.on_load_outcome(LoadOutcome {
        panel_id: req.panel_id,
        token: req.token,
        result: Err(FetchError::Status { code: 502 }),
    });
    let screen = draw(&app);
    assert!(screen.contains("failed to load dashboard"));
    assert!(screen.contains("r: retry"));
}

#[test]
fn loading_panel_shows_spinner_text() {
    let mut app = app();
    app.panels[1].toggle_mode().unwrap();
    let screen = draw(&app);
    assert!(screen.contains("loading dashboard"));
}

#[test]
fn empty_filter_result_shows_a_hint() {
    let mut app = app();
    app.set_query("xyz");
    let screen = draw(&app);
    assert!(screen.contains("no visualizations match"));
}
