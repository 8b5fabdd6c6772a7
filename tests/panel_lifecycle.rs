use chrono::Local;
use threatdeck::app::registry;
use threatdeck::app::settings::Settings;
use threatdeck::app::types::LiveSummary;
use threatdeck::fetch::{FetchError, LoadOutcome};
use threatdeck::{App, LoadStatus, PanelController};

fn app() -> App {
    let settings = Settings::default();
    let catalogue = registry::builtin(&settings.base_url).unwrap();
    App::new(catalogue, settings)
}

fn ok_summary() -> LiveSummary {
    LiveSummary {
        http_status: 200,
        bytes: 2048,
        fetched_at: Local::now(),
    }
}

#[test]
fn going_live_always_starts_loading_with_a_fresh_token() {
    let mut app = app();
    let mut seen = Vec::new();
    // Repeated demo → live round trips never reuse a token.
    for _ in 0..3 {
        let req = app.panels[0].toggle_mode().expect("entering live loads");
        assert_eq!(app.panels[0].load_status(), Some(&LoadStatus::Loading));
        assert!(!seen.contains(&req.token), "token reissued");
        seen.push(req.token);
        app.panels[0].toggle_mode();
    }
}

#[test]
fn mismatched_token_leaves_state_untouched() {
    let mut app = app();
    let stale = app.panels[0].toggle_mode().unwrap();
    let current = app.panels[0].force_reload().unwrap();

    app.on_load_outcome(LoadOutcome {
        panel_id: stale.panel_id,
        token: stale.token,
        result: Ok(ok_summary()),
    });

    assert_eq!(app.panels[0].load_status(), Some(&LoadStatus::Loading));
    assert_eq!(app.panels[0].current_token(), Some(current.token));
}

#[test]
fn retry_is_inert_unless_failed() {
    let settings = Settings::default();
    let catalogue = registry::builtin(&settings.base_url).unwrap();
    let mut controller = PanelController::new(catalogue[0].clone());

    assert!(controller.retry().is_none());

    let req = controller.toggle_mode().unwrap();
    assert!(controller.retry().is_none());

    controller.on_load_result(req.token, Ok(ok_summary()));
    assert!(controller.retry().is_none());

    let req = controller.force_reload().unwrap();
    controller.on_load_result(req.token, Err("bad gateway".to_string()));
    assert!(controller.retry().is_some());
}

#[test]
fn scheduler_reload_supersedes_a_loaded_panel() {
    // Load completes, the refresh cycle forces a reload, then the
    // first attempt's success arrives late.
    let mut app = app();
    let first = app.panels[0].toggle_mode().unwrap();
    app.on_load_outcome(LoadOutcome {
        panel_id: first.panel_id.clone(),
        token: first.token,
        result: Ok(ok_summary()),
    });
    assert!(matches!(
        app.panels[0].load_status(),
        Some(LoadStatus::Loaded(_))
    ));

    let second = app.panels[0].force_reload().unwrap();
    assert_eq!(app.panels[0].load_status(), Some(&LoadStatus::Loading));

    app.on_load_outcome(LoadOutcome {
        panel_id: first.panel_id,
        token: first.token,
        result: Ok(ok_summary()),
    });
    assert_eq!(app.panels[0].load_status(), Some(&LoadStatus::Loading));
    assert_eq!(app.panels[0].current_token(), Some(second.token));
}

#[test]
fn failure_is_contained_to_one_panel() {
    let mut app = app();
    let a = app.panels[0].toggle_mode().unwrap();
    let b = app.panels[1].toggle_mode().unwrap();

    app.on_load_outcome(LoadOutcome {
        panel_id: a.panel_id,
        token: a.token,
        result: Err(FetchError::Status { code: 502 }),
    });

    assert!(matches!(
        app.panels[0].load_status(),
        Some(LoadStatus::Failed(_))
    ));
    assert_eq!(app.panels[1].load_status(), Some(&LoadStatus::Loading));
    assert_eq!(app.panels[1].current_token(), Some(b.token));
}

#[test]
fn mode_round_trip_clears_a_failure() {
    let mut app = app();
    let req = app.panels[0].toggle_mode().unwrap();
    app.on_load_outcome(LoadOutcome {
        panel_id: req.panel_id,
        token: req.token,
        result: Err(FetchError::Status { code: 500 }),
    });

    app.panels[0].toggle_mode(); // back to demo
    assert!(app.panels[0].load_status().is_none());

    let fresh = app.panels[0].toggle_mode().unwrap(); // live again
    assert_eq!(app.panels[0].load_status(), Some(&LoadStatus::Loading));
    assert_ne!(fresh.token, req.token);
}
