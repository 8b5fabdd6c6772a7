use std::time::{Duration, Instant};

use threatdeck::app::core::refresh::RefreshScheduler;
use threatdeck::app::registry;
use threatdeck::app::settings::Settings;
use threatdeck::App;

fn app() -> App {
    let settings = Settings::default();
    let catalogue = registry::builtin(&settings.base_url).unwrap();
    App::new(catalogue, settings)
}

#[test]
fn enabling_twice_yields_exactly_one_timer() {
    let mut scheduler = RefreshScheduler::new(Duration::from_secs(30));
    let t0 = Instant::now();
    scheduler.enable(t0);
    scheduler.enable(t0 + Duration::from_secs(10));

    // One timer, still on the original schedule: exactly one tick fires
    // across the first period plus a margin.
    let mut ticks = 0;
    for s in 0..=35 {
        if scheduler.poll(t0 + Duration::from_secs(s)) {
            ticks += 1;
        }
    }
    assert_eq!(ticks, 1);
}

#[test]
fn disable_without_enable_is_a_no_op() {
    let mut scheduler = RefreshScheduler::new(Duration::from_secs(30));
    scheduler.disable();
    scheduler.disable();
    assert!(!scheduler.is_enabled());
    assert!(!scheduler.poll(Instant::now() + Duration::from_secs(120)));
}

#[test]
fn mounting_mid_interval_does_not_reload_retroactively() {
    let mut app = app();
    let now = Instant::now();
    let period = app.settings.refresh_period();

    app.panels[0].toggle_mode().unwrap();
    app.scheduler.enable(now);

    // Mid-interval, another panel goes live. Nothing fires early.
    assert!(app.tick(now + period / 2).is_empty());
    app.panels[1].toggle_mode().unwrap();
    assert!(app.tick(now + period * 3 / 4).is_empty());

    // At the tick, both live panels reload; the newcomer was simply
    // picked up because it was mounted at tick time.
    let requests = app.tick(now + period);
    assert_eq!(requests.len(), 2);
}

#[test]
fn unmounted_panels_are_skipped_at_tick_time() {
    let mut app = app();
    let now = Instant::now();
    let period = app.settings.refresh_period();

    app.panels[0].toggle_mode().unwrap(); // Global Threat Map
    app.panels[1].toggle_mode().unwrap(); // Threat Distribution
    app.scheduler.enable(now);

    // Narrow the dashboard so only the map stays mounted.
    app.set_query("global");
    let requests = app.tick(now + period);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].panel_id, "global-threat-map");
}

#[test]
fn disabling_stops_the_cycle() {
    let mut app = app();
    let now = Instant::now();
    let period = app.settings.refresh_period();

    app.panels[0].toggle_mode().unwrap();
    app.toggle_auto_refresh(now);
    assert!(app.scheduler.is_enabled());
    app.toggle_auto_refresh(now);
    assert!(!app.scheduler.is_enabled());

    assert!(app.tick(now + period * 2).is_empty());
}
