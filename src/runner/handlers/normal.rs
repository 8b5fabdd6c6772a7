use std::time::Instant;

use crate::app::settings::keybinds;
use crate::app::{Action, App, Mode};
use crate::input::KeyCode;

const ABOUT_TEXT: &str = "Hackathon prototype of a national cyber threat intelligence \
dashboard. Each panel shows a static demonstration dataset until switched live, at which \
point it tracks an externally hosted Kibana view. Auto-refresh reloads every live panel \
on a fixed cadence; export captures the visible dashboard to a paginated document. All \
metrics shown in demo mode are illustrative.";

/// Normal-mode keys: navigation, per-panel lifecycle controls and the
/// global toggles.
pub fn handle_normal(app: &mut App, code: KeyCode) -> anyhow::Result<Action> {
    if keybinds::is_quit(&code) {
        return Ok(Action::Quit);
    }

    if keybinds::is_down(&code) {
        app.select_next();
    } else if keybinds::is_up(&code) {
        app.select_prev();
    } else if keybinds::is_search(&code) {
        app.mode = Mode::Search {
            buffer: app.query.clone(),
        };
    } else if keybinds::is_toggle_live(&code) {
        if let Some(request) = app.toggle_selected() {
            return Ok(Action::Load(vec![request]));
        }
    } else if keybinds::is_retry(&code) {
        if let Some(request) = app.retry_selected() {
            return Ok(Action::Load(vec![request]));
        }
    } else if keybinds::is_open_external(&code) {
        if let Some(url) = app.selected_external_url() {
            return Ok(Action::OpenExternal(url));
        }
    } else if keybinds::is_auto_refresh(&code) {
        app.toggle_auto_refresh(Instant::now());
    } else if keybinds::is_export(&code) {
        return Ok(Action::Export);
    } else if keybinds::is_theme(&code) {
        app.dark_theme = !app.dark_theme;
    } else if keybinds::is_info(&code) {
        app.show_message("About this demo", ABOUT_TEXT);
    }

    Ok(Action::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::registry;
    use crate::app::settings::Settings;

    fn app() -> App {
        let settings = Settings::default();
        let registry = registry::builtin(&settings.base_url).unwrap();
        App::new(registry, settings)
    }

    #[test]
    fn quit_key_requests_exit() {
        let mut app = app();
        assert_eq!(handle_normal(&mut app, KeyCode::Char('q')).unwrap(), Action::Quit);
    }

    #[test]
    fn toggle_on_demo_panel_starts_a_load() {
        let mut app = app();
        match handle_normal(&mut app, KeyCode::Enter).unwrap() {
            Action::Load(requests) => assert_eq!(requests.len(), 1),
            other => panic!("unexpected action: {other:?}"),
        }
        assert!(app.panels[0].is_live());
    }

    #[test]
    fn toggle_back_to_demo_loads_nothing() {
        let mut app = app();
        handle_normal(&mut app, KeyCode::Enter).unwrap();
        assert_eq!(handle_normal(&mut app, KeyCode::Enter).unwrap(), Action::None);
        assert!(!app.panels[0].is_live());
    }

    #[test]
    fn retry_on_healthy_panel_is_inert() {
        let mut app = app();
        assert_eq!(handle_normal(&mut app, KeyCode::Char('r')).unwrap(), Action::None);
    }

    #[test]
    fn auto_refresh_key_flips_the_scheduler() {
        let mut app = app();
        handle_normal(&mut app, KeyCode::Char('a')).unwrap();
        assert!(app.scheduler.is_enabled());
        handle_normal(&mut app, KeyCode::Char('a')).unwrap();
        assert!(!app.scheduler.is_enabled());
    }

    #[test]
    fn search_key_opens_prompt_with_current_query() {
        let mut app = app();
        app.set_query("threat");
        handle_normal(&mut app, KeyCode::Char('/')).unwrap();
        assert_eq!(
            app.mode,
            Mode::Search {
                buffer: "threat".to_string()
            }
        );
    }
}
