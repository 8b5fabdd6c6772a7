use std::cmp::min;
use std::time::Instant;

use tracing::debug;
use url::Url;

use self::panel::PanelController;
use self::refresh::RefreshScheduler;
use super::metrics::MetricsBoard;
use super::registry::PanelDescriptor;
use super::settings::Settings;
use super::types::{LoadRequest, Mode};
use crate::fetch::LoadOutcome;

pub mod filter;
pub mod panel;
pub mod refresh;

/// Whole-application state. The registry is the immutable catalogue;
/// `panels` holds one controller per *mounted* panel, the subset that
/// passes the visibility filter, in registry order. Controllers for
/// panels filtered out are dropped along with all their runtime state.
pub struct App {
    registry: Vec<PanelDescriptor>,
    pub panels: Vec<PanelController>,
    pub query: String,
    pub selected: usize,
    pub scheduler: RefreshScheduler,
    pub metrics: MetricsBoard,
    pub mode: Mode,
    pub settings: Settings,
    pub dark_theme: bool,
}

impl App {
    pub fn new(registry: Vec<PanelDescriptor>, settings: Settings) -> Self {
        let panels = registry.iter().cloned().map(PanelController::new).collect();
        let scheduler = RefreshScheduler::new(settings.refresh_period());
        let metrics = MetricsBoard::new(settings.jitter_period());
        let dark_theme = settings.dark_theme();
        App {
            registry,
            panels,
            query: String::new(),
            selected: 0,
            scheduler,
            metrics,
            mode: Mode::Normal,
            settings,
            dark_theme,
        }
    }

    pub fn registry(&self) -> &[PanelDescriptor] {
        &self.registry
    }

    /// Update the search query and remount the panel set accordingly.
    /// Controllers for panels that stay visible are kept as-is (a live
    /// panel does not lose its state because the query narrowed around
    /// it); newly visible panels mount fresh in demo mode.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        let visible = filter::visible_panels(&self.registry, &self.query);
        let mut previous = std::mem::take(&mut self.panels);
        self.panels = visible
            .into_iter()
            .map(|descriptor| {
                match previous.iter().position(|c| c.id() == descriptor.id) {
                    Some(idx) => previous.remove(idx),
                    None => PanelController::new(descriptor.clone()),
                }
            })
            .collect();
        // Anything left in `previous` is unmounted here; in-flight loads
        // for those panels will find no controller and be dropped.
        self.selected = min(self.selected, self.panels.len().saturating_sub(1));
    }

    pub fn selected_panel(&self) -> Option<&PanelController> {
        self.panels.get(self.selected)
    }

    pub fn selected_panel_mut(&mut self) -> Option<&mut PanelController> {
        self.panels.get_mut(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.panels.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Toggle the selected panel between demo and live.
    pub fn toggle_selected(&mut self) -> Option<LoadRequest> {
        self.selected_panel_mut().and_then(PanelController::toggle_mode)
    }

    /// Retry the selected panel's failed load.
    pub fn retry_selected(&mut self) -> Option<LoadRequest> {
        self.selected_panel_mut().and_then(PanelController::retry)
    }

    /// External locator of the selected panel, for opening outside the
    /// embedded surface. Reads state only.
    pub fn selected_external_url(&self) -> Option<Url> {
        self.selected_panel()
            .map(|p| p.descriptor().external_url.clone())
    }

    /// Flip the global auto-refresh switch; returns the new state.
    pub fn toggle_auto_refresh(&mut self, now: Instant) -> bool {
        self.scheduler.toggle(now)
    }

    /// Route a load outcome to the mounted controller that owns it.
    /// Outcomes for unmounted panels are dropped: the panel was
    /// filtered out (or never existed) and has no state to update.
    pub fn on_load_outcome(&mut self, outcome: LoadOutcome) {
        let result = outcome.result.map_err(|e| e.to_string());
        match self
            .panels
            .iter_mut()
            .find(|p| p.id() == outcome.panel_id)
        {
            Some(panel) => {
                panel.on_load_result(outcome.token, result);
            }
            None => debug!(panel = %outcome.panel_id, "load outcome for unmounted panel dropped"),
        }
    }

    /// One cooperative tick: jitter the demo metrics when due, and when
    /// the refresh cycle fires, fan `force_reload` out over every
    /// mounted panel. Demo panels ignore the reload; each live panel
    /// restarts its own load independently.
    pub fn tick(&mut self, now: Instant) -> Vec<LoadRequest> {
        self.metrics.maybe_jitter(now, &mut rand::rng());
        if self.scheduler.poll(now) {
            self.panels
                .iter_mut()
                .filter_map(PanelController::force_reload)
                .collect()
        } else {
            Vec::new()
        }
    }

    pub fn show_message(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.mode = Mode::Message {
            title: title.into(),
            content: content.into(),
        };
    }

    pub fn dismiss_dialog(&mut self) {
        self.mode = Mode::Normal;
    }
}
