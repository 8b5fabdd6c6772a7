use tracing::debug;

use crate::app::registry::PanelDescriptor;
use crate::app::types::{LiveSummary, LoadRequest, LoadStatus, PanelView, ReloadToken};

/// Per-panel lifecycle controller.
///
/// Owns one panel's runtime state: the demo/live mode and, while live,
/// the load lifecycle of the externally-hosted view. The controller
/// performs no I/O: operations that need the network return a
/// `LoadRequest` for the caller to dispatch, and results come back via
/// `on_load_result`. This keeps the state machine unit-testable without
/// rendering or a network.
///
/// Lives only while its panel is mounted; unmounting (or filtering the
/// panel out) drops the controller and with it every pending token, so
/// late results for a gone panel can never land anywhere.
pub struct PanelController {
    descriptor: PanelDescriptor,
    view: PanelView,
    /// Monotonic token source. Never reset, so every token issued over
    /// the controller's lifetime is distinct.
    token_seq: u64,
}

impl PanelController {
    /// New panels always start in demo mode.
    pub fn new(descriptor: PanelDescriptor) -> Self {
        PanelController {
            descriptor,
            view: PanelView::Demo,
            token_seq: 0,
        }
    }

    pub fn descriptor(&self) -> &PanelDescriptor {
        &self.descriptor
    }

    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    pub fn view(&self) -> &PanelView {
        &self.view
    }

    pub fn is_live(&self) -> bool {
        self.view.is_live()
    }

    /// Token of the load attempt currently in effect, if live.
    pub fn current_token(&self) -> Option<ReloadToken> {
        match &self.view {
            PanelView::Live { token, .. } => Some(*token),
            PanelView::Demo => None,
        }
    }

    pub fn load_status(&self) -> Option<&LoadStatus> {
        match &self.view {
            PanelView::Live { status, .. } => Some(status),
            PanelView::Demo => None,
        }
    }

    /// Flip between demo and live. Entering live starts a fresh load
    /// under a fresh token; returning to demo discards whatever load or
    /// error state was in flight (its token is simply superseded the
    /// next time live is entered).
    pub fn toggle_mode(&mut self) -> Option<LoadRequest> {
        match self.view {
            PanelView::Demo => Some(self.begin_load()),
            PanelView::Live { .. } => {
                self.view = PanelView::Demo;
                None
            }
        }
    }

    /// Restart a failed load. Only meaningful from the failed state;
    /// anywhere else this is a no-op so a stray keypress cannot
    /// interrupt a healthy panel.
    pub fn retry(&mut self) -> Option<LoadRequest> {
        match &self.view {
            PanelView::Live {
                status: LoadStatus::Failed(_),
                ..
            } => Some(self.begin_load()),
            _ => None,
        }
    }

    /// Scheduler-driven reload: restart the load whatever its current
    /// status. Demo panels are untouched.
    pub fn force_reload(&mut self) -> Option<LoadRequest> {
        match &self.view {
            PanelView::Live { .. } => Some(self.begin_load()),
            PanelView::Demo => None,
        }
    }

    /// Apply a load outcome from the external surface. The outcome is
    /// only accepted when `token` matches the attempt currently in
    /// effect; stale results, from an attempt superseded by a reload
    /// or a mode switch, are discarded, otherwise an old success could
    /// overwrite a newer failure (or restart). Returns whether the
    /// outcome was applied.
    pub fn on_load_result(
        &mut self,
        token: ReloadToken,
        result: Result<LiveSummary, String>,
    ) -> bool {
        match &mut self.view {
            PanelView::Live {
                status,
                token: current,
            } if *current == token => {
                *status = match result {
                    Ok(summary) => LoadStatus::Loaded(summary),
                    Err(reason) => LoadStatus::Failed(reason),
                };
                true
            }
            PanelView::Live { .. } => {
                debug!(panel = %self.descriptor.id, "discarding stale load result");
                false
            }
            PanelView::Demo => {
                debug!(panel = %self.descriptor.id, "discarding load result for demo panel");
                false
            }
        }
    }

    fn begin_load(&mut self) -> LoadRequest {
        self.token_seq += 1;
        let token = ReloadToken::new(self.token_seq);
        self.view = PanelView::Live {
            status: LoadStatus::Loading,
            token,
        };
        LoadRequest {
            panel_id: self.descriptor.id.clone(),
            url: self.descriptor.external_url.clone(),
            token,
        }
    }
}
