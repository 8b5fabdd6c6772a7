use chrono::{DateTime, Local};
use url::Url;

/// Interaction mode of the application. Exactly one mode is active; the
/// key handlers dispatch on it and the renderer overlays dialogs for the
/// non-`Normal` modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Search prompt is open; `buffer` is the query being edited. The
    /// visibility filter is re-applied on every edit.
    Search { buffer: String },
    /// Modal informational dialog (about screen, error reports).
    Message { title: String, content: String },
}

/// Result of handling one key press, consumed by the event loop. The
/// handlers never perform I/O themselves; anything that needs a network
/// request, a browser, or a file write is returned here instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// Start these external loads on worker threads.
    Load(Vec<LoadRequest>),
    /// Capture the visible dashboard and export it to a document.
    Export,
    /// Present this URL outside the embedded surface (system browser).
    OpenExternal(Url),
}

/// Opaque marker distinguishing successive load attempts for the same
/// panel. A result callback is only applied when its token matches the
/// panel's current one; anything else is a stale response from an
/// attempt that has since been superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReloadToken(u64);

impl ReloadToken {
    pub(crate) fn new(seq: u64) -> Self {
        ReloadToken(seq)
    }
}

/// Everything the fetch worker needs to request one external dashboard
/// view. Carries the token so the eventual outcome can be matched back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub panel_id: String,
    pub url: Url,
    pub token: ReloadToken,
}

/// Summary of a successfully fetched external dashboard response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveSummary {
    pub http_status: u16,
    pub bytes: u64,
    pub fetched_at: DateTime<Local>,
}

/// Load lifecycle of a panel in live mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded(LiveSummary),
    Failed(String),
}

impl LoadStatus {
    /// One-line human description, shared by the status bar of a panel
    /// card and the export document.
    pub fn brief(&self) -> String {
        match self {
            LoadStatus::Loading => "loading…".to_string(),
            LoadStatus::Loaded(s) => format!(
                "loaded · HTTP {} · {} · {}",
                s.http_status,
                human_bytes(s.bytes),
                s.fetched_at.format("%H:%M:%S")
            ),
            LoadStatus::Failed(reason) => format!("failed: {reason}"),
        }
    }
}

/// What a panel is currently showing. Demo carries no runtime state at
/// all; entering live always starts a fresh load under a fresh token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    Demo,
    Live { status: LoadStatus, token: ReloadToken },
}

impl PanelView {
    pub fn is_live(&self) -> bool {
        matches!(self, PanelView::Live { .. })
    }
}

/// Format a byte count for display ("845 B", "12.3 KiB", "4.0 MiB").
pub fn human_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b >= MIB {
        format!("{:.1} MiB", b / MIB)
    } else if b >= KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_bytes_picks_unit() {
        assert_eq!(human_bytes(845), "845 B");
        assert_eq!(human_bytes(12 * 1024 + 300), "12.3 KiB");
        assert_eq!(human_bytes(4 * 1024 * 1024), "4.0 MiB");
    }

    #[test]
    fn brief_mentions_failure_reason() {
        let s = LoadStatus::Failed("connection refused".to_string());
        assert!(s.brief().contains("connection refused"));
    }
}
