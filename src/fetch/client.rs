use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use chrono::Local;
use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use super::error::FetchError;
use crate::app::registry::PanelDescriptor;
use crate::app::types::{LiveSummary, LoadRequest, ReloadToken};

/// Result of one load attempt, sent back to the event loop. Carries the
/// token of the attempt that produced it; the panel controller decides
/// whether that attempt is still current.
#[derive(Debug)]
pub struct LoadOutcome {
    pub panel_id: String,
    pub token: ReloadToken,
    pub result: Result<LiveSummary, FetchError>,
}

/// Shared HTTP client for all live loads. No request timeout unless one
/// is configured; the default mirrors an embedded view that is given
/// as long as it needs, with staleness handled by token supersession
/// rather than cancellation.
pub fn build_client(timeout: Option<Duration>) -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(concat!("threatdeck/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(FetchError::from)
}

/// Fetch one request on its own worker thread and send the outcome back
/// over `tx`. There is no way to abort the request once issued; if the
/// attempt is superseded meanwhile, the outcome arrives bearing a stale
/// token and is discarded by the controller.
pub fn spawn_load(client: &Client, request: LoadRequest, tx: Sender<LoadOutcome>) {
    let client = client.clone();
    thread::spawn(move || {
        let result = fetch_once(&client, &request.url);
        let outcome = LoadOutcome {
            panel_id: request.panel_id,
            token: request.token,
            result,
        };
        if tx.send(outcome).is_err() {
            debug!("dropping load outcome; event loop has gone away");
        }
    });
}

fn fetch_once(client: &Client, url: &Url) -> Result<LiveSummary, FetchError> {
    let response = client.get(url.clone()).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            code: status.as_u16(),
        });
    }
    let bytes = response.bytes()?.len() as u64;
    Ok(LiveSummary {
        http_status: status.as_u16(),
        bytes,
        fetched_at: Local::now(),
    })
}

/// Outcome of probing one registered dashboard, for the `check`
/// subcommand.
pub struct ProbeReport {
    pub panel_id: String,
    pub title: String,
    pub result: Result<LiveSummary, FetchError>,
}

/// Probe every registered dashboard in sequence. Failures are reported
/// per panel, never propagated; an unreachable host is the expected
/// case this command exists to show.
pub fn probe_registry(client: &Client, registry: &[PanelDescriptor]) -> Vec<ProbeReport> {
    registry
        .iter()
        .map(|panel| ProbeReport {
            panel_id: panel.id.clone(),
            title: panel.title.clone(),
            result: fetch_once(client, &panel.external_url),
        })
        .collect()
}
