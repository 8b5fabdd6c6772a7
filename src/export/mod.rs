use std::io;
use std::path::{Path, PathBuf};
use std::thread;

use chrono::Local;
use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::app::core::panel::PanelController;
use crate::app::registry::{self, SnapshotInfo};
use crate::app::types::PanelView;

/// Fixed base name of the exported document.
pub const EXPORT_BASENAME: &str = "cyber-threat-dashboard.html";

/// Panels per printed page.
pub const PANELS_PER_PAGE: usize = 4;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("document rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Immutable capture of the visible dashboard at the moment the export
/// was triggered. Built on the UI thread, then handed to a worker; the
/// dashboard can keep changing while the document renders.
#[derive(Debug, Serialize)]
pub struct ExportSnapshot {
    pub generated_at: String,
    pub query: String,
    pub auto_refresh: bool,
    pub pages: Vec<ExportPage>,
    pub snapshots: Vec<SnapshotInfo>,
}

#[derive(Debug, Serialize)]
pub struct ExportPage {
    pub number: usize,
    pub panels: Vec<ExportPanel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportPanel {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub mode: String,
    pub status: String,
    pub lines: Vec<String>,
}

static TEMPLATES: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut hb = Handlebars::new();
    hb.register_template_string("dashboard", DOCUMENT_TEMPLATE)
        .expect("built-in export template is valid");
    hb
});

/// Capture the currently mounted panels, in display order.
pub fn capture(panels: &[PanelController], query: &str, auto_refresh: bool) -> ExportSnapshot {
    let entries: Vec<ExportPanel> = panels
        .iter()
        .map(|controller| {
            let d = controller.descriptor();
            let (mode, status, lines) = match controller.view() {
                PanelView::Demo => (
                    "Demo".to_string(),
                    "static demonstration data".to_string(),
                    d.demo.export_lines(),
                ),
                PanelView::Live { status, .. } => (
                    "Live".to_string(),
                    status.brief(),
                    vec![format!("Source: {}", d.external_url)],
                ),
            };
            ExportPanel {
                icon: d.icon.clone(),
                title: d.title.clone(),
                description: d.description.clone(),
                mode,
                status,
                lines,
            }
        })
        .collect();

    let pages = entries
        .chunks(PANELS_PER_PAGE)
        .enumerate()
        .map(|(i, chunk)| ExportPage {
            number: i + 1,
            panels: chunk.to_vec(),
        })
        .collect();

    ExportSnapshot {
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        query: query.to_string(),
        auto_refresh,
        pages,
        snapshots: registry::snapshots(),
    }
}

/// Render the snapshot to the final HTML document.
pub fn render_document(snapshot: &ExportSnapshot) -> Result<String, ExportError> {
    Ok(TEMPLATES.render("dashboard", snapshot)?)
}

/// Render and write the document into `dir`; returns the file path.
pub fn write_document(snapshot: &ExportSnapshot, dir: &Path) -> Result<PathBuf, ExportError> {
    let html = render_document(snapshot)?;
    let path = dir.join(EXPORT_BASENAME);
    std::fs::write(&path, html)?;
    Ok(path)
}

/// Fire-and-forget export. Failures are logged for the operator; the
/// caller gets no artifact and no dialog, and nothing needs cleaning up
/// since a failed render writes no file.
pub fn spawn_export(snapshot: ExportSnapshot, dir: PathBuf) {
    thread::spawn(move || match write_document(&snapshot, &dir) {
        Ok(path) => info!(path = %path.display(), "dashboard exported"),
        Err(e) => error!(error = %e, "dashboard export failed"),
    });
}

const DOCUMENT_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>National Cyber Threat Intelligence Dashboard</title>
<style>
  body { font-family: sans-serif; color: #16181d; margin: 2rem; }
  header { border-bottom: 2px solid #16181d; margin-bottom: 1.5rem; }
  .meta { color: #555; font-size: 0.85rem; }
  .page { page-break-after: always; }
  .panel { border: 1px solid #ccd; border-radius: 6px; padding: 1rem; margin: 1rem 0; }
  .panel h3 { margin: 0 0 0.25rem 0; }
  .mode { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.08em; color: #357; }
  .status { font-size: 0.85rem; color: #555; margin-bottom: 0.5rem; }
  .lines { font-family: monospace; font-size: 0.85rem; white-space: pre-wrap; }
  .snapshots h2 { border-bottom: 1px solid #ccd; }
  .snapshot { margin: 0.75rem 0; }
  .snapshot .kind { color: #357; font-size: 0.8rem; }
</style>
</head>
<body>
<header>
  <h1>National Cyber Threat Intelligence Dashboard</h1>
  <p class="meta">Generated {{generated_at}}{{#if query}} · filter: “{{query}}”{{/if}} · auto-refresh {{#if auto_refresh}}on{{else}}off{{/if}}</p>
</header>
{{#each pages}}
<section class="page">
  {{#each panels}}
  <article class="panel">
    <h3>{{icon}} {{title}}</h3>
    <div class="mode">{{mode}}</div>
    <div class="status">{{status}}</div>
    <p>{{description}}</p>
    <div class="lines">{{#each lines}}{{this}}
{{/each}}</div>
  </article>
  {{/each}}
</section>
{{/each}}
<section class="snapshots">
  <h2>Archived dashboard captures</h2>
  {{#each snapshots}}
  <div class="snapshot">
    <strong>{{title}}</strong> <span class="kind">{{kind}} · {{captured_at}}</span>
    <div>{{description}}</div>
  </div>
  {{/each}}
</section>
</body>
</html>
"#;
