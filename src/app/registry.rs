use serde::Serialize;
use thiserror::Error;
use url::Url;

/// Errors raised while building the panel catalogue at startup.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("panel `{id}` has a malformed dashboard locator: {source}")]
    InvalidUrl {
        id: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("panel id `{0}` registered twice")]
    DuplicateId(String),
}

/// Threat severity used by the demo datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Severity::Critical => "🔴",
            Severity::High => "🟠",
            Severity::Medium => "🟡",
            Severity::Low => "🟢",
        }
    }
}

/// Static demonstration dataset shown while a panel is in demo mode.
/// One variant per visualization family; the renderer and the export
/// document both consume these.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoContent {
    /// World map: incident counts per severity plus regional hotspots.
    ThreatMap {
        severities: Vec<(Severity, u32)>,
        hotspots: Vec<(String, Severity)>,
    },
    /// Share of each threat type, in percent. Shares sum to 100.
    Distribution { slices: Vec<(String, u8)> },
    /// Single headline threat level with a caption.
    Gauge { level: String, percent: u16, caption: String },
    /// Attack volume per month.
    Trend { bars: Vec<(String, u64)> },
    /// Regional attack-vector markers.
    Regions { markers: Vec<(String, Severity)> },
}

impl DemoContent {
    /// Plain-text rendering of the dataset, used by the export document.
    pub fn export_lines(&self) -> Vec<String> {
        match self {
            DemoContent::ThreatMap { severities, hotspots } => {
                let mut lines: Vec<String> = severities
                    .iter()
                    .map(|(sev, n)| format!("{} {}: {}", sev.marker(), sev.label(), n))
                    .collect();
                lines.push(String::new());
                lines.extend(
                    hotspots
                        .iter()
                        .map(|(region, sev)| format!("{} {} threat: {}", sev.marker(), sev.label(), region)),
                );
                lines
            }
            DemoContent::Distribution { slices } => slices
                .iter()
                .map(|(name, pct)| format!("{name}: {pct}%"))
                .collect(),
            DemoContent::Gauge { level, percent, caption } => {
                vec![format!("Threat level: {level} ({percent}%)"), caption.clone()]
            }
            DemoContent::Trend { bars } => bars
                .iter()
                .map(|(month, n)| format!("{month}: {n} incidents"))
                .collect(),
            DemoContent::Regions { markers } => markers
                .iter()
                .map(|(region, sev)| format!("{} {}: {}", sev.marker(), region, sev.label()))
                .collect(),
        }
    }
}

/// Immutable description of one visualization panel. Built once at
/// startup; runtime state lives in the per-panel controller, never here.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelDescriptor {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Locator of the live, externally-hosted dashboard view. Validated
    /// as well-formed here; whether it actually loads is only known
    /// through the load/error signals at runtime.
    pub external_url: Url,
    pub demo: DemoContent,
}

struct PanelSpec {
    id: &'static str,
    title: &'static str,
    icon: &'static str,
    description: &'static str,
    view: &'static str,
    demo: fn() -> DemoContent,
}

const PANEL_SPECS: &[PanelSpec] = &[
    PanelSpec {
        id: "global-threat-map",
        title: "Global Threat Map",
        icon: "🌍",
        description:
            "Interactive global map showing real-time cyber threat distribution and attack patterns",
        view: "map-overview-dashboard",
        demo: demo_threat_map,
    },
    PanelSpec {
        id: "threat-distribution",
        title: "Threat Distribution",
        icon: "📊",
        description:
            "Pie chart visualization showing distribution of different threat types and their prevalence",
        view: "pie-chart-dashboard",
        demo: demo_distribution,
    },
    PanelSpec {
        id: "threat-levels",
        title: "Threat Level Gauge",
        icon: "🎯",
        description:
            "Real-time gauge showing current national cyber threat level and security status",
        view: "gauge-dashboard",
        demo: demo_gauge,
    },
    PanelSpec {
        id: "attack-patterns",
        title: "Attack Patterns",
        icon: "📈",
        description:
            "Bar chart analysis of attack patterns and trends over time with predictive insights",
        view: "lens-bar-dashboard",
        demo: demo_trend,
    },
    PanelSpec {
        id: "geographic-analysis",
        title: "Geographic Analysis",
        icon: "🗺️",
        description:
            "Advanced geographic analysis of threat origins and target destinations worldwide",
        view: "map-dashboard",
        demo: demo_regions,
    },
];

/// Build the built-in catalogue against the configured dashboard host.
/// The locator format matches an embedded Kibana view with refresh
/// paused; the refresh cycle is driven from this side instead.
pub fn builtin(base: &Url) -> Result<Vec<PanelDescriptor>, RegistryError> {
    let base = base.as_str().trim_end_matches('/');
    let mut panels = Vec::with_capacity(PANEL_SPECS.len());
    for spec in PANEL_SPECS {
        let raw = format!("{base}/app/dashboards#/view/{}?embed=true", spec.view);
        let external_url = Url::parse(&raw).map_err(|source| RegistryError::InvalidUrl {
            id: spec.id,
            source,
        })?;
        panels.push(PanelDescriptor {
            id: spec.id.to_string(),
            title: spec.title.to_string(),
            description: spec.description.to_string(),
            icon: spec.icon.to_string(),
            external_url,
            demo: (spec.demo)(),
        });
    }
    validate(&panels)?;
    Ok(panels)
}

/// Panel ids must be unique across the registry; everything downstream
/// (outcome routing, mount reconciliation) keys on the id.
pub fn validate(panels: &[PanelDescriptor]) -> Result<(), RegistryError> {
    let mut seen = std::collections::HashSet::new();
    for p in panels {
        if !seen.insert(p.id.as_str()) {
            return Err(RegistryError::DuplicateId(p.id.clone()));
        }
    }
    Ok(())
}

fn demo_threat_map() -> DemoContent {
    DemoContent::ThreatMap {
        severities: vec![
            (Severity::Critical, 23),
            (Severity::High, 156),
            (Severity::Medium, 891),
            (Severity::Low, 2341),
        ],
        hotspots: vec![
            ("North America".to_string(), Severity::Critical),
            ("Europe".to_string(), Severity::High),
            ("Africa".to_string(), Severity::Medium),
            ("Asia".to_string(), Severity::Critical),
            ("Australia".to_string(), Severity::Low),
        ],
    }
}

fn demo_distribution() -> DemoContent {
    DemoContent::Distribution {
        slices: vec![
            ("Malware".to_string(), 35),
            ("Phishing".to_string(), 28),
            ("DDoS".to_string(), 22),
            ("Other".to_string(), 15),
        ],
    }
}

fn demo_gauge() -> DemoContent {
    DemoContent::Gauge {
        level: "HIGH".to_string(),
        percent: 72,
        caption: "Current status: elevated risk".to_string(),
    }
}

fn demo_trend() -> DemoContent {
    DemoContent::Trend {
        bars: vec![
            ("Jan".to_string(), 320),
            ("Feb".to_string(), 400),
            ("Mar".to_string(), 480),
            ("Apr".to_string(), 360),
            ("May".to_string(), 440),
            ("Jun".to_string(), 520),
        ],
    }
}

fn demo_regions() -> DemoContent {
    DemoContent::Regions {
        markers: vec![
            ("Eastern Europe".to_string(), Severity::Critical),
            ("Southeast Asia".to_string(), Severity::High),
            ("West Africa".to_string(), Severity::Medium),
            ("North America".to_string(), Severity::Critical),
            ("Oceania".to_string(), Severity::Low),
        ],
    }
}

/// Metadata for the archived dashboard captures shown in the export
/// document's appendix. Static catalogue data, same as the panels.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotInfo {
    pub title: String,
    pub description: String,
    pub captured_at: String,
    pub kind: String,
    pub asset: String,
}

pub fn snapshots() -> Vec<SnapshotInfo> {
    vec![
        SnapshotInfo {
            title: "Global Threat Distribution Map".to_string(),
            description: "World map with major hotspots in Asia (3,910 threats), Oceania (267) and Africa"
                .to_string(),
            captured_at: "2025-01-02T15:30:00Z".to_string(),
            kind: "Map".to_string(),
            asset: "assets/threat-map.png".to_string(),
        },
        SnapshotInfo {
            title: "Threat Type Distribution Analysis".to_string(),
            description:
                "Pie chart breakdown of malware, DDoS, brute force, phishing and SQL injection attacks"
                    .to_string(),
            captured_at: "2025-01-02T14:15:00Z".to_string(),
            kind: "Pie Chart".to_string(),
            asset: "assets/threat-distribution.png".to_string(),
        },
        SnapshotInfo {
            title: "Country-Based Threat Metrics".to_string(),
            description:
                "Threat counts by region: United States (4,790), China (1,174), Japan (593), United Kingdom (410)"
                    .to_string(),
            captured_at: "2025-01-02T13:45:00Z".to_string(),
            kind: "Gauge".to_string(),
            asset: "assets/country-metrics.png".to_string(),
        },
        SnapshotInfo {
            title: "Temporal Threat Intensity Heatmap".to_string(),
            description:
                "Time-series heatmap of threat activity per category, peak activity on May 30th".to_string(),
            captured_at: "2025-01-02T12:20:00Z".to_string(),
            kind: "Heatmap".to_string(),
            asset: "assets/intensity-heatmap.png".to_string(),
        },
        SnapshotInfo {
            title: "Attack Volume Trend Analysis".to_string(),
            description:
                "Attack volume spiking past 8,000 incidents on May 30th with secondary peaks of 1,500-2,000"
                    .to_string(),
            captured_at: "2025-01-02T11:10:00Z".to_string(),
            kind: "Bar Chart".to_string(),
            asset: "assets/volume-trend.png".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://dashboards.example.net/").unwrap()
    }

    #[test]
    fn builtin_has_five_unique_panels() {
        let panels = builtin(&base()).unwrap();
        assert_eq!(panels.len(), 5);
        assert!(validate(&panels).is_ok());
    }

    #[test]
    fn builtin_urls_point_at_base_host() {
        let panels = builtin(&base()).unwrap();
        for p in &panels {
            assert_eq!(p.external_url.host_str(), Some("dashboards.example.net"));
            assert!(p.external_url.as_str().contains("embed=true"));
        }
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut panels = builtin(&base()).unwrap();
        let dup = panels[0].clone();
        panels.push(dup);
        assert!(matches!(
            validate(&panels),
            Err(RegistryError::DuplicateId(_))
        ));
    }

    #[test]
    fn distribution_slices_sum_to_hundred() {
        let panels = builtin(&base()).unwrap();
        let dist = panels
            .iter()
            .find(|p| p.id == "threat-distribution")
            .unwrap();
        match &dist.demo {
            DemoContent::Distribution { slices } => {
                let total: u32 = slices.iter().map(|(_, pct)| u32::from(*pct)).sum();
                assert_eq!(total, 100);
            }
            other => panic!("unexpected demo content: {other:?}"),
        }
    }

    #[test]
    fn export_lines_cover_every_variant() {
        let panels = builtin(&base()).unwrap();
        for p in &panels {
            let lines = p.demo.export_lines();
            assert!(!lines.is_empty(), "panel {} produced no lines", p.id);
        }
    }
}
