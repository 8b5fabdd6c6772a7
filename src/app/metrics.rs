use std::time::{Duration, Instant};

use rand::Rng;

/// Default cadence of the headline-metric jitter.
pub const DEFAULT_JITTER_PERIOD: Duration = Duration::from_secs(5);

/// How a metric value is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricUnit {
    Count,
    Percent,
    Millis,
}

/// One headline metric on the real-time strip. Values are demo data:
/// seeded constants nudged randomly on a short cadence so the strip
/// looks alive without any backing source.
#[derive(Debug, Clone)]
pub struct Metric {
    pub label: &'static str,
    pub value: f64,
    pub change: f64,
    pub unit: MetricUnit,
    pub critical: bool,
}

impl Metric {
    pub fn formatted_value(&self) -> String {
        match self.unit {
            MetricUnit::Count => format!("{}", self.value.round() as i64),
            MetricUnit::Percent => format!("{:.1}%", self.value),
            MetricUnit::Millis => format!("{} ms", self.value.round() as i64),
        }
    }

    pub fn formatted_change(&self) -> String {
        format!("{}{:.1}%", if self.change >= 0.0 { "+" } else { "" }, self.change)
    }
}

/// Status of one backing component, shown next to the metrics.
#[derive(Debug, Clone)]
pub struct ComponentStatus {
    pub name: &'static str,
    pub online: bool,
}

/// The real-time metrics strip: four headline metrics plus component
/// statuses. Owned by `App`; `maybe_jitter` is called from the event
/// loop tick.
pub struct MetricsBoard {
    metrics: Vec<Metric>,
    components: Vec<ComponentStatus>,
    cadence: Duration,
    next_jitter: Option<Instant>,
}

impl MetricsBoard {
    pub fn new(cadence: Duration) -> Self {
        MetricsBoard {
            metrics: vec![
                Metric {
                    label: "Active Threats",
                    value: 1247.0,
                    change: 12.5,
                    unit: MetricUnit::Count,
                    critical: true,
                },
                Metric {
                    label: "Blocked Attacks",
                    value: 8934.0,
                    change: -5.2,
                    unit: MetricUnit::Count,
                    critical: false,
                },
                Metric {
                    label: "Network Health",
                    value: 98.7,
                    change: 0.3,
                    unit: MetricUnit::Percent,
                    critical: false,
                },
                Metric {
                    label: "Response Time",
                    value: 245.0,
                    change: -15.8,
                    unit: MetricUnit::Millis,
                    critical: false,
                },
            ],
            components: vec![
                ComponentStatus { name: "kibana", online: true },
                ComponentStatus { name: "elasticsearch", online: true },
                ComponentStatus { name: "data ingestion", online: true },
                ComponentStatus { name: "alerting", online: true },
            ],
            cadence,
            next_jitter: None,
        }
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn components(&self) -> &[ComponentStatus] {
        &self.components
    }

    /// Jitter the metrics when the cadence has elapsed. Returns whether
    /// anything changed (the caller can skip a redraw otherwise).
    pub fn maybe_jitter<R: Rng>(&mut self, now: Instant, rng: &mut R) -> bool {
        match self.next_jitter {
            Some(due) if now < due => false,
            _ => {
                self.next_jitter = Some(now + self.cadence);
                self.jitter(rng);
                true
            }
        }
    }

    /// Nudge every value by up to ±0.5% and redraw the change figure in
    /// [-10, +10], the same spread the demo data has always used.
    pub fn jitter<R: Rng>(&mut self, rng: &mut R) {
        for m in &mut self.metrics {
            let nudge: f64 = rng.random_range(-0.5..=0.5);
            m.value += nudge * m.value * 0.01;
            m.change = rng.random_range(-0.5..=0.5) * 20.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn jitter_stays_within_half_percent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = MetricsBoard::new(DEFAULT_JITTER_PERIOD);
        let before: Vec<f64> = board.metrics().iter().map(|m| m.value).collect();
        board.jitter(&mut rng);
        for (old, m) in before.iter().zip(board.metrics()) {
            let bound = old * 0.005 + f64::EPSILON;
            assert!(
                (m.value - old).abs() <= bound,
                "{} moved {} > {}",
                m.label,
                (m.value - old).abs(),
                bound
            );
            assert!(m.change >= -10.0 && m.change <= 10.0);
        }
    }

    #[test]
    fn cadence_gates_jitter() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut board = MetricsBoard::new(Duration::from_secs(5));
        let t0 = Instant::now();
        assert!(board.maybe_jitter(t0, &mut rng), "first call always fires");
        assert!(!board.maybe_jitter(t0 + Duration::from_secs(2), &mut rng));
        assert!(board.maybe_jitter(t0 + Duration::from_secs(5), &mut rng));
    }

    #[test]
    fn formatting_per_unit() {
        let board = MetricsBoard::new(DEFAULT_JITTER_PERIOD);
        let rendered: Vec<String> = board.metrics().iter().map(Metric::formatted_value).collect();
        assert_eq!(rendered[0], "1247");
        assert_eq!(rendered[2], "98.7%");
        assert_eq!(rendered[3], "245 ms");
    }
}
