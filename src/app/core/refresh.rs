use std::time::{Duration, Instant};

/// Default cadence of the global auto-refresh cycle.
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(30);

/// Global auto-refresh switch.
///
/// Owns the one and only refresh timer, modelled as an optional
/// deadline that the event loop polls on every iteration. The deadline
/// is present iff the scheduler is enabled, so a second timer cannot
/// exist. `enable` while enabled and `disable` while disabled are
/// no-ops; in particular re-enabling never resets a running interval.
#[derive(Debug)]
pub struct RefreshScheduler {
    period: Duration,
    deadline: Option<Instant>,
}

impl RefreshScheduler {
    pub fn new(period: Duration) -> Self {
        RefreshScheduler {
            period,
            deadline: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_enabled(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm the timer. Idempotent: a second call while armed leaves the
    /// pending deadline untouched.
    pub fn enable(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.period);
        }
    }

    /// Cancel the timer, if any.
    pub fn disable(&mut self) {
        self.deadline = None;
    }

    /// Flip the switch; returns the new enabled state.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_enabled() {
            self.disable();
        } else {
            self.enable(now);
        }
        self.is_enabled()
    }

    /// Report whether a refresh tick is due. When it is, the next
    /// deadline is measured from `now` rather than from the missed
    /// deadline, so a stalled loop produces one tick, not a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(30);

    #[test]
    fn disabled_scheduler_never_ticks() {
        let mut s = RefreshScheduler::new(PERIOD);
        let t0 = Instant::now();
        assert!(!s.poll(t0 + PERIOD * 10));
    }

    #[test]
    fn ticks_once_per_period() {
        let mut s = RefreshScheduler::new(PERIOD);
        let t0 = Instant::now();
        s.enable(t0);
        assert!(!s.poll(t0 + PERIOD / 2));
        assert!(s.poll(t0 + PERIOD));
        // Immediately after a tick the next one is a full period away.
        assert!(!s.poll(t0 + PERIOD + Duration::from_secs(1)));
        assert!(s.poll(t0 + PERIOD * 2 + Duration::from_secs(1)));
    }

    #[test]
    fn double_enable_keeps_the_running_interval() {
        let mut s = RefreshScheduler::new(PERIOD);
        let t0 = Instant::now();
        s.enable(t0);
        // 29 seconds in, a second enable must not push the deadline out.
        s.enable(t0 + Duration::from_secs(29));
        assert!(s.poll(t0 + PERIOD));
    }

    #[test]
    fn disable_is_idempotent_and_cancels() {
        let mut s = RefreshScheduler::new(PERIOD);
        s.disable();
        assert!(!s.is_enabled());
        let t0 = Instant::now();
        s.enable(t0);
        s.disable();
        s.disable();
        assert!(!s.poll(t0 + PERIOD * 2));
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut s = RefreshScheduler::new(PERIOD);
        let t0 = Instant::now();
        assert!(s.toggle(t0));
        assert!(s.is_enabled());
        assert!(!s.toggle(t0));
        assert!(!s.is_enabled());
    }
}
