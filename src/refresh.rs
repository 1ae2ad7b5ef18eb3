use std::time::{Duration, Instant};

/// Cadence of the countdown label refresh.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRefresh {
    pub id: u64,
    pub deadline: Instant,
}

/// Self-rescheduling refresh timer driven by the UI thread.
///
/// At most one refresh is pending at a time: scheduling cancels whatever was
/// pending before.
#[derive(Debug)]
pub struct RefreshTimer {
    interval: Duration,
    pending: Option<PendingRefresh>,
    next_id: u64,
}

impl Default for RefreshTimer {
    fn default() -> Self {
        Self::new(REFRESH_INTERVAL)
    }
}

impl RefreshTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            next_id: 1,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn pending(&self) -> Option<PendingRefresh> {
        self.pending
    }

    /// Drop the pending refresh, returning it if there was one.
    pub fn cancel(&mut self) -> Option<PendingRefresh> {
        let cancelled = self.pending.take();
        if let Some(p) = cancelled {
            tracing::trace!(id = p.id, "cancelled pending refresh");
        }
        cancelled
    }

    /// Schedule the next refresh one interval after `now`.
    pub fn schedule(&mut self, now: Instant) -> PendingRefresh {
        self.cancel();
        let pending = PendingRefresh {
            id: self.next_id,
            deadline: now + self.interval,
        };
        self.next_id += 1;
        self.pending = Some(pending);
        pending
    }

    /// An unscheduled timer is always due so the first frame fills the label.
    pub fn is_due(&self, now: Instant) -> bool {
        match self.pending {
            Some(p) => now >= p.deadline,
            None => true,
        }
    }

    /// Time left until the pending refresh fires.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.pending
            .map(|p| p.deadline.saturating_duration_since(now))
            .unwrap_or(Duration::ZERO)
    }
}
