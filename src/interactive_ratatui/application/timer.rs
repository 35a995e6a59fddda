use std::time::{Duration, Instant};

/// One-shot, cancellable deadline polled by the event loop.
///
/// Arming returns a ticket; re-arming or cancelling invalidates earlier
/// tickets so a superseded deadline can never fire.
#[derive(Debug, Default)]
pub struct DeadlineTimer {
    pending: Option<(u64, Instant)>,
    last_ticket: u64,
}

impl DeadlineTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, now: Instant, delay: Duration) -> u64 {
        self.last_ticket += 1;
        self.pending = Some((self.last_ticket, now + delay));
        self.last_ticket
    }

    /// Returns the ticket that was pending, if any
    pub fn cancel(&mut self) -> Option<u64> {
        self.pending.take().map(|(ticket, _)| ticket)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, deadline)| deadline)
    }

    /// Disarms and returns the ticket once `now` has reached the deadline
    pub fn fire_if_due(&mut self, now: Instant) -> Option<u64> {
        match self.pending {
            Some((ticket, deadline)) if now >= deadline => {
                self.pending = None;
                Some(ticket)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_deadline() {
        let mut timer = DeadlineTimer::new();
        let start = Instant::now();
        let ticket = timer.arm(start, Duration::from_millis(2000));

        assert!(timer.is_pending());
        assert_eq!(timer.fire_if_due(start + Duration::from_millis(1999)), None);
        assert_eq!(
            timer.fire_if_due(start + Duration::from_millis(2000)),
            Some(ticket)
        );
        assert_eq!(timer.fire_if_due(start + Duration::from_millis(5000)), None);
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_cancelled_deadline_never_fires() {
        let mut timer = DeadlineTimer::new();
        let start = Instant::now();
        let ticket = timer.arm(start, Duration::from_millis(10));

        assert_eq!(timer.cancel(), Some(ticket));
        assert_eq!(timer.cancel(), None);
        assert_eq!(timer.fire_if_due(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_rearm_supersedes_previous_ticket() {
        let mut timer = DeadlineTimer::new();
        let start = Instant::now();
        let first = timer.arm(start, Duration::from_millis(10));
        let second = timer.arm(start, Duration::from_millis(50));

        assert_ne!(first, second);
        assert_eq!(timer.fire_if_due(start + Duration::from_millis(20)), None);
        assert_eq!(
            timer.fire_if_due(start + Duration::from_millis(50)),
            Some(second)
        );
    }
}
