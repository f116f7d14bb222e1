use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Point on a logical clock
///
/// Stamps are totally ordered. A cached artifact is stale when the stamp it
/// was built at is older than the stamp of the last change to its source.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeStamp(u64);

impl TimeStamp {
    /// Stamp that precedes every tick: "never built" / "never modified"
    pub const ZERO: TimeStamp = TimeStamp(0);

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_older_than(self, other: TimeStamp) -> bool {
        self.0 < other.0
    }
}

/// Monotonic logical clock shared by everything that compares stamps
///
/// Clones share one counter, so stamps handed out by any clone are
/// comparable with each other.
#[derive(Debug, Clone, Default)]
pub struct LogicalClock {
    counter: Arc<AtomicU64>,
}

impl LogicalClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock and return the new, strictly newer stamp
    pub fn tick(&self) -> TimeStamp {
        TimeStamp(self.counter.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Latest stamp handed out, without advancing
    pub fn now(&self) -> TimeStamp {
        TimeStamp(self.counter.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_strictly_increasing() {
        let clock = LogicalClock::new();
        let a = clock.tick();
        let b = clock.tick();

        assert!(a.is_older_than(b));
        assert!(!b.is_older_than(a));
        assert!(TimeStamp::ZERO.is_older_than(a));
    }

    #[test]
    fn equal_stamps_are_not_older() {
        let clock = LogicalClock::new();
        let a = clock.tick();
        assert!(!a.is_older_than(a));
    }

    #[test]
    fn now_does_not_advance() {
        let clock = LogicalClock::new();
        assert_eq!(clock.now(), TimeStamp::ZERO);

        let a = clock.tick();
        assert_eq!(clock.now(), a);
        assert_eq!(clock.now(), a);
    }

    #[test]
    fn clones_share_counter() {
        let clock = LogicalClock::new();
        let other = clock.clone();

        let a = clock.tick();
        let b = other.tick();
        assert!(a.is_older_than(b));
        assert_eq!(clock.now(), other.now());
    }
}
