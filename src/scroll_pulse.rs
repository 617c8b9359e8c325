//! Scroll-to-top pulse signaling for tab re-selection.
//!
//! When the user re-selects the already-active tab, the content view for that
//! tab should reset its scroll position. The pulse carries the tab's ordinal
//! for a bounded window (100 ms) and then auto-clears, so downstream views
//! observe it at most once per re-selection and never on an ordinary tab
//! switch.
//!
//! Every transition bumps a monotonically increasing generation. A deferred
//! clear scheduled by a timer-based host only applies while its generation is
//! still current, so a stale timer from a superseded pulse can neither clear
//! nor resurrect a newer one. Deadline-polling hosts skip the timer entirely
//! and drive [`ScrollPulse::tick`] with the current time.

use std::time::{Duration, Instant};

/// How long a pulse stays observable before it clears itself.
pub const PULSE_CLEAR_DELAY: Duration = Duration::from_millis(100);

/// Transient scroll-to-top signal with generation-guarded clearing.
#[derive(Debug)]
pub struct ScrollPulse {
    /// Ordinal of the tab whose content should scroll to top, if armed
    target: Option<u8>,
    /// Bumped on every transition; identifies the current pulse instance
    generation: u64,
    /// When the armed pulse auto-clears
    deadline: Option<Instant>,
}

impl Default for ScrollPulse {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollPulse {
    /// Create an idle pulse.
    pub fn new() -> Self {
        Self {
            target: None,
            generation: 0,
            deadline: None,
        }
    }

    /// The ordinal downstream content views should scroll-to-top for, or
    /// `None` while idle.
    pub fn target(&self) -> Option<u8> {
        self.target
    }

    /// Current generation. Transitions (arm, clear, expiry) each bump it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Arm the pulse for a tab ordinal.
    ///
    /// Sets the target, schedules the auto-clear deadline at
    /// `now + PULSE_CLEAR_DELAY`, and returns the new generation. A
    /// timer-based host passes that generation back to [`clear_deferred`]
    /// when its delay elapses.
    ///
    /// [`clear_deferred`]: ScrollPulse::clear_deferred
    pub fn arm(&mut self, ordinal: u8, now: Instant) -> u64 {
        self.generation += 1;
        self.target = Some(ordinal);
        self.deadline = Some(now + PULSE_CLEAR_DELAY);
        self.generation
    }

    /// Clear immediately, superseding any pending deferred clear.
    pub fn clear(&mut self) {
        if self.target.is_some() || self.deadline.is_some() {
            self.generation += 1;
            self.target = None;
            self.deadline = None;
        }
    }

    /// Apply a deferred clear scheduled when `generation` was current.
    ///
    /// No-op unless the generation still matches; a timer armed for an
    /// earlier pulse must not clear a newer one.
    pub fn clear_deferred(&mut self, generation: u64) {
        if generation == self.generation {
            self.clear();
        }
    }

    /// Service the auto-clear deadline for deadline-polling hosts.
    ///
    /// Returns `true` if the pulse expired and was cleared on this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// The next instant at which [`tick`](ScrollPulse::tick) has work to do,
    /// so a polling host can schedule its wakeup.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_exposes_target_until_deadline() {
        let now = Instant::now();
        let mut pulse = ScrollPulse::new();
        assert_eq!(pulse.target(), None);

        pulse.arm(3, now);
        assert_eq!(pulse.target(), Some(3));

        // Just before the deadline: still armed
        assert!(!pulse.tick(now + Duration::from_millis(99)));
        assert_eq!(pulse.target(), Some(3));

        // At the deadline: cleared
        assert!(pulse.tick(now + PULSE_CLEAR_DELAY));
        assert_eq!(pulse.target(), None);
        assert_eq!(pulse.next_deadline(), None);
    }

    #[test]
    fn deferred_clear_applies_only_to_current_generation() {
        let now = Instant::now();
        let mut pulse = ScrollPulse::new();

        let first = pulse.arm(1, now);
        // Re-selection within the window supersedes the first pulse
        let second = pulse.arm(1, now + Duration::from_millis(50));
        assert_ne!(first, second);

        // The stale timer fires: must not clear the newer pulse
        pulse.clear_deferred(first);
        assert_eq!(pulse.target(), Some(1));

        // The current timer fires: clears
        pulse.clear_deferred(second);
        assert_eq!(pulse.target(), None);
    }

    #[test]
    fn explicit_clear_invalidates_pending_deferred_clear() {
        let now = Instant::now();
        let mut pulse = ScrollPulse::new();

        let generation = pulse.arm(2, now);
        pulse.clear();
        assert_eq!(pulse.target(), None);

        // A later arm must survive the old timer firing
        pulse.arm(4, now + Duration::from_millis(10));
        pulse.clear_deferred(generation);
        assert_eq!(pulse.target(), Some(4));
    }

    #[test]
    fn clear_on_idle_pulse_keeps_generation() {
        let mut pulse = ScrollPulse::new();
        let before = pulse.generation();
        pulse.clear();
        assert_eq!(pulse.generation(), before, "idle clear must not churn generations");
    }

    #[test]
    fn expiry_bumps_generation() {
        let now = Instant::now();
        let mut pulse = ScrollPulse::new();

        let generation = pulse.arm(5, now);
        assert!(pulse.tick(now + PULSE_CLEAR_DELAY));

        // The timer scheduled at arm time is now stale
        pulse.arm(6, now + Duration::from_millis(200));
        pulse.clear_deferred(generation);
        assert_eq!(pulse.target(), Some(6));
    }
}
