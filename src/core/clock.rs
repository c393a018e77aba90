//! Frame clock - derives per-frame deltas from a monotonic clock.
//!
//! The driver hands in an absolute timestamp once per frame and feeds the
//! returned delta to `Game::tick`. The reference timestamp is seeded from the
//! first observed call, so a clock that does not start at zero cannot produce
//! a huge first-frame delta and an immediate forced drop.

/// Tracks the previous frame's timestamp and yields deltas.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta in milliseconds since the previous call.
    ///
    /// The first call seeds the reference and returns 0. A non-monotonic
    /// input clamps to 0 rather than wrapping.
    pub fn delta_ms(&mut self, now_ms: u64) -> u32 {
        let delta = match self.last_ms {
            Some(prev) => now_ms.saturating_sub(prev),
            None => 0,
        };
        self.last_ms = Some(now_ms);
        delta as u32
    }

    /// Forget the reference; the next call seeds it again.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_delta_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta_ms(123_456), 0);
    }

    #[test]
    fn test_subsequent_deltas_are_differences() {
        let mut clock = FrameClock::new();
        clock.delta_ms(1000);
        assert_eq!(clock.delta_ms(1016), 16);
        assert_eq!(clock.delta_ms(1050), 34);
    }

    #[test]
    fn test_non_monotonic_input_clamps() {
        let mut clock = FrameClock::new();
        clock.delta_ms(1000);
        assert_eq!(clock.delta_ms(900), 0);
    }

    #[test]
    fn test_reset_reseeds_reference() {
        let mut clock = FrameClock::new();
        clock.delta_ms(1000);
        clock.reset();
        assert_eq!(clock.delta_ms(9000), 0);
        assert_eq!(clock.delta_ms(9016), 16);
    }
}
