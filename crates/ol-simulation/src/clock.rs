/// Tracks simulation time: a monotonic tick counter and accumulated
/// simulated seconds.
///
/// The engine keeps no timers of its own. The host supplies a delta with
/// every tick, so pausing is simply not ticking and fast-forward is a
/// larger delta.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    tick: u64,
    elapsed_seconds: f64,
}

impl SimClock {
    /// Create a clock at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if `delta` describes a tick that should change state.
    pub fn is_effective(delta: f64) -> bool {
        delta.is_finite() && delta > 0.0
    }

    /// Advance by one tick of `delta` seconds. Degenerate deltas
    /// (zero, negative, NaN, infinite) leave the clock untouched.
    /// Returns the current tick number.
    pub fn advance(&mut self, delta: f64) -> u64 {
        if Self::is_effective(delta) {
            self.tick += 1;
            self.elapsed_seconds += delta;
        }
        self.tick
    }

    /// Return the current tick number.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Total simulated seconds since the start.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_initial_state() {
        let clock = SimClock::new();
        assert_eq!(clock.tick(), 0);
        assert_eq!(clock.elapsed_seconds(), 0.0);
    }

    #[test]
    fn clock_advance_accumulates() {
        let mut clock = SimClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.advance(1.0), 3);
        assert!((clock.elapsed_seconds() - 1.75).abs() < f64::EPSILON);
    }

    #[test]
    fn degenerate_deltas_do_not_advance() {
        let mut clock = SimClock::new();
        for delta in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            clock.advance(delta);
        }
        assert_eq!(clock.tick(), 0);
        assert_eq!(clock.elapsed_seconds(), 0.0);
    }
}
