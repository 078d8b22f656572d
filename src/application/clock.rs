use std::time::Duration;

/// Whether the simulation clock is currently producing ticks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClockState {
    #[default]
    Stopped,
    Running,
}

/// SimulationClock is a cancellable repeating task driven by frame time.
/// It is polled once per frame and reports when a generation is due.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    state: ClockState,
    interval: Duration,
    elapsed: Duration,
}

impl SimulationClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: ClockState::Stopped,
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start ticking. Returns false (and changes nothing) if already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = ClockState::Running;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Stop ticking. Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = ClockState::Stopped;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Forget time accumulated towards the next tick
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Advance the clock by `delta`; true when a tick is due.
    /// At most one tick fires per poll and any further backlog is dropped.
    pub fn poll(&mut self, delta: Duration) -> bool {
        if !self.is_running() {
            return false;
        }
        self.elapsed += delta;
        if self.elapsed < self.interval {
            return false;
        }
        self.elapsed -= self.interval;
        if self.elapsed >= self.interval {
            self.elapsed = Duration::ZERO;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(500);

    #[test]
    fn test_starts_stopped_and_never_ticks() {
        let mut clock = SimulationClock::new(TICK);
        assert_eq!(clock.state(), ClockState::Stopped);
        assert!(!clock.poll(Duration::from_secs(10)));
    }

    #[test]
    fn test_ticks_at_fixed_interval() {
        let mut clock = SimulationClock::new(TICK);
        assert!(clock.start());
        assert!(!clock.poll(Duration::from_millis(300)));
        assert!(clock.poll(Duration::from_millis(200)));
        assert!(!clock.poll(Duration::from_millis(499)));
        assert!(clock.poll(Duration::from_millis(1)));
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = SimulationClock::new(TICK);
        clock.start();
        assert!(clock.poll(Duration::from_millis(700)));
        assert!(clock.poll(Duration::from_millis(300)));
    }

    #[test]
    fn test_backlog_is_dropped() {
        let mut clock = SimulationClock::new(TICK);
        clock.start();
        assert!(clock.poll(Duration::from_secs(5)));
        let fired = (0..10).filter(|_| clock.poll(Duration::ZERO)).count();
        assert_eq!(fired, 0);
        assert!(clock.poll(TICK));
    }

    #[test]
    fn test_double_start_does_not_double_tick() {
        let mut clock = SimulationClock::new(TICK);
        assert!(clock.start());
        assert!(!clock.poll(Duration::from_millis(400)));
        assert!(!clock.start());
        // Second start kept the accumulated 400ms and did not add a second source
        assert!(clock.poll(Duration::from_millis(100)));
        assert!(!clock.poll(Duration::from_millis(100)));
    }

    #[test]
    fn test_stop_is_idempotent_and_cancels() {
        let mut clock = SimulationClock::new(TICK);
        assert!(!clock.stop());
        clock.start();
        clock.poll(Duration::from_millis(450));
        assert!(clock.stop());
        assert!(!clock.stop());
        assert!(!clock.poll(Duration::from_millis(100)));
        clock.start();
        assert!(!clock.poll(Duration::from_millis(100)));
    }
}
