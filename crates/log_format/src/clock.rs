use core::cell::Cell;

/// Milliseconds since boot, wrapping on overflow.
pub trait Clock {
    fn millis(&self) -> u32;
}

impl<F: Fn() -> u32> Clock for F {
    fn millis(&self) -> u32 {
        self()
    }
}

#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    pub const fn new(start_ms: u32) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn millis(&self) -> u32 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_wraps() {
        let clock = ManualClock::new(u32::MAX - 1);
        clock.advance(3);
        assert_eq!(clock.millis(), 1);
        clock.set(500);
        assert_eq!(clock.millis(), 500);
    }

    #[test]
    fn functions_are_clocks() {
        fn boot() -> u32 {
            1234
        }

        let f: fn() -> u32 = boot;
        assert_eq!(f.millis(), 1234);
        assert_eq!((|| 7u32).millis(), 7);
    }
}
