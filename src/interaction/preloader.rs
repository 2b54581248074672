use std::time::Duration;

pub const TOTAL_DURATION: Duration = Duration::from_millis(2000);
pub const STEPS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloaderState {
    Counting(u32),
    Complete,
}

/// Percentage counter shown while the site loads. Runs once; there is no
/// cancel and no error state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preloader {
    state: PreloaderState,
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Preloader {
    pub fn new() -> Self {
        Self {
            state: PreloaderState::Counting(0),
        }
    }

    /// 20 ms
    pub fn tick_interval() -> Duration {
        TOTAL_DURATION / STEPS
    }

    pub fn state(&self) -> PreloaderState {
        self.state
    }

    pub fn percent(&self) -> u32 {
        match self.state {
            PreloaderState::Counting(count) => count,
            PreloaderState::Complete => STEPS,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state == PreloaderState::Complete
    }

    /// Advances one step. Reaching 100 keeps the overlay up for one more
    /// tick before it completes.
    pub fn tick(&mut self) -> PreloaderState {
        self.state = match self.state {
            PreloaderState::Counting(count) if count >= STEPS => PreloaderState::Complete,
            PreloaderState::Counting(count) => PreloaderState::Counting(count + 1),
            PreloaderState::Complete => PreloaderState::Complete,
        };
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_splits_duration_into_steps() {
        assert_eq!(Preloader::tick_interval(), Duration::from_millis(20));
    }

    #[test]
    fn counts_to_one_hundred_then_completes() {
        let mut preloader = Preloader::new();

        for _ in 0..100 {
            preloader.tick();
        }
        assert_eq!(preloader.state(), PreloaderState::Counting(100));
        assert!(!preloader.is_complete());

        assert_eq!(preloader.tick(), PreloaderState::Complete);
        assert_eq!(preloader.percent(), 100);
    }

    #[test]
    fn complete_is_terminal() {
        let mut preloader = Preloader::new();
        for _ in 0..150 {
            preloader.tick();
        }
        assert!(preloader.is_complete());
    }
}
