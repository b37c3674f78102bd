//! Loading gate shown before the form is first drawn

use std::time::{Duration, Instant};

/// Phase of the loading gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Assets still loading, form hidden
    Loading,
    /// Form may be rendered
    Ready,
}

/// Loading gate state
#[derive(Debug)]
pub struct SplashState {
    /// When loading started
    pub start_time: Instant,
    /// Current phase
    pub phase: SplashPhase,
    /// Eased progress in `0.0..=1.0` for the gauge
    pub progress: f32,
    load_duration: Duration,
}

impl SplashState {
    /// Default time the gate stays up
    pub const LOAD_DURATION: Duration = Duration::from_millis(1200);

    pub fn new() -> Self {
        Self::with_duration(Self::LOAD_DURATION)
    }

    pub fn with_duration(load_duration: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Loading,
            progress: 0.0,
            load_duration,
        }
    }

    /// Update progress based on elapsed time
    pub fn update(&mut self) {
        if self.phase == SplashPhase::Ready {
            return;
        }
        let elapsed = self.start_time.elapsed();
        if elapsed >= self.load_duration {
            self.phase = SplashPhase::Ready;
            self.progress = 1.0;
        } else {
            let linear = elapsed.as_secs_f32() / self.load_duration.as_secs_f32();
            // cubic ease-out so the bar slows down as it fills
            self.progress = simple_easing::cubic_out(linear);
        }
    }

    /// Skip to ready (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Ready;
        self.progress = 1.0;
    }

    /// Ready signal gating the form
    pub fn is_ready(&self) -> bool {
        self.phase == SplashPhase::Ready
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_loading() {
        let state = SplashState::new();
        assert_eq!(state.phase, SplashPhase::Loading);
        assert_eq!(state.progress, 0.0);
        assert!(!state.is_ready());
    }

    #[test]
    fn test_update_stays_loading_initially() {
        let mut state = SplashState::new();
        state.update();
        assert_eq!(state.phase, SplashPhase::Loading);
        assert!(state.progress < 1.0);
    }

    #[test]
    fn test_zero_duration_is_ready_after_update() {
        let mut state = SplashState::with_duration(Duration::ZERO);
        state.update();
        assert!(state.is_ready());
        assert_eq!(state.progress, 1.0);
    }

    #[test]
    fn test_skip_immediately_ready() {
        let mut state = SplashState::new();
        state.skip();
        assert!(state.is_ready());
        assert_eq!(state.progress, 1.0);
    }

    #[test]
    fn test_update_after_ready_keeps_ready() {
        let mut state = SplashState::new();
        state.skip();
        state.update();
        assert!(state.is_ready());
    }

    #[test]
    fn test_load_duration_constant() {
        assert!(SplashState::LOAD_DURATION.as_millis() > 0);
    }
}
