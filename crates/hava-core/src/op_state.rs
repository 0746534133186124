//! Screen operation state for the device-location lookup.
//!
//! Ensures only one locate runs at a time. Used by WeatherScreen.

/// Operation state for serializing location requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpState {
    #[default]
    Idle,
    Locating,
}

impl OpState {
    /// True if a new location lookup can be started.
    pub fn can_start_locate(self) -> bool {
        matches!(self, OpState::Idle)
    }

    /// True while the loading overlay should be shown.
    pub fn is_busy(self) -> bool {
        !matches!(self, OpState::Idle)
    }

    /// State after processing LocateDone message.
    pub fn on_locate_done(self) -> Self {
        OpState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_allows_locate() {
        let s = OpState::Idle;
        assert!(s.can_start_locate());
        assert!(!s.is_busy());
    }

    #[test]
    fn locating_blocks_locate() {
        let s = OpState::Locating;
        assert!(!s.can_start_locate());
        assert!(s.is_busy());
    }

    #[test]
    fn locate_done_transitions_to_idle() {
        assert_eq!(OpState::Locating.on_locate_done(), OpState::Idle);
        assert_eq!(OpState::Idle.on_locate_done(), OpState::Idle);
    }
}
