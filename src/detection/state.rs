use super::observer::DetectionObserver;
use std::cell::Cell;

/// Whether the most recent processed frame contained a hand.
///
/// Never aggregates over frames; each update replaces the previous value.
#[derive(Debug, Default)]
pub struct DetectionState {
    present: Cell<bool>,
}

impl DetectionState {
    pub fn update(&self, present: bool) {
        self.present.set(present);
    }
    pub fn is_present(&self) -> bool {
        self.present.get()
    }
}

impl DetectionObserver for DetectionState {
    fn on_detection_change(&self, present: bool) {
        self.update(present);
    }
}
