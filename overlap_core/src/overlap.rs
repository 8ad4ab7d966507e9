//! Work-hour and full-overlap classification
//!
//! A location is "working" while its local hour sits inside the half-open work
//! window. A reference hour is a full overlap when every location is working.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::location::Location;
use crate::time_engine::{TimeEngine, HOURS_PER_DAY};

/// Default start of the work window (inclusive)
pub const WORK_START: f64 = 8.0;
/// Default end of the work window (exclusive)
pub const WORK_END: f64 = 18.0;

/// Half-open local-hour interval `[start, end)`; no wraparound across midnight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkWindow {
    start: f64,
    end: f64,
}

impl WorkWindow {
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !(0.0..HOURS_PER_DAY).contains(&start) || end <= start || end > HOURS_PER_DAY {
            return Err(CoreError::InvalidWorkWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn contains(&self, hour: f64) -> bool {
        hour >= self.start && hour < self.end
    }
}

impl Default for WorkWindow {
    fn default() -> Self {
        Self {
            start: WORK_START,
            end: WORK_END,
        }
    }
}

/// Whether `hour` falls inside the default 8..18 window
pub fn is_work_hour(hour: f64) -> bool {
    WorkWindow::default().contains(hour)
}

/// Classifies hour slots against the work window of every location
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlapClassifier {
    engine: TimeEngine,
    window: WorkWindow,
}

impl OverlapClassifier {
    pub fn new(engine: TimeEngine, window: WorkWindow) -> Self {
        Self { engine, window }
    }

    pub fn engine(&self) -> &TimeEngine {
        &self.engine
    }

    pub fn window(&self) -> WorkWindow {
        self.window
    }

    pub fn is_work_hour(&self, hour: f64) -> bool {
        self.window.contains(hour)
    }

    /// Whether `target` is working when `reference` is at `reference_hour`
    pub fn is_working(&self, reference_hour: f64, reference: Location, target: Location) -> bool {
        self.is_work_hour(self.engine.convert(reference_hour, reference, target))
    }

    /// Whether all three locations are working at `reference_hour`
    pub fn is_full_overlap(&self, reference_hour: f64, reference: Location) -> bool {
        Location::ALL
            .iter()
            .all(|&target| self.is_working(reference_hour, reference, target))
    }

    /// Reference-local hours (0-23) with full overlap
    pub fn overlap_slots(&self, reference: Location) -> Vec<u32> {
        (0..24)
            .filter(|&h| self.is_full_overlap(h as f64, reference))
            .collect()
    }

    /// Locations outside their work window at `reference_hour`
    ///
    /// Ordered London, Connecticut, Dallas to match the slot detail readout.
    pub fn idle_locations(&self, reference_hour: f64, reference: Location) -> Vec<Location> {
        Location::ALL
            .iter()
            .rev()
            .copied()
            .filter(|&target| !self.is_working(reference_hour, reference, target))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_work_window_boundaries() {
        assert!(is_work_hour(8.0));
        assert!(is_work_hour(17.99));
        assert!(!is_work_hour(18.0));
        assert!(!is_work_hour(7.999));
    }

    #[test]
    fn test_work_window_validation() {
        assert!(WorkWindow::new(9.0, 17.0).is_ok());
        assert!(WorkWindow::new(18.0, 8.0).is_err());
        assert!(WorkWindow::new(8.0, 8.0).is_err());
        assert!(WorkWindow::new(-1.0, 8.0).is_err());
        assert!(WorkWindow::new(0.0, 24.0).is_ok());
    }

    #[test]
    fn test_overlap_slots_from_london() {
        let classifier = OverlapClassifier::default();
        assert_eq!(classifier.overlap_slots(Location::London), vec![14, 15, 16, 17]);
    }

    #[test]
    fn test_overlap_slots_from_dallas() {
        let classifier = OverlapClassifier::default();
        // Same four UTC hours, seen from UTC-6
        assert_eq!(classifier.overlap_slots(Location::Dallas), vec![8, 9, 10, 11]);
    }

    #[test]
    fn test_is_working() {
        let classifier = OverlapClassifier::default();
        // UTC 9:00 is 3:00 in Dallas
        assert!(!classifier.is_working(9.0, Location::London, Location::Dallas));
        assert!(classifier.is_working(9.0, Location::London, Location::London));
        assert!(classifier.is_working(16.0, Location::London, Location::Dallas));
    }

    #[test]
    fn test_idle_locations() {
        let classifier = OverlapClassifier::default();
        assert_eq!(
            classifier.idle_locations(9.0, Location::London),
            vec![Location::Connecticut, Location::Dallas]
        );
        assert!(classifier.idle_locations(15.0, Location::London).is_empty());
        assert_eq!(
            classifier.idle_locations(2.0, Location::London),
            vec![Location::London, Location::Connecticut, Location::Dallas]
        );
    }

    #[test]
    fn test_custom_window() {
        let window = WorkWindow::new(9.0, 17.0).unwrap();
        let classifier = OverlapClassifier::new(TimeEngine::default(), window);
        assert_eq!(classifier.overlap_slots(Location::London), vec![15, 16]);
    }

    proptest! {
        #[test]
        fn prop_full_overlap_implies_everyone_working(h in 0u32..24) {
            let classifier = OverlapClassifier::default();
            for reference in Location::ALL {
                if classifier.is_full_overlap(h as f64, reference) {
                    for target in Location::ALL {
                        prop_assert!(classifier.is_working(h as f64, reference, target));
                    }
                }
            }
        }
    }
}
