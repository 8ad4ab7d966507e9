//! Meeting store
//!
//! In-memory meetings keyed by UTC hour. A meeting's UTC hour is fixed when it
//! is created; only how it is displayed depends on the ring assignment.

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::location::Location;
use crate::overlap::OverlapClassifier;

/// Unique meeting identifier, never reused within a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MeetingId(u64);

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    /// UTC hour slot (0-23)
    pub utc_hour: u32,
    pub title: String,
    /// Essential for cross-location collaboration
    pub essential: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingStore {
    meetings: Vec<Meeting>,
    next_id: u64,
}

impl MeetingStore {
    pub fn new() -> Self {
        Self {
            meetings: Vec::new(),
            next_id: 1,
        }
    }

    /// Insert a meeting with a fresh id
    ///
    /// The title is trimmed; an empty title or an hour past 23 is rejected.
    pub fn add(&mut self, utc_hour: u32, title: &str, essential: bool) -> Result<Meeting> {
        if utc_hour >= 24 {
            warn!("Rejected meeting at invalid UTC hour {}", utc_hour);
            return Err(CoreError::InvalidHour(utc_hour));
        }
        let title = title.trim();
        if title.is_empty() {
            warn!("Rejected meeting with empty title at UTC {:02}:00", utc_hour);
            return Err(CoreError::EmptyTitle);
        }

        let meeting = Meeting {
            id: MeetingId(self.next_id),
            utc_hour,
            title: title.to_string(),
            essential,
        };
        self.next_id += 1;
        self.meetings.push(meeting.clone());
        debug!("Added meeting {} at UTC {:02}:00", meeting.id, utc_hour);
        Ok(meeting)
    }

    /// Remove a meeting; an unknown id is a no-op
    pub fn remove(&mut self, id: MeetingId) -> Option<Meeting> {
        let pos = self.meetings.iter().position(|m| m.id == id)?;
        debug!("Removed meeting {}", id);
        Some(self.meetings.remove(pos))
    }

    pub fn get(&self, id: MeetingId) -> Option<&Meeting> {
        self.meetings.iter().find(|m| m.id == id)
    }

    /// First meeting (in insertion order) at a UTC hour
    ///
    /// Several meetings may share an hour; only the first is returned here.
    pub fn find_by_utc_hour(&self, utc_hour: u32) -> Option<&Meeting> {
        self.meetings.iter().find(|m| m.utc_hour == utc_hour)
    }

    /// Every meeting at a UTC hour, in insertion order
    pub fn at_utc_hour(&self, utc_hour: u32) -> impl Iterator<Item = &Meeting> + '_ {
        self.meetings.iter().filter(move |m| m.utc_hour == utc_hour)
    }

    /// Split meetings into (inside full overlap, outside), keeping order
    pub fn partition_by_overlap(
        &self,
        classifier: &OverlapClassifier,
        reference: Location,
    ) -> (Vec<&Meeting>, Vec<&Meeting>) {
        self.meetings.iter().partition(|m| {
            let local = classifier.engine().to_local(m.utc_hour as f64, reference);
            classifier.is_full_overlap(local, reference)
        })
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn iter(&self) -> impl Iterator<Item = &Meeting> + '_ {
        self.meetings.iter()
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}

impl Default for MeetingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(meetings: &[&Meeting]) -> Vec<String> {
        meetings.iter().map(|m| m.title.clone()).collect()
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut store = MeetingStore::new();
        let a = store.add(16, "Sync Call", true).unwrap();
        let b = store.add(16, "Sync Call", true).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_validates() {
        let mut store = MeetingStore::new();
        assert_eq!(store.add(9, "   ", false), Err(CoreError::EmptyTitle));
        assert_eq!(store.add(24, "Late", false), Err(CoreError::InvalidHour(24)));
        assert!(store.is_empty());

        let m = store.add(9, "  Standup ", false).unwrap();
        assert_eq!(m.title, "Standup");
    }

    #[test]
    fn test_remove_round_trip() {
        let mut store = MeetingStore::new();
        store.add(9, "Standup", false).unwrap();
        store.add(16, "Sync Call", true).unwrap();
        let before = store.meetings().to_vec();

        let added = store.add(12, "Lunch", false).unwrap();
        assert_eq!(store.remove(added.id), Some(added));
        assert_eq!(store.meetings(), before.as_slice());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut store = MeetingStore::new();
        let m = store.add(9, "Standup", false).unwrap();
        store.remove(m.id);
        assert_eq!(store.remove(m.id), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut store = MeetingStore::new();
        let first = store.add(10, "First", false).unwrap();
        store.add(10, "Second", true).unwrap();
        assert_eq!(store.find_by_utc_hour(10), Some(&first));
        assert_eq!(store.at_utc_hour(10).count(), 2);
        assert_eq!(store.find_by_utc_hour(11), None);
    }

    #[test]
    fn test_partition_by_overlap() {
        let classifier = OverlapClassifier::default();
        let mut store = MeetingStore::new();
        store.add(16, "Sync Call", true).unwrap();
        store.add(9, "Standup", false).unwrap();
        store.add(14, "Review", false).unwrap();

        let (inside, outside) = store.partition_by_overlap(&classifier, Location::London);
        assert_eq!(titles(&inside), vec!["Sync Call", "Review"]);
        assert_eq!(titles(&outside), vec!["Standup"]);

        // Classification does not depend on which location is the reference
        let (inside, _) = store.partition_by_overlap(&classifier, Location::Dallas);
        assert_eq!(titles(&inside), vec!["Sync Call", "Review"]);
    }
}
