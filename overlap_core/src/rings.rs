//! Ring assignment - which location is drawn on which ring
//!
//! The assignment is always a bijection between the three rings and the three
//! locations. Reassigning a ring to a location held elsewhere swaps the two.

use crate::error::{CoreError, Result};
use crate::location::{Location, RingId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RingAssignment {
    /// Location per ring, indexed outer, middle, inner
    slots: [Location; 3],
}

impl RingAssignment {
    /// Build an assignment, rejecting any location used twice
    pub fn new(outer: Location, middle: Location, inner: Location) -> Result<Self> {
        let assignment = Self {
            slots: [outer, middle, inner],
        };
        if assignment.is_bijection() {
            Ok(assignment)
        } else {
            Err(CoreError::RingConflict)
        }
    }

    pub fn location_on(&self, ring: RingId) -> Location {
        self.slots[ring.index()]
    }

    /// The ring currently holding `location`
    pub fn ring_of(&self, location: Location) -> Option<RingId> {
        RingId::ALL
            .iter()
            .copied()
            .find(|ring| self.location_on(*ring) == location)
    }

    /// The reference location: whatever sits on the outer ring
    pub fn reference(&self) -> Location {
        self.location_on(RingId::Outer)
    }

    /// Put `location` on `ring`, swapping with the ring that held it
    pub fn reassign(&self, ring: RingId, location: Location) -> RingAssignment {
        let mut next = *self;
        match self.ring_of(location) {
            Some(holder) if holder != ring => {
                next.slots[holder.index()] = self.location_on(ring);
                next.slots[ring.index()] = location;
            }
            _ => next.slots[ring.index()] = location,
        }
        next
    }

    pub fn is_bijection(&self) -> bool {
        Location::ALL
            .iter()
            .all(|loc| self.slots.iter().filter(|held| *held == loc).count() == 1)
    }

    /// (ring, location) pairs, outermost first
    pub fn iter(&self) -> impl Iterator<Item = (RingId, Location)> + '_ {
        RingId::ALL.iter().map(move |&ring| (ring, self.location_on(ring)))
    }

    /// Header line, e.g. "London (Outer) • Connecticut (Middle) • Dallas (Inner)"
    pub fn describe(&self) -> String {
        self.iter()
            .map(|(ring, loc)| format!("{} ({})", loc.name(), ring.name()))
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

impl Default for RingAssignment {
    fn default() -> Self {
        Self {
            slots: [Location::London, Location::Connecticut, Location::Dallas],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_assignment() {
        let rings = RingAssignment::default();
        assert_eq!(rings.reference(), Location::London);
        assert_eq!(rings.location_on(RingId::Inner), Location::Dallas);
        assert!(rings.is_bijection());
    }

    #[test]
    fn test_reassign_swaps() {
        let rings = RingAssignment::default();
        let next = rings.reassign(RingId::Outer, Location::Dallas);
        assert_eq!(next.location_on(RingId::Outer), Location::Dallas);
        assert_eq!(next.location_on(RingId::Inner), Location::London);
        assert_eq!(next.location_on(RingId::Middle), Location::Connecticut);
        // Input assignment is untouched
        assert_eq!(rings.reference(), Location::London);
    }

    #[test]
    fn test_reassign_same_location_is_noop() {
        let rings = RingAssignment::default();
        assert_eq!(rings.reassign(RingId::Middle, Location::Connecticut), rings);
    }

    #[test]
    fn test_new_rejects_duplicates() {
        assert_eq!(
            RingAssignment::new(Location::London, Location::London, Location::Dallas),
            Err(CoreError::RingConflict)
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            RingAssignment::default().describe(),
            "London (Outer) • Connecticut (Middle) • Dallas (Inner)"
        );
    }

    proptest! {
        #[test]
        fn prop_reassign_keeps_bijection(
            steps in prop::collection::vec((0usize..3, 0usize..3), 0..32)
        ) {
            let mut rings = RingAssignment::default();
            for (r, l) in steps {
                rings = rings.reassign(RingId::ALL[r], Location::ALL[l]);
                prop_assert!(rings.is_bijection());
                prop_assert_eq!(rings.location_on(RingId::ALL[r]), Location::ALL[l]);
            }
        }
    }
}
