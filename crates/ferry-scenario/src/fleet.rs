//! Vessel and vehicle state.
//!
//! Vessels live for the whole run in a slab indexed by [`VesselId`]; the
//! at-dock pool holds ids, so a vessel is "in transit" exactly when its id
//! is absent from the pool (it rides inside the pending return event).
//! Vehicles are transient: created on arrival, owned by the queue while
//! waiting, dropped once boarded.

use ferry_core::{SimTime, VesselId};

/// One vessel of the fleet.
///
/// `used_capacity` counts reserved slots, not completed boardings: an
/// embark attempt increments it the moment it claims a slot, before its
/// service delay elapses.  Departure resets it to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    pub id: VesselId,
    pub used_capacity: u32,
}

impl Vessel {
    pub fn new(id: VesselId) -> Self {
        Vessel {
            id,
            used_capacity: 0,
        }
    }
}

/// Build the initial fleet: ids `0..count`, all empty, all at dock.
pub fn build_fleet(count: u32) -> Vec<Vessel> {
    (0..count).map(|i| Vessel::new(VesselId(i))).collect()
}

/// A vehicle waiting in the terminal queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vehicle {
    pub arrived_at: SimTime,
}
