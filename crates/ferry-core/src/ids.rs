//! Strongly typed identifier for vessels.
//!
//! The inner integer is `pub` to allow direct indexing into the fleet slab
//! via `id.0 as usize`, but callers should prefer the `.index()` helper for
//! clarity.

use std::fmt;

/// Index of a vessel in the fleet slab.
///
/// Vessels exist for the whole run, so the id doubles as a stable slab
/// index: vessel `n` lives at `fleet[n]` from construction to the horizon.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct VesselId(pub u32);

impl VesselId {
    /// Cast to `usize` for direct use as a slab index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VesselId({})", self.0)
    }
}

impl From<VesselId> for usize {
    #[inline(always)]
    fn from(id: VesselId) -> usize {
        id.index()
    }
}
