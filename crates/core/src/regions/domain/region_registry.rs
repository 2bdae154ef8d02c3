//! Read-only lookup from region name to landmark indices.
//!
//! The registry is backed entirely by constants, so any number of threads
//! may query it without synchronization.

use super::landmark_region::{LandmarkRegion, UnknownRegion};

/// Resolve a region by name and return its ordered indices.
///
/// Fails only when `name` is not one of the known regions, which points
/// at a caller bug rather than a runtime condition.
pub fn get_indices(name: &str) -> Result<&'static [usize], UnknownRegion> {
    let region: LandmarkRegion = name.parse().map_err(|e: UnknownRegion| {
        log::debug!("region lookup failed: {e}");
        e
    })?;
    Ok(region.indices())
}

pub fn indices(region: LandmarkRegion) -> &'static [usize] {
    region.indices()
}

pub fn regions() -> impl Iterator<Item = (LandmarkRegion, &'static [usize])> {
    LandmarkRegion::ALL.into_iter().map(|r| (r, r.indices()))
}

/// Largest index referenced by any region.
pub fn max_index() -> usize {
    regions()
        .flat_map(|(_, indices)| indices.iter().copied())
        .max()
        .unwrap_or(0)
}

/// Minimum landmark array length that every region can address.
pub fn required_landmark_count() -> usize {
    max_index() + 1
}

/// Indices of `a` that also appear in `b`, in `a`'s order.
pub fn shared_indices(a: LandmarkRegion, b: LandmarkRegion) -> Vec<usize> {
    let other = b.indices();
    a.indices()
        .iter()
        .copied()
        .filter(|i| other.contains(i))
        .collect()
}
