//! Maps a region onto a detector's landmark array.
//!
//! The region tables never check bounds; these helpers are for consumers
//! that hold an actual landmark slice and need to validate it.

use thiserror::Error;

use super::landmark_region::LandmarkRegion;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointSelectionError {
    #[error("{region} index {index} out of range (landmark count: {len})")]
    IndexOutOfRange {
        region: LandmarkRegion,
        index: usize,
        len: usize,
    },
}

/// Points of `region` in table order. Fails on the first index past the
/// end of `points`.
pub fn select<P>(region: LandmarkRegion, points: &[P]) -> Result<Vec<&P>, PointSelectionError> {
    region
        .indices()
        .iter()
        .map(|&index| {
            points
                .get(index)
                .ok_or(PointSelectionError::IndexOutOfRange {
                    region,
                    index,
                    len: points.len(),
                })
        })
        .collect()
}

/// Like [`select`], but skips out-of-range indices with a warning.
pub fn select_lossy<P>(region: LandmarkRegion, points: &[P]) -> Vec<&P> {
    region
        .indices()
        .iter()
        .filter_map(|&index| {
            let point = points.get(index);
            if point.is_none() {
                log::warn!(
                    "{region} landmark index {index} out of range (count: {})",
                    points.len()
                );
            }
            point
        })
        .collect()
}

pub fn covers(region: LandmarkRegion, len: usize) -> bool {
    region.indices().iter().all(|&i| i < len)
}

/// Fraction of `region`'s indices addressable in a `len`-point array.
pub fn coverage(region: LandmarkRegion, len: usize) -> f64 {
    let indices = region.indices();
    let addressable = indices.iter().filter(|&&i| i < len).count();
    addressable as f64 / indices.len() as f64
}
