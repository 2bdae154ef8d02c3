//! Facial features that skin effects (smoothing, brightening) leave untouched.

use serde::Serialize;

use super::landmark_region::LandmarkRegion;

/// Full lip outline: upper outer, lower outer, upper inner, lower inner.
///
/// Denser than `OuterLips`/`InnerLips` along the upper lip, which the
/// mask needs to avoid smoothing over the cupid's bow.
pub const MOUTH_CONTOUR_INDICES: [usize; 40] = [
    61, 185, 40, 39, 37, 0, 267, 269, 270, 409, 291, // upper outer
    375, 321, 405, 314, 17, 84, 181, 91, 146, // lower outer
    78, 191, 80, 81, 82, 13, 312, 311, 310, 415, 308, // upper inner
    324, 318, 402, 317, 14, 87, 178, 88, 95, // lower inner
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MaskSegment {
    pub name: &'static str,
    pub indices: &'static [usize],
}

impl MaskSegment {
    fn from_region(region: LandmarkRegion) -> Self {
        Self {
            name: region.name(),
            indices: region.indices(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureMask {
    segments: Vec<MaskSegment>,
}

impl FeatureMask {
    /// Eyes, eyebrows and mouth: the areas a smoothing pass must skip.
    pub fn smoothing_exclusion() -> Self {
        let mut segments: Vec<MaskSegment> = [
            LandmarkRegion::LeftEye,
            LandmarkRegion::RightEye,
            LandmarkRegion::LeftEyebrow,
            LandmarkRegion::RightEyebrow,
        ]
        .into_iter()
        .map(MaskSegment::from_region)
        .collect();
        segments.push(MaskSegment {
            name: "mouth_contour",
            indices: &MOUTH_CONTOUR_INDICES,
        });
        Self { segments }
    }

    pub fn segments(&self) -> &[MaskSegment] {
        &self.segments
    }

    /// All segment indices concatenated in segment order.
    pub fn indices(&self) -> Vec<usize> {
        self.segments
            .iter()
            .flat_map(|s| s.indices.iter().copied())
            .collect()
    }

    pub fn point_count(&self) -> usize {
        self.segments.iter().map(|s| s.indices.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_smoothing_exclusion_layout() {
        let mask = FeatureMask::smoothing_exclusion();
        let sizes: Vec<_> = mask
            .segments()
            .iter()
            .map(|s| (s.name, s.indices.len()))
            .collect();
        assert_eq!(
            sizes,
            vec![
                ("left_eye", 16),
                ("right_eye", 16),
                ("left_eyebrow", 10),
                ("right_eyebrow", 10),
                ("mouth_contour", 40),
            ]
        );
        assert_eq!(mask.point_count(), 92);
        assert_eq!(mask.indices().len(), 92);
    }

    #[test]
    fn test_mouth_contour_contains_both_lip_tables() {
        let contour: HashSet<_> = MOUTH_CONTOUR_INDICES.iter().collect();
        for region in [
            LandmarkRegion::OuterLips,
            LandmarkRegion::InnerLips,
            LandmarkRegion::MouthCorners,
        ] {
            assert!(region.indices().iter().all(|i| contour.contains(i)), "{region}");
        }
    }

    #[test]
    fn test_mouth_contour_starts_and_turns_at_corners() {
        assert_eq!(MOUTH_CONTOUR_INDICES[0], 61);
        assert_eq!(MOUTH_CONTOUR_INDICES[10], 291);
    }

    #[test]
    fn test_indices_follow_segment_order() {
        let flat = FeatureMask::smoothing_exclusion().indices();
        assert_eq!(flat[0], 33);
        assert_eq!(flat[16], 362);
        assert_eq!(flat[91], 95);
    }
}
