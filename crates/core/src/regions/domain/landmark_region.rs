//! The closed set of named face regions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::region_indices::*;
use super::region_shape::RegionShape;
use crate::shared::topology::FaceMeshTopology;

/// Raised when a region is looked up by a name outside the enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown landmark region: {0}")]
pub struct UnknownRegion(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkRegion {
    LeftEye,
    RightEye,
    LeftIris,
    RightIris,
    OuterLips,
    InnerLips,
    Nose,
    MouthCorners,
    RightEar,
    LeftEar,
    RightEyebrow,
    LeftEyebrow,
    FaceOval,
    NoseBridge,
    RightCheek,
    LeftCheek,
    Forehead,
}

impl LandmarkRegion {
    /// Every region, in declaration order.
    pub const ALL: [LandmarkRegion; 17] = [
        Self::LeftEye,
        Self::RightEye,
        Self::LeftIris,
        Self::RightIris,
        Self::OuterLips,
        Self::InnerLips,
        Self::Nose,
        Self::MouthCorners,
        Self::RightEar,
        Self::LeftEar,
        Self::RightEyebrow,
        Self::LeftEyebrow,
        Self::FaceOval,
        Self::NoseBridge,
        Self::RightCheek,
        Self::LeftCheek,
        Self::Forehead,
    ];

    pub const fn indices(self) -> &'static [usize] {
        match self {
            Self::LeftEye => &LEFT_EYE_INDICES,
            Self::RightEye => &RIGHT_EYE_INDICES,
            Self::LeftIris => &LEFT_IRIS_INDICES,
            Self::RightIris => &RIGHT_IRIS_INDICES,
            Self::OuterLips => &OUTER_LIPS_INDICES,
            Self::InnerLips => &INNER_LIPS_INDICES,
            Self::Nose => &NOSE_INDICES,
            Self::MouthCorners => &MOUTH_CORNER_INDICES,
            Self::RightEar => &RIGHT_EAR_INDICES,
            Self::LeftEar => &LEFT_EAR_INDICES,
            Self::RightEyebrow => &RIGHT_EYEBROW_INDICES,
            Self::LeftEyebrow => &LEFT_EYEBROW_INDICES,
            Self::FaceOval => &FACE_OVAL_INDICES,
            Self::NoseBridge => &NOSE_BRIDGE_INDICES,
            Self::RightCheek => &RIGHT_CHEEK_INDICES,
            Self::LeftCheek => &LEFT_CHEEK_INDICES,
            Self::Forehead => &FOREHEAD_INDICES,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftIris => "left_iris",
            Self::RightIris => "right_iris",
            Self::OuterLips => "outer_lips",
            Self::InnerLips => "inner_lips",
            Self::Nose => "nose",
            Self::MouthCorners => "mouth_corners",
            Self::RightEar => "right_ear",
            Self::LeftEar => "left_ear",
            Self::RightEyebrow => "right_eyebrow",
            Self::LeftEyebrow => "left_eyebrow",
            Self::FaceOval => "face_oval",
            Self::NoseBridge => "nose_bridge",
            Self::RightCheek => "right_cheek",
            Self::LeftCheek => "left_cheek",
            Self::Forehead => "forehead",
        }
    }

    pub const fn shape(self) -> RegionShape {
        match self {
            Self::LeftEye
            | Self::RightEye
            | Self::OuterLips
            | Self::InnerLips
            | Self::RightEyebrow
            | Self::LeftEyebrow
            | Self::FaceOval => RegionShape::ClosedContour,
            Self::NoseBridge | Self::Forehead => RegionShape::OpenPolyline,
            Self::LeftIris
            | Self::RightIris
            | Self::Nose
            | Self::MouthCorners
            | Self::RightEar
            | Self::LeftEar
            | Self::RightCheek
            | Self::LeftCheek => RegionShape::PointCluster,
        }
    }

    /// Smallest detector topology whose output covers every index.
    pub const fn min_topology(self) -> FaceMeshTopology {
        match self {
            Self::LeftIris | Self::RightIris => FaceMeshTopology::MeshWithIrises478,
            _ => FaceMeshTopology::Mesh468,
        }
    }
}

impl fmt::Display for LandmarkRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Accepts `LeftEye`, `left_eye`, `left-eye` and `left eye`, case-insensitively.
impl FromStr for LandmarkRegion {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|r| normalize(r.name()) == wanted)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::pascal("LeftEye", LandmarkRegion::LeftEye)]
    #[case::snake("left_eye", LandmarkRegion::LeftEye)]
    #[case::kebab("face-oval", LandmarkRegion::FaceOval)]
    #[case::spaced("Nose Bridge", LandmarkRegion::NoseBridge)]
    #[case::upper("MOUTH_CORNERS", LandmarkRegion::MouthCorners)]
    #[case::single_word("forehead", LandmarkRegion::Forehead)]
    fn test_parse_accepts_name_variants(#[case] input: &str, #[case] expected: LandmarkRegion) {
        assert_eq!(input.parse::<LandmarkRegion>().unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::unknown("chin")]
    #[case::partial("left")]
    #[case::typo("left_eyes")]
    fn test_parse_rejects_unknown(#[case] input: &str) {
        let err = input.parse::<LandmarkRegion>().unwrap_err();
        assert_eq!(err, UnknownRegion(input.to_string()));
    }

    #[test]
    fn test_unknown_region_message() {
        let err = UnknownRegion("chin".into());
        assert_eq!(err.to_string(), "unknown landmark region: chin");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for region in LandmarkRegion::ALL {
            assert_eq!(region.to_string().parse::<LandmarkRegion>(), Ok(region));
        }
    }

    #[test]
    fn test_serde_name_matches_display() {
        for region in LandmarkRegion::ALL {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.name()));
        }
    }

    #[test]
    fn test_all_regions_non_empty() {
        for region in LandmarkRegion::ALL {
            assert!(!region.indices().is_empty(), "{region} has no indices");
        }
    }

    #[rstest]
    #[case::oval(LandmarkRegion::FaceOval, RegionShape::ClosedContour)]
    #[case::outer_lips(LandmarkRegion::OuterLips, RegionShape::ClosedContour)]
    #[case::bridge(LandmarkRegion::NoseBridge, RegionShape::OpenPolyline)]
    #[case::corners(LandmarkRegion::MouthCorners, RegionShape::PointCluster)]
    #[case::iris(LandmarkRegion::LeftIris, RegionShape::PointCluster)]
    fn test_shape(#[case] region: LandmarkRegion, #[case] expected: RegionShape) {
        assert_eq!(region.shape(), expected);
    }

    #[test]
    fn test_min_topology_covers_region() {
        for region in LandmarkRegion::ALL {
            assert!(region.min_topology().supports(region), "{region}");
        }
    }
}
