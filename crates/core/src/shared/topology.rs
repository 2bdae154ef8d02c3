//! Face-mesh numbering schemes the region tables are written against.
//!
//! Indices are only meaningful relative to one detector's point ordering.
//! The tables assume the canonical 468-point face mesh, optionally followed
//! by the 10 iris refinement points (468..=477).

use serde::{Deserialize, Serialize};

use crate::regions::domain::landmark_region::LandmarkRegion;
use crate::shared::constants::{FACE_MESH_POINT_COUNT, FACE_MESH_WITH_IRISES_POINT_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceMeshTopology {
    Mesh468,
    MeshWithIrises478,
}

impl FaceMeshTopology {
    pub const ALL: [FaceMeshTopology; 2] = [Self::Mesh468, Self::MeshWithIrises478];

    pub const fn point_count(self) -> usize {
        match self {
            Self::Mesh468 => FACE_MESH_POINT_COUNT,
            Self::MeshWithIrises478 => FACE_MESH_WITH_IRISES_POINT_COUNT,
        }
    }

    /// Exact match only: a 470-point array is not a known topology.
    pub fn from_point_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.point_count() == count)
    }

    pub fn supports(self, region: LandmarkRegion) -> bool {
        region.indices().iter().all(|&i| i < self.point_count())
    }
}

impl std::fmt::Display for FaceMeshTopology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mesh468 => write!(f, "468-point face mesh"),
            Self::MeshWithIrises478 => write!(f, "478-point face mesh with irises"),
        }
    }
}
