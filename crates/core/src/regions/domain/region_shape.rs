use serde::{Deserialize, Serialize};

/// How a region's points relate to each other when drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionShape {
    /// Ordered outline; the last point joins back to the first.
    ClosedContour,
    /// Ordered line that does not close.
    OpenPolyline,
    /// Unordered set of points.
    PointCluster,
}

impl RegionShape {
    pub fn is_ordered(self) -> bool {
        !matches!(self, Self::PointCluster)
    }

    pub fn is_closed(self) -> bool {
        matches!(self, Self::ClosedContour)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClosedContour => "closed_contour",
            Self::OpenPolyline => "open_polyline",
            Self::PointCluster => "point_cluster",
        }
    }
}

impl std::fmt::Display for RegionShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
