/// Points in the base face mesh (no iris refinement).
pub const FACE_MESH_POINT_COUNT: usize = 468;

/// Points contributed by iris refinement: a center and four ring points per eye.
pub const IRIS_POINT_COUNT: usize = 10;

/// Points in the face mesh with iris refinement enabled.
pub const FACE_MESH_WITH_IRISES_POINT_COUNT: usize = FACE_MESH_POINT_COUNT + IRIS_POINT_COUNT;
