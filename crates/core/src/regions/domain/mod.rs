pub mod feature_mask;
pub mod landmark_region;
pub mod point_selector;
pub mod region_indices;
pub mod region_registry;
pub mod region_shape;
