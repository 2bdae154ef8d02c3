//! Named face-mesh landmark regions.
//!
//! Every region maps to a fixed, ordered list of point indices into the
//! output of a MediaPipe-style face-mesh detector. The tables are plain
//! constants; nothing here allocates or mutates at runtime.

pub mod regions;
pub mod shared;
