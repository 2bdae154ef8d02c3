//! Raw index tables, one per region.
//!
//! Contours are listed in drawing order. Indices refer to positions in the
//! detector's landmark array and are not bounds-checked here.

/// Lower lid (outer to inner corner), then upper lid back.
pub const LEFT_EYE_INDICES: [usize; 16] = [
    33, 7, 163, 144, 145, 153, 154, 155, 133, 173, 157, 158, 159, 160, 161, 246,
];

pub const RIGHT_EYE_INDICES: [usize; 16] = [
    362, 382, 381, 380, 374, 373, 390, 249, 263, 466, 388, 387, 386, 385, 384, 398,
];

/// Iris center followed by four ring points. Requires iris refinement.
pub const LEFT_IRIS_INDICES: [usize; 5] = [468, 469, 470, 471, 472];

pub const RIGHT_IRIS_INDICES: [usize; 5] = [473, 474, 475, 476, 477];

pub const OUTER_LIPS_INDICES: [usize; 21] = [
    61, 146, 91, 181, 84, 17, 314, 405, 321, 375, 291, 308, 324, 318, 402, 317, 14, 87, 178, 88,
    95,
];

pub const INNER_LIPS_INDICES: [usize; 20] = [
    78, 191, 80, 81, 82, 13, 312, 311, 310, 415, 308, 324, 318, 402, 317, 14, 87, 178, 88, 95,
];

pub const NOSE_INDICES: [usize; 21] = [
    1, 2, 98, 327, 168, 197, 195, 5, 4, 45, 220, 115, 122, 6, 351, 417, 456, 399, 209, 49, 64,
];

/// Right and left corners of the mouth.
pub const MOUTH_CORNER_INDICES: [usize; 2] = [61, 291];

pub const RIGHT_EAR_INDICES: [usize; 7] = [127, 234, 93, 132, 58, 172, 136];

pub const LEFT_EAR_INDICES: [usize; 7] = [356, 454, 323, 361, 288, 397, 365];

pub const RIGHT_EYEBROW_INDICES: [usize; 10] = [70, 63, 105, 66, 107, 55, 65, 52, 53, 46];

pub const LEFT_EYEBROW_INDICES: [usize; 10] = [336, 296, 334, 293, 300, 276, 283, 282, 295, 285];

/// Clockwise from the top of the forehead.
pub const FACE_OVAL_INDICES: [usize; 36] = [
    10, 338, 297, 332, 284, 251, 389, 356, 454, 323, 361, 288, 397, 365, 379, 378, 400, 377, 152,
    148, 176, 149, 150, 136, 172, 58, 132, 93, 234, 127, 162, 21, 54, 103, 67, 109,
];

/// Center line, top of the bridge down to the base of the nose.
pub const NOSE_BRIDGE_INDICES: [usize; 9] = [6, 197, 195, 5, 4, 1, 19, 94, 2];

pub const RIGHT_CHEEK_INDICES: [usize; 8] = [50, 101, 118, 117, 111, 46, 53, 52];

pub const LEFT_CHEEK_INDICES: [usize; 8] = [280, 330, 349, 347, 341, 265, 353, 339];

pub const FOREHEAD_INDICES: [usize; 5] = [10, 338, 297, 332, 284];
