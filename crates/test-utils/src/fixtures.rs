//! Fixed normal vectors covering the interesting tilt regimes.

/// Normal vectors used across transform tests.
pub mod normals {
    /// Untilted disk
    pub const FLAT: [f64; 3] = [0.0, 0.0, 1.0];

    /// Untilted but not normalized and pointing down the z axis
    pub const FLAT_FLIPPED: [f64; 3] = [0.0, 0.0, -4.0];

    /// Normal along +x: the disk is seen edge-on from the pole
    pub const EDGE_ON_X: [f64; 3] = [1.0, 0.0, 0.0];

    /// Small tilt towards +x
    pub const SLIGHT_X: [f64; 3] = [0.05, 0.0, 1.0];

    /// Moderate tilt with a twisted azimuth, not normalized
    pub const TWISTED: [f64; 3] = [0.3, -0.4, 2.0];

    /// Tilt in the third quadrant of azimuth
    pub const THIRD_QUADRANT: [f64; 3] = [-0.2, -0.35, 0.9];

    /// Every tilted fixture, for table-driven tests
    pub const TILTED: [[f64; 3]; 4] = [EDGE_ON_X, SLIGHT_X, TWISTED, THIRD_QUADRANT];
}

/// Sample polar/azimuthal angle pairs away from the poles.
pub const SAMPLE_DIRECTIONS: [(f64, f64); 6] = [
    (1.5707963267948966, 0.4),
    (1.2, 0.7),
    (0.9, 2.5),
    (1.9, 3.3),
    (2.3, 4.6),
    (1.4, 6.0),
];
