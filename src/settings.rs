// Copyright 2026 the Penpoint Authors
// SPDX-License-Identifier: Apache-2.0

//! Engine settings and tunable constants.
//!
//! These are the behavioral knobs of the editing engine. Anything
//! visual (marker radii, dash patterns) belongs to the host; only
//! geometry-affecting tolerances live here.

// ============================================================================
// PEN TOOL SETTINGS
// ============================================================================
/// Distance (global/screen units) within which a click on the first
/// anchor closes the path being drawn
const PEN_CLOSE_TOLERANCE: f64 = 16.0;

// ============================================================================
// HIT TEST SETTINGS
// ============================================================================
/// Number of evenly spaced parameter steps when sampling a segment for
/// nearest-point search. The segment is evaluated at `samples + 1`
/// positions. Sampling trades closed-form exactness for robustness on
/// degenerate and self-intersecting curves.
const HIT_TEST_CURVE_SAMPLES: usize = 20;

/// Maximum distance (screen units) for a click to register on an
/// anchor or handle marker
const HIT_TEST_MIN_CLICK_DISTANCE: f64 = 8.0;

// ============================================================================
// POINT EDITOR SETTINGS
// ============================================================================
/// Maximum distance (local units) from a segment at which `add_point`
/// will splice in a new anchor
const EDITING_INSERT_TOLERANCE: f64 = 20.0;

// ============================================================================
// PATH GEOMETRY SETTINGS
// ============================================================================
/// Two handles count as mirror images when their reflections land
/// within this distance (local units) of each other
const PATH_SYMMETRY_TOLERANCE: f64 = 1.0;

/// Determinant magnitude below which an affine transform is treated as
/// singular and replaced by the identity
const GEOMETRY_DET_EPSILON: f64 = 1e-9;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Pen tool tunables
pub mod pen {
    /// Click-to-close distance in global units
    pub const CLOSE_TOLERANCE: f64 = super::PEN_CLOSE_TOLERANCE;
}

/// Hit-testing tunables
pub mod hit_test {
    /// Segment sampling density for nearest-point search
    pub const CURVE_SAMPLES: usize = super::HIT_TEST_CURVE_SAMPLES;

    /// Marker click radius in screen units
    pub const MIN_CLICK_DISTANCE: f64 = super::HIT_TEST_MIN_CLICK_DISTANCE;
}

/// Point editor tunables
pub mod editing {
    /// Anchor insertion distance cutoff in local units
    pub const INSERT_TOLERANCE: f64 = super::EDITING_INSERT_TOLERANCE;
}

/// Path geometry tolerances
pub mod path {
    /// Handle mirror-symmetry tolerance in local units
    pub const SYMMETRY_TOLERANCE: f64 = super::PATH_SYMMETRY_TOLERANCE;
}

/// Coordinate transform tolerances
pub mod geometry {
    /// Singular-matrix determinant cutoff
    pub const DET_EPSILON: f64 = super::GEOMETRY_DET_EPSILON;
}
