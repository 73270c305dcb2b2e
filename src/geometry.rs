// Copyright 2026 the Penpoint Authors
// SPDX-License-Identifier: Apache-2.0

//! Coordinate transforms between an object's local path space and the
//! global space used by pointer input.
//!
//! Path coordinates are stored relative to the object's own centroid
//! (`path_offset`), so local→global subtracts the offset before
//! applying the object's affine transform, and global→local applies
//! the inverse then adds the offset back. A singular transform
//! degrades to the identity rather than producing NaN/∞.

use crate::host::SceneObject;
use crate::settings;
use kurbo::{Affine, Point};

/// Convert a point from the object's local path space to global space
pub fn local_to_global(object: &SceneObject, p: Point) -> Point {
    object.transform * (p - object.path_offset)
}

/// Convert a point from global space to the object's local path space
pub fn global_to_local(object: &SceneObject, p: Point) -> Point {
    invert_or_identity(object.transform) * p + object.path_offset
}

/// Invert an affine transform, falling back to the identity when the
/// determinant is too small to invert safely
pub fn invert_or_identity(transform: Affine) -> Affine {
    let det = transform.determinant();
    if det.abs() < settings::geometry::DET_EPSILON {
        tracing::warn!(det, "degenerate transform, treating as identity");
        return Affine::IDENTITY;
    }
    transform.inverse()
}
