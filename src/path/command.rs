// Copyright 2026 the Penpoint Authors
// SPDX-License-Identifier: Apache-2.0

//! The host-facing path command sequence.
//!
//! Exactly four command kinds are ever produced for a host: `MoveTo`,
//! `LineTo`, `CurveTo`, and `ClosePath`. `QuadTo` is accepted on input
//! (some hosts hand us TrueType-style outlines) and degree-elevated to
//! cubic handles during parsing; it is never emitted.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// One drawing command in a path's committed geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Start a new subpath at a point
    MoveTo(Point),
    /// Straight segment to a point
    LineTo(Point),
    /// Cubic bezier segment with two control points
    CurveTo {
        /// Control point leaving the previous anchor
        c1: Point,
        /// Control point arriving at the endpoint
        c2: Point,
        /// Segment endpoint
        to: Point,
    },
    /// Quadratic bezier segment (input only, elevated to cubic on parse)
    QuadTo {
        /// The single quadratic control point
        ctrl: Point,
        /// Segment endpoint
        to: Point,
    },
    /// Close the current subpath
    ClosePath,
}

impl PathCommand {
    /// The endpoint this command moves the pen to, if any
    pub fn endpoint(&self) -> Option<Point> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::CurveTo { to, .. } | PathCommand::QuadTo { to, .. } => Some(*to),
            PathCommand::ClosePath => None,
        }
    }
}

/// Degree-elevate a quadratic control point to the equivalent pair of
/// cubic control points.
///
/// For a quadratic `(p0, q, p1)` the exact cubic has controls at
/// `p0 + 2/3·(q − p0)` and `p1 + 2/3·(q − p1)`.
pub fn elevate_quadratic(start: Point, ctrl: Point, end: Point) -> (Point, Point) {
    let c1 = start + (ctrl - start) * (2.0 / 3.0);
    let c2 = end + (ctrl - end) * (2.0 / 3.0);
    (c1, c2)
}
