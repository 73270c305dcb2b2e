// Copyright 2026 the Penpoint Authors
// SPDX-License-Identifier: Apache-2.0

//! Anchor points and their tangent handles.
//!
//! An anchor is a fixed vertex on a path. `cp_in` is the tangent handle
//! shaping the curve *arriving* at the anchor, `cp_out` the one shaping
//! the curve *leaving* it. A `Smooth` anchor keeps the two handles
//! mirror-symmetric through the anchor; a `Corner` anchor lets them
//! move independently.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Whether an anchor's handles are kept mirror-symmetric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorKind {
    /// Handles are independent
    Corner,
    /// Handles are reflections of each other through the anchor
    Smooth,
}

/// A vertex on a path, with optional tangent handles on either side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    /// Position in local path space
    pub point: Point,
    /// Handle controlling the curve arriving at this anchor
    pub cp_in: Option<Point>,
    /// Handle controlling the curve leaving this anchor
    pub cp_out: Option<Point>,
    /// Smooth or corner classification
    pub kind: AnchorKind,
}

impl AnchorPoint {
    /// A plain corner anchor with no handles
    pub fn corner(point: Point) -> Self {
        Self {
            point,
            cp_in: None,
            cp_out: None,
            kind: AnchorKind::Corner,
        }
    }

    /// Reflect a point through this anchor (`2·anchor − p`)
    pub fn reflect(&self, p: Point) -> Point {
        Point::new(2.0 * self.point.x - p.x, 2.0 * self.point.y - p.y)
    }

    /// Rigidly translate the anchor and both handles by a delta
    pub fn translate(&mut self, delta: Vec2) {
        self.point += delta;
        if let Some(cp) = self.cp_in.as_mut() {
            *cp += delta;
        }
        if let Some(cp) = self.cp_out.as_mut() {
            *cp += delta;
        }
    }

    /// Set `cp_out` and mirror it into `cp_in`, marking the anchor smooth
    pub fn set_out_mirrored(&mut self, cp_out: Point) {
        self.cp_out = Some(cp_out);
        self.cp_in = Some(self.reflect(cp_out));
        self.kind = AnchorKind::Smooth;
    }

    /// True when both handles are present and mirror images of each
    /// other within `tolerance`
    pub fn handles_symmetric(&self, tolerance: f64) -> bool {
        match (self.cp_in, self.cp_out) {
            (Some(cp_in), Some(cp_out)) => (self.reflect(cp_out) - cp_in).hypot() <= tolerance,
            _ => false,
        }
    }

    /// Rebuild both handles as a symmetric pair.
    ///
    /// The new pair lies along the average of the two current handle
    /// directions and preserves the combined handle length, split
    /// evenly. Anchors with fewer than two handles are just
    /// reclassified; there is nothing to symmetrize.
    pub fn make_smooth(&mut self) {
        self.kind = AnchorKind::Smooth;
        let (Some(cp_in), Some(cp_out)) = (self.cp_in, self.cp_out) else {
            return;
        };

        let v_out = cp_out - self.point;
        let v_in = cp_in - self.point;
        // The outgoing direction averaged with the reflected incoming one
        let axis = v_out - v_in;
        if axis.hypot() < f64::EPSILON {
            return;
        }
        let axis = axis / axis.hypot();
        let half = (v_out.hypot() + v_in.hypot()) / 2.0;
        self.cp_out = Some(self.point + axis * half);
        self.cp_in = Some(self.point - axis * half);
    }
}
