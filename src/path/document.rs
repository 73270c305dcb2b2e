// Copyright 2026 the Penpoint Authors
// SPDX-License-Identifier: Apache-2.0

//! The path document and its command-sequence round-trip.
//!
//! Parsing walks a move/line/cubic/quadratic/close command sequence and
//! emits one anchor per endpoint, attaching curve control points as
//! tangent handles of the neighboring anchors. Serializing emits the
//! inverse: `MoveTo` for anchor 0, then one `CurveTo` or `LineTo` per
//! segment depending on handle presence, plus the closing segment and
//! `ClosePath` for closed documents.

use crate::path::command::elevate_quadratic;
use crate::path::{AnchorKind, AnchorPoint, PathCommand};
use crate::settings;
use serde::{Deserialize, Serialize};

/// Distance under which a trailing curve endpoint is merged with
/// anchor 0 when a path closes
const CLOSE_MERGE_EPSILON: f64 = 1e-6;

/// An ordered list of anchors plus a closed flag — the editable form of
/// a path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathDocument {
    /// The anchors, in drawing order
    pub anchors: Vec<AnchorPoint>,
    /// Whether the path loops back to anchor 0
    pub closed: bool,
}

impl PathDocument {
    /// An empty open document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of anchors
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// True when the document has no anchors
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Mark the document closed.
    ///
    /// Refused for fewer than 3 anchors: a closed path needs a real
    /// polygon, not a degenerate two-point loop.
    pub fn close(&mut self) -> bool {
        if self.anchors.len() < 3 {
            tracing::warn!(
                anchors = self.anchors.len(),
                "refusing to close path with fewer than 3 anchors"
            );
            return false;
        }
        self.closed = true;
        true
    }

    /// Anchor index pairs for every segment, including the closing
    /// segment of a closed document
    pub fn segment_indices(&self) -> Vec<(usize, usize)> {
        let n = self.anchors.len();
        let mut pairs: Vec<(usize, usize)> = (0..n.saturating_sub(1)).map(|i| (i, i + 1)).collect();
        if self.closed && n >= 3 {
            pairs.push((n - 1, 0));
        }
        pairs
    }

    /// Build a document from a command sequence.
    ///
    /// A curve command's first control point becomes `cp_out` of the
    /// previous anchor, its second becomes `cp_in` of the new anchor.
    /// Quadratic segments are degree-elevated to cubic handles. A
    /// trailing curve that lands back on anchor 0 right before
    /// `ClosePath` contributes its arriving handle to anchor 0 instead
    /// of creating a duplicate anchor. Anchors whose handles came out
    /// mirror-symmetric (within tolerance) are classified `Smooth`.
    pub fn parse(commands: &[PathCommand]) -> Self {
        let mut doc = PathDocument::new();

        for command in commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    doc.anchors.push(AnchorPoint::corner(p));
                }
                PathCommand::CurveTo { c1, c2, to } => {
                    doc.attach_curve(c1, c2, to);
                }
                PathCommand::QuadTo { ctrl, to } => {
                    let start = doc.anchors.last().map(|a| a.point).unwrap_or(to);
                    let (c1, c2) = elevate_quadratic(start, ctrl, to);
                    doc.attach_curve(c1, c2, to);
                }
                PathCommand::ClosePath => {
                    doc.merge_closing_anchor();
                    if !doc.close() {
                        // Degenerate close; leave the document open.
                        doc.closed = false;
                    }
                }
            }
        }

        for anchor in &mut doc.anchors {
            if anchor.handles_symmetric(settings::path::SYMMETRY_TOLERANCE) {
                anchor.kind = AnchorKind::Smooth;
            }
        }

        doc
    }

    /// Serialize back to a command sequence.
    ///
    /// Empty documents serialize to an empty sequence. A segment is a
    /// `CurveTo` whenever either bounding anchor contributes a handle
    /// (the anchor position stands in for a missing control point),
    /// otherwise a `LineTo`.
    pub fn serialize(&self) -> Vec<PathCommand> {
        let Some(first) = self.anchors.first() else {
            return Vec::new();
        };

        let mut commands = Vec::with_capacity(self.anchors.len() + 1);
        commands.push(PathCommand::MoveTo(first.point));

        for pair in self.anchors.windows(2) {
            commands.push(segment_command(&pair[0], &pair[1]));
        }

        if self.closed && self.anchors.len() >= 3 {
            let last = self.anchors.last().expect("non-empty");
            commands.push(segment_command(last, first));
            commands.push(PathCommand::ClosePath);
        }

        commands
    }

    /// Append a curve segment's data during parsing
    fn attach_curve(&mut self, c1: kurbo::Point, c2: kurbo::Point, to: kurbo::Point) {
        if let Some(prev) = self.anchors.last_mut() {
            prev.cp_out = Some(c1);
        }
        let mut anchor = AnchorPoint::corner(to);
        anchor.cp_in = Some(c2);
        self.anchors.push(anchor);
    }

    /// Fold a trailing anchor that coincides with anchor 0 into it.
    ///
    /// Serialized closed paths carry an explicit closing segment back
    /// to anchor 0; re-parsing must not grow an extra anchor.
    fn merge_closing_anchor(&mut self) {
        if self.anchors.len() < 2 {
            return;
        }
        let first_point = self.anchors[0].point;
        let last = self.anchors.last().expect("len checked");
        if (last.point - first_point).hypot() <= CLOSE_MERGE_EPSILON {
            let last = self.anchors.pop().expect("len checked");
            self.anchors[0].cp_in = last.cp_in;
        }
    }
}

/// The command drawing the segment from `prev` to `curr`
fn segment_command(prev: &AnchorPoint, curr: &AnchorPoint) -> PathCommand {
    if prev.cp_out.is_some() || curr.cp_in.is_some() {
        PathCommand::CurveTo {
            c1: prev.cp_out.unwrap_or(prev.point),
            c2: curr.cp_in.unwrap_or(curr.point),
            to: curr.point,
        }
    } else {
        PathCommand::LineTo(curr.point)
    }
}
