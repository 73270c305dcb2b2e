// Copyright 2026 the Penpoint Authors
// SPDX-License-Identifier: Apache-2.0

//! The pen tool — constructing a new path click by click.
//!
//! Each pointer-down appends an anchor; dragging before release pulls
//! out a mirrored pair of tangent handles, making the anchor smooth.
//! Clicking back on the first anchor (with at least three placed)
//! closes the path; a double click finishes it open. While placing, a
//! provisional object in the scene previews the committed geometry and
//! a rubber-band indicator previews the next segment.
//!
//! The pen draws in global space: the provisional object carries the
//! identity transform, so pointer coordinates are path coordinates.

use crate::host::input::{Key, KeyEvent, PointerEvent};
use crate::host::{History, Indicator, ObjectId, Scene};
use crate::path::{AnchorKind, AnchorPoint, PathDocument};
use crate::settings;
use kurbo::Point;

/// Pen tool state.
///
/// A drag (pulling handles out of the anchor just placed) is carried
/// inside `Placing` rather than as a separate state, since the
/// document and provisional object persist across it.
#[derive(Debug)]
enum PenState {
    /// Nothing placed yet
    Idle,
    /// Path under construction
    Placing {
        /// The document being built
        doc: PathDocument,
        /// Provisional scene object previewing the path
        provisional: ObjectId,
        /// Anchor whose handles are being pulled out, while the
        /// button is held
        drag: Option<usize>,
    },
    /// Path committed and handed to the point editor
    Finished,
}

/// State machine for drawing a new path anchor-by-anchor
#[derive(Debug)]
pub struct PenTool {
    state: PenState,
}

impl Default for PenTool {
    fn default() -> Self {
        Self::new()
    }
}

impl PenTool {
    /// An idle pen
    pub fn new() -> Self {
        Self {
            state: PenState::Idle,
        }
    }

    /// True while a path is under construction
    pub fn is_placing(&self) -> bool {
        matches!(self.state, PenState::Placing { .. })
    }

    /// True once a path has been committed
    pub fn is_finished(&self) -> bool {
        matches!(self.state, PenState::Finished)
    }

    /// The document under construction, while placing
    pub fn document(&self) -> Option<&PathDocument> {
        match &self.state {
            PenState::Placing { doc, .. } => Some(doc),
            _ => None,
        }
    }

    /// Make a finished or cancelled pen ready for a new path
    pub fn reset(&mut self) {
        self.state = PenState::Idle;
    }

    /// Pointer-down: start a path, close it, or append an anchor.
    ///
    /// Returns the committed object id when this click closed the
    /// path, so the caller can chain into the point editor.
    pub fn pointer_down(
        &mut self,
        event: &PointerEvent,
        scene: &mut dyn Scene,
        history: &mut dyn History,
    ) -> Option<ObjectId> {
        match &mut self.state {
            PenState::Idle => {
                let mut doc = PathDocument::new();
                doc.anchors.push(AnchorPoint::corner(event.pos));
                let provisional = scene.add_path(doc.serialize());
                if let Some(object) = scene.object_mut(provisional) {
                    object.set_interactive(false);
                }
                tracing::debug!(at = ?event.pos, "pen: first anchor");
                self.state = PenState::Placing {
                    doc,
                    provisional,
                    drag: Some(0),
                };
                self.render(scene, None);
                None
            }
            PenState::Placing { doc, drag, .. } => {
                let first = doc.anchors[0].point;
                if doc.len() >= 3
                    && (event.pos - first).hypot() <= settings::pen::CLOSE_TOLERANCE
                {
                    return self.finish(true, scene, history);
                }
                doc.anchors.push(AnchorPoint::corner(event.pos));
                *drag = Some(doc.len() - 1);
                tracing::debug!(at = ?event.pos, anchors = doc.len(), "pen: anchor placed");
                self.render(scene, None);
                None
            }
            PenState::Finished => {
                tracing::debug!("pen: pointer_down after finish ignored");
                None
            }
        }
    }

    /// Pointer-move: pull handles out of the anchor being dragged, or
    /// preview the next segment as a rubber band without mutating the
    /// document
    pub fn pointer_move(&mut self, event: &PointerEvent, scene: &mut dyn Scene) {
        let PenState::Placing { doc, drag, .. } = &mut self.state else {
            return;
        };

        if let Some(index) = *drag {
            if let Some(anchor) = doc.anchors.get_mut(index) {
                anchor.set_out_mirrored(event.pos);
            }
            self.render(scene, None);
        } else {
            self.render(scene, Some(event.pos));
        }
    }

    /// Pointer-up clears handle-drag tracking only; the document is
    /// unchanged
    pub fn pointer_up(&mut self) {
        if let PenState::Placing { drag, .. } = &mut self.state {
            *drag = None;
        }
    }

    /// Double-click finishes the path open.
    ///
    /// The second click of the gesture already appended a stray anchor
    /// through `pointer_down`; pop it before finishing.
    pub fn double_click(
        &mut self,
        scene: &mut dyn Scene,
        history: &mut dyn History,
    ) -> Option<ObjectId> {
        if let PenState::Placing { doc, .. } = &mut self.state {
            doc.anchors.pop();
        }
        self.finish(false, scene, history)
    }

    /// Commit the path under construction.
    ///
    /// Fewer than two anchors is a cancel, not an error: the
    /// provisional object is discarded and the pen returns to idle.
    /// Otherwise the document is serialized, the provisional object is
    /// replaced by a committed one, history snapshots, and the
    /// committed id is returned for hand-off to the point editor.
    pub fn finish(
        &mut self,
        closed: bool,
        scene: &mut dyn Scene,
        history: &mut dyn History,
    ) -> Option<ObjectId> {
        let state = std::mem::replace(&mut self.state, PenState::Idle);
        let PenState::Placing {
            mut doc,
            provisional,
            ..
        } = state
        else {
            return None;
        };

        if doc.len() < 2 {
            tracing::debug!(anchors = doc.len(), "pen: finish with too few anchors, cancelling");
            scene.remove_object(provisional);
            scene.clear_indicators();
            return None;
        }

        if closed {
            doc.close();
        }

        let commands = doc.serialize();
        scene.remove_object(provisional);
        let committed = scene.add_path(commands);
        scene.clear_indicators();
        history.save_snapshot();
        tracing::info!(id = ?committed, anchors = doc.len(), closed = doc.closed, "pen: path committed");

        self.state = PenState::Finished;
        Some(committed)
    }

    /// Discard the path under construction unconditionally
    pub fn cancel(&mut self, scene: &mut dyn Scene) {
        if let PenState::Placing { provisional, .. } =
            std::mem::replace(&mut self.state, PenState::Idle)
        {
            scene.remove_object(provisional);
            scene.clear_indicators();
            tracing::debug!("pen: cancelled");
        }
    }

    /// Escape cancels, Enter finishes the path open
    pub fn key_down(
        &mut self,
        event: &KeyEvent,
        scene: &mut dyn Scene,
        history: &mut dyn History,
    ) -> Option<ObjectId> {
        match event.key {
            Key::Escape => {
                self.cancel(scene);
                None
            }
            Key::Enter => self.finish(false, scene, history),
            Key::Other => None,
        }
    }

    /// Refresh the provisional object and indicator layer.
    ///
    /// `hover` carries the pointer position for the rubber-band
    /// preview; the preview segment is curved when the last anchor has
    /// an out handle, straight otherwise.
    fn render(&self, scene: &mut dyn Scene, hover: Option<Point>) {
        let PenState::Placing {
            doc, provisional, ..
        } = &self.state
        else {
            return;
        };

        if let Some(object) = scene.object_mut(*provisional) {
            object.set_commands(doc.serialize());
        }

        let mut indicators = Vec::new();
        for (i, anchor) in doc.anchors.iter().enumerate() {
            indicators.push(Indicator::Anchor {
                at: anchor.point,
                selected: i + 1 == doc.len(),
                smooth: anchor.kind == AnchorKind::Smooth,
            });
            for cp in [anchor.cp_in, anchor.cp_out].into_iter().flatten() {
                indicators.push(Indicator::Handle {
                    anchor: anchor.point,
                    tip: cp,
                });
            }
        }
        if let (Some(pos), Some(last)) = (hover, doc.anchors.last()) {
            indicators.push(Indicator::RubberBand {
                from: last.point,
                to: pos,
                ctrl: last.cp_out.map(|cp| (cp, pos)),
            });
        }
        scene.set_indicators(indicators);
    }
}
