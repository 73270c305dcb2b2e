// Copyright 2026 the Penpoint Authors
// SPDX-License-Identifier: Apache-2.0

//! The point editor — reshaping an existing path.
//!
//! `PointEditor` takes exclusive ownership of a host object's path
//! while editing: `enter` snapshots the committed commands and parses
//! them into a [`PathDocument`], `exit` either serializes the edited
//! document back to the object or restores the snapshot verbatim. In
//! between, anchors and handles are selected and dragged, anchors are
//! inserted on segments and removed, and smooth/corner classification
//! is changed.
//!
//! Drag state is an explicit enum carrying the dragged index, so a
//! stray pointer event can never leave the editor in an impossible
//! "dragging nothing" combination. Pointer-up clears it
//! unconditionally.

use crate::editing::hit_test;
use crate::editing::EditError;
use crate::geometry;
use crate::host::input::{Key, KeyEvent, PointerEvent};
use crate::host::{History, Indicator, ObjectId, ObjectKind, Scene};
use crate::path::{AnchorKind, AnchorPoint, PathCommand, PathDocument};
use crate::settings;
use kurbo::Point;

/// Which tangent handle of an anchor is being addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleEnd {
    /// The handle shaping the arriving curve (`cp_in`)
    In,
    /// The handle shaping the leaving curve (`cp_out`)
    Out,
}

/// What the pointer is currently dragging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragState {
    /// No drag in progress
    #[default]
    None,
    /// Dragging a whole anchor (handles ride along)
    Anchor {
        /// Index of the dragged anchor
        index: usize,
    },
    /// Dragging one tangent handle
    Handle {
        /// Index of the owning anchor
        index: usize,
        /// Which handle
        end: HandleEnd,
    },
}

/// Live editing state for one object
#[derive(Debug)]
struct EditState {
    object: ObjectId,
    doc: PathDocument,
    /// Pre-enter command snapshot, restored verbatim on discard
    original: Vec<PathCommand>,
    selection: Option<usize>,
    drag: DragState,
}

/// Callback invoked when an edit is committed
pub type CommitCallback = Box<dyn FnMut(ObjectId)>;

/// State machine for reshaping an existing path object
#[derive(Default)]
pub struct PointEditor {
    state: Option<EditState>,
    on_commit: Option<CommitCallback>,
}

impl std::fmt::Debug for PointEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointEditor")
            .field("state", &self.state)
            .field("has_commit_callback", &self.on_commit.is_some())
            .finish()
    }
}

impl PointEditor {
    /// An inactive editor
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an object is being edited
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// The document being edited, while active
    pub fn document(&self) -> Option<&PathDocument> {
        self.state.as_ref().map(|s| &s.doc)
    }

    /// The selected anchor index, while active
    pub fn selection(&self) -> Option<usize> {
        self.state.as_ref().and_then(|s| s.selection)
    }

    /// Register a callback invoked after every committed exit
    pub fn set_commit_callback(&mut self, callback: CommitCallback) {
        self.on_commit = Some(callback);
    }

    /// Begin editing a host object.
    ///
    /// Rejects non-path objects. Snapshots the object's committed
    /// commands for a possible revert, parses them into an editable
    /// document, and disables host-side interaction with the object
    /// while the editor owns it.
    pub fn enter(&mut self, id: ObjectId, scene: &mut dyn Scene) -> Result<(), EditError> {
        let Some(object) = scene.object_mut(id) else {
            tracing::warn!(?id, "edit requested on unknown object");
            return Err(EditError::InvalidTargetType);
        };
        if object.kind != ObjectKind::Path {
            tracing::warn!(?id, kind = ?object.kind, "edit requested on non-path object");
            return Err(EditError::InvalidTargetType);
        }

        let original = object.commands().to_vec();
        let doc = PathDocument::parse(&original);
        object.set_interactive(false);

        tracing::debug!(?id, anchors = doc.len(), "entering point editor");
        self.state = Some(EditState {
            object: id,
            doc,
            original,
            selection: None,
            drag: DragState::None,
        });
        self.render_indicators(scene);
        Ok(())
    }

    /// Stop editing.
    ///
    /// With `commit` the edited document is serialized onto the object
    /// and a history snapshot is requested; without it the pre-enter
    /// snapshot is restored verbatim. Either way the object becomes
    /// interactive again and the indicator layer is cleared.
    pub fn exit(&mut self, commit: bool, scene: &mut dyn Scene, history: &mut dyn History) {
        let Some(state) = self.state.take() else {
            return;
        };

        if let Some(object) = scene.object_mut(state.object) {
            if commit {
                object.set_commands(state.doc.serialize());
                history.save_snapshot();
                tracing::info!(id = ?state.object, "committed path edit");
            } else {
                object.set_commands(state.original);
                tracing::debug!(id = ?state.object, "discarded path edit");
            }
            object.set_interactive(true);
        }
        scene.clear_indicators();

        if commit && let Some(callback) = self.on_commit.as_mut() {
            callback(state.object);
        }
    }

    /// Change the anchor selection
    pub fn select_anchor(&mut self, index: Option<usize>, scene: &mut dyn Scene) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.selection = index.filter(|i| *i < state.doc.len());
        self.render_indicators(scene);
    }

    /// Move an anchor to a global-space position.
    ///
    /// Handles move rigidly with their anchor.
    pub fn move_anchor(&mut self, index: usize, global: Point, scene: &mut dyn Scene) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let Some(object) = scene.object(state.object) else {
            return;
        };
        let local = geometry::global_to_local(object, global);
        let Some(anchor) = state.doc.anchors.get_mut(index) else {
            tracing::warn!(index, "move_anchor out of bounds");
            return;
        };
        anchor.translate(local - anchor.point);
        self.render_indicators(scene);
    }

    /// Move one tangent handle to a global-space position.
    ///
    /// On a smooth anchor the opposite handle mirrors the move unless
    /// `break_symmetry` is set, in which case the anchor is
    /// reclassified as a corner and the handles become independent.
    pub fn move_handle(
        &mut self,
        index: usize,
        end: HandleEnd,
        global: Point,
        break_symmetry: bool,
        scene: &mut dyn Scene,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let Some(object) = scene.object(state.object) else {
            return;
        };
        let local = geometry::global_to_local(object, global);
        let Some(anchor) = state.doc.anchors.get_mut(index) else {
            tracing::warn!(index, "move_handle out of bounds");
            return;
        };

        match end {
            HandleEnd::In => anchor.cp_in = Some(local),
            HandleEnd::Out => anchor.cp_out = Some(local),
        }

        if anchor.kind == AnchorKind::Smooth {
            if break_symmetry {
                anchor.kind = AnchorKind::Corner;
            } else {
                let mirrored = anchor.reflect(local);
                match end {
                    HandleEnd::In => anchor.cp_out = Some(mirrored),
                    HandleEnd::Out => anchor.cp_in = Some(mirrored),
                }
            }
        }
        self.render_indicators(scene);
    }

    /// Insert a corner anchor on the nearest segment to a global-space
    /// position.
    ///
    /// Runs the sampled nearest-point search over every segment
    /// (including the closing segment of a closed path) and splices a
    /// new anchor at the global minimum, selecting it. A minimum
    /// farther than the insertion tolerance leaves the document
    /// unchanged. This is a local corner insertion; it does not try to
    /// preserve the exact prior curve shape.
    pub fn add_point(&mut self, global: Point, scene: &mut dyn Scene) -> Result<usize, EditError> {
        let tolerance = settings::editing::INSERT_TOLERANCE;
        let Some(state) = self.state.as_mut() else {
            return Err(EditError::InvalidTargetType);
        };
        let Some(object) = scene.object(state.object) else {
            return Err(EditError::InvalidTargetType);
        };
        let local = geometry::global_to_local(object, global);

        let mut best: Option<(usize, hit_test::SegmentHit)> = None;
        for (i, j) in state.doc.segment_indices() {
            let hit = hit_test::distance_to_segment_default(
                local,
                &state.doc.anchors[i],
                &state.doc.anchors[j],
            );
            if best.is_none_or(|(_, b)| hit.distance < b.distance) {
                best = Some((i, hit));
            }
        }

        let Some((segment, hit)) = best else {
            tracing::warn!("add_point on a document with no segments");
            return Err(EditError::NoNearbySegment { tolerance });
        };
        if hit.distance > tolerance {
            tracing::warn!(distance = hit.distance, "add_point beyond tolerance");
            return Err(EditError::NoNearbySegment { tolerance });
        }

        let index = segment + 1;
        state.doc.anchors.insert(index, AnchorPoint::corner(hit.point));
        state.selection = Some(index);
        self.render_indicators(scene);
        Ok(index)
    }

    /// Delete an anchor.
    ///
    /// Refused when the document would drop below 2 anchors, or below
    /// 3 for a closed document (a closed path needs a real polygon).
    /// Selection is cleared if it pointed at the removed anchor and
    /// shifted down if it pointed after it.
    pub fn remove_point(&mut self, index: usize, scene: &mut dyn Scene) -> Result<(), EditError> {
        let Some(state) = self.state.as_mut() else {
            return Err(EditError::InvalidTargetType);
        };
        let min = if state.doc.closed { 3 } else { 2 };
        if state.doc.len() <= min {
            tracing::warn!(anchors = state.doc.len(), min, "remove_point refused");
            return Err(EditError::InsufficientAnchors { min });
        }
        if index >= state.doc.len() {
            tracing::warn!(index, "remove_point out of bounds");
            return Ok(());
        }

        state.doc.anchors.remove(index);
        state.selection = match state.selection {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        self.render_indicators(scene);
        Ok(())
    }

    /// Set an anchor's smooth/corner classification directly.
    ///
    /// Converting to smooth with both handles present rebuilds them as
    /// a symmetric pair along their average direction, preserving the
    /// combined handle length. Converting to corner leaves the handles
    /// where they are.
    pub fn convert_point_type(&mut self, index: usize, kind: AnchorKind, scene: &mut dyn Scene) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let Some(anchor) = state.doc.anchors.get_mut(index) else {
            tracing::warn!(index, "convert_point_type out of bounds");
            return;
        };
        match kind {
            AnchorKind::Corner => anchor.kind = AnchorKind::Corner,
            AnchorKind::Smooth => anchor.make_smooth(),
        }
        self.render_indicators(scene);
    }

    // ===== POINTER AND KEY GLUE =====

    /// Pointer-down: pick an anchor or handle under the pointer.
    ///
    /// Hitting an anchor selects it and starts an anchor drag; hitting
    /// a handle tip starts a handle drag (and selects its anchor).
    /// Hitting nothing clears the selection. A pointer-down while a
    /// drag is somehow still marked active simply starts the new
    /// gesture.
    pub fn pointer_down(&mut self, event: &PointerEvent, scene: &mut dyn Scene) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        let Some(object) = scene.object(state.object) else {
            return;
        };
        let max_dist = settings::hit_test::MIN_CLICK_DISTANCE;

        let mut hit_anchor: Option<(usize, f64)> = None;
        let mut hit_handle: Option<(usize, HandleEnd, f64)> = None;
        for (i, anchor) in state.doc.anchors.iter().enumerate() {
            let marker = geometry::local_to_global(object, anchor.point);
            let dist = (marker - event.pos).hypot();
            if dist <= max_dist && hit_anchor.is_none_or(|(_, d)| dist < d) {
                hit_anchor = Some((i, dist));
            }
            for (end, cp) in [(HandleEnd::In, anchor.cp_in), (HandleEnd::Out, anchor.cp_out)] {
                let Some(cp) = cp else { continue };
                let tip = geometry::local_to_global(object, cp);
                let dist = (tip - event.pos).hypot();
                if dist <= max_dist && hit_handle.is_none_or(|(_, _, d)| dist < d) {
                    hit_handle = Some((i, end, dist));
                }
            }
        }

        if let Some((index, _)) = hit_anchor {
            state.selection = Some(index);
            state.drag = DragState::Anchor { index };
        } else if let Some((index, end, _)) = hit_handle {
            state.selection = Some(index);
            state.drag = DragState::Handle { index, end };
        } else {
            state.selection = None;
            state.drag = DragState::None;
        }
        self.render_indicators(scene);
    }

    /// Pointer-move: advance whichever drag is in progress
    pub fn pointer_move(&mut self, event: &PointerEvent, scene: &mut dyn Scene) {
        let Some(state) = self.state.as_ref() else {
            return;
        };
        match state.drag {
            DragState::None => {}
            DragState::Anchor { index } => self.move_anchor(index, event.pos, scene),
            DragState::Handle { index, end } => {
                self.move_handle(index, end, event.pos, event.modifiers.alt, scene);
            }
        }
    }

    /// Pointer-up: snapshot a completed drag and clear drag state
    /// unconditionally, so a missed event can never wedge the editor
    pub fn pointer_up(&mut self, history: &mut dyn History) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if state.drag != DragState::None {
            history.save_snapshot();
        }
        state.drag = DragState::None;
    }

    /// Double-click inserts an anchor on the nearest segment
    pub fn double_click(&mut self, event: &PointerEvent, scene: &mut dyn Scene) {
        let _ = self.add_point(event.pos, scene);
    }

    /// Escape discards the edit, Enter commits it
    pub fn key_down(&mut self, event: &KeyEvent, scene: &mut dyn Scene, history: &mut dyn History) {
        match event.key {
            Key::Escape => self.exit(false, scene, history),
            Key::Enter => self.exit(true, scene, history),
            Key::Other => {}
        }
    }

    /// Rebuild the transient indicator layer from the current document.
    ///
    /// Anchor markers are always shown. Handle markers appear for the
    /// selected anchor and for any anchor that has handles; plain
    /// corner anchors contribute no handle clutter.
    fn render_indicators(&self, scene: &mut dyn Scene) {
        let Some(state) = self.state.as_ref() else {
            return;
        };
        let Some(object) = scene.object(state.object) else {
            return;
        };

        let mut indicators = Vec::new();
        for (i, anchor) in state.doc.anchors.iter().enumerate() {
            let at = geometry::local_to_global(object, anchor.point);
            indicators.push(Indicator::Anchor {
                at,
                selected: state.selection == Some(i),
                smooth: anchor.kind == AnchorKind::Smooth,
            });
            let show_handles =
                state.selection == Some(i) || anchor.cp_in.is_some() || anchor.cp_out.is_some();
            if show_handles {
                for cp in [anchor.cp_in, anchor.cp_out].into_iter().flatten() {
                    indicators.push(Indicator::Handle {
                        anchor: at,
                        tip: geometry::local_to_global(object, cp),
                    });
                }
            }
        }
        scene.set_indicators(indicators);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::{MemoryScene, RecordingHistory};
    use crate::host::SceneObject;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Open two-anchor line from (0,0) to (100,0)
    fn line_commands() -> Vec<PathCommand> {
        vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::LineTo(pt(100.0, 0.0)),
        ]
    }

    /// Three anchors; the middle one at (50,50) is smooth with
    /// symmetric handles (40,45)/(60,55)
    fn smooth_commands() -> Vec<PathCommand> {
        vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::CurveTo {
                c1: pt(0.0, 0.0),
                c2: pt(40.0, 45.0),
                to: pt(50.0, 50.0),
            },
            PathCommand::CurveTo {
                c1: pt(60.0, 55.0),
                c2: pt(100.0, 100.0),
                to: pt(100.0, 100.0),
            },
        ]
    }

    fn enter(commands: Vec<PathCommand>) -> (PointEditor, MemoryScene, ObjectId) {
        let mut scene = MemoryScene::new();
        let id = scene.add_path(commands);
        let mut editor = PointEditor::new();
        editor.enter(id, &mut scene).unwrap();
        (editor, scene, id)
    }

    #[test]
    fn enter_rejects_non_path_objects() {
        let mut scene = MemoryScene::new();
        let id = scene.insert(SceneObject::other());
        let mut editor = PointEditor::new();

        assert_eq!(
            editor.enter(id, &mut scene),
            Err(EditError::InvalidTargetType)
        );
        assert!(!editor.is_active());
    }

    #[test]
    fn enter_disables_host_interaction() {
        let (editor, scene, id) = enter(line_commands());
        let object = scene.object(id).unwrap();

        assert!(editor.is_active());
        assert!(!object.selectable);
        assert!(!object.evented);
        assert!(!scene.indicators.is_empty());
    }

    #[test]
    fn exit_without_commit_restores_original_commands() {
        let (mut editor, mut scene, id) = enter(smooth_commands());
        let mut history = RecordingHistory::new();

        // Mutate, then discard.
        editor.move_anchor(1, pt(80.0, 80.0), &mut scene);
        editor.exit(false, &mut scene, &mut history);

        let object = scene.object(id).unwrap();
        assert_eq!(object.commands(), smooth_commands().as_slice());
        assert!(object.selectable);
        assert!(scene.indicators.is_empty());
        assert_eq!(history.snapshots, 0);
        assert!(!editor.is_active());
    }

    #[test]
    fn exit_with_commit_serializes_and_snapshots() {
        let (mut editor, mut scene, id) = enter(line_commands());
        let mut history = RecordingHistory::new();

        editor.move_anchor(1, pt(100.0, 50.0), &mut scene);
        let expected = editor.document().unwrap().serialize();
        editor.exit(true, &mut scene, &mut history);

        let object = scene.object(id).unwrap();
        assert_eq!(object.commands(), expected.as_slice());
        assert_eq!(history.snapshots, 1);
        assert!(object.selectable);
    }

    #[test]
    fn commit_callback_fires_only_on_commit() {
        use std::cell::Cell;
        use std::rc::Rc;

        let committed = Rc::new(Cell::new(0));
        let seen = committed.clone();

        let (mut editor, mut scene, id) = enter(line_commands());
        editor.set_commit_callback(Box::new(move |object| {
            assert_eq!(object, id);
            seen.set(seen.get() + 1);
        }));
        let mut history = RecordingHistory::new();

        editor.exit(false, &mut scene, &mut history);
        assert_eq!(committed.get(), 0);

        editor.enter(id, &mut scene).unwrap();
        editor.exit(true, &mut scene, &mut history);
        assert_eq!(committed.get(), 1);
    }

    #[test]
    fn move_anchor_carries_handles_rigidly() {
        let (mut editor, mut scene, _) = enter(smooth_commands());

        // Middle anchor sits at (50,50); move it by (+10,-5).
        editor.move_anchor(1, pt(60.0, 45.0), &mut scene);

        let anchor = editor.document().unwrap().anchors[1];
        assert_eq!(anchor.point, pt(60.0, 45.0));
        assert_eq!(anchor.cp_in, Some(pt(50.0, 40.0)));
        assert_eq!(anchor.cp_out, Some(pt(70.0, 50.0)));
    }

    #[test]
    fn smooth_handle_move_mirrors_the_opposite_handle() {
        let (mut editor, mut scene, _) = enter(smooth_commands());

        editor.move_handle(1, HandleEnd::Out, pt(70.0, 60.0), false, &mut scene);

        let anchor = editor.document().unwrap().anchors[1];
        assert_eq!(anchor.kind, AnchorKind::Smooth);
        assert_eq!(anchor.cp_out, Some(pt(70.0, 60.0)));
        assert_eq!(anchor.cp_in, Some(pt(30.0, 40.0)));
    }

    #[test]
    fn breaking_symmetry_reclassifies_as_corner() {
        let (mut editor, mut scene, _) = enter(smooth_commands());
        let before = editor.document().unwrap().anchors[1].cp_in;

        editor.move_handle(1, HandleEnd::Out, pt(70.0, 60.0), true, &mut scene);

        let anchor = editor.document().unwrap().anchors[1];
        assert_eq!(anchor.kind, AnchorKind::Corner);
        assert_eq!(anchor.cp_out, Some(pt(70.0, 60.0)));
        assert_eq!(anchor.cp_in, before, "cp_in untouched");
    }

    #[test]
    fn corner_handles_stay_independent_after_break() {
        let (mut editor, mut scene, _) = enter(smooth_commands());

        editor.move_handle(1, HandleEnd::Out, pt(70.0, 60.0), true, &mut scene);
        editor.move_handle(1, HandleEnd::Out, pt(90.0, 10.0), false, &mut scene);

        let anchor = editor.document().unwrap().anchors[1];
        assert_eq!(anchor.kind, AnchorKind::Corner);
        assert_eq!(anchor.cp_out, Some(pt(90.0, 10.0)));
        assert_eq!(anchor.cp_in, Some(pt(40.0, 45.0)));
    }

    #[test]
    fn add_point_beyond_tolerance_is_a_no_op() {
        let (mut editor, mut scene, _) = enter(line_commands());

        let result = editor.add_point(pt(50.0, 30.0), &mut scene);
        assert!(matches!(result, Err(EditError::NoNearbySegment { .. })));
        assert_eq!(editor.document().unwrap().len(), 2);
    }

    #[test]
    fn add_point_splices_a_corner_anchor() {
        let (mut editor, mut scene, _) = enter(line_commands());

        let index = editor.add_point(pt(50.0, 1.0), &mut scene).unwrap();

        assert_eq!(index, 1);
        let doc = editor.document().unwrap();
        assert_eq!(doc.len(), 3);
        let inserted = doc.anchors[1];
        assert_eq!(inserted.kind, AnchorKind::Corner);
        assert!((inserted.point - pt(50.0, 0.0)).hypot() < 1.0);
        assert_eq!(editor.selection(), Some(1));
    }

    #[test]
    fn add_point_considers_the_closing_segment() {
        // Closed triangle; the query point hugs the closing edge from
        // (100,100) back to (0,0).
        let commands = vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::LineTo(pt(100.0, 0.0)),
            PathCommand::LineTo(pt(100.0, 100.0)),
            PathCommand::ClosePath,
        ];
        let (mut editor, mut scene, _) = enter(commands);

        let index = editor.add_point(pt(51.0, 49.0), &mut scene).unwrap();

        // Spliced after the last anchor, onto the closing segment.
        assert_eq!(index, 3);
        assert_eq!(editor.document().unwrap().len(), 4);
    }

    #[test]
    fn remove_point_refused_at_the_two_anchor_floor() {
        let (mut editor, mut scene, _) = enter(line_commands());

        let result = editor.remove_point(0, &mut scene);
        assert_eq!(result, Err(EditError::InsufficientAnchors { min: 2 }));
        assert_eq!(editor.document().unwrap().len(), 2);
        assert_eq!(editor.document().unwrap().anchors[0].point, pt(0.0, 0.0));
    }

    #[test]
    fn closed_documents_keep_three_anchors() {
        let commands = vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::LineTo(pt(100.0, 0.0)),
            PathCommand::LineTo(pt(100.0, 100.0)),
            PathCommand::ClosePath,
        ];
        let (mut editor, mut scene, _) = enter(commands);

        let result = editor.remove_point(1, &mut scene);
        assert_eq!(result, Err(EditError::InsufficientAnchors { min: 3 }));
        assert_eq!(editor.document().unwrap().len(), 3);
    }

    #[test]
    fn remove_point_adjusts_selection() {
        let (mut editor, mut scene, _) = enter(smooth_commands());

        editor.select_anchor(Some(2), &mut scene);
        editor.remove_point(1, &mut scene).unwrap();
        assert_eq!(editor.selection(), Some(1), "selection shifted down");

        let (mut editor, mut scene, _) = enter(smooth_commands());
        editor.select_anchor(Some(1), &mut scene);
        editor.remove_point(1, &mut scene).unwrap();
        assert_eq!(editor.selection(), None, "selection cleared");
    }

    #[test]
    fn convert_to_smooth_rebuilds_symmetric_handles() {
        let (mut editor, mut scene, _) = enter(smooth_commands());

        // Break the middle anchor first, then convert back.
        editor.move_handle(1, HandleEnd::Out, pt(90.0, 50.0), true, &mut scene);
        editor.convert_point_type(1, AnchorKind::Smooth, &mut scene);

        let anchor = editor.document().unwrap().anchors[1];
        assert_eq!(anchor.kind, AnchorKind::Smooth);
        assert!(anchor.handles_symmetric(1e-9));
    }

    #[test]
    fn pointer_gesture_drags_an_anchor() {
        let (mut editor, mut scene, _) = enter(line_commands());
        let mut history = RecordingHistory::new();

        editor.pointer_down(&PointerEvent::at(pt(100.0, 0.0)), &mut scene);
        assert_eq!(editor.selection(), Some(1));

        editor.pointer_move(&PointerEvent::at(pt(120.0, 30.0)), &mut scene);
        assert_eq!(editor.document().unwrap().anchors[1].point, pt(120.0, 30.0));

        editor.pointer_up(&mut history);
        assert_eq!(history.snapshots, 1, "completed drag snapshots history");

        // After release, movement no longer drags.
        editor.pointer_move(&PointerEvent::at(pt(0.0, 99.0)), &mut scene);
        assert_eq!(editor.document().unwrap().anchors[1].point, pt(120.0, 30.0));
    }

    #[test]
    fn pointer_gesture_drags_a_handle_with_alt_breaking() {
        let (mut editor, mut scene, _) = enter(smooth_commands());
        let mut history = RecordingHistory::new();

        // Grab the out handle tip at (60,55).
        editor.pointer_down(&PointerEvent::at(pt(60.0, 55.0)), &mut scene);
        editor.pointer_move(&PointerEvent::at(pt(75.0, 40.0)).with_alt(), &mut scene);
        editor.pointer_up(&mut history);

        let anchor = editor.document().unwrap().anchors[1];
        assert_eq!(anchor.kind, AnchorKind::Corner);
        assert_eq!(anchor.cp_out, Some(pt(75.0, 40.0)));
    }

    #[test]
    fn pointer_down_on_nothing_clears_selection() {
        let (mut editor, mut scene, _) = enter(line_commands());

        editor.pointer_down(&PointerEvent::at(pt(0.0, 0.0)), &mut scene);
        assert_eq!(editor.selection(), Some(0));

        editor.pointer_down(&PointerEvent::at(pt(500.0, 500.0)), &mut scene);
        assert_eq!(editor.selection(), None);
    }

    #[test]
    fn pointer_up_without_drag_does_not_snapshot() {
        let (mut editor, _scene, _) = enter(line_commands());
        let mut history = RecordingHistory::new();

        editor.pointer_up(&mut history);
        assert_eq!(history.snapshots, 0);
    }

    #[test]
    fn edits_respect_the_object_transform() {
        let mut scene = MemoryScene::new();
        let id = scene.add_path(line_commands());
        {
            let object = scene.object_mut(id).unwrap();
            object.transform = kurbo::Affine::scale(2.0);
        }
        let mut editor = PointEditor::new();
        editor.enter(id, &mut scene).unwrap();

        // Global (200,0) is local (100,0): the second anchor.
        editor.pointer_down(&PointerEvent::at(pt(200.0, 0.0)), &mut scene);
        assert_eq!(editor.selection(), Some(1));

        editor.pointer_move(&PointerEvent::at(pt(240.0, 60.0)), &mut scene);
        assert_eq!(
            editor.document().unwrap().anchors[1].point,
            pt(120.0, 30.0)
        );
    }

    #[test]
    fn escape_and_enter_drive_exit() {
        let (mut editor, mut scene, id) = enter(line_commands());
        let mut history = RecordingHistory::new();

        editor.key_down(
            &KeyEvent { key: Key::Escape },
            &mut scene,
            &mut history,
        );
        assert!(!editor.is_active());
        assert_eq!(history.snapshots, 0);

        editor.enter(id, &mut scene).unwrap();
        editor.key_down(&KeyEvent { key: Key::Enter }, &mut scene, &mut history);
        assert!(!editor.is_active());
        assert_eq!(history.snapshots, 1);
    }
}
