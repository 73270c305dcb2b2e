// Copyright 2026 the Penpoint Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool routing and the pen → point-editor hand-off.
//!
//! [`Workbench`] owns both controllers and forwards host input to
//! whichever one is live. When the pen finishes a path, ownership of
//! the document transfers atomically: the committed object is handed
//! straight to the point editor for continued refinement, the way
//! professional vector tools chain "draw" into "edit" without an extra
//! user action.

pub mod pen;

use crate::editing::EditError;
use crate::editing::point_editor::PointEditor;
use crate::host::input::{KeyEvent, PointerEvent};
use crate::host::{History, ObjectId, Scene};
use self::pen::PenTool;

/// Which controller receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTool {
    /// No tool engaged
    #[default]
    None,
    /// The pen is drawing a new path
    Pen,
    /// The point editor owns an object
    PointEditor,
}

/// Input router owning the pen tool and the point editor
#[derive(Debug, Default)]
pub struct Workbench {
    pen: PenTool,
    editor: PointEditor,
    active: ActiveTool,
}

impl Workbench {
    /// A workbench with no tool engaged
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently live tool
    pub fn active_tool(&self) -> ActiveTool {
        self.active
    }

    /// The pen controller
    pub fn pen(&self) -> &PenTool {
        &self.pen
    }

    /// The point editor controller
    pub fn editor(&self) -> &PointEditor {
        &self.editor
    }

    /// The point editor controller, mutably (for direct operations
    /// like `convert_point_type`)
    pub fn editor_mut(&mut self) -> &mut PointEditor {
        &mut self.editor
    }

    /// Engage the pen for a new path
    pub fn start_pen(&mut self) {
        self.pen.reset();
        self.active = ActiveTool::Pen;
    }

    /// Engage the point editor on an existing object
    pub fn edit_object(&mut self, id: ObjectId, scene: &mut dyn Scene) -> Result<(), EditError> {
        self.editor.enter(id, scene)?;
        self.active = ActiveTool::PointEditor;
        Ok(())
    }

    /// Route a pointer-down
    pub fn pointer_down(
        &mut self,
        event: &PointerEvent,
        scene: &mut dyn Scene,
        history: &mut dyn History,
    ) {
        match self.active {
            ActiveTool::None => {}
            ActiveTool::Pen => {
                let committed = self.pen.pointer_down(event, scene, history);
                self.hand_off(committed, scene);
            }
            ActiveTool::PointEditor => self.editor.pointer_down(event, scene),
        }
    }

    /// Route a pointer-move
    pub fn pointer_move(&mut self, event: &PointerEvent, scene: &mut dyn Scene) {
        match self.active {
            ActiveTool::None => {}
            ActiveTool::Pen => self.pen.pointer_move(event, scene),
            ActiveTool::PointEditor => self.editor.pointer_move(event, scene),
        }
    }

    /// Route a pointer-up
    pub fn pointer_up(&mut self, history: &mut dyn History) {
        match self.active {
            ActiveTool::None => {}
            ActiveTool::Pen => self.pen.pointer_up(),
            ActiveTool::PointEditor => self.editor.pointer_up(history),
        }
    }

    /// Route a double click
    pub fn double_click(
        &mut self,
        event: &PointerEvent,
        scene: &mut dyn Scene,
        history: &mut dyn History,
    ) {
        match self.active {
            ActiveTool::None => {}
            ActiveTool::Pen => {
                let committed = self.pen.double_click(scene, history);
                self.hand_off(committed, scene);
            }
            ActiveTool::PointEditor => self.editor.double_click(event, scene),
        }
    }

    /// Route a key event
    pub fn key_down(
        &mut self,
        event: &KeyEvent,
        scene: &mut dyn Scene,
        history: &mut dyn History,
    ) {
        match self.active {
            ActiveTool::None => {}
            ActiveTool::Pen => {
                let committed = self.pen.key_down(event, scene, history);
                self.hand_off(committed, scene);
                if !self.pen.is_placing() && !self.pen.is_finished() {
                    // Cancelled back to idle.
                    if self.active == ActiveTool::Pen {
                        self.active = ActiveTool::None;
                    }
                }
            }
            ActiveTool::PointEditor => {
                self.editor.key_down(event, scene, history);
                if !self.editor.is_active() {
                    self.active = ActiveTool::None;
                }
            }
        }
    }

    /// Transfer a freshly committed path from the pen to the editor
    fn hand_off(&mut self, committed: Option<ObjectId>, scene: &mut dyn Scene) {
        let Some(id) = committed else { return };
        match self.editor.enter(id, scene) {
            Ok(()) => self.active = ActiveTool::PointEditor,
            Err(err) => {
                tracing::warn!(%err, ?id, "pen hand-off failed");
                self.active = ActiveTool::None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::input::{Key, PointerButton};
    use crate::host::memory::{MemoryScene, RecordingHistory};
    use crate::path::PathDocument;
    use kurbo::Point;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn press(bench: &mut Workbench, scene: &mut MemoryScene, history: &mut RecordingHistory, p: Point) {
        bench.pointer_down(&PointerEvent::at(p), scene, history);
        bench.pointer_up(history);
    }

    #[test]
    fn drawing_chains_into_editing() {
        let mut bench = Workbench::new();
        let mut scene = MemoryScene::new();
        let mut history = RecordingHistory::new();

        bench.start_pen();
        press(&mut bench, &mut scene, &mut history, pt(0.0, 0.0));
        press(&mut bench, &mut scene, &mut history, pt(100.0, 0.0));
        press(&mut bench, &mut scene, &mut history, pt(100.0, 100.0));
        // Close the path by clicking back on the start.
        press(&mut bench, &mut scene, &mut history, pt(2.0, 2.0));

        assert_eq!(bench.active_tool(), ActiveTool::PointEditor);
        assert!(bench.editor().is_active());
        let doc = bench.editor().document().unwrap();
        assert!(doc.closed);
        assert_eq!(doc.len(), 3);

        // One committed object, owned by the editor and locked against
        // host interaction while editing continues.
        assert_eq!(scene.object_count(), 1);
    }

    #[test]
    fn escape_during_edit_releases_the_tool() {
        let mut bench = Workbench::new();
        let mut scene = MemoryScene::new();
        let mut history = RecordingHistory::new();

        bench.start_pen();
        press(&mut bench, &mut scene, &mut history, pt(0.0, 0.0));
        press(&mut bench, &mut scene, &mut history, pt(100.0, 0.0));
        bench.key_down(&KeyEvent { key: Key::Enter }, &mut scene, &mut history);
        assert_eq!(bench.active_tool(), ActiveTool::PointEditor);

        bench.key_down(&KeyEvent { key: Key::Escape }, &mut scene, &mut history);
        assert_eq!(bench.active_tool(), ActiveTool::None);
        assert!(scene.indicators.is_empty());
    }

    #[test]
    fn escape_while_placing_goes_back_to_no_tool() {
        let mut bench = Workbench::new();
        let mut scene = MemoryScene::new();
        let mut history = RecordingHistory::new();

        bench.start_pen();
        press(&mut bench, &mut scene, &mut history, pt(0.0, 0.0));
        bench.key_down(&KeyEvent { key: Key::Escape }, &mut scene, &mut history);

        assert_eq!(bench.active_tool(), ActiveTool::None);
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn editing_an_existing_object_directly() {
        let mut bench = Workbench::new();
        let mut scene = MemoryScene::new();
        let mut history = RecordingHistory::new();
        let id = scene.add_path(vec![
            crate::path::PathCommand::MoveTo(pt(0.0, 0.0)),
            crate::path::PathCommand::LineTo(pt(100.0, 0.0)),
        ]);

        bench.edit_object(id, &mut scene).unwrap();
        assert_eq!(bench.active_tool(), ActiveTool::PointEditor);

        // Drag the second anchor through the router.
        bench.pointer_down(&PointerEvent::at(pt(100.0, 0.0)), &mut scene, &mut history);
        bench.pointer_move(&PointerEvent::at(pt(100.0, 40.0)), &mut scene);
        bench.pointer_up(&mut history);
        bench.key_down(&KeyEvent { key: Key::Enter }, &mut scene, &mut history);

        let doc = PathDocument::parse(scene.object(id).unwrap().commands());
        assert_eq!(doc.anchors[1].point, pt(100.0, 40.0));
        // One snapshot for the drag, one for the commit.
        assert_eq!(history.snapshots, 2);
    }

    #[test]
    fn events_without_a_tool_are_ignored() {
        let mut bench = Workbench::new();
        let mut scene = MemoryScene::new();
        let mut history = RecordingHistory::new();

        let event = PointerEvent {
            pos: pt(10.0, 10.0),
            button: PointerButton::Left,
            modifiers: Default::default(),
        };
        bench.pointer_down(&event, &mut scene, &mut history);
        bench.pointer_move(&event, &mut scene);
        bench.pointer_up(&mut history);

        assert_eq!(scene.object_count(), 0);
        assert_eq!(history.snapshots, 0);
    }
}
