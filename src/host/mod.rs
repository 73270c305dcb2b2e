// Copyright 2026 the Penpoint Authors
// SPDX-License-Identifier: Apache-2.0

//! Host collaborators — the abstract capabilities the engine consumes.
//!
//! The engine never mutates a rendering surface directly. It talks to a
//! [`Scene`] (object lifecycle plus a transient indicator layer), reads
//! and writes [`SceneObject`]s (transform, path offset, committed
//! commands, interaction flags), and pings a [`History`] at commit
//! points so the host's own undo/redo can snapshot.

pub mod input;
pub mod memory;

use crate::path::PathCommand;
use kurbo::{Affine, Point, Rect, Vec2};

/// Identifier for an object owned by the host scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u64);

/// What a scene object fundamentally is.
///
/// The engine only ever edits `Path` objects; everything else is
/// rejected with a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// A vector path carrying a command sequence
    Path,
    /// Anything else (raster, group, text, ...)
    Other,
}

/// A host object as seen by the engine
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Object kind; only `Path` is editable
    pub kind: ObjectKind,
    /// Current affine transform from local path space to global space
    pub transform: Affine,
    /// Object-local centroid offset; path coordinates are expressed
    /// relative to the object's own bounding box
    pub path_offset: Vec2,
    /// Whether the host lets the user select/transform this object
    pub selectable: bool,
    /// Whether the host routes pointer events to this object
    pub evented: bool,
    commands: Vec<PathCommand>,
    bounds: Rect,
}

impl SceneObject {
    /// A path object at the scene origin
    pub fn path(commands: Vec<PathCommand>) -> Self {
        let mut object = Self {
            kind: ObjectKind::Path,
            transform: Affine::IDENTITY,
            path_offset: Vec2::ZERO,
            selectable: true,
            evented: true,
            commands,
            bounds: Rect::ZERO,
        };
        object.update_bounds();
        object
    }

    /// A non-path object, for targets the editor must refuse
    pub fn other() -> Self {
        Self {
            kind: ObjectKind::Other,
            transform: Affine::IDENTITY,
            path_offset: Vec2::ZERO,
            selectable: true,
            evented: true,
            commands: Vec::new(),
            bounds: Rect::ZERO,
        }
    }

    /// The committed command sequence
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Replace the committed command sequence and recompute bounds
    pub fn set_commands(&mut self, commands: Vec<PathCommand>) {
        self.commands = commands;
        self.update_bounds();
    }

    /// Enable or disable host-side selection and pointer events
    pub fn set_interactive(&mut self, interactive: bool) {
        self.selectable = interactive;
        self.evented = interactive;
    }

    /// Local-space bounding rectangle of the committed geometry
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Recompute the bounding rectangle from the command endpoints and
    /// control points
    pub fn update_bounds(&mut self) {
        let mut points: Vec<Point> = Vec::new();
        for command in &self.commands {
            if let Some(p) = command.endpoint() {
                points.push(p);
            }
            if let PathCommand::CurveTo { c1, c2, .. } = command {
                points.push(*c1);
                points.push(*c2);
            }
        }
        self.bounds = match points.split_first() {
            None => Rect::ZERO,
            Some((first, rest)) => rest
                .iter()
                .fold(Rect::from_points(*first, *first), |r, p| {
                    r.union_pt(*p)
                }),
        };
    }
}

/// A transient visual primitive shown only while a tool is active
#[derive(Debug, Clone, PartialEq)]
pub enum Indicator {
    /// Circle marker on an anchor
    Anchor {
        /// Global-space position
        at: Point,
        /// Whether the anchor is the current selection
        selected: bool,
        /// Whether the anchor is smooth (hosts typically round vs
        /// square the marker)
        smooth: bool,
    },
    /// Small marker at a handle tip plus a dashed stem to its anchor
    Handle {
        /// Global-space anchor position
        anchor: Point,
        /// Global-space handle tip position
        tip: Point,
    },
    /// Non-committed preview segment from the last placed anchor to
    /// the pointer
    RubberBand {
        /// Segment start (last anchor)
        from: Point,
        /// Segment end (pointer position)
        to: Point,
        /// Control points when the last anchor has an out handle
        ctrl: Option<(Point, Point)>,
    },
}

/// The host rendering/object system
pub trait Scene {
    /// Add a path object and return its id
    fn add_path(&mut self, commands: Vec<PathCommand>) -> ObjectId;

    /// Remove an object entirely
    fn remove_object(&mut self, id: ObjectId);

    /// Look up an object
    fn object(&self, id: ObjectId) -> Option<&SceneObject>;

    /// Look up an object mutably
    fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject>;

    /// Replace the transient indicator layer
    fn set_indicators(&mut self, indicators: Vec<Indicator>);

    /// Remove every transient indicator
    fn clear_indicators(&mut self);
}

/// The host's undo/redo system.
///
/// The engine never implements undo itself; it only asks for snapshots
/// at commit points (pen finish, editor commit, each completed drag).
pub trait History {
    /// Record the current host state for undo
    fn save_snapshot(&mut self);
}
