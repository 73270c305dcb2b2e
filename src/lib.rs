// Copyright 2026 the Penpoint Authors
// SPDX-License-Identifier: Apache-2.0

//! Penpoint: an interactive vector path authoring and editing engine.
//!
//! The crate implements the two core gestures of a vector drawing
//! program — drawing a new bezier path anchor-by-anchor with a pen tool,
//! and reshaping an existing path by dragging its anchors and tangent
//! handles with a point editor. It operates purely on an abstract
//! [`PathDocument`] (ordered anchors plus a closed flag) and a set of
//! host capabilities ([`host::Scene`], [`host::History`]); it never
//! touches a concrete rendering surface.
//!
//! The usual entry point is [`tools::Workbench`], which routes pointer
//! and key events to whichever controller is live and chains the pen
//! tool into the point editor when a path is finished.

pub mod editing;
pub mod geometry;
pub mod host;
pub mod path;
pub mod settings;
pub mod tools;

pub use editing::EditError;
pub use editing::point_editor::PointEditor;
pub use path::{AnchorKind, AnchorPoint, PathCommand, PathDocument};
pub use tools::Workbench;
pub use tools::pen::PenTool;
