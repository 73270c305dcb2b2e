// Copyright 2026 the Penpoint Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer and key event payloads delivered by the host.

use kurbo::Point;

/// Modifier keys held during a pointer event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Alt/Option — breaks handle symmetry while dragging
    pub alt: bool,
    /// Shift — reserved for axis constraints
    pub shift: bool,
}

/// Which button produced a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
    /// No button (plain movement)
    None,
}

/// A pointer event in global/screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position in global space
    pub pos: Point,
    /// Button involved
    pub button: PointerButton,
    /// Held modifier keys
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// A plain left-button event at a position
    pub fn at(pos: Point) -> Self {
        Self {
            pos,
            button: PointerButton::Left,
            modifiers: Modifiers::default(),
        }
    }

    /// The same event with alt held
    pub fn with_alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }
}

/// Keys the engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Cancel the current gesture / discard the edit
    Escape,
    /// Finish the current path / commit the edit
    Enter,
    /// Any other key (ignored)
    Other,
}

/// A key event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The pressed key
    pub key: Key,
}
