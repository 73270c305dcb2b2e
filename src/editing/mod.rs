// Copyright 2026 the Penpoint Authors
// SPDX-License-Identifier: Apache-2.0

//! Path editing — hit testing and the point/anchor editor.

pub mod point_editor;

use thiserror::Error;

/// Recoverable failures of editing operations.
///
/// Nothing here is fatal: controllers log the refusal and leave the
/// document unchanged. The variants exist so hosts can observe why an
/// operation had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EditError {
    /// Edit requested on an object that is not a path
    #[error("target object is not an editable path")]
    InvalidTargetType,

    /// The operation would leave the document with too few anchors
    #[error("path must keep at least {min} anchors")]
    InsufficientAnchors {
        /// The anchor floor for this document
        min: usize,
    },

    /// No segment close enough to the requested insertion point
    #[error("no path segment within {tolerance} units")]
    NoNearbySegment {
        /// The insertion distance cutoff that was exceeded
        tolerance: f64,
    },
}
