// Copyright 2026 the Penpoint Authors
// SPDX-License-Identifier: Apache-2.0

//! The editable path representation.
//!
//! A [`PathDocument`] is an ordered list of [`AnchorPoint`]s plus a
//! closed flag. It round-trips to and from the host-facing
//! [`PathCommand`] sequence: documents are created by parsing a host
//! object's committed commands when editing begins, and serialized back
//! when editing ends.

pub mod anchor;
pub mod command;
pub mod document;

pub use anchor::{AnchorKind, AnchorPoint};
pub use command::PathCommand;
pub use document::PathDocument;
