// Copyright 2026 the Penpoint Authors
// SPDX-License-Identifier: Apache-2.0

//! In-memory host implementations.
//!
//! `MemoryScene` and `RecordingHistory` back the test suite and serve
//! as reference implementations for embedding hosts.

use super::{History, Indicator, ObjectId, Scene, SceneObject};
use crate::path::PathCommand;
use std::collections::BTreeMap;

/// A scene that stores objects in a map and keeps the indicator layer
/// as a plain vector
#[derive(Debug, Default)]
pub struct MemoryScene {
    objects: BTreeMap<ObjectId, SceneObject>,
    /// Current transient indicator layer
    pub indicators: Vec<Indicator>,
    next_id: u64,
}

impl MemoryScene {
    /// An empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a prebuilt object (e.g. a non-path target for tests)
    pub fn insert(&mut self, object: SceneObject) -> ObjectId {
        let id = self.allocate_id();
        self.objects.insert(id, object);
        id
    }

    /// Number of live objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn allocate_id(&mut self) -> ObjectId {
        self.next_id += 1;
        ObjectId(self.next_id)
    }
}

impl Scene for MemoryScene {
    fn add_path(&mut self, commands: Vec<PathCommand>) -> ObjectId {
        self.insert(SceneObject::path(commands))
    }

    fn remove_object(&mut self, id: ObjectId) {
        self.objects.remove(&id);
    }

    fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    fn set_indicators(&mut self, indicators: Vec<Indicator>) {
        self.indicators = indicators;
    }

    fn clear_indicators(&mut self) {
        self.indicators.clear();
    }
}

/// A history that just counts snapshot requests
#[derive(Debug, Default)]
pub struct RecordingHistory {
    /// How many times `save_snapshot` has been called
    pub snapshots: usize,
}

impl RecordingHistory {
    /// A history with no snapshots yet
    pub fn new() -> Self {
        Self::default()
    }
}

impl History for RecordingHistory {
    fn save_snapshot(&mut self) {
        self.snapshots += 1;
    }
}
