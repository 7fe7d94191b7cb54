//! `SceneInputs` — host-fed sensor state shared by all trigger variants.
//!
//! # Why this exists
//!
//! In the original runtime each trigger owned engine callbacks (physics
//! contact events, input-system bindings, render-queue visibility).  Those
//! collaborators are out of scope here, so the dependency is inverted: the
//! host pushes the raw facts into one shared `SceneInputs` between ticks and
//! the variants reduce them to booleans at sample time.
//!
//! # Concurrency
//!
//! Reads happen throughout a tick (including from parallel action contexts
//! for anchor gating); writes happen between ticks from the host.  `RwLock`
//! keeps the read path uncontended in the common no-writer case.

use std::sync::RwLock;

use ix_core::{AnchorId, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};

/// A world-space position pushed by the host.
pub type Position = [f32; 3];

/// Sensor facts the host feeds the trigger variants.
///
/// All setters are idempotent; absent entries read as "no contact", "not
/// visible", "unresolved", etc.
#[derive(Default)]
pub struct SceneInputs {
    /// Node pairs currently in contact, normalized to `(low, high)`.
    contacts: RwLock<FxHashSet<(NodeId, NodeId)>>,

    /// Latest world position per node.
    positions: RwLock<FxHashMap<NodeId, Position>>,

    /// The viewer (active camera) position, if the host has one.
    viewer: RwLock<Option<Position>>,

    /// Currently active user-input paths, case-normalized.
    active_inputs: RwLock<FxHashSet<String>>,

    /// Nodes currently visible to the viewer (host-computed, occlusion and
    /// frustum already accounted for).
    visible: RwLock<FxHashSet<NodeId>>,

    /// Anchors whose real-world pose is currently resolved.
    resolved_anchors: RwLock<FxHashSet<AnchorId>>,
}

impl SceneInputs {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Contacts ──────────────────────────────────────────────────────────

    /// Record or clear a contact between two nodes.  Pair order is
    /// irrelevant; self-contact is ignored.
    pub fn set_contact(&self, a: NodeId, b: NodeId, in_contact: bool) {
        if a == b {
            return;
        }
        let pair = normalize_pair(a, b);
        let mut contacts = self.contacts.write().unwrap_or_else(|e| e.into_inner());
        if in_contact {
            contacts.insert(pair);
        } else {
            contacts.remove(&pair);
        }
    }

    pub fn in_contact(&self, a: NodeId, b: NodeId) -> bool {
        if a == b {
            return false;
        }
        self.contacts
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&normalize_pair(a, b))
    }

    // ── Positions ─────────────────────────────────────────────────────────

    pub fn set_position(&self, node: NodeId, position: Position) {
        self.positions
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(node, position);
    }

    pub fn position(&self, node: NodeId) -> Option<Position> {
        self.positions
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&node)
            .copied()
    }

    pub fn set_viewer(&self, position: Option<Position>) {
        *self.viewer.write().unwrap_or_else(|e| e.into_inner()) = position;
    }

    pub fn viewer(&self) -> Option<Position> {
        *self.viewer.read().unwrap_or_else(|e| e.into_inner())
    }

    // ── User input ────────────────────────────────────────────────────────

    /// Mark an input path active or inactive.  Paths are compared
    /// case-insensitively (normalized at both ends).
    pub fn set_input(&self, path: &str, active: bool) {
        let normalized = normalize_input_path(path);
        let mut inputs = self
            .active_inputs
            .write()
            .unwrap_or_else(|e| e.into_inner());
        if active {
            inputs.insert(normalized);
        } else {
            inputs.remove(&normalized);
        }
    }

    pub fn input_active(&self, normalized_path: &str) -> bool {
        self.active_inputs
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains(normalized_path)
    }

    // ── Visibility ────────────────────────────────────────────────────────

    pub fn set_visible(&self, node: NodeId, visible: bool) {
        let mut set = self.visible.write().unwrap_or_else(|e| e.into_inner());
        if visible {
            set.insert(node);
        } else {
            set.remove(&node);
        }
    }

    pub fn is_visible(&self, node: NodeId) -> bool {
        self.visible
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&node)
    }

    // ── Anchors ───────────────────────────────────────────────────────────

    pub fn set_anchor_resolved(&self, anchor: AnchorId, resolved: bool) {
        let mut set = self
            .resolved_anchors
            .write()
            .unwrap_or_else(|e| e.into_inner());
        if resolved {
            set.insert(anchor);
        } else {
            set.remove(&anchor);
        }
    }

    pub fn anchor_resolved(&self, anchor: AnchorId) -> bool {
        self.resolved_anchors
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&anchor)
    }
}

/// Order a node pair so `(a, b)` and `(b, a)` hash identically.
#[inline]
fn normalize_pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Canonical form of an authored input description such as
/// `/user/hand/left/aim/pose`: lowercased, empty segments stripped.
pub fn normalize_input_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    segments.join("/").to_lowercase()
}

/// Straight-line distance between two pushed positions.
#[inline]
pub fn distance(a: Position, b: Position) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}
