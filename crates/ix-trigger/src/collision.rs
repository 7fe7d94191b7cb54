//! Collision trigger: watches a set of nodes for pairwise contact.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use ix_core::{NodeId, TriggerKind};

use crate::{SceneInputs, Trigger, TriggerDesc, TriggerError, TriggerResult};

/// Activates while any pair of its watched nodes is in contact.
///
/// The original builds collision detectors pairwise over the trigger's node
/// list (node `i` targets node `j` for all `j > i`); the equivalent here is
/// a pairwise scan of the host-fed contact set.  The collider geometry that
/// produces those contacts is the host's concern.
pub struct CollisionTrigger {
    nodes: Vec<NodeId>,
    inputs: Arc<SceneInputs>,
    /// The first node of the most recent contacting pair.  Variant-internal
    /// bookkeeping only; exposed for host diagnostics.
    last_hit: AtomicU32,
}

impl CollisionTrigger {
    pub fn from_desc(desc: &TriggerDesc, inputs: Arc<SceneInputs>) -> TriggerResult<Self> {
        if desc.nodes.len() < 2 {
            return Err(TriggerError::Config(format!(
                "collision trigger needs at least 2 nodes to form a pair, got {}",
                desc.nodes.len()
            )));
        }
        Ok(Self {
            nodes: desc.nodes.clone(),
            inputs,
            last_hit: AtomicU32::new(NodeId::INVALID.0),
        })
    }

    /// The first node of the last contacting pair seen, if any.
    pub fn last_hit(&self) -> Option<NodeId> {
        let raw = self.last_hit.load(Ordering::Relaxed);
        (raw != NodeId::INVALID.0).then_some(NodeId(raw))
    }
}

impl Trigger for CollisionTrigger {
    fn kind(&self) -> TriggerKind {
        TriggerKind::Collision
    }

    fn sample(&self) -> bool {
        for (i, &a) in self.nodes.iter().enumerate() {
            for &b in &self.nodes[i + 1..] {
                if self.inputs.in_contact(a, b) {
                    self.last_hit.store(a.0, Ordering::Relaxed);
                    return true;
                }
            }
        }
        false
    }
}
