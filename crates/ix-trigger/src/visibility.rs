//! Visibility trigger: all watched nodes visible to the viewer.

use std::sync::Arc;

use ix_core::{NodeId, TriggerKind};

use crate::{SceneInputs, Trigger, TriggerDesc, TriggerError, TriggerResult};

/// Activates while *every* watched node is visible.
///
/// Visibility is a host-computed fact (frustum and occlusion already
/// accounted for); a node the host has never marked reads as not visible.
pub struct VisibilityTrigger {
    nodes: Vec<NodeId>,
    inputs: Arc<SceneInputs>,
}

impl VisibilityTrigger {
    pub fn from_desc(desc: &TriggerDesc, inputs: Arc<SceneInputs>) -> TriggerResult<Self> {
        if desc.nodes.is_empty() {
            return Err(TriggerError::Config(
                "visibility trigger needs at least one node".into(),
            ));
        }
        Ok(Self {
            nodes: desc.nodes.clone(),
            inputs,
        })
    }
}

impl Trigger for VisibilityTrigger {
    fn kind(&self) -> TriggerKind {
        TriggerKind::Visibility
    }

    fn sample(&self) -> bool {
        self.nodes.iter().all(|&node| self.inputs.is_visible(node))
    }
}
