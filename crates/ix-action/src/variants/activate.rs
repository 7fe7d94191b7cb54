//! Activate action: enable or disable processing of nodes.

use std::sync::Arc;
use std::time::Duration;

use ix_core::{ActionKind, ActivationStatus, NodeId};

use crate::variants::{delay_from_secs, require_nodes};
use crate::{Action, ActionDesc, ActionResult, SceneCommand, SceneSink};

/// Sets each target node's activation status.
pub struct ActivateAction {
    nodes:  Vec<NodeId>,
    active: bool,
    delay:  Duration,
    sink:   Arc<dyn SceneSink>,
}

impl ActivateAction {
    pub fn from_desc(desc: &ActionDesc, sink: Arc<dyn SceneSink>) -> ActionResult<Self> {
        require_nodes("activate", &desc.nodes)?;
        Ok(Self {
            nodes:  desc.nodes.clone(),
            active: desc.activation_status == ActivationStatus::Enabled,
            delay:  delay_from_secs(desc.delay_secs)?,
            sink,
        })
    }
}

impl Action for ActivateAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Activate
    }

    fn delay(&self) -> Duration {
        self.delay
    }

    fn execute(&self) {
        for &node in &self.nodes {
            self.sink.submit(SceneCommand::SetNodeActive {
                node,
                active: self.active,
            });
        }
    }
}
