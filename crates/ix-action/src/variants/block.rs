//! Block action: lock node transforms against further modification.

use std::sync::Arc;
use std::time::Duration;

use ix_core::{ActionKind, NodeId};

use crate::variants::{delay_from_secs, require_nodes};
use crate::{Action, ActionDesc, ActionResult, SceneCommand, SceneSink};

/// Locks (or releases) each target node's transform.
pub struct BlockAction {
    nodes:  Vec<NodeId>,
    locked: bool,
    delay:  Duration,
    sink:   Arc<dyn SceneSink>,
}

impl BlockAction {
    pub fn from_desc(desc: &ActionDesc, sink: Arc<dyn SceneSink>) -> ActionResult<Self> {
        require_nodes("block", &desc.nodes)?;
        Ok(Self {
            nodes:  desc.nodes.clone(),
            locked: desc.lock_transform,
            delay:  delay_from_secs(desc.delay_secs)?,
            sink,
        })
    }
}

impl Action for BlockAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Block
    }

    fn delay(&self) -> Duration {
        self.delay
    }

    fn execute(&self) {
        for &node in &self.nodes {
            self.sink.submit(SceneCommand::SetTransformLocked {
                node,
                locked: self.locked,
            });
        }
    }
}
