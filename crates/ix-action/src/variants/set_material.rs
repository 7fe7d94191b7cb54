//! Set-material action: re-bind node materials.

use std::sync::Arc;
use std::time::Duration;

use ix_core::{ActionKind, MaterialId, NodeId};

use crate::variants::{delay_from_secs, require_nodes};
use crate::{Action, ActionDesc, ActionError, ActionResult, SceneCommand, SceneSink};

pub struct SetMaterialAction {
    nodes:    Vec<NodeId>,
    material: MaterialId,
    delay:    Duration,
    sink:     Arc<dyn SceneSink>,
}

impl SetMaterialAction {
    pub fn from_desc(desc: &ActionDesc, sink: Arc<dyn SceneSink>) -> ActionResult<Self> {
        require_nodes("set-material", &desc.nodes)?;
        let material = desc.material.ok_or_else(|| {
            ActionError::Config("set-material action needs a material id".into())
        })?;
        Ok(Self {
            nodes: desc.nodes.clone(),
            material,
            delay: delay_from_secs(desc.delay_secs)?,
            sink,
        })
    }
}

impl Action for SetMaterialAction {
    fn kind(&self) -> ActionKind {
        ActionKind::SetMaterial
    }

    fn delay(&self) -> Duration {
        self.delay
    }

    fn execute(&self) {
        for &node in &self.nodes {
            self.sink.submit(SceneCommand::SetMaterial {
                node,
                material: self.material,
            });
        }
    }
}
