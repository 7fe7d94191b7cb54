//! Transform action: overwrite node transforms with an authored matrix.

use std::sync::Arc;
use std::time::Duration;

use ix_core::{ActionKind, NodeId};

use crate::variants::{delay_from_secs, require_nodes};
use crate::{Action, ActionDesc, ActionError, ActionResult, SceneCommand, SceneSink};

/// Applies one column-major 4×4 matrix to every target node.
pub struct TransformAction {
    nodes:  Vec<NodeId>,
    matrix: [f32; 16],
    delay:  Duration,
    sink:   Arc<dyn SceneSink>,
}

impl TransformAction {
    pub fn from_desc(desc: &ActionDesc, sink: Arc<dyn SceneSink>) -> ActionResult<Self> {
        require_nodes("transform", &desc.nodes)?;
        let matrix = desc.transform.ok_or_else(|| {
            ActionError::Config("transform action needs a transform matrix".into())
        })?;
        Ok(Self {
            nodes: desc.nodes.clone(),
            matrix,
            delay: delay_from_secs(desc.delay_secs)?,
            sink,
        })
    }
}

impl Action for TransformAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Transform
    }

    fn delay(&self) -> Duration {
        self.delay
    }

    fn execute(&self) {
        for &node in &self.nodes {
            self.sink.submit(SceneCommand::SetNodeTransform {
                node,
                matrix: self.matrix,
            });
        }
    }
}
