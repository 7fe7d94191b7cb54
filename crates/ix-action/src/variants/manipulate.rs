//! Manipulate action: attach nodes to the user's pointing device.

use std::sync::Arc;
use std::time::Duration;

use ix_core::{ActionKind, AnchorId, ManipulateKind, NodeId};
use ix_trigger::SceneInputs;
use ix_trigger::inputs::normalize_input_path;

use crate::variants::{delay_from_secs, require_nodes};
use crate::{Action, ActionDesc, ActionError, ActionResult, SceneCommand, SceneSink};

/// Hands each target node to the host's manipulation machinery.
///
/// When the authoring data ties the manipulation to a trackable (an anchor),
/// the effect is gated: `execute` emits nothing until the host has marked
/// that anchor resolved in [`SceneInputs`].  The gate is re-checked on every
/// invocation, so the first fire after resolution goes through.
pub struct ManipulateAction {
    nodes:           Vec<NodeId>,
    kind:            ManipulateKind,
    axis:            [f32; 3],
    input_path:      Option<String>,
    required_anchor: Option<AnchorId>,
    inputs:          Arc<SceneInputs>,
    delay:           Duration,
    sink:            Arc<dyn SceneSink>,
}

impl ManipulateAction {
    pub fn from_desc(
        desc: &ActionDesc,
        sink: Arc<dyn SceneSink>,
        inputs: Arc<SceneInputs>,
    ) -> ActionResult<Self> {
        require_nodes("manipulate", &desc.nodes)?;
        let axis = desc.axis;
        if matches!(desc.manipulate_kind, ManipulateKind::Slide | ManipulateKind::Rotate)
            && axis == [0.0, 0.0, 0.0]
        {
            return Err(ActionError::Config(format!(
                "manipulate {:?} needs a non-zero axis",
                desc.manipulate_kind
            )));
        }
        let input_path = desc
            .user_input_description
            .as_deref()
            .map(normalize_input_path)
            .filter(|p| !p.is_empty());
        Ok(Self {
            nodes: desc.nodes.clone(),
            kind: desc.manipulate_kind,
            axis,
            input_path,
            required_anchor: desc.required_anchor,
            inputs,
            delay: delay_from_secs(desc.delay_secs)?,
            sink,
        })
    }

    fn anchor_ready(&self) -> bool {
        match self.required_anchor {
            Some(anchor) => self.inputs.anchor_resolved(anchor),
            None => true,
        }
    }
}

impl Action for ManipulateAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Manipulate
    }

    fn delay(&self) -> Duration {
        self.delay
    }

    fn execute(&self) {
        if !self.anchor_ready() {
            return;
        }
        for &node in &self.nodes {
            self.sink.submit(SceneCommand::Manipulate {
                node,
                kind: self.kind,
                axis: self.axis,
                input_path: self.input_path.clone(),
            });
        }
    }
}
