//! Set-haptic action: start haptic playback on node devices.

use std::sync::Arc;
use std::time::Duration;

use ix_core::{ActionKind, NodeId};

use crate::variants::{delay_from_secs, require_nodes};
use crate::{Action, ActionDesc, ActionResult, SceneCommand, SceneSink};

pub struct SetHapticAction {
    nodes:   Vec<NodeId>,
    washout: bool,
    delay:   Duration,
    sink:    Arc<dyn SceneSink>,
}

impl SetHapticAction {
    pub fn from_desc(desc: &ActionDesc, sink: Arc<dyn SceneSink>) -> ActionResult<Self> {
        require_nodes("set-haptic", &desc.nodes)?;
        Ok(Self {
            nodes:   desc.nodes.clone(),
            washout: desc.haptic_washout,
            delay:   delay_from_secs(desc.delay_secs)?,
            sink,
        })
    }
}

impl Action for SetHapticAction {
    fn kind(&self) -> ActionKind {
        ActionKind::SetHaptic
    }

    fn delay(&self) -> Duration {
        self.delay
    }

    fn execute(&self) {
        for &node in &self.nodes {
            self.sink.submit(SceneCommand::PlayHaptic {
                node,
                washout: self.washout,
            });
        }
    }
}
