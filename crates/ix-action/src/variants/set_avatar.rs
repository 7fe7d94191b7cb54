//! Set-avatar action: apply an avatar action URN to avatar nodes.

use std::sync::Arc;
use std::time::Duration;

use ix_core::{ActionKind, NodeId};

use crate::variants::{delay_from_secs, require_nodes};
use crate::{Action, ActionDesc, ActionError, ActionResult, SceneCommand, SceneSink};

pub struct SetAvatarAction {
    nodes:      Vec<NodeId>,
    action_urn: String,
    delay:      Duration,
    sink:       Arc<dyn SceneSink>,
}

impl SetAvatarAction {
    pub fn from_desc(desc: &ActionDesc, sink: Arc<dyn SceneSink>) -> ActionResult<Self> {
        require_nodes("set-avatar", &desc.nodes)?;
        let action_urn = desc
            .avatar_action
            .clone()
            .filter(|urn| !urn.is_empty())
            .ok_or_else(|| {
                ActionError::Config("set-avatar action needs a non-empty action URN".into())
            })?;
        Ok(Self {
            nodes: desc.nodes.clone(),
            action_urn,
            delay: delay_from_secs(desc.delay_secs)?,
            sink,
        })
    }
}

impl Action for SetAvatarAction {
    fn kind(&self) -> ActionKind {
        ActionKind::SetAvatar
    }

    fn delay(&self) -> Duration {
        self.delay
    }

    fn execute(&self) {
        for &node in &self.nodes {
            self.sink.submit(SceneCommand::SetAvatar {
                node,
                action_urn: self.action_urn.clone(),
            });
        }
    }
}
