//! The nine standard action variants.
//!
//! Each variant resolves and validates its parameters once in `from_desc`,
//! then reduces them to [`SceneCommand`](crate::SceneCommand) submissions on
//! every `execute`.

use std::time::Duration;

use crate::{ActionError, ActionResult};

pub mod activate;
pub mod animation;
pub mod block;
pub mod manipulate;
pub mod media;
pub mod set_avatar;
pub mod set_haptic;
pub mod set_material;
pub mod transform;

pub use activate::ActivateAction;
pub use animation::AnimationAction;
pub use block::BlockAction;
pub use manipulate::ManipulateAction;
pub use media::MediaAction;
pub use set_avatar::SetAvatarAction;
pub use set_haptic::SetHapticAction;
pub use set_material::SetMaterialAction;
pub use transform::TransformAction;

/// Convert an authored delay to a `Duration`, rejecting what a duration
/// cannot represent.
pub(crate) fn delay_from_secs(secs: f32) -> ActionResult<Duration> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(ActionError::Config(format!(
            "action delay must be a finite non-negative number of seconds, got {secs}"
        )));
    }
    Ok(Duration::from_secs_f32(secs))
}

/// Most variants need at least one target node.
pub(crate) fn require_nodes(desc_kind: &str, nodes: &[ix_core::NodeId]) -> ActionResult<()> {
    if nodes.is_empty() {
        return Err(ActionError::Config(format!(
            "{desc_kind} action needs at least one node"
        )));
    }
    Ok(())
}
