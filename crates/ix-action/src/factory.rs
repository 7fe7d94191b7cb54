//! Kind-keyed action construction.

use std::sync::Arc;

use ix_core::ActionKind;
use ix_trigger::SceneInputs;
use rustc_hash::FxHashMap;

use crate::variants::{
    ActivateAction, AnimationAction, BlockAction, ManipulateAction, MediaAction, SetAvatarAction,
    SetHapticAction, SetMaterialAction, TransformAction,
};
use crate::{Action, ActionDesc, ActionError, ActionResult, SceneSink};

/// Everything an action builder may need besides the descriptor.
///
/// Bundled so the builder signature survives new ambient collaborators
/// without touching every registered closure.
pub struct ActionContext {
    /// Where constructed actions submit their effects.
    pub sink: Arc<dyn SceneSink>,
    /// Host-fed sensor state, for variants that gate on it (anchors).
    pub inputs: Arc<SceneInputs>,
}

/// Builds one action instance from its descriptor.
pub type ActionBuilder =
    Box<dyn Fn(&ActionDesc, &ActionContext) -> ActionResult<Arc<dyn Action>> + Send + Sync>;

/// Maps each [`ActionKind`] to a constructor.
///
/// [`ActionFactory::default`] registers the nine standard variants; hosts
/// extend the set under `ActionKind::Custom(tag)`.  Construction is
/// fail-fast, same contract as the trigger factory.
pub struct ActionFactory {
    builders: FxHashMap<ActionKind, ActionBuilder>,
}

impl Default for ActionFactory {
    fn default() -> Self {
        let mut factory = Self::empty();
        factory.register(ActionKind::Activate, |desc, ctx| {
            Ok(Arc::new(ActivateAction::from_desc(desc, Arc::clone(&ctx.sink))?))
        });
        factory.register(ActionKind::Transform, |desc, ctx| {
            Ok(Arc::new(TransformAction::from_desc(desc, Arc::clone(&ctx.sink))?))
        });
        factory.register(ActionKind::Block, |desc, ctx| {
            Ok(Arc::new(BlockAction::from_desc(desc, Arc::clone(&ctx.sink))?))
        });
        factory.register(ActionKind::Animation, |desc, ctx| {
            Ok(Arc::new(AnimationAction::from_desc(desc, Arc::clone(&ctx.sink))?))
        });
        factory.register(ActionKind::Media, |desc, ctx| {
            Ok(Arc::new(MediaAction::from_desc(desc, Arc::clone(&ctx.sink))?))
        });
        factory.register(ActionKind::Manipulate, |desc, ctx| {
            Ok(Arc::new(ManipulateAction::from_desc(
                desc,
                Arc::clone(&ctx.sink),
                Arc::clone(&ctx.inputs),
            )?))
        });
        factory.register(ActionKind::SetMaterial, |desc, ctx| {
            Ok(Arc::new(SetMaterialAction::from_desc(desc, Arc::clone(&ctx.sink))?))
        });
        factory.register(ActionKind::SetHaptic, |desc, ctx| {
            Ok(Arc::new(SetHapticAction::from_desc(desc, Arc::clone(&ctx.sink))?))
        });
        factory.register(ActionKind::SetAvatar, |desc, ctx| {
            Ok(Arc::new(SetAvatarAction::from_desc(desc, Arc::clone(&ctx.sink))?))
        });
        factory
    }
}

impl ActionFactory {
    /// A factory with no builders at all.
    pub fn empty() -> Self {
        Self {
            builders: FxHashMap::default(),
        }
    }

    /// Register (or replace) the builder for a kind.
    pub fn register<F>(&mut self, kind: ActionKind, builder: F)
    where
        F: Fn(&ActionDesc, &ActionContext) -> ActionResult<Arc<dyn Action>>
            + Send
            + Sync
            + 'static,
    {
        self.builders.insert(kind, Box::new(builder));
    }

    /// Construct the action a descriptor asks for.
    pub fn build(&self, desc: &ActionDesc, ctx: &ActionContext) -> ActionResult<Arc<dyn Action>> {
        let builder = self
            .builders
            .get(&desc.kind)
            .ok_or(ActionError::UnknownKind(desc.kind))?;
        builder(desc, ctx)
    }
}
