//! Kind-keyed trigger construction.

use std::sync::Arc;

use ix_core::TriggerKind;
use rustc_hash::FxHashMap;

use crate::collision::CollisionTrigger;
use crate::proximity::ProximityTrigger;
use crate::user_input::UserInputTrigger;
use crate::visibility::VisibilityTrigger;
use crate::{SceneInputs, Trigger, TriggerDesc, TriggerError, TriggerResult};

/// Builds one trigger instance from its descriptor.
pub type TriggerBuilder =
    Box<dyn Fn(&TriggerDesc, Arc<SceneInputs>) -> TriggerResult<Arc<dyn Trigger>> + Send + Sync>;

/// Maps each [`TriggerKind`] to a constructor.
///
/// [`TriggerFactory::default`] registers the four standard variants; hosts
/// extend the set by registering builders under `TriggerKind::Custom(tag)`
/// (or by overriding a standard kind).  Construction is fail-fast: a
/// descriptor a variant cannot honor is a [`TriggerError::Config`], an
/// unregistered kind a [`TriggerError::UnknownKind`].
pub struct TriggerFactory {
    builders: FxHashMap<TriggerKind, TriggerBuilder>,
}

impl Default for TriggerFactory {
    fn default() -> Self {
        let mut factory = Self::empty();
        factory.register(TriggerKind::Collision, |desc, inputs| {
            Ok(Arc::new(CollisionTrigger::from_desc(desc, inputs)?))
        });
        factory.register(TriggerKind::Proximity, |desc, inputs| {
            Ok(Arc::new(ProximityTrigger::from_desc(desc, inputs)?))
        });
        factory.register(TriggerKind::UserInput, |desc, inputs| {
            Ok(Arc::new(UserInputTrigger::from_desc(desc, inputs)?))
        });
        factory.register(TriggerKind::Visibility, |desc, inputs| {
            Ok(Arc::new(VisibilityTrigger::from_desc(desc, inputs)?))
        });
        factory
    }
}

impl TriggerFactory {
    /// A factory with no builders at all.  Useful for hosts that want full
    /// control over the variant set; most want [`TriggerFactory::default`].
    pub fn empty() -> Self {
        Self {
            builders: FxHashMap::default(),
        }
    }

    /// Register (or replace) the builder for a kind.
    pub fn register<F>(&mut self, kind: TriggerKind, builder: F)
    where
        F: Fn(&TriggerDesc, Arc<SceneInputs>) -> TriggerResult<Arc<dyn Trigger>>
            + Send
            + Sync
            + 'static,
    {
        self.builders.insert(kind, Box::new(builder));
    }

    /// Construct the trigger a descriptor asks for.
    pub fn build(
        &self,
        desc: &TriggerDesc,
        inputs: Arc<SceneInputs>,
    ) -> TriggerResult<Arc<dyn Trigger>> {
        let builder = self
            .builders
            .get(&desc.kind)
            .ok_or(TriggerError::UnknownKind(desc.kind))?;
        builder(desc, inputs)
    }
}
