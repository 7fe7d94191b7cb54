//! User-input trigger: a normalized input path currently active.

use std::sync::Arc;

use ix_core::TriggerKind;

use crate::inputs::normalize_input_path;
use crate::{SceneInputs, Trigger, TriggerDesc, TriggerError, TriggerResult};

/// Activates while the authored input description's path is active.
///
/// The description is normalized once at init (the original derives an
/// input-system binding from it and errors on an empty description); the
/// host marks paths active/inactive through [`SceneInputs::set_input`].
pub struct UserInputTrigger {
    path: String,
    inputs: Arc<SceneInputs>,
}

impl UserInputTrigger {
    pub fn from_desc(desc: &TriggerDesc, inputs: Arc<SceneInputs>) -> TriggerResult<Self> {
        let description = desc.user_input_description.as_deref().unwrap_or("");
        let path = normalize_input_path(description);
        if path.is_empty() {
            return Err(TriggerError::Config(
                "user-input trigger has an empty input description".into(),
            ));
        }
        Ok(Self { path, inputs })
    }

    /// The normalized path this trigger listens on.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Trigger for UserInputTrigger {
    fn kind(&self) -> TriggerKind {
        TriggerKind::UserInput
    }

    fn sample(&self) -> bool {
        self.inputs.input_active(&self.path)
    }
}
