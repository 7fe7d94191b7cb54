//! Animation action: drive an animation's playback state.

use std::sync::Arc;
use std::time::Duration;

use ix_core::{ActionKind, AnimationControl, AnimationId};

use crate::variants::delay_from_secs;
use crate::{Action, ActionDesc, ActionError, ActionResult, SceneCommand, SceneSink};

pub struct AnimationAction {
    animation: AnimationId,
    control:   AnimationControl,
    speed:     f32,
    delay:     Duration,
    sink:      Arc<dyn SceneSink>,
}

impl AnimationAction {
    pub fn from_desc(desc: &ActionDesc, sink: Arc<dyn SceneSink>) -> ActionResult<Self> {
        let animation = desc.animation.ok_or_else(|| {
            ActionError::Config("animation action needs an animation id".into())
        })?;
        if !desc.animation_speed.is_finite() {
            return Err(ActionError::Config(format!(
                "animation speed must be finite, got {}",
                desc.animation_speed
            )));
        }
        Ok(Self {
            animation,
            control: desc.animation_control,
            speed: desc.animation_speed,
            delay: delay_from_secs(desc.delay_secs)?,
            sink,
        })
    }
}

impl Action for AnimationAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Animation
    }

    fn delay(&self) -> Duration {
        self.delay
    }

    fn execute(&self) {
        self.sink.submit(SceneCommand::ControlAnimation {
            animation: self.animation,
            control:   self.control,
            speed:     self.speed,
        });
    }
}
