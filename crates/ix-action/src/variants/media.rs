//! Media action: drive a media item's playback state.

use std::sync::Arc;
use std::time::Duration;

use ix_core::{ActionKind, MediaControl, MediaId};

use crate::variants::delay_from_secs;
use crate::{Action, ActionDesc, ActionError, ActionResult, SceneCommand, SceneSink};

pub struct MediaAction {
    media:   MediaId,
    control: MediaControl,
    delay:   Duration,
    sink:    Arc<dyn SceneSink>,
}

impl MediaAction {
    pub fn from_desc(desc: &ActionDesc, sink: Arc<dyn SceneSink>) -> ActionResult<Self> {
        let media = desc
            .media
            .ok_or_else(|| ActionError::Config("media action needs a media id".into()))?;
        Ok(Self {
            media,
            control: desc.media_control,
            delay: delay_from_secs(desc.delay_secs)?,
            sink,
        })
    }
}

impl Action for MediaAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Media
    }

    fn delay(&self) -> Duration {
        self.delay
    }

    fn execute(&self) {
        self.sink.submit(SceneCommand::ControlMedia {
            media:   self.media,
            control: self.control,
        });
    }
}
