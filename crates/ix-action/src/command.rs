//! Scene-effect commands and the sink they are submitted to.

use std::sync::Mutex;

use ix_core::{
    ActivationStatus, AnimationControl, AnimationId, ManipulateKind, MaterialId, MediaControl,
    MediaId, NodeId,
};

/// One host-side effect requested by an action.
///
/// Commands carry resolved IDs and final parameter values only — by the time
/// a command reaches the sink, all authoring-data validation has happened.
/// Applying the command (scene-graph mutation, playback seek, render-state
/// swap) is the host's job.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SceneCommand {
    /// Enable or disable processing of a node.
    SetNodeActive { node: NodeId, active: bool },

    /// Overwrite a node's local transform with a column-major 4×4 matrix.
    SetNodeTransform { node: NodeId, matrix: [f32; 16] },

    /// Lock or unlock a node's transform against further modification.
    SetTransformLocked { node: NodeId, locked: bool },

    /// Drive an animation's playback state.
    ControlAnimation {
        animation: AnimationId,
        control:   AnimationControl,
        speed:     f32,
    },

    /// Drive a media item's playback state.
    ControlMedia {
        media:   MediaId,
        control: MediaControl,
    },

    /// Attach a node to the user's pointing device.
    Manipulate {
        node:       NodeId,
        kind:       ManipulateKind,
        /// Axis for `Slide`/`Rotate`; ignored by the other kinds.
        axis:       [f32; 3],
        /// Normalized input path the manipulation listens on, if authored.
        input_path: Option<String>,
    },

    /// Re-bind a node's material.
    SetMaterial { node: NodeId, material: MaterialId },

    /// Start haptic playback on a node's device.
    PlayHaptic { node: NodeId, washout: bool },

    /// Apply an avatar action, identified by URN, to an avatar node.
    SetAvatar { node: NodeId, action_urn: String },
}

/// Where actions submit their effects.
///
/// Implementations must be `Send + Sync`: parallel dispatch and deferred
/// invocations submit from arbitrary contexts.
pub trait SceneSink: Send + Sync {
    fn submit(&self, command: SceneCommand);
}

/// A [`SceneSink`] that appends every command to a vector.
///
/// The standard sink for tests and for hosts that drain effects once per
/// frame instead of applying them eagerly.
#[derive(Default)]
pub struct RecordingSink {
    commands: Mutex<Vec<SceneCommand>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every recorded command, oldest first, leaving the sink empty.
    pub fn drain(&self) -> Vec<SceneCommand> {
        std::mem::take(&mut *self.commands.lock().unwrap_or_else(|e| e.into_inner()))
    }

    pub fn len(&self) -> usize {
        self.commands.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SceneSink for RecordingSink {
    fn submit(&self, command: SceneCommand) {
        self.commands
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(command);
    }
}
