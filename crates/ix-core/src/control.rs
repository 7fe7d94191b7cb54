//! Authoring vocabulary — the closed enums of the interactivity format.
//!
//! These mirror the scene-description schema one-to-one so that pre-parsed
//! authoring data maps onto them without translation tables.  `TriggerKind`
//! and `ActionKind` additionally carry a `Custom` tag so hosts can register
//! new capability variants through the factories without touching this crate.

use std::fmt;

// ── Activation ────────────────────────────────────────────────────────────────

/// The six activation-control symbols produced by the activation state
/// machine each tick.  A behavior fires its actions on the ticks where the
/// computed symbol equals its configured policy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivationControl {
    /// Conditions met for the first time in the behavior's lifetime.
    FirstEnter,
    /// Conditions met again after not being met.
    EachEnter,
    /// Conditions currently met (no edge this tick).
    ActiveOn,
    /// Conditions no longer met, for the first time in the lifetime.
    FirstExit,
    /// Conditions no longer met (falling edge).
    EachExit,
    /// Conditions currently not met (no edge this tick).
    Off,
}

impl fmt::Display for ActivationControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivationControl::FirstEnter => "first-enter",
            ActivationControl::EachEnter => "each-enter",
            ActivationControl::ActiveOn => "active-on",
            ActivationControl::FirstExit => "first-exit",
            ActivationControl::EachExit => "each-exit",
            ActivationControl::Off => "off",
        };
        f.write_str(s)
    }
}

/// How a behavior's action list is dispatched when it fires.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionsControl {
    /// Actions are invoked one after another, in listed order, on the
    /// orchestrator's execution context.
    #[default]
    Sequential,
    /// Each action is invoked from its own fire-and-forget context.  No
    /// join, no ordering between effects, no error propagation.
    Parallel,
}

// ── Capability kinds ──────────────────────────────────────────────────────────

/// Trigger variant tag.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerKind {
    Collision,
    Proximity,
    UserInput,
    Visibility,
    /// Host-registered extension variant, matched by factory tag.
    Custom(u16),
}

/// Action variant tag.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Activate,
    Transform,
    Block,
    Animation,
    Media,
    Manipulate,
    SetMaterial,
    SetHaptic,
    SetAvatar,
    /// Host-registered extension variant, matched by factory tag.
    Custom(u16),
}

// ── Effect controls ───────────────────────────────────────────────────────────

/// Target activation status carried by the activate action.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivationStatus {
    /// The node shall be processed by the host application.
    #[default]
    Enabled,
    /// The node shall be skipped by the host application.
    Disabled,
}

/// Animation playback control.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationControl {
    #[default]
    Play,
    Pause,
    Resume,
    Stop,
}

/// Media playback control.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaControl {
    #[default]
    Play,
    Pause,
    Resume,
    Stop,
}

/// How manipulated nodes follow the user's pointing device.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ManipulateKind {
    /// Follow the pointing device and its rotation.
    #[default]
    Free,
    /// Move linearly along the provided axis.
    Slide,
    /// Translate following the pointing device.
    Translate,
    /// Rotate around the provided axis.
    Rotate,
    /// Central scaling following the pointing device.
    Scale,
}
