//! Pre-parsed action authoring data.

use ix_core::{
    ActionKind, ActivationStatus, AnchorId, AnimationControl, AnimationId, ManipulateKind,
    MaterialId, MediaControl, MediaId, NodeId,
};

/// One action definition from the scene's flat action array.
///
/// Supplied pre-parsed by the (out-of-scope) loading subsystem.  Fields not
/// meaningful for a given kind are left at their defaults and ignored by the
/// factory; fields a kind requires are validated fail-fast at construction.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionDesc {
    /// Variant tag.
    pub kind: ActionKind,

    /// Activation delay in seconds.  `0.0` runs inside the firing tick.
    pub delay_secs: f32,

    /// Nodes the effect applies to.
    pub nodes: Vec<NodeId>,

    /// Activate only: target status for the nodes.
    pub activation_status: ActivationStatus,

    /// Transform only: the column-major 4×4 matrix to apply.
    pub transform: Option<[f32; 16]>,

    /// Block only: `true` locks the nodes' transforms, `false` releases them.
    pub lock_transform: bool,

    /// Animation only.
    pub animation:         Option<AnimationId>,
    pub animation_control: AnimationControl,
    /// Animation only: playback speed multiplier (negative plays backwards).
    pub animation_speed:   f32,

    /// Media only.
    pub media:         Option<MediaId>,
    pub media_control: MediaControl,

    /// Manipulate only.
    pub manipulate_kind: ManipulateKind,
    /// Manipulate only: axis for `Slide`/`Rotate`.
    pub axis: [f32; 3],
    /// Manipulate only: input description the manipulation listens on.
    pub user_input_description: Option<String>,
    /// Manipulate only: anchor that must be resolved before the effect fires.
    pub required_anchor: Option<AnchorId>,

    /// Set-material only.
    pub material: Option<MaterialId>,

    /// Set-haptic only: apply a washout after playback.
    pub haptic_washout: bool,

    /// Set-avatar only: avatar action URN, e.g. `urn:mpeg:sd:avatar:wave`.
    pub avatar_action: Option<String>,
}

impl ActionDesc {
    /// A descriptor with only the kind set; fill in what the kind needs.
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            delay_secs: 0.0,
            nodes: Vec::new(),
            activation_status: ActivationStatus::default(),
            transform: None,
            lock_transform: true,
            animation: None,
            animation_control: AnimationControl::default(),
            animation_speed: 1.0,
            media: None,
            media_control: MediaControl::default(),
            manipulate_kind: ManipulateKind::default(),
            axis: [0.0, 1.0, 0.0],
            user_input_description: None,
            required_anchor: None,
            material: None,
            haptic_washout: false,
            avatar_action: None,
        }
    }

    pub fn with_delay_secs(mut self, secs: f32) -> Self {
        self.delay_secs = secs;
        self
    }

    pub fn with_nodes(mut self, nodes: Vec<NodeId>) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn with_activation_status(mut self, status: ActivationStatus) -> Self {
        self.activation_status = status;
        self
    }

    pub fn with_transform(mut self, matrix: [f32; 16]) -> Self {
        self.transform = Some(matrix);
        self
    }

    pub fn with_lock_transform(mut self, locked: bool) -> Self {
        self.lock_transform = locked;
        self
    }

    pub fn with_animation(mut self, animation: AnimationId, control: AnimationControl) -> Self {
        self.animation = Some(animation);
        self.animation_control = control;
        self
    }

    pub fn with_animation_speed(mut self, speed: f32) -> Self {
        self.animation_speed = speed;
        self
    }

    pub fn with_media(mut self, media: MediaId, control: MediaControl) -> Self {
        self.media = Some(media);
        self.media_control = control;
        self
    }

    pub fn with_manipulate(mut self, kind: ManipulateKind) -> Self {
        self.manipulate_kind = kind;
        self
    }

    pub fn with_axis(mut self, axis: [f32; 3]) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_user_input(mut self, description: impl Into<String>) -> Self {
        self.user_input_description = Some(description.into());
        self
    }

    pub fn with_required_anchor(mut self, anchor: AnchorId) -> Self {
        self.required_anchor = Some(anchor);
        self
    }

    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = Some(material);
        self
    }

    pub fn with_haptic_washout(mut self, washout: bool) -> Self {
        self.haptic_washout = washout;
        self
    }

    pub fn with_avatar_action(mut self, urn: impl Into<String>) -> Self {
        self.avatar_action = Some(urn.into());
        self
    }
}
