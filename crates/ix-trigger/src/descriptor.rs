//! Pre-parsed trigger authoring data.

use ix_core::{NodeId, TriggerKind};

/// One trigger definition from the scene's flat trigger array.
///
/// Supplied pre-parsed by the (out-of-scope) loading subsystem.  Fields not
/// meaningful for a given kind are left at their defaults and ignored by the
/// factory; fields a kind requires are validated fail-fast at construction.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerDesc {
    /// Variant tag.
    pub kind: TriggerKind,

    /// Nodes considered for the trigger calculation.
    pub nodes: Vec<NodeId>,

    /// Proximity only: the node distances are measured from.  `None` means
    /// "measure from the viewer" (the original falls back to the active
    /// camera).
    pub reference_node: Option<NodeId>,

    /// Proximity only: minimum distance in meters.
    pub distance_lower_limit: f32,

    /// Proximity only: maximum distance in meters.
    pub distance_upper_limit: f32,

    /// User input only: the body-part/gesture description, e.g.
    /// `/user/hand/left/aim/pose`.
    pub user_input_description: Option<String>,
}

impl TriggerDesc {
    /// A descriptor with only the kind set; fill in what the kind needs.
    pub fn new(kind: TriggerKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            reference_node: None,
            distance_lower_limit: 0.0,
            distance_upper_limit: f32::INFINITY,
            user_input_description: None,
        }
    }

    pub fn with_nodes(mut self, nodes: Vec<NodeId>) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn with_reference_node(mut self, node: NodeId) -> Self {
        self.reference_node = Some(node);
        self
    }

    pub fn with_distance_band(mut self, lower: f32, upper: f32) -> Self {
        self.distance_lower_limit = lower;
        self.distance_upper_limit = upper;
        self
    }

    pub fn with_user_input(mut self, description: impl Into<String>) -> Self {
        self.user_input_description = Some(description.into());
        self
    }
}
