//! Proximity trigger: distance band between a reference point and nodes.

use std::sync::Arc;

use ix_core::{NodeId, TriggerKind};

use crate::inputs::distance;
use crate::{SceneInputs, Trigger, TriggerDesc, TriggerError, TriggerResult};

/// Activates while *every* watched node lies within
/// `[distance_lower_limit, distance_upper_limit]` of the reference point.
///
/// The reference is either an authored reference node or, absent one, the
/// host-fed viewer position (the original falls back to the active camera).
/// A node or reference without a pushed position reads as "not close".
pub struct ProximityTrigger {
    nodes: Vec<NodeId>,
    reference_node: Option<NodeId>,
    lower: f32,
    upper: f32,
    inputs: Arc<SceneInputs>,
}

impl ProximityTrigger {
    pub fn from_desc(desc: &TriggerDesc, inputs: Arc<SceneInputs>) -> TriggerResult<Self> {
        if desc.nodes.is_empty() {
            return Err(TriggerError::Config(
                "proximity trigger needs at least one node".into(),
            ));
        }
        if desc.distance_lower_limit > desc.distance_upper_limit {
            return Err(TriggerError::Config(format!(
                "proximity distance band is inverted: lower {} > upper {}",
                desc.distance_lower_limit, desc.distance_upper_limit
            )));
        }
        Ok(Self {
            nodes: desc.nodes.clone(),
            reference_node: desc.reference_node,
            lower: desc.distance_lower_limit,
            upper: desc.distance_upper_limit,
            inputs,
        })
    }

    fn reference_position(&self) -> Option<[f32; 3]> {
        match self.reference_node {
            Some(node) => self.inputs.position(node),
            None => self.inputs.viewer(),
        }
    }
}

impl Trigger for ProximityTrigger {
    fn kind(&self) -> TriggerKind {
        TriggerKind::Proximity
    }

    fn sample(&self) -> bool {
        let Some(reference) = self.reference_position() else {
            return false;
        };
        self.nodes.iter().all(|&node| {
            self.inputs.position(node).is_some_and(|p| {
                let d = distance(reference, p);
                d >= self.lower && d <= self.upper
            })
        })
    }
}
