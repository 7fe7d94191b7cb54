//! Pre-parsed behavior authoring data.

use ix_core::{ActionId, ActionsControl, ActivationControl, TriggerId};

use crate::combine::EvalMode;

/// One behavior definition from the scene's flat behavior array.
///
/// Trigger and action references are array indices into the scene's trigger
/// and action arrays, exactly as the authoring format stores them; the
/// engine builder resolves them to handles at load time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorDesc {
    /// Triggers whose sampled results feed the combination, in order.
    pub triggers: Vec<TriggerId>,

    /// Actions invoked when the behavior fires, in order.
    pub actions: Vec<ActionId>,

    /// The authored combination-control string, e.g. `"#0&#1"`.
    pub combination_control: String,

    /// The activation symbol on which the behavior fires.
    pub activation_policy: ActivationControl,

    /// Sequential or parallel action dispatch.
    pub actions_policy: ActionsControl,

    /// Advisory metadata for external conflict resolution; the engine
    /// itself never consults it.
    pub priority: i32,

    /// Whether the behavior's effects are globally visible (vs. scoped to
    /// the local experience).  Advisory, like `priority`.
    pub shared: bool,

    /// Action invoked once when the behavior is interrupted.
    pub interrupt_action: Option<ActionId>,

    /// Evaluation fold for the combination.  Defaults to the historical one.
    pub eval_mode: EvalMode,
}

impl BehaviorDesc {
    pub fn new(triggers: Vec<TriggerId>, actions: Vec<ActionId>) -> Self {
        Self {
            triggers,
            actions,
            combination_control: String::new(),
            activation_policy: ActivationControl::FirstEnter,
            actions_policy: ActionsControl::Sequential,
            priority: 0,
            shared: false,
            interrupt_action: None,
            eval_mode: EvalMode::Legacy,
        }
    }

    pub fn with_combination_control(mut self, control: impl Into<String>) -> Self {
        self.combination_control = control.into();
        self
    }

    pub fn with_activation_policy(mut self, policy: ActivationControl) -> Self {
        self.activation_policy = policy;
        self
    }

    pub fn with_actions_policy(mut self, policy: ActionsControl) -> Self {
        self.actions_policy = policy;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_shared(mut self, shared: bool) -> Self {
        self.shared = shared;
        self
    }

    pub fn with_interrupt_action(mut self, action: ActionId) -> Self {
        self.interrupt_action = Some(action);
        self
    }

    pub fn with_eval_mode(mut self, mode: EvalMode) -> Self {
        self.eval_mode = mode;
        self
    }
}
