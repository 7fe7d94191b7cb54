//! Unit tests for ix-action.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use ix_core::{
    ActionKind, ActivationStatus, AnchorId, AnimationControl, AnimationId, DeferredJob,
    DelayScheduler, ManipulateKind, MaterialId, MediaControl, MediaId, NodeId,
};
use ix_trigger::SceneInputs;

use crate::factory::ActionContext;
use crate::variants::{ActivateAction, ManipulateAction, TransformAction};
use crate::{
    Action, ActionDesc, ActionError, ActionExt, ActionFactory, RecordingSink, SceneCommand,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sink() -> Arc<RecordingSink> {
    Arc::new(RecordingSink::new())
}

fn context(sink: &Arc<RecordingSink>) -> ActionContext {
    ActionContext {
        sink:   Arc::clone(sink) as Arc<dyn crate::SceneSink>,
        inputs: Arc::new(SceneInputs::new()),
    }
}

/// A scheduler that holds jobs until the test releases them.
#[derive(Default)]
struct ManualScheduler {
    pending: Mutex<Vec<(Duration, DeferredJob)>>,
}

impl ManualScheduler {
    fn pending_count(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    fn run_all(&self) {
        let jobs = std::mem::take(&mut *self.pending.lock().unwrap());
        for (_, job) in jobs {
            job();
        }
    }
}

impl DelayScheduler for ManualScheduler {
    fn schedule_after(&self, delay: Duration, job: DeferredJob) {
        self.pending.lock().unwrap().push((delay, job));
    }
}

// ── Invocation protocol ───────────────────────────────────────────────────────

#[cfg(test)]
mod invoke_tests {
    use super::*;

    fn activate_with_delay(sink: &Arc<RecordingSink>, delay_secs: f32) -> Arc<dyn Action> {
        let desc = ActionDesc::new(ActionKind::Activate)
            .with_nodes(vec![NodeId(1)])
            .with_delay_secs(delay_secs);
        Arc::new(
            ActivateAction::from_desc(&desc, Arc::clone(sink) as Arc<dyn crate::SceneSink>)
                .unwrap(),
        )
    }

    #[test]
    fn zero_delay_executes_synchronously() {
        let sink = sink();
        let timers: Arc<dyn DelayScheduler> = Arc::new(ManualScheduler::default());
        let action = activate_with_delay(&sink, 0.0);

        action.invoke(&timers);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn positive_delay_defers_execution() {
        let sink = sink();
        let scheduler = Arc::new(ManualScheduler::default());
        let timers: Arc<dyn DelayScheduler> = Arc::clone(&scheduler) as _;
        let action = activate_with_delay(&sink, 1.5);

        action.invoke(&timers);
        assert!(sink.is_empty());
        assert_eq!(scheduler.pending_count(), 1);

        scheduler.run_all();
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn each_invocation_schedules_independently() {
        let sink = sink();
        let scheduler = Arc::new(ManualScheduler::default());
        let timers: Arc<dyn DelayScheduler> = Arc::clone(&scheduler) as _;
        let action = activate_with_delay(&sink, 0.5);

        action.invoke(&timers);
        action.invoke(&timers);
        assert_eq!(scheduler.pending_count(), 2);

        scheduler.run_all();
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn negative_or_nan_delay_is_rejected() {
        let sink = sink();
        for bad in [-1.0, f32::NAN, f32::INFINITY] {
            let desc = ActionDesc::new(ActionKind::Activate)
                .with_nodes(vec![NodeId(1)])
                .with_delay_secs(bad);
            assert!(matches!(
                ActivateAction::from_desc(&desc, Arc::clone(&sink) as _),
                Err(ActionError::Config(_))
            ));
        }
    }
}

// ── Variants ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod variant_tests {
    use super::*;

    #[test]
    fn activate_enabled_means_active() {
        let sink = sink();
        let desc = ActionDesc::new(ActionKind::Activate)
            .with_nodes(vec![NodeId(1), NodeId(2)])
            .with_activation_status(ActivationStatus::Enabled);
        let action = ActivateAction::from_desc(&desc, Arc::clone(&sink) as _).unwrap();

        action.execute();
        assert_eq!(
            sink.drain(),
            vec![
                SceneCommand::SetNodeActive { node: NodeId(1), active: true },
                SceneCommand::SetNodeActive { node: NodeId(2), active: true },
            ]
        );
    }

    #[test]
    fn activate_disabled_means_inactive() {
        let sink = sink();
        let desc = ActionDesc::new(ActionKind::Activate)
            .with_nodes(vec![NodeId(1)])
            .with_activation_status(ActivationStatus::Disabled);
        let action = ActivateAction::from_desc(&desc, Arc::clone(&sink) as _).unwrap();

        action.execute();
        assert_eq!(
            sink.drain(),
            vec![SceneCommand::SetNodeActive { node: NodeId(1), active: false }]
        );
    }

    #[test]
    fn transform_requires_matrix() {
        let sink = sink();
        let desc = ActionDesc::new(ActionKind::Transform).with_nodes(vec![NodeId(1)]);
        assert!(matches!(
            TransformAction::from_desc(&desc, Arc::clone(&sink) as _),
            Err(ActionError::Config(_))
        ));
    }

    #[test]
    fn manipulate_gates_on_anchor() {
        let sink = sink();
        let inputs = Arc::new(SceneInputs::new());
        let desc = ActionDesc::new(ActionKind::Manipulate)
            .with_nodes(vec![NodeId(1)])
            .with_manipulate(ManipulateKind::Free)
            .with_required_anchor(AnchorId(3));
        let action =
            ManipulateAction::from_desc(&desc, Arc::clone(&sink) as _, Arc::clone(&inputs))
                .unwrap();

        action.execute();
        assert!(sink.is_empty());

        inputs.set_anchor_resolved(AnchorId(3), true);
        action.execute();
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn manipulate_slide_needs_axis() {
        let sink = sink();
        let inputs = Arc::new(SceneInputs::new());
        let desc = ActionDesc::new(ActionKind::Manipulate)
            .with_nodes(vec![NodeId(1)])
            .with_manipulate(ManipulateKind::Slide)
            .with_axis([0.0, 0.0, 0.0]);
        assert!(matches!(
            ManipulateAction::from_desc(&desc, Arc::clone(&sink) as _, inputs),
            Err(ActionError::Config(_))
        ));
    }

    #[test]
    fn manipulate_normalizes_input_path() {
        let sink = sink();
        let inputs = Arc::new(SceneInputs::new());
        let desc = ActionDesc::new(ActionKind::Manipulate)
            .with_nodes(vec![NodeId(1)])
            .with_manipulate(ManipulateKind::Translate)
            .with_user_input("/User/Hand/Right/Aim/Pose");
        let action = ManipulateAction::from_desc(&desc, Arc::clone(&sink) as _, inputs).unwrap();

        action.execute();
        match sink.drain().pop().unwrap() {
            SceneCommand::Manipulate { input_path, .. } => {
                assert_eq!(input_path.as_deref(), Some("user/hand/right/aim/pose"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

// ── Factory ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod factory_tests {
    use super::*;

    #[test]
    fn default_builds_standard_variants() {
        let factory = ActionFactory::default();
        let sink = sink();
        let ctx = context(&sink);

        let descs = vec![
            ActionDesc::new(ActionKind::Activate).with_nodes(vec![NodeId(1)]),
            ActionDesc::new(ActionKind::Transform)
                .with_nodes(vec![NodeId(1)])
                .with_transform([0.0; 16]),
            ActionDesc::new(ActionKind::Block).with_nodes(vec![NodeId(1)]),
            ActionDesc::new(ActionKind::Animation)
                .with_animation(AnimationId(1), AnimationControl::Play),
            ActionDesc::new(ActionKind::Media).with_media(MediaId(1), MediaControl::Pause),
            ActionDesc::new(ActionKind::Manipulate).with_nodes(vec![NodeId(1)]),
            ActionDesc::new(ActionKind::SetMaterial)
                .with_nodes(vec![NodeId(1)])
                .with_material(MaterialId(1)),
            ActionDesc::new(ActionKind::SetHaptic).with_nodes(vec![NodeId(1)]),
            ActionDesc::new(ActionKind::SetAvatar)
                .with_nodes(vec![NodeId(1)])
                .with_avatar_action("urn:mpeg:sd:avatar:wave"),
        ];

        for desc in &descs {
            let action = factory.build(desc, &ctx).unwrap();
            assert_eq!(action.kind(), desc.kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let factory = ActionFactory::default();
        let sink = sink();
        let desc = ActionDesc::new(ActionKind::Custom(3));
        assert!(matches!(
            factory.build(&desc, &context(&sink)),
            Err(ActionError::UnknownKind(ActionKind::Custom(3)))
        ));
    }

    #[test]
    fn builder_errors_propagate() {
        let factory = ActionFactory::default();
        let sink = sink();
        // Media without a media id fails in the variant.
        let desc = ActionDesc::new(ActionKind::Media);
        assert!(matches!(
            factory.build(&desc, &context(&sink)),
            Err(ActionError::Config(_))
        ));
    }

    #[test]
    fn custom_kind_can_be_registered() {
        struct Noop;
        impl Action for Noop {
            fn kind(&self) -> ActionKind {
                ActionKind::Custom(3)
            }
            fn execute(&self) {}
        }

        let mut factory = ActionFactory::empty();
        factory.register(ActionKind::Custom(3), |_, _| Ok(Arc::new(Noop)));

        let sink = sink();
        let desc = ActionDesc::new(ActionKind::Custom(3));
        let action = factory.build(&desc, &context(&sink)).unwrap();
        assert_eq!(action.kind(), ActionKind::Custom(3));
    }
}
