//! The `Action` trait and the shared invocation protocol.

use std::sync::Arc;
use std::time::Duration;

use ix_core::{ActionKind, DelayScheduler};

/// A scene effect a behavior can invoke.
///
/// Variants are constructed once from their descriptor (parameters resolved
/// and validated fail-fast) and then invoked any number of times.  `execute`
/// takes `&self` because an action may run concurrently with itself: a
/// delayed invocation can still be pending when the behavior fires again.
pub trait Action: Send + Sync + 'static {
    /// The variant tag this action was built from.
    fn kind(&self) -> ActionKind;

    /// Authored activation delay.  Zero means "run synchronously inside the
    /// firing tick".
    fn delay(&self) -> Duration {
        Duration::ZERO
    }

    /// Perform the effect, now.  Prefer [`ActionExt::invoke`], which honors
    /// the authored delay.
    fn execute(&self);

    /// Release host-side resources.  Called once, at scene teardown, by
    /// `SceneRegistry::clear_all`.  Default: nothing to release.
    fn dispose(&self) {}
}

/// Invocation protocol shared by every call site (behavior fire, interrupt).
///
/// Centralizes the one branch the protocol has: zero delay executes
/// synchronously on the caller's context; a positive delay hands a clone of
/// the action's handle to the scheduler and returns immediately.  Each
/// invocation schedules independently — two fires within one delay window
/// yield two executions.
pub trait ActionExt {
    fn invoke(&self, timers: &Arc<dyn DelayScheduler>);
}

impl ActionExt for Arc<dyn Action> {
    fn invoke(&self, timers: &Arc<dyn DelayScheduler>) {
        let delay = self.delay();
        if delay.is_zero() {
            self.execute();
        } else {
            let action = Arc::clone(self);
            timers.schedule_after(delay, Box::new(move || action.execute()));
        }
    }
}
