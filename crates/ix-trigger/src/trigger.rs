//! The `Trigger` trait — the condition side of the capability seam.

use ix_core::TriggerKind;

/// A per-tick boolean condition sensor.
///
/// The orchestrator samples every trigger of every running behavior once per
/// tick, in behavior registration order.  Sampling cost and statefulness are
/// internal to each variant; the engine only consumes the boolean.
///
/// # Thread safety
///
/// Triggers are registered as `Arc<dyn Trigger>` and may be read while
/// parallel action dispatch is in flight, so implementations must be
/// `Send + Sync`.  Variant-internal bookkeeping (e.g. a remembered last
/// contact) goes behind atomics or a lock.
pub trait Trigger: Send + Sync + 'static {
    /// The variant tag this trigger was built from.
    fn kind(&self) -> TriggerKind;

    /// Returns whether the trigger currently meets its conditions.
    ///
    /// Called exactly once per owning behavior per tick.  Must not block.
    fn sample(&self) -> bool;

    /// Release host-side resources.  Called once, at scene teardown, by
    /// `SceneRegistry::clear_all`.  Default: nothing to release.
    fn dispose(&self) {}
}
