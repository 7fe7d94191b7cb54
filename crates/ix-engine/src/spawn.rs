//! Rayon-backed fire-and-forget dispatch (`parallel` feature).

use ix_core::{DeferredJob, TaskSpawner};

/// A [`TaskSpawner`] that hands each job to Rayon's global pool.
///
/// Jobs are untracked and unjoined; a panicking job aborts its worker, not
/// the orchestrator.  Effect ordering between concurrently dispatched
/// actions is undefined.
pub struct RayonSpawner;

impl TaskSpawner for RayonSpawner {
    fn spawn(&self, job: DeferredJob) {
        rayon::spawn(job);
    }
}
