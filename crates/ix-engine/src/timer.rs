//! Tick-quantized deferred execution.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use ix_core::{DeferredJob, DelayScheduler, Tick, ticks_for};

/// A [`DelayScheduler`] backed by a tick-keyed job queue.
///
/// Delays are quantized up to whole ticks (a positive sub-timestep delay
/// still costs one tick), so a job never runs before its delay has fully
/// elapsed.  The engine calls [`TickTimerWheel::advance`] once per tick,
/// before behavior polling; jobs due at or before the new tick run then,
/// in scheduling order within each tick.
pub struct TickTimerWheel {
    tick_duration: Duration,
    now:           AtomicU64,
    queue:         Mutex<BTreeMap<Tick, Vec<DeferredJob>>>,
}

impl TickTimerWheel {
    pub fn new(tick_duration: Duration) -> Self {
        Self {
            tick_duration,
            now: AtomicU64::new(0),
            queue: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn current_tick(&self) -> Tick {
        Tick(self.now.load(Ordering::Acquire))
    }

    /// Jobs scheduled but not yet run.
    pub fn pending(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .map(Vec::len)
            .sum()
    }

    /// Move the wheel to `to` and run everything that came due.
    ///
    /// Jobs run outside the queue lock, so a running job may schedule
    /// further work; anything it makes due at or before `to` runs in the
    /// same call.
    pub fn advance(&self, to: Tick) {
        self.now.store(to.0, Ordering::Release);
        loop {
            let due: Vec<DeferredJob> = {
                let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
                let later = queue.split_off(&Tick(to.0 + 1));
                let due = std::mem::replace(&mut *queue, later);
                due.into_values().flatten().collect()
            };
            if due.is_empty() {
                return;
            }
            for job in due {
                job();
            }
        }
    }
}

impl DelayScheduler for TickTimerWheel {
    fn schedule_after(&self, delay: Duration, job: DeferredJob) {
        let ticks = ticks_for(delay, self.tick_duration).max(1);
        let due = self.current_tick() + ticks;
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(due)
            .or_default()
            .push(job);
    }
}
