//! Engine time model.
//!
//! # Design
//!
//! Trigger sampling must happen at a stable cadence independent of rendering,
//! so time is a monotonically increasing `Tick` counter driven by a
//! fixed-timestep scheduler.  The mapping to wall time is held in
//! `TickClock`:
//!
//!   wall_time = tick * tick_duration
//!
//! Using an integer tick as the canonical unit keeps all deferral arithmetic
//! exact; `Duration`-based delays are converted with `ticks_for`, which
//! rounds up so a deferred effect is never early.

use std::fmt;
use std::time::Duration;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute engine tick counter.
///
/// Stored as `u64`: at the default 20 ms timestep a u64 lasts ~11 billion
/// years, so overflow is not a practical concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickClock ─────────────────────────────────────────────────────────────────

/// Converts between tick counts and wall-clock durations.
///
/// `TickClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickClock {
    /// How much wall time one tick represents.  Default: 20 ms (50 Hz).
    pub tick_duration: Duration,
    /// The current tick — advanced by `TickClock::advance()` each frame.
    pub current_tick: Tick,
}

impl TickClock {
    /// Create a clock at tick zero with the given timestep.
    pub fn new(tick_duration: Duration) -> Self {
        Self {
            tick_duration,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed wall time since tick 0.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.tick_duration * self.current_tick.0 as u32
    }

    /// How many ticks span `duration`? (rounds up — a deferred effect is
    /// never early, and a positive sub-timestep delay still costs one tick)
    #[inline]
    pub fn ticks_for(&self, duration: Duration) -> u64 {
        ticks_for(duration, self.tick_duration)
    }
}

impl fmt::Display for TickClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{:?})", self.current_tick, self.elapsed())
    }
}

/// Free-function form of [`TickClock::ticks_for`] for callers that hold a
/// timestep but no clock (e.g. the timer wheel).
#[inline]
pub fn ticks_for(duration: Duration, tick_duration: Duration) -> u64 {
    let nanos = duration.as_nanos();
    let step = tick_duration.as_nanos().max(1);
    nanos.div_ceil(step) as u64
}

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Top-level engine configuration.
///
/// Typically loaded from a TOML/JSON file by the host application and passed
/// to the engine builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Wall time per tick.  The scheduler calls `Engine::tick` at this
    /// cadence; the engine itself never sleeps.
    pub tick_duration: Duration,

    /// Total ticks for bounded runs (`Engine::run`).  Hosts driving the
    /// engine frame-by-frame via `tick()` can ignore this.
    pub total_ticks: u64,
}

impl EngineConfig {
    /// The tick at which a bounded run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `TickClock` pre-configured for this run.
    pub fn make_clock(&self) -> TickClock {
        TickClock::new(self.tick_duration)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_duration: Duration::from_millis(20),
            total_ticks: 0,
        }
    }
}
