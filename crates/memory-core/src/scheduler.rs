//! Cooperative timer facility.
//!
//! The engine needs two timers: the repeating one-second game clock and the
//! one-shot delay that unflips a mismatched pair. Neither runs on its own
//! thread. The engine schedules against an injected [`Scheduler`], and the
//! host hands the issued handle back through
//! [`GameEngine::timer_fired`](crate::game::GameEngine::timer_fired) when a
//! timer comes due, on the same control flow as `select_card` and `reset`.
//! That keeps board mutation serialized and lets tests fast-forward time
//! without sleeping.

use std::time::Duration;

/// Opaque token identifying one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Timer facility the engine schedules against.
///
/// Handles are only meaningful to the scheduler that issued them; the engine
/// ignores firings for handles it no longer holds, so delivering a stale
/// handle is always safe.
pub trait Scheduler {
    /// Schedule a timer that fires every `interval` until cancelled.
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle;

    /// Schedule a timer that fires once after `delay`.
    fn schedule_once(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel an outstanding timer. Unknown handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone)]
struct ScheduledTimer {
    handle: TimerHandle,
    due: Duration,
    repeat: Option<Duration>,
}

/// Manually advanced scheduler over simulated time.
///
/// [`advance`](ManualScheduler::advance) collects every firing inside the
/// window in chronological order and re-arms repeating timers. Suitable both
/// for tests and for hosts that pump a frame/tick loop.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    timers: Vec<ScheduledTimer>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of outstanding timers (repeating timers stay outstanding).
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Advance simulated time by `elapsed`, returning every handle that came
    /// due inside the window, in firing order. A repeating timer appears once
    /// per elapsed interval.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerHandle> {
        let deadline = self.now + elapsed;
        let mut fired = Vec::new();

        // Pull the earliest due timer until none fall inside the window.
        loop {
            let Some(pos) = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, timer)| timer.due <= deadline)
                .min_by_key(|(_, timer)| timer.due)
                .map(|(pos, _)| pos)
            else {
                break;
            };

            fired.push(self.timers[pos].handle);
            match self.timers[pos].repeat {
                Some(interval) => self.timers[pos].due += interval,
                None => {
                    self.timers.swap_remove(pos);
                }
            }
        }

        self.now = deadline;
        fired
    }

    fn insert(&mut self, due: Duration, repeat: Option<Duration>) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.push(ScheduledTimer { handle, due, repeat });
        handle
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        debug_assert!(!interval.is_zero());
        self.insert(self.now + interval, Some(interval))
    }

    fn schedule_once(&mut self, delay: Duration) -> TimerHandle {
        self.insert(self.now + delay, None)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|timer| timer.handle != handle);
    }
}
