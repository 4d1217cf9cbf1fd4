//! Flow animation: a cursor over the active architecture's flows, advanced by
//! a cancellable periodic timer task.
//!
//! The animator itself never sleeps. [`StepTimer`] owns a tokio task that
//! sends an [`AnimationTick`] on the event-loop channel every [`STEP_PERIOD`];
//! the event loop hands ticks back to [`FlowAnimator::on_animation_tick`].
//! Every Running session gets a fresh generation number so a tick that was
//! already queued when its timer was cancelled cannot move the cursor.

use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Interval between animation steps
pub const STEP_PERIOD: Duration = Duration::from_millis(2000);

/// Snapshot the diagram renderer reads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnimationState {
    pub enabled: bool,
    pub current_step: usize,
}

impl AnimationState {
    pub const STATIC: AnimationState = AnimationState {
        enabled: false,
        current_step: 0,
    };

    pub fn at_step(current_step: usize) -> Self {
        Self {
            enabled: true,
            current_step,
        }
    }
}

/// Message sent by a running [`StepTimer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTick {
    pub generation: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// StepTimer
// ─────────────────────────────────────────────────────────────────────────────

/// Scoped periodic timer. Dropping it aborts the task.
#[derive(Debug)]
pub struct StepTimer {
    handle: Option<JoinHandle<()>>,
}

impl StepTimer {
    /// Spawn the timer task. The first tick arrives one full period after
    /// start; late ticks are skipped rather than delivered in a burst.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(
        period: Duration,
        generation: u64,
        tx: mpsc::UnboundedSender<AnimationTick>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                if tx.send(AnimationTick { generation }).is_err() {
                    // Event loop is gone
                    break;
                }
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    /// Stop the task. Calling this more than once is a no-op.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for StepTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FlowAnimator
// ─────────────────────────────────────────────────────────────────────────────

/// Idle/Running state machine over `0..flow_count`
#[derive(Debug)]
pub struct FlowAnimator {
    state: AnimationState,
    flow_count: usize,
    generation: u64,
    timer: Option<StepTimer>,
    tx: mpsc::UnboundedSender<AnimationTick>,
}

impl FlowAnimator {
    pub fn new(tx: mpsc::UnboundedSender<AnimationTick>) -> Self {
        Self {
            state: AnimationState::default(),
            flow_count: 0,
            generation: 0,
            timer: None,
            tx,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.state.enabled
    }

    /// Whether a timer task is currently driving the cursor
    #[cfg(test)]
    pub fn has_timer(&self) -> bool {
        self.timer.as_ref().is_some_and(StepTimer::is_active)
    }

    /// Idle -> Running keeps the cursor; Running -> Idle rewinds it to 0.
    /// Returns the new `enabled` value.
    pub fn toggle(&mut self) -> bool {
        if self.state.enabled {
            self.stop();
        } else {
            self.state.enabled = true;
            self.restart_timer();
            tracing::debug!(flows = self.flow_count, "Flow animation started");
        }
        self.state.enabled
    }

    /// Switch to Idle and rewind. No-op when already Idle.
    pub fn stop(&mut self) {
        if !self.state.enabled && self.timer.is_none() {
            return;
        }
        self.cancel_timer();
        self.state = AnimationState::STATIC;
        tracing::debug!("Flow animation stopped");
    }

    /// Point the animator at a different architecture (or none, with
    /// `flow_count == 0`). The cursor always rewinds; a Running animator gets
    /// a fresh timer for the new sequence.
    pub fn retarget(&mut self, flow_count: usize) {
        self.flow_count = flow_count;
        self.state.current_step = 0;
        if self.state.enabled {
            self.restart_timer();
        }
    }

    /// Advance on a tick from the current session. Returns `true` when the
    /// cursor moved.
    pub fn on_animation_tick(&mut self, tick: AnimationTick) -> bool {
        if !self.state.enabled || self.flow_count == 0 || tick.generation != self.generation {
            tracing::trace!(
                tick = tick.generation,
                current = self.generation,
                "Ignoring stale animation tick"
            );
            return false;
        }
        self.state.current_step = (self.state.current_step + 1) % self.flow_count;
        true
    }

    fn restart_timer(&mut self) {
        self.cancel_timer();
        if self.flow_count == 0 {
            return;
        }
        self.timer = Some(StepTimer::start(
            STEP_PERIOD,
            self.generation,
            self.tx.clone(),
        ));
    }

    fn cancel_timer(&mut self) {
        // Bump first so ticks already in the channel become stale
        self.generation = self.generation.wrapping_add(1);
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
    }
}
