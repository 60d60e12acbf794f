//! Tick-driven timer used by the stopwatch and the digital clock.
//!
//! `TimerState` is a plain value with a pure transition function. `TimerEngine`
//! owns one of those plus the background task that delivers ticks, so the
//! schedule lives exactly as long as the engine (or until `stop()`).

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Identifies which engine a tick belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u32);

/// Message sent by a running tick task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub timer: TimerId,
}

/// Inputs accepted by `TimerState::apply`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Start,
    Stop,
    Reset,
    Tick,
}

/// Timer state (rendering-agnostic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerState {
    /// Ticks counted while running
    pub elapsed_ticks: u64,

    /// Whether ticks are currently being counted
    pub running: bool,
}

impl TimerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the state that follows `event`
    pub fn apply(self, event: TimerEvent) -> Self {
        match event {
            TimerEvent::Start => Self {
                running: true,
                ..self
            },
            TimerEvent::Stop => Self {
                running: false,
                ..self
            },
            TimerEvent::Reset => Self {
                elapsed_ticks: 0,
                ..self
            },
            // A tick that raced with stop() is dropped here
            TimerEvent::Tick if self.running => Self {
                elapsed_ticks: self.elapsed_ticks.saturating_add(1),
                ..self
            },
            TimerEvent::Tick => self,
        }
    }

    /// Elapsed time as `m:ss`
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_ticks)
    }
}

/// Format a tick count as minutes and zero-padded seconds (`75` -> `1:15`)
pub fn format_elapsed(ticks: u64) -> String {
    format!("{}:{:02}", ticks / 60, ticks % 60)
}

/// Owned handle to a repeating tick task. Dropping it cancels the task.
#[derive(Debug)]
pub struct TickHandle {
    task: JoinHandle<()>,
}

impl TickHandle {
    /// Spawn a task that sends one `TimerTick` per `period`, first one after a full period.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(timer: TimerId, period: Duration, tick_tx: mpsc::UnboundedSender<TimerTick>) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                interval.tick().await;
                if tick_tx.send(TimerTick { timer }).is_err() {
                    tracing::debug!(?timer, "Tick receiver gone, stopping ticker");
                    break;
                }
            }
        });
        Self { task }
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// A timer plus its (optional) live schedule
pub struct TimerEngine {
    id: TimerId,
    period: Duration,
    state: TimerState,
    ticker: Option<TickHandle>,
    tick_tx: mpsc::UnboundedSender<TimerTick>,
}

impl TimerEngine {
    pub fn new(id: TimerId, period: Duration, tick_tx: mpsc::UnboundedSender<TimerTick>) -> Self {
        Self {
            id,
            period,
            state: TimerState::new(),
            ticker: None,
            tick_tx,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// True while a tick task is registered
    pub fn is_scheduled(&self) -> bool {
        self.ticker.is_some()
    }

    /// Begin counting. No-op if already running.
    pub fn start(&mut self) {
        if self.state.running {
            return;
        }
        self.state = self.state.apply(TimerEvent::Start);
        self.ticker = Some(TickHandle::spawn(self.id, self.period, self.tick_tx.clone()));
        tracing::debug!(timer = ?self.id, period_ms = self.period.as_millis() as u64, "Timer started");
    }

    /// Stop counting and cancel the schedule. No-op if already stopped.
    pub fn stop(&mut self) {
        if !self.state.running {
            return;
        }
        self.state = self.state.apply(TimerEvent::Stop);
        self.ticker = None;
        tracing::debug!(timer = ?self.id, elapsed = self.state.elapsed_ticks, "Timer stopped");
    }

    /// Zero the count. A running timer keeps running.
    pub fn reset(&mut self) {
        self.state = self.state.apply(TimerEvent::Reset);
    }

    /// Deliver one scheduled tick. Only the tick dispatcher calls this.
    pub(crate) fn tick(&mut self) {
        self.state = self.state.apply(TimerEvent::Tick);
    }
}
