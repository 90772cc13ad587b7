//! Explicit start/stop frame loop.
//!
//! The host owns the clock (requestAnimationFrame in the browser, a plain
//! `for` loop in tests) and calls `run_frame` once per refresh.

use crate::engine::StarfieldEngine;
use crate::error::EngineError;
use std::fmt;
use std::time::Duration;

/// Draws the engine's current state. Implemented by the GPU renderer.
pub trait FrameRenderer {
    type Error: fmt::Debug;

    fn render(&mut self, engine: &StarfieldEngine) -> Result<(), Self::Error>;

    /// Whether `error` only costs the current frame. Transient errors drop
    /// the frame and keep the loop running; everything else stops it.
    fn is_transient(_error: &Self::Error) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError<E: fmt::Debug> {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("render error: {0:?}")]
    Render(E),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Stopped,
}

/// Outcome of one scheduler step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Rendered,
    /// The engine advanced but the renderer hit a transient fault.
    Dropped,
    /// The scheduler was not running; nothing happened.
    Skipped,
}

#[derive(Debug)]
pub struct FrameScheduler {
    state: RunState,
    frames: u64,
    dropped: u64,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            state: RunState::Idle,
            frames: 0,
            dropped: 0,
        }
    }

    /// A stopped scheduler stays stopped.
    pub fn start(&mut self) {
        if self.state == RunState::Idle {
            self.state = RunState::Running;
        }
    }

    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn dropped_frames(&self) -> u64 {
        self.dropped
    }

    /// Tick the engine, then render it. Engine errors and non-transient
    /// render errors stop the loop and are handed back to the caller.
    pub fn run_frame<R: FrameRenderer>(
        &mut self,
        engine: &mut StarfieldEngine,
        renderer: &mut R,
        dt: Duration,
    ) -> Result<FrameOutcome, FrameError<R::Error>> {
        if !self.is_running() {
            return Ok(FrameOutcome::Skipped);
        }
        if let Err(e) = engine.tick(dt) {
            self.stop();
            return Err(FrameError::Engine(e));
        }
        if let Err(e) = renderer.render(engine) {
            if R::is_transient(&e) {
                self.dropped += 1;
                log::debug!(
                    "[scheduler] dropped frame {}: {:?}",
                    engine.frame_count(),
                    e
                );
                return Ok(FrameOutcome::Dropped);
            }
            self.stop();
            return Err(FrameError::Render(e));
        }
        self.frames += 1;
        Ok(FrameOutcome::Rendered)
    }
}
