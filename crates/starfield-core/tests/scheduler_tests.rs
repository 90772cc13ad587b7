use starfield_core::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

/// Records what it was asked to draw; can be told to fail on a given frame.
#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<u64>,
    fail_on: Option<u64>,
}

impl FrameRenderer for RecordingRenderer {
    type Error = String;

    fn render(&mut self, engine: &StarfieldEngine) -> Result<(), String> {
        if Some(engine.frame_count()) == self.fail_on {
            return Err(format!("lost surface at frame {}", engine.frame_count()));
        }
        self.frames.push(engine.frame_count());
        Ok(())
    }
}

fn make_engine() -> StarfieldEngine {
    let config = EngineConfig {
        seed: Some(11),
        ..EngineConfig::default()
    };
    StarfieldEngine::new(config, Viewport::new(640, 480)).unwrap()
}

#[test]
fn idle_scheduler_does_nothing() {
    let mut engine = make_engine();
    let mut renderer = RecordingRenderer::default();
    let mut sched = FrameScheduler::new();
    assert_eq!(sched.state(), RunState::Idle);
    let out = sched.run_frame(&mut engine, &mut renderer, FRAME).unwrap();
    assert_eq!(out, FrameOutcome::Skipped);
    assert_eq!(engine.frame_count(), 0);
}

#[test]
fn running_scheduler_ticks_before_rendering() {
    let mut engine = make_engine();
    let mut renderer = RecordingRenderer::default();
    let mut sched = FrameScheduler::new();
    sched.start();
    for _ in 0..5 {
        assert_eq!(
            sched.run_frame(&mut engine, &mut renderer, FRAME).unwrap(),
            FrameOutcome::Rendered
        );
    }
    assert_eq!(renderer.frames, vec![1, 2, 3, 4, 5]);
    assert_eq!(sched.frames(), 5);
}

#[test]
fn render_error_stops_the_loop() {
    let mut engine = make_engine();
    let mut renderer = RecordingRenderer {
        fail_on: Some(3),
        ..Default::default()
    };
    let mut sched = FrameScheduler::new();
    sched.start();
    sched.run_frame(&mut engine, &mut renderer, FRAME).unwrap();
    sched.run_frame(&mut engine, &mut renderer, FRAME).unwrap();
    let err = sched.run_frame(&mut engine, &mut renderer, FRAME).unwrap_err();
    assert!(matches!(err, FrameError::Render(ref m) if m.contains("frame 3")));
    assert_eq!(sched.state(), RunState::Stopped);

    // Later ticks are skipped and the stopped loop cannot be restarted.
    sched.start();
    assert_eq!(
        sched.run_frame(&mut engine, &mut renderer, FRAME).unwrap(),
        FrameOutcome::Skipped
    );
    assert_eq!(engine.frame_count(), 3);
}

#[test]
fn disposed_engine_stops_the_loop() {
    let mut engine = make_engine();
    let mut renderer = RecordingRenderer::default();
    let mut sched = FrameScheduler::new();
    sched.start();
    engine.dispose();
    let err = sched.run_frame(&mut engine, &mut renderer, FRAME).unwrap_err();
    assert!(matches!(err, FrameError::Engine(EngineError::Disposed)));
    assert!(!sched.is_running());
    assert!(renderer.frames.is_empty());
}

#[test]
fn stop_is_explicit() {
    let mut engine = make_engine();
    let mut renderer = RecordingRenderer::default();
    let mut sched = FrameScheduler::new();
    sched.start();
    sched.run_frame(&mut engine, &mut renderer, FRAME).unwrap();
    sched.stop();
    assert_eq!(
        sched.run_frame(&mut engine, &mut renderer, FRAME).unwrap(),
        FrameOutcome::Skipped
    );
    assert_eq!(renderer.frames, vec![1]);
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SurfaceFault {
    Timeout,
    OutOfMemory,
}

/// Replays a scripted sequence of surface faults, one per frame.
struct FlakySurface {
    script: Vec<Option<SurfaceFault>>,
    presented: Vec<u64>,
}

impl FrameRenderer for FlakySurface {
    type Error = SurfaceFault;

    fn render(&mut self, engine: &StarfieldEngine) -> Result<(), SurfaceFault> {
        let i = engine.frame_count() as usize - 1;
        match self.script.get(i).copied().flatten() {
            Some(fault) => Err(fault),
            None => {
                self.presented.push(engine.frame_count());
                Ok(())
            }
        }
    }

    fn is_transient(error: &SurfaceFault) -> bool {
        *error == SurfaceFault::Timeout
    }
}

#[test]
fn transient_render_error_drops_the_frame_and_keeps_running() {
    let mut engine = make_engine();
    let mut renderer = FlakySurface {
        script: vec![None, Some(SurfaceFault::Timeout), Some(SurfaceFault::Timeout), None],
        presented: vec![],
    };
    let mut sched = FrameScheduler::new();
    sched.start();
    let outcomes: Vec<FrameOutcome> = (0..4)
        .map(|_| sched.run_frame(&mut engine, &mut renderer, FRAME).unwrap())
        .collect();
    assert_eq!(
        outcomes,
        vec![
            FrameOutcome::Rendered,
            FrameOutcome::Dropped,
            FrameOutcome::Dropped,
            FrameOutcome::Rendered
        ]
    );
    assert!(sched.is_running());
    assert_eq!(renderer.presented, vec![1, 4]);
    assert_eq!(sched.frames(), 2);
    assert_eq!(sched.dropped_frames(), 2);
    // The engine keeps advancing through dropped frames.
    assert_eq!(engine.frame_count(), 4);
}

#[test]
fn fatal_render_error_after_drops_still_stops_the_loop() {
    let mut engine = make_engine();
    let mut renderer = FlakySurface {
        script: vec![Some(SurfaceFault::Timeout), Some(SurfaceFault::OutOfMemory)],
        presented: vec![],
    };
    let mut sched = FrameScheduler::new();
    sched.start();
    assert_eq!(
        sched.run_frame(&mut engine, &mut renderer, FRAME).unwrap(),
        FrameOutcome::Dropped
    );
    let err = sched.run_frame(&mut engine, &mut renderer, FRAME).unwrap_err();
    assert!(matches!(err, FrameError::Render(SurfaceFault::OutOfMemory)));
    assert_eq!(err.to_string(), "render error: OutOfMemory");
    assert_eq!(sched.state(), RunState::Stopped);
}
