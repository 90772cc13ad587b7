use crate::constants::MAX_FRAME_DT_SEC;
use crate::render::GpuState;
use instant::Instant;
use starfield_core::{FrameScheduler, StarfieldEngine};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback and the input listeners share.
pub struct Scene {
    pub engine: StarfieldEngine,
    /// `None` once disposed; dropping it releases the GPU objects.
    pub gpu: Option<GpuState>,
    pub scheduler: FrameScheduler,
    pub canvas: web::HtmlCanvasElement,
    last_instant: Instant,
}

impl Scene {
    pub fn new(engine: StarfieldEngine, gpu: GpuState, canvas: web::HtmlCanvasElement) -> Self {
        Self {
            engine,
            gpu: Some(gpu),
            scheduler: FrameScheduler::new(),
            canvas,
            last_instant: Instant::now(),
        }
    }

    /// One requestAnimationFrame tick. Returns whether to schedule another.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_secs_f32(MAX_FRAME_DT_SEC));
        self.last_instant = now;

        let Scene {
            engine,
            gpu,
            scheduler,
            ..
        } = self;
        let Some(gpu) = gpu.as_mut() else {
            scheduler.stop();
            return false;
        };
        match scheduler.run_frame(engine, gpu, dt) {
            Ok(_) => scheduler.is_running(),
            Err(e) => {
                log::error!("frame loop stopped: {:#}", anyhow::Error::from(e));
                false
            }
        }
    }
}

/// requestAnimationFrame loop that can be cancelled.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(scene: Rc<RefCell<Scene>>) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        scene.borrow_mut().scheduler.start();

        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        let window_tick = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_clone.set(None);
            let again = scene.borrow_mut().frame();
            if !again {
                return;
            }
            if let Some(cb) = tick_clone.borrow().as_ref() {
                match window_tick.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => pending_clone.set(Some(id)),
                    Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
                }
            }
        }) as Box<dyn FnMut()>));

        let id = {
            let cb = tick.borrow();
            let cb = cb
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("frame callback missing"))?;
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?
        };
        pending.set(Some(id));
        Ok(Self { tick, pending })
    }

    /// Cancel the queued frame and drop the callback, breaking the Rc cycle.
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}
