#![cfg(target_arch = "wasm32")]
use starfield_core::{EngineConfig, StarfieldEngine, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;

use frame::{FrameLoop, Scene};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web loaded");
    Ok(())
}

/// Live starfield bound to one canvas. Call `dispose()` to tear it down.
#[wasm_bindgen]
pub struct StarfieldHandle {
    scene: Rc<RefCell<Scene>>,
    frame_loop: Option<FrameLoop>,
    listeners: Vec<dom::Listener>,
}

#[wasm_bindgen]
impl StarfieldHandle {
    /// Stop the frame loop, unsubscribe from input and release GPU resources.
    pub fn dispose(&mut self) {
        let Some(frame_loop) = self.frame_loop.take() else {
            log::warn!("[starfield] dispose called twice");
            return;
        };
        frame_loop.stop();
        self.listeners.clear();
        let mut scene = self.scene.borrow_mut();
        scene.scheduler.stop();
        scene.engine.dispose();
        scene.gpu = None;
    }

    #[wasm_bindgen(js_name = "frameCount")]
    pub fn frame_count(&self) -> f64 {
        self.scene.borrow().engine.frame_count() as f64
    }
}

/// Start the starfield on `<canvas id=canvas_id>` with the default tuning.
#[wasm_bindgen]
pub async fn init(canvas_id: Option<String>) -> Result<StarfieldHandle, JsValue> {
    let id = canvas_id.unwrap_or_else(|| constants::DEFAULT_CANVAS_ID.to_string());
    boot(&id, EngineConfig::default()).await.map_err(report)
}

/// Like `init`, with a (partial) JSON object overriding `EngineConfig`.
#[wasm_bindgen(js_name = "initWithConfig")]
pub async fn init_with_config(canvas_id: String, config_json: String) -> Result<StarfieldHandle, JsValue> {
    let config = EngineConfig::from_json(&config_json)
        .map_err(|e| anyhow::anyhow!("invalid config: {}", e))
        .map_err(report)?;
    boot(&canvas_id, config).await.map_err(report)
}

fn report(e: anyhow::Error) -> JsValue {
    log::error!("init error: {:?}", e);
    JsValue::from_str(&format!("{:#}", e))
}

/// Builds the whole scene or nothing: listeners and the frame loop are only
/// attached once the engine and the GPU are both up.
async fn boot(canvas_id: &str, config: EngineConfig) -> anyhow::Result<StarfieldHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", canvas_id, e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let (w, h) = dom::viewport_size(&window);
    let engine = StarfieldEngine::new(config, Viewport::new(w, h))?;
    let gpu = render::GpuState::new(&canvas, &engine).await?;

    let scene = Rc::new(RefCell::new(Scene::new(engine, gpu, canvas)));
    let listeners = events::wire_input_handlers(&window, &scene)?;
    let frame_loop = FrameLoop::start(scene.clone())?;
    log::info!("[starfield] running on #{}", canvas_id);

    Ok(StarfieldHandle {
        scene,
        frame_loop: Some(frame_loop),
        listeners,
    })
}
