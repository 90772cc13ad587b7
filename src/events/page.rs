use crate::dom::{self, Listener};
use crate::frame::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_scroll(window: &web::Window, scene: Rc<RefCell<Scene>>) -> anyhow::Result<Listener> {
    let window_scroll = window.clone();
    Listener::add(window, "scroll", move |_ev: web::Event| {
        let Ok(scroll_y) = window_scroll.scroll_y() else {
            return;
        };
        if let Some(dir) = scene.borrow_mut().engine.on_scroll(scroll_y as f32) {
            log::trace!("[scroll] y={:.0} dir={:?}", scroll_y, dir);
        }
    })
}

/// Camera aspect and swapchain size are both updated inside the event.
pub fn wire_resize(window: &web::Window, scene: Rc<RefCell<Scene>>) -> anyhow::Result<Listener> {
    let window_resize = window.clone();
    Listener::add(window, "resize", move |_ev: web::Event| {
        let mut scene = scene.borrow_mut();
        let (w, h) = dom::viewport_size(&window_resize);
        scene.engine.on_resize(w, h);
        dom::sync_canvas_backing_size(&scene.canvas);
        let (px_w, px_h) = (scene.canvas.width(), scene.canvas.height());
        if let Some(gpu) = scene.gpu.as_mut() {
            gpu.resize(px_w, px_h);
        }
    })
}
