use crate::dom::Listener;
use crate::frame::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Every move retargets the camera; the engine's damping does the smoothing.
pub fn wire_pointermove(window: &web::Window, scene: Rc<RefCell<Scene>>) -> anyhow::Result<Listener> {
    Listener::add(window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        scene
            .borrow_mut()
            .engine
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    })
}
