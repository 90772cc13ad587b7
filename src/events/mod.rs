pub mod page;
pub mod pointer;

use crate::dom::Listener;
use crate::frame::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Subscribe the scene to the global pointer, scroll and resize events.
/// Dropping the returned listeners unsubscribes them.
pub fn wire_input_handlers(
    window: &web::Window,
    scene: &Rc<RefCell<Scene>>,
) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        pointer::wire_pointermove(window, scene.clone())?,
        page::wire_scroll(window, scene.clone())?,
        page::wire_resize(window, scene.clone())?,
    ])
}
