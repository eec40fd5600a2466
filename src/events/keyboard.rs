use crate::input::{action_for_key, KeyAction};
use crate::overlay;
use ice_core::{OrbitControls, Scene, SceneClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct KeyWiring {
    pub scene: Rc<RefCell<Scene>>,
    pub clock: Rc<RefCell<SceneClock>>,
    pub orbit: Rc<RefCell<OrbitControls>>,
}

fn refresh_hint(k: &KeyWiring) {
    if let Some(document) = crate::dom::window_document() {
        let paused = k.clock.borrow().is_paused();
        let auto_rotate = k.orbit.borrow().config.auto_rotate;
        overlay::update_hint(&document, paused, auto_rotate);
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, k: &KeyWiring) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::TogglePause => {
            let paused = k.clock.borrow_mut().toggle_pause();
            log::info!("[keys] paused={}", paused);
            ev.prevent_default();
        }
        KeyAction::RestartDrops => {
            let now = k.clock.borrow().now();
            k.scene.borrow_mut().restart(now);
            log::info!("[keys] restarted drops at t={:.2}", now);
        }
        KeyAction::ToggleAutoRotate => {
            let mut orbit = k.orbit.borrow_mut();
            orbit.config.auto_rotate = !orbit.config.auto_rotate;
            log::info!("[keys] auto_rotate={}", orbit.config.auto_rotate);
        }
        KeyAction::ToggleOverlay => {
            if let Some(document) = crate::dom::window_document() {
                overlay::toggle(&document);
            }
            ev.prevent_default();
        }
    }
    refresh_hint(k);
}

pub fn wire_global_keydown(k: KeyWiring) {
    refresh_hint(&k);
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &k);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
