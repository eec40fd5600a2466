#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, CONFIG_SCRIPT_ID, MAX_FRAME_DT_SEC};
use glam::Vec3;
use ice_core::{Camera, OrbitControls, Scene, SceneClock, SceneConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Read the optional inline JSON config; fall back to defaults when it is
/// missing or invalid.
fn load_config(document: &web::Document) -> SceneConfig {
    let Some(json) = dom::element_text(document, CONFIG_SCRIPT_ID) else {
        return SceneConfig::default();
    };
    match SceneConfig::from_json(&json) {
        Ok(config) => {
            log::info!("[config] loaded #{}", CONFIG_SCRIPT_ID);
            config
        }
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            SceneConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ice-cube-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] already started; ignoring");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config = load_config(&document);
    overlay::set_heading(&document, &config.title, &config.subtitle);

    let clock = Rc::new(RefCell::new(SceneClock::with_max_step(MAX_FRAME_DT_SEC)));
    let scene = Scene::new(&config, clock.borrow().now())
        .map_err(|e| anyhow::anyhow!("scene config rejected: {}", e))?;
    log::info!(
        "[scene] drops={} style={:?}",
        scene.drops().len(),
        scene.cube_style()
    );
    let scene = Rc::new(RefCell::new(scene));

    let camera = Camera {
        eye: Vec3::from(config.camera.position),
        fovy_radians: config.camera.fov_degrees.to_radians(),
        ..Camera::default()
    };
    let orbit = Rc::new(RefCell::new(OrbitControls::new(
        camera.eye,
        camera.target,
        config.orbit,
    )));

    // Pointer drag rotates, wheel zooms
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        orbit: orbit.clone(),
        pointer: Rc::new(RefCell::new(input::PointerState::default())),
    });
    events::wire_global_keydown(events::KeyWiring {
        scene: scene.clone(),
        clock: clock.clone(),
        orbit: orbit.clone(),
    });

    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("[init] running without a renderer");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        clock,
        orbit,
        camera,
        canvas,
        gpu,
        last_instant: Instant::now(),
        total_resets: 0,
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);
    Ok(())
}
