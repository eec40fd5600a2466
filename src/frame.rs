use crate::render;
use ice_core::{Camera, OrbitControls, Scene, SceneClock};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub clock: Rc<RefCell<SceneClock>>,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub camera: Camera,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub total_resets: u64,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let raw_dt = (now - self.last_instant).as_secs_f64();
        self.last_instant = now;

        // The clock's max step bounds both scene time and camera motion
        let (dt_sec, scene_now, paused) = {
            let mut clock = self.clock.borrow_mut();
            let dt_sec = clock.clamp_step(raw_dt);
            clock.advance(dt_sec);
            (dt_sec, clock.now(), clock.is_paused())
        };
        if !paused {
            let report = self.scene.borrow_mut().tick(scene_now);
            if report.resets > 0 {
                self.total_resets += report.resets as u64;
                log::debug!(
                    "[frame] t={:.2} falling={} resets={} total={}",
                    scene_now,
                    report.falling,
                    report.resets,
                    self.total_resets
                );
            }
        }

        // Camera keeps orbiting while the drops are paused
        {
            let mut orbit = self.orbit.borrow_mut();
            orbit.update(dt_sec as f32);
            self.camera.eye = orbit.eye();
            self.camera.target = orbit.target;
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            self.camera.aspect = g.aspect();
            let items = self.scene.borrow().render_list(self.camera.eye);
            match g.render(&items, &self.camera, scene_now as f32) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[frame] surface lost; reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
