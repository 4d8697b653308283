use std::cell::RefCell;
use std::rc::Rc;

use atrium_core::{scene, ScrollCameraDriver, ScrollState, SectionTracker};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::overlay;
use crate::render;

/// Everything the per-frame callback needs. Built once in `init`, then
/// owned by the requestAnimationFrame closure for the page's lifetime.
pub struct FrameContext<'a> {
    pub scroll: Rc<RefCell<ScrollState>>,
    pub tracker: Rc<RefCell<SectionTracker>>,
    pub driver: ScrollCameraDriver,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub started: Instant,
}

impl FrameContext<'_> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let now_sec = (now - self.started).as_secs_f32();

        // Settle the virtual scroll, then read this frame's offset.
        self.scroll.borrow_mut().step(dt_sec);
        let offset = self.scroll.borrow().offset();

        // Overlay: section state is edge-triggered, the bar is not.
        if let Some(pair) = self.tracker.borrow_mut().observe(offset) {
            overlay::set_section(&self.document, pair);
        }
        overlay::set_progress(&self.document, offset);

        let pose = self.driver.pose_at(offset, now_sec);
        let active_section = self.tracker.borrow().current().map(|pair| pair.section);
        let instances = scene::build(now_sec, active_section);

        if let Some(g) = &mut self.gpu {
            g.apply_pose(&pose);
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&instances) {
                log::error!("render error: {:?}", e);
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

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
