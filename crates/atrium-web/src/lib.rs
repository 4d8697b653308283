#![cfg(target_arch = "wasm32")]
pub mod dom;
pub mod events;
pub mod frame;
pub mod input;
pub mod overlay;
pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use atrium_core::{KeyframeTable, ScrollCameraDriver, ScrollState, SectionTracker, SCROLL_PAGES};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("atrium-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);

    let viewport_px = dom::viewport_height().unwrap_or(800.0);
    let scroll = Rc::new(RefCell::new(ScrollState::new(viewport_px * SCROLL_PAGES)));
    let tracker = Rc::new(RefCell::new(SectionTracker::house()));
    let driver = ScrollCameraDriver::new(KeyframeTable::house_path());

    // Keep the canvas backing store and the virtual document in sync with
    // the window size.
    {
        let canvas_resize = canvas.clone();
        let scroll_resize = scroll.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
            if let Some(vh) = dom::viewport_height() {
                scroll_resize
                    .borrow_mut()
                    .set_scroll_height(vh * SCROLL_PAGES);
            }
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    events::install(&document, &scroll, &tracker);

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("running without WebGPU; overlay stays live, scene does not render");
    }

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scroll,
        tracker,
        driver,
        document,
        canvas,
        gpu,
        last_instant: now,
        started: now,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
