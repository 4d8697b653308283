//! DOM event wiring: wheel scrolling, keyboard navigation, nav dots.
//!
//! Navigation is fire-and-forget: handlers only move the virtual scroll
//! target, and the camera driver observes the resulting offset on the
//! next animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use atrium_core::{ScrollState, SectionTracker};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::input;

pub fn install(
    document: &web::Document,
    scroll: &Rc<RefCell<ScrollState>>,
    tracker: &Rc<RefCell<SectionTracker>>,
) {
    install_wheel(document, scroll);
    install_keyboard(document, scroll, tracker);
    install_nav_dots(document, scroll, tracker);
}

fn install_wheel(document: &web::Document, scroll: &Rc<RefCell<ScrollState>>) {
    let scroll = scroll.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let page_px = dom::viewport_height().unwrap_or(800.0);
        let delta = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), page_px);
        scroll.borrow_mut().add_wheel_delta(delta);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    // Non-passive so prevent_default keeps the page itself from scrolling.
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

fn install_keyboard(
    document: &web::Document,
    scroll: &Rc<RefCell<ScrollState>>,
    tracker: &Rc<RefCell<SectionTracker>>,
) {
    let scroll = scroll.clone();
    let tracker = tracker.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(command) = input::nav_command_for_key(&ev.key()) {
            let t = tracker.borrow();
            let current = t.current().map(|pair| pair.section).unwrap_or(0);
            let target = input::resolve_nav(command, current, t.section_count());
            let offset = t.jump_target(target);
            drop(t);
            scroll.borrow_mut().jump_to_offset(offset);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn install_nav_dots(
    document: &web::Document,
    scroll: &Rc<RefCell<ScrollState>>,
    tracker: &Rc<RefCell<SectionTracker>>,
) {
    let section_count = tracker.borrow().section_count();
    for section in 0..section_count {
        let scroll = scroll.clone();
        let tracker = tracker.clone();
        dom::add_click_listener(document, &format!("nav-dot-{section}"), move || {
            let offset = tracker.borrow().jump_target(section);
            scroll.borrow_mut().jump_to_offset(offset);
        });
    }
}
