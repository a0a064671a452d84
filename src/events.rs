use crate::audio::{self, WebToneBackend};
use crate::core::{Dashboard, PressFilter, PressKind, PressOutcome};
use crate::input;
use crate::mic::{self, Microphone};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub dashboard: Rc<RefCell<Dashboard<WebToneBackend>>>,
    pub mic: Rc<RefCell<Microphone>>,
    pub audio_ctx: web::AudioContext,
    pub press_filter: Rc<RefCell<PressFilter>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mousedown(&w);
    wire_touchstart(&w);
}

fn wire_mousedown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if !w.press_filter.borrow_mut().accept(PressKind::Mouse, ev.time_stamp()) {
            return;
        }
        let pos = input::mouse_canvas_px(&ev, &w.canvas);
        handle_press(&w, pos);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchstart(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // no emulated mouse events for this touch
        ev.prevent_default();
        audio::resume(&w.audio_ctx);
        w.press_filter
            .borrow_mut()
            .accept(PressKind::Touch, ev.time_stamp());
        if let Some(pos) = input::touch_canvas_px(&ev, &w.canvas) {
            handle_press(&w, pos);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Single entry point for mouse and touch presses.
fn handle_press(w: &InputWiring, pos: DVec2) {
    let outcome = w.dashboard.borrow_mut().press(pos);
    match outcome {
        PressOutcome::StartRequested => {
            audio::resume(&w.audio_ctx);
            begin_measurement(w);
        }
        PressOutcome::Stopped => {
            audio::resume(&w.audio_ctx);
            w.mic.borrow_mut().stop();
        }
        PressOutcome::MuteLeft(_) | PressOutcome::MuteRight(_) | PressOutcome::Ignored => {}
    }
}

// Measurement only becomes active once the microphone is actually granted.
fn begin_measurement(w: &InputWiring) {
    if w.mic.borrow().is_requesting() {
        return;
    }
    w.mic.borrow_mut().set_requesting(true);
    let mic = w.mic.clone();
    let dashboard = w.dashboard.clone();
    let audio_ctx = w.audio_ctx.clone();
    spawn_local(async move {
        let result = match mic::request_stream().await {
            Ok(stream) => mic.borrow_mut().attach(&audio_ctx, stream),
            Err(e) => Err(e),
        };
        mic.borrow_mut().set_requesting(false);
        match result {
            Ok(()) => dashboard.borrow_mut().set_measurement_active(true),
            Err(e) => log::warn!("[measure] microphone unavailable: {}", e),
        }
    });
}
