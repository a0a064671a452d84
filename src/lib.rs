#![cfg(target_arch = "wasm32")]
use crate::audio::WebToneBackend;
use crate::core::{Dashboard, DashboardParams, PressFilter};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod mic;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("calmair starting");

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
    let ctx2d = dom::context_2d(&canvas)?;

    // Canvas backing size follows the window
    dom::wire_canvas_resize(&canvas);

    // Stays suspended until the first touch or start press
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let seed: u64 = rand::random();
    let dashboard = Rc::new(RefCell::new(Dashboard::new(
        WebToneBackend::new(audio_ctx.clone()),
        DashboardParams::default(),
        0.0,
        seed,
    )));
    let mic = Rc::new(RefCell::new(mic::Microphone::default()));
    log::info!("[dashboard] ready, drift seed={:#018x}", seed);

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        dashboard: dashboard.clone(),
        mic: mic.clone(),
        audio_ctx: audio_ctx.clone(),
        press_filter: Rc::new(RefCell::new(PressFilter::default())),
    });

    let started = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        dashboard,
        mic,
        canvas,
        ctx2d,
        started,
        last_instant: started,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
