use crate::audio::WebToneBackend;
use crate::core::{Dashboard, FrameInput};
use crate::mic::Microphone;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub dashboard: Rc<RefCell<Dashboard<WebToneBackend>>>,
    pub mic: Rc<RefCell<Microphone>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub started: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f64();
        self.last_instant = now;

        let active = self.dashboard.borrow().measurement().active;
        let raw_level = if active {
            self.mic.borrow_mut().level()
        } else {
            None
        };

        let snapshot = self.dashboard.borrow_mut().tick(FrameInput {
            now_sec: (now - self.started).as_secs_f64(),
            dt_sec,
            raw_level,
            width: self.canvas.width() as f64,
            height: self.canvas.height() as f64,
        });

        if let Err(e) = render::draw(&self.ctx2d, &snapshot) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
