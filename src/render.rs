//! Canvas 2D drawing of a dashboard frame.

use crate::core::{gauge_angle_deg, Co2Mood, FrameSnapshot, Layout, Rect};
use wasm_bindgen::JsValue;
use web_sys as web;

const BACKGROUND: &str = "#F6D466";
const GREEN: &str = "#22A95B";
const ALARM_RED: &str = "rgb(244, 67, 54)";
const BANNER_OUTLINE: &str = "rgb(255, 235, 59)";
const GAUGE_SEGMENTS: [&str; 6] = [
    "#2EBF6B", "#6CD06A", "#B7DB5E", "#F4D046", "#F79A3A", "#F04A3A",
];
const FONT_FAMILY: &str = "'League Spartan', system-ui, sans-serif";

type Ctx = web::CanvasRenderingContext2d;

pub fn draw(ctx: &Ctx, snap: &FrameSnapshot) -> Result<(), JsValue> {
    let canvas_w = ctx.canvas().map(|c| c.width() as f64).unwrap_or(0.0);
    let canvas_h = ctx.canvas().map(|c| c.height() as f64).unwrap_or(0.0);
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, canvas_w, canvas_h);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    let Some(layout) = snap.layout else {
        return draw_rotate_notice(ctx, canvas_w, canvas_h);
    };

    draw_separators(ctx, &layout);
    draw_gauge(ctx, &layout, snap.display_db)?;
    draw_face(ctx, &layout, snap.mood)?;
    draw_bottom_bar(ctx, &layout, snap)?;
    let pulse = 0.65 + 0.35 * wave(snap.frame_index, 0.6);
    if snap.alarms.left_active {
        draw_alarm_banner(
            ctx,
            &layout.left_banner,
            &layout.left_mute_button,
            "ALARM – sound too loud",
            snap.mutes.mute_left,
            pulse,
        )?;
    }
    if snap.alarms.right_active {
        draw_alarm_banner(
            ctx,
            &layout.right_banner,
            &layout.right_mute_button,
            "ALARM – CO₂ too high",
            snap.mutes.mute_right,
            pulse,
        )?;
    }
    Ok(())
}

// 0..1 sine of the frame counter, degrees per frame as in the pulse rates
#[inline]
fn wave(frame_index: u64, rate_deg: f64) -> f64 {
    ((frame_index as f64 * rate_deg).to_radians().sin()) * 0.5 + 0.5
}

#[inline]
fn font(px: f64) -> String {
    format!("bold {:.0}px {}", px.max(1.0), FONT_FAMILY)
}

fn draw_rotate_notice(ctx: &Ctx, w: f64, h: f64) -> Result<(), JsValue> {
    ctx.set_fill_style_str("rgb(30, 30, 30)");
    ctx.set_font(&font(w.min(h) * 0.05));
    ctx.fill_text("Rotate to landscape", w / 2.0, h / 2.0)
}

fn draw_separators(ctx: &Ctx, l: &Layout) {
    ctx.set_fill_style_str("rgba(0, 0, 0, 0.78)");
    ctx.fill_rect(l.width / 2.0 - 3.0, 0.0, 6.0, l.height);
    ctx.set_fill_style_str("rgba(0, 0, 0, 0.63)");
    ctx.fill_rect(0.0, l.top_h - 3.0, l.width, 6.0);
}

fn draw_gauge(ctx: &Ctx, l: &Layout, db: f32) -> Result<(), JsValue> {
    let (cx, cy, r) = (l.gauge_center.x, l.gauge_center.y, l.gauge_radius);
    let arc_w = r * 0.16;
    let arc_r = r - arc_w / 2.0;

    ctx.set_line_width(arc_w);
    ctx.set_line_cap("butt");
    let n = GAUGE_SEGMENTS.len() as f64;
    let mut a0 = -180.0_f64;
    for (i, color) in GAUGE_SEGMENTS.iter().enumerate() {
        let a1 = -180.0 + 180.0 * (i as f64 + 1.0) / n;
        ctx.set_stroke_style_str(color);
        ctx.begin_path();
        ctx.arc(cx, cy, arc_r, a0.to_radians(), a1.to_radians())?;
        ctx.stroke();
        a0 = a1;
    }

    let theta = gauge_angle_deg(db).to_radians();
    let needle = r - arc_w * 0.9;
    ctx.set_stroke_style_str("black");
    ctx.set_line_cap("round");
    ctx.set_line_width(arc_w * 0.35);
    ctx.begin_path();
    ctx.move_to(cx, cy);
    ctx.line_to(cx + needle * theta.cos(), cy + needle * theta.sin());
    ctx.stroke();
    ctx.set_fill_style_str("black");
    ctx.begin_path();
    ctx.arc(cx, cy, arc_w * 0.4, 0.0, std::f64::consts::TAU)?;
    ctx.fill();

    ctx.set_fill_style_str("white");
    ctx.set_font(&font(r * 0.17));
    ctx.fill_text("dB", cx, cy + r * 0.22)?;
    ctx.set_font(&font(r * 0.18));
    ctx.fill_text(&format!("{} dB", db as i32), cx, cy + r * 0.40)
}

fn draw_face(ctx: &Ctx, l: &Layout, mood: Co2Mood) -> Result<(), JsValue> {
    let (cx, cy, dia) = (l.face_center.x, l.face_center.y, l.face_diameter);
    let face = match mood {
        Co2Mood::Fresh => GREEN,
        Co2Mood::Stale => "#F7D84D",
        Co2Mood::Poor => "#F46B5E",
    };
    let eye_r = dia * 0.05;
    let eye_dx = dia * 0.22;
    let eye_dy = dia * 0.18;
    let stroke_w = dia * 0.06;

    ctx.set_fill_style_str(face);
    ctx.set_stroke_style_str("black");
    ctx.set_line_width(stroke_w);
    ctx.begin_path();
    ctx.arc(cx, cy, dia / 2.0, 0.0, std::f64::consts::TAU)?;
    ctx.fill();
    ctx.stroke();

    ctx.set_fill_style_str("black");
    for dx in [-eye_dx, eye_dx] {
        ctx.begin_path();
        ctx.arc(cx + dx, cy - eye_dy, eye_r, 0.0, std::f64::consts::TAU)?;
        ctx.fill();
    }

    ctx.set_line_cap("round");
    ctx.set_line_width(stroke_w);
    match mood {
        Co2Mood::Fresh => {
            ctx.begin_path();
            ctx.ellipse(
                cx,
                cy + dia * 0.05,
                dia * 0.225,
                dia * 0.14,
                0.0,
                20f64.to_radians(),
                160f64.to_radians(),
            )?;
            ctx.stroke();
        }
        Co2Mood::Stale => {
            let half_w = dia * 0.19;
            ctx.begin_path();
            ctx.move_to(cx - half_w, cy + dia * 0.12);
            ctx.line_to(cx + half_w, cy + dia * 0.12);
            ctx.stroke();
        }
        Co2Mood::Poor => {
            ctx.begin_path();
            ctx.ellipse(
                cx,
                cy + dia * 0.22,
                dia * 0.225,
                dia * 0.14,
                0.0,
                200f64.to_radians(),
                340f64.to_radians(),
            )?;
            ctx.stroke();

            let brow = dia * 0.28;
            let by = cy - eye_dy - eye_r * 1.8;
            ctx.set_line_width(dia * 0.045);
            ctx.begin_path();
            ctx.move_to(cx - eye_dx - brow * 0.5, by - brow * 0.1);
            ctx.line_to(cx - eye_dx + brow * 0.2, by + brow * 0.1);
            ctx.move_to(cx + eye_dx + brow * 0.5, by - brow * 0.1);
            ctx.line_to(cx + eye_dx - brow * 0.2, by + brow * 0.1);
            ctx.stroke();
        }
    }
    Ok(())
}

fn draw_bottom_bar(ctx: &Ctx, l: &Layout, snap: &FrameSnapshot) -> Result<(), JsValue> {
    let ss = l.start_stop;
    if snap.active {
        ctx.set_fill_style_str(ALARM_RED);
        ctx.fill_rect(ss.x, ss.y, ss.w, ss.h);
        let pulse = 0.75 + 0.25 * wave(snap.frame_index, 0.4);
        ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {:.3})", pulse - 0.75));
        ctx.fill_rect(ss.x, ss.y, ss.w, ss.h * 0.18);
    } else {
        ctx.set_fill_style_str(GREEN);
        ctx.fill_rect(ss.x, ss.y, ss.w, ss.h);
    }
    let pp = l.ppm_panel;
    ctx.set_fill_style_str(GREEN);
    ctx.fill_rect(pp.x, pp.y, pp.w, pp.h);

    ctx.set_fill_style_str("white");
    ctx.set_font(&font(l.bottom_h * 0.58));
    let label = if snap.active { "Stop" } else { "Start" };
    let c = ss.center();
    ctx.fill_text(label, c.x, c.y)?;
    let c = pp.center();
    ctx.fill_text(&format!("{} ppm", snap.ppm as i32), c.x, c.y)
}

fn draw_alarm_banner(
    ctx: &Ctx,
    banner: &Rect,
    button: &Rect,
    title: &str,
    muted: bool,
    pulse: f64,
) -> Result<(), JsValue> {
    ctx.set_global_alpha(pulse);
    ctx.set_fill_style_str(ALARM_RED);
    ctx.fill_rect(banner.x, banner.y, banner.w, banner.h);
    ctx.set_global_alpha(1.0);
    ctx.set_stroke_style_str(BANNER_OUTLINE);
    ctx.set_line_width(4.0);
    ctx.stroke_rect(banner.x + 2.0, banner.y + 2.0, banner.w - 4.0, banner.h - 4.0);

    ctx.set_fill_style_str("white");
    ctx.set_font(&font(banner.h * 0.45));
    let c = banner.center();
    ctx.fill_text(title, c.x, c.y)?;

    rounded_rect_path(ctx, button, 12.0)?;
    ctx.fill();
    ctx.set_fill_style_str(ALARM_RED);
    ctx.set_font(&font(button.h * 0.55));
    let c = button.center();
    ctx.fill_text(if muted { "Unmute" } else { "Mute" }, c.x, c.y)
}

fn rounded_rect_path(ctx: &Ctx, r: &Rect, radius: f64) -> Result<(), JsValue> {
    let rad = radius.min(r.w / 2.0).min(r.h / 2.0);
    ctx.begin_path();
    ctx.move_to(r.x + rad, r.y);
    ctx.arc_to(r.x + r.w, r.y, r.x + r.w, r.y + r.h, rad)?;
    ctx.arc_to(r.x + r.w, r.y + r.h, r.x, r.y + r.h, rad)?;
    ctx.arc_to(r.x, r.y + r.h, r.x, r.y, rad)?;
    ctx.arc_to(r.x, r.y, r.x + r.w, r.y, rad)?;
    ctx.close_path();
    Ok(())
}
