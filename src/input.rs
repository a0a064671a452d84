use glam::DVec2;
use web_sys as web;

// Client coordinates -> canvas backing-store pixels, the space layout is computed in.
#[inline]
pub fn client_to_canvas_px(client_x: f64, client_y: f64, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width();
    let h = rect.height();
    if w <= 0.0 || h <= 0.0 {
        return DVec2::new(-1.0, -1.0);
    }
    let x_css = client_x - rect.left();
    let y_css = client_y - rect.top();
    DVec2::new(
        (x_css / w) * canvas.width() as f64,
        (y_css / h) * canvas.height() as f64,
    )
}

#[inline]
pub fn mouse_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    client_to_canvas_px(ev.client_x() as f64, ev.client_y() as f64, canvas)
}

/// Position of the first changed touch, if any.
#[inline]
pub fn touch_canvas_px(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<DVec2> {
    let touch = ev.changed_touches().get(0)?;
    Some(client_to_canvas_px(
        touch.client_x() as f64,
        touch.client_y() as f64,
        canvas,
    ))
}
