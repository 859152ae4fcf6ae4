use std::{cell::RefCell, rc::Rc};

use web_sys::{DomRect, HtmlCanvasElement, MouseEvent, TouchEvent};

use crate::{app::App, CANVAS_WIDTH};

pub fn on_resize(canvas: &Rc<HtmlCanvasElement>, bound: &Rc<RefCell<Option<DomRect>>>) {
    bound.replace(Some(canvas.get_bounding_client_rect()));
}

/// Converts a client location into unscaled canvas coordinates.
fn client_to_canvas(bound: &DomRect, client: (i32, i32)) -> (i32, i32) {
    let x = client.0 - bound.left() as i32;
    let y = client.1 - bound.top() as i32;

    let x = (x as f64 * (CANVAS_WIDTH as f64 / bound.width())) as i32;
    let y = (y as f64 * (CANVAS_WIDTH as f64 / bound.width())) as i32;

    (x, y)
}

pub fn on_mouse_down(app: &Rc<RefCell<App>>, event: MouseEvent) {
    let mut app = app.borrow_mut();

    if event.button() == 0 {
        app.pointer.press();
    }
}

pub fn on_mouse_up(app: &Rc<RefCell<App>>, event: MouseEvent) {
    let mut app = app.borrow_mut();

    if event.button() == 0 {
        app.pointer.release();
    }
}

pub fn on_mouse_move(
    app: &Rc<RefCell<App>>,
    bound: &Rc<RefCell<Option<DomRect>>>,
    event: MouseEvent,
) {
    let bound = bound.borrow();

    if let Some(bound) = bound.as_ref() {
        let mut app = app.borrow_mut();

        app.pointer
            .set_location(client_to_canvas(bound, (event.client_x(), event.client_y())));
    }
}

pub fn on_touch_start(
    app: &Rc<RefCell<App>>,
    bound: &Rc<RefCell<Option<DomRect>>>,
    event: TouchEvent,
) {
    let bound = bound.borrow();

    if let Some(bound) = bound.as_ref() {
        if let Some(touch) = event.target_touches().item(0) {
            let mut app = app.borrow_mut();

            app.pointer
                .set_location(client_to_canvas(bound, (touch.client_x(), touch.client_y())));
            app.pointer.press();
        }
    }

    event.prevent_default();
}

pub fn on_touch_move(
    app: &Rc<RefCell<App>>,
    bound: &Rc<RefCell<Option<DomRect>>>,
    event: TouchEvent,
) {
    let bound = bound.borrow();

    if let Some(bound) = bound.as_ref() {
        if let Some(touch) = event.target_touches().item(0) {
            let mut app = app.borrow_mut();

            app.pointer
                .set_location(client_to_canvas(bound, (touch.client_x(), touch.client_y())));
        }
    }

    event.prevent_default();
}

pub fn on_touch_end(app: &Rc<RefCell<App>>, event: TouchEvent) {
    let mut app = app.borrow_mut();

    app.pointer.release();
    event.prevent_default();
}
