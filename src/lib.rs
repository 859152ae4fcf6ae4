mod app;
mod callbacks;
mod draw;

use std::{cell::RefCell, rc::Rc};

use app::{App, AppEvent};
use callbacks::{
    on_mouse_down, on_mouse_move, on_mouse_up, on_resize, on_touch_end, on_touch_move,
    on_touch_start,
};
use shared::Locale;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{console, DomRect, MouseEvent, TouchEvent};

/// Unscaled canvas size; the element itself is twice as large.
pub const CANVAS_WIDTH: u32 = 256;
pub const CANVAS_HEIGHT: u32 = 304;
pub const STATUS_LOCATION: (f64, f64) = (CANVAS_WIDTH as f64 / 2.0, 24.0);

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

fn document() -> Result<web_sys::Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()?.request_animation_frame(f.as_ref().unchecked_ref())
}

fn pathname() -> Result<String, JsValue> {
    window()?.location().pathname()
}

fn log_event(event: &AppEvent) {
    match event {
        AppEvent::LogFailed(_) => console::error_1(&event.message().into()),
        _ => console::log_1(&event.message().into()),
    }
}

#[wasm_bindgen(start)]
fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = document()?;

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    let container_element = match document.query_selector("main")? {
        Some(element) => element,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .into(),
    };
    container_element.append_child(&canvas)?;

    canvas.set_width(CANVAS_WIDTH * 2);
    canvas.set_height(CANVAS_HEIGHT * 2);

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

    let locale = Locale::from_pathname(&pathname()?);
    console::log_1(&format!("starting tic-tac-toe ({locale:?})").into());

    let app = Rc::new(RefCell::new(App::new(locale)));

    let f = Rc::new(RefCell::new(None));
    let g = f.clone();

    {
        let app = app.clone();

        *g.borrow_mut() = Some(Closure::new(move || {
            let mut app = app.borrow_mut();

            for event in app.tick() {
                log_event(&event);
            }

            if let Err(err) = app.draw(&context) {
                console::error_1(&err);
            }

            app.pointer.swap();

            if let Some(closure) = f.borrow().as_ref() {
                if let Err(err) = request_animation_frame(closure) {
                    console::error_1(&err);
                }
            }
        }));
    }

    if let Some(closure) = g.borrow().as_ref() {
        request_animation_frame(closure)?;
    }

    let canvas = Rc::new(canvas);
    let bound: Rc<RefCell<Option<DomRect>>> =
        Rc::new(RefCell::new(Some(canvas.get_bounding_client_rect())));

    for event_name in ["resize", "scroll"] {
        let canvas = canvas.clone();
        let bound = bound.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_: JsValue| {
            on_resize(&canvas, &bound);
        });
        window()?.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            on_mouse_down(&app, event);
        });
        canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            on_mouse_up(&app, event);
        });
        document.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let bound = bound.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            on_mouse_move(&app, &bound, event);
        });
        document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let bound = bound.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            on_touch_start(&app, &bound, event);
        });
        canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let bound = bound.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            on_touch_move(&app, &bound, event);
        });
        canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            on_touch_end(&app, event);
        });
        canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
