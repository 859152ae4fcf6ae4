use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::Pointer;
use crate::draw::draw_text;

pub enum UIEvent {
    ButtonClick(usize),
}

pub trait UIElement {
    fn tick(&mut self, _pointer: &Pointer) -> Option<UIEvent> {
        None
    }

    fn draw(&self, context: &CanvasRenderingContext2d, pointer: &Pointer) -> Result<(), JsValue>;
}

pub enum ContentElement {
    Text(String),
}

impl UIElement for ContentElement {
    fn draw(&self, context: &CanvasRenderingContext2d, _pointer: &Pointer) -> Result<(), JsValue> {
        match self {
            ContentElement::Text(text) => draw_text(context, 0.0, 0.0, text),
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum ButtonClass {
    Default,
    Action,
}

pub struct ButtonElement {
    position: (i32, i32),
    size: (i32, i32),
    value: usize,
    class: ButtonClass,
    content: ContentElement,
}

impl ButtonElement {
    pub fn new(
        position: (i32, i32),
        size: (i32, i32),
        value: usize,
        class: ButtonClass,
        content: ContentElement,
    ) -> ButtonElement {
        ButtonElement {
            position,
            size,
            value,
            class,
            content,
        }
    }

    pub fn class(&self) -> &ButtonClass {
        &self.class
    }

    pub fn set_class(&mut self, class: ButtonClass) {
        self.class = class;
    }

    fn hovered(&self, pointer: &Pointer) -> bool {
        let pointer_location = pointer.location();

        pointer_location.0 >= self.position.0
            && pointer_location.0 < self.position.0 + self.size.0
            && pointer_location.1 >= self.position.1
            && pointer_location.1 < self.position.1 + self.size.1
    }

    fn clicked(&self, pointer: &Pointer) -> bool {
        self.hovered(pointer) && pointer.clicked()
    }
}

impl UIElement for ButtonElement {
    fn draw(&self, context: &CanvasRenderingContext2d, pointer: &Pointer) -> Result<(), JsValue> {
        context.save();

        context.translate(self.position.0 as f64, self.position.1 as f64)?;

        let fill = match self.class {
            ButtonClass::Default => {
                if self.hovered(pointer) {
                    "#008080"
                } else {
                    "#006080"
                }
            }
            ButtonClass::Action => {
                if self.hovered(pointer) {
                    "#aa5f00"
                } else {
                    "#7f1f00"
                }
            }
        };

        context.set_fill_style_str(fill);
        context.fill_rect(0.0, 0.0, self.size.0 as f64, self.size.1 as f64);

        context.set_fill_style_str("#ffffff");
        context.translate(self.size.0 as f64 / 2.0, self.size.1 as f64 / 2.0)?;

        self.content.draw(context, pointer)?;

        context.restore();

        Ok(())
    }

    fn tick(&mut self, pointer: &Pointer) -> Option<UIEvent> {
        if self.clicked(pointer) {
            Some(UIEvent::ButtonClick(self.value))
        } else {
            None
        }
    }
}
