use shared::{Marker, Position, BOARD_SIDE};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::app::BOARD_SCALE_F64;

const GRID_COLOUR: &str = "#3f3f74";
const X_COLOUR: &str = "#d95763";
const O_COLOUR: &str = "#5b6ee1";
const MARKER_INSET: f64 = 14.0;

pub fn draw_text(
    context: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    text: &str,
) -> Result<(), JsValue> {
    context.set_font("bold 14px sans-serif");
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.fill_text(text, x, y)?;

    Ok(())
}

/// Draws the two vertical and two horizontal separators, in board coordinates.
pub fn draw_grid(context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    let width = BOARD_SCALE_F64.0 * BOARD_SIDE as f64;
    let height = BOARD_SCALE_F64.1 * BOARD_SIDE as f64;

    context.save();
    context.set_stroke_style_str(GRID_COLOUR);
    context.set_line_width(3.0);
    context.set_line_cap("round");
    context.begin_path();

    for i in 1..BOARD_SIDE {
        let x = i as f64 * BOARD_SCALE_F64.0;
        let y = i as f64 * BOARD_SCALE_F64.1;

        context.move_to(x, 4.0);
        context.line_to(x, height - 4.0);
        context.move_to(4.0, y);
        context.line_to(width - 4.0, y);
    }

    context.stroke();
    context.restore();

    Ok(())
}

/// Fills the square of a cell, in board coordinates.
pub fn draw_cell_highlight(
    context: &CanvasRenderingContext2d,
    position: &Position,
    colour: &str,
) -> Result<(), JsValue> {
    context.save();
    context.set_fill_style_str(colour);
    context.fill_rect(
        position.0 as f64 * BOARD_SCALE_F64.0 + 4.0,
        position.1 as f64 * BOARD_SCALE_F64.1 + 4.0,
        BOARD_SCALE_F64.0 - 8.0,
        BOARD_SCALE_F64.1 - 8.0,
    );
    context.restore();

    Ok(())
}

pub fn draw_marker(
    context: &CanvasRenderingContext2d,
    marker: Marker,
    position: &Position,
) -> Result<(), JsValue> {
    let left = position.0 as f64 * BOARD_SCALE_F64.0;
    let top = position.1 as f64 * BOARD_SCALE_F64.1;

    context.save();
    context.set_line_width(6.0);
    context.set_line_cap("round");
    context.begin_path();

    match marker {
        Marker::X => {
            context.set_stroke_style_str(X_COLOUR);
            context.move_to(left + MARKER_INSET, top + MARKER_INSET);
            context.line_to(
                left + BOARD_SCALE_F64.0 - MARKER_INSET,
                top + BOARD_SCALE_F64.1 - MARKER_INSET,
            );
            context.move_to(left + BOARD_SCALE_F64.0 - MARKER_INSET, top + MARKER_INSET);
            context.line_to(left + MARKER_INSET, top + BOARD_SCALE_F64.1 - MARKER_INSET);
        }
        Marker::O => {
            context.set_stroke_style_str(O_COLOUR);
            context.arc(
                left + BOARD_SCALE_F64.0 / 2.0,
                top + BOARD_SCALE_F64.1 / 2.0,
                BOARD_SCALE_F64.0 / 2.0 - MARKER_INSET,
                0.0,
                std::f64::consts::TAU,
            )?;
        }
    }

    context.stroke();
    context.restore();

    Ok(())
}

/// Strikes through a completed line, from the centre of its first cell to the centre of its last.
pub fn draw_win_line(
    context: &CanvasRenderingContext2d,
    from: &Position,
    to: &Position,
) -> Result<(), JsValue> {
    let centre = |position: &Position| {
        (
            (position.0 as f64 + 0.5) * BOARD_SCALE_F64.0,
            (position.1 as f64 + 0.5) * BOARD_SCALE_F64.1,
        )
    };

    let (x0, y0) = centre(from);
    let (x1, y1) = centre(to);

    context.save();
    context.set_stroke_style_str("#fbf236");
    context.set_line_width(8.0);
    context.set_line_cap("round");
    context.begin_path();
    context.move_to(x0, y0);
    context.line_to(x1, y1);
    context.stroke();
    context.restore();

    Ok(())
}
