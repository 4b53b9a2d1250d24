use super::{dispatch, InputWiring};
use crate::input;
use julia_core::{InputEvent, PointerButton};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(w: &InputWiring) {
    wire_mousedown(w);
    wire_mousemove(w);
    wire_mouseup(w);
    wire_contextmenu(w);
    wire_touch(w);
}

fn wire_mousedown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let event = input::mouse_down_event(&ev, &w.canvas);
        if let InputEvent::PointerDown { button, .. } = &event {
            match button {
                PointerButton::Primary => w.mouse_state.borrow_mut().primary_down = true,
                PointerButton::Secondary => ev.prevent_default(),
                PointerButton::Other(_) => {}
            }
        }
        dispatch(&w, event);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousemove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let event = input::mouse_move_event(&ev, &w.canvas);
        dispatch(&w, event);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseup(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let event = input::mouse_up_event(&ev);
        if matches!(event, InputEvent::PointerUp { button: PointerButton::Primary }) {
            w.mouse_state.borrow_mut().primary_down = false;
        }
        dispatch(&w, event);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Right click locks while the primary button is held; keep the menu away.
fn wire_contextmenu(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        if w.mouse_state.borrow().primary_down {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touch(w: &InputWiring) {
    {
        let w = w.clone();
        let canvas_for_listener = w.canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(pos) = input::touch_css_px(&ev, &w.canvas) {
                dispatch(
                    &w,
                    InputEvent::TouchStart {
                        x: pos.x as f64,
                        y: pos.y as f64,
                    },
                );
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas_for_listener
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let w = w.clone();
        let canvas_for_listener = w.canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(pos) = input::touch_css_px(&ev, &w.canvas) {
                dispatch(
                    &w,
                    InputEvent::TouchMove {
                        x: pos.x as f64,
                        y: pos.y as f64,
                    },
                );
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas_for_listener
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let w = w.clone();
        let canvas_for_listener = w.canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            dispatch(&w, InputEvent::TouchEnd);
        }) as Box<dyn FnMut(_)>);
        _ = canvas_for_listener
            .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
