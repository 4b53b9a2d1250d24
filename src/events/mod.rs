use crate::dom;
use crate::input;
use crate::overlay;
use julia_core::{HostCommand, HostCommands, InputEvent, InteractionStateMachine};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod navigation;
mod pointer;

pub use navigation::{restore_from_fragment, wire_navigation};
pub use pointer::wire_input_handlers;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub machine: Rc<RefCell<InteractionStateMachine>>,
    pub mouse_state: Rc<RefCell<input::MouseState>>,
}

/// Feed one event through the controller and run whatever it asks for.
pub fn dispatch(w: &InputWiring, event: InputEvent) {
    let commands = {
        let viewport = dom::CanvasViewport::new(&w.canvas);
        w.machine.borrow_mut().handle(&event, &viewport)
    };
    apply_commands(&w.canvas, commands);
}

fn apply_commands(canvas: &web::HtmlCanvasElement, commands: HostCommands) {
    for command in commands {
        match command {
            HostCommand::RequestRelativeMotion => canvas.request_pointer_lock(),
            HostCommand::ReleaseRelativeMotion => {
                if let Some(document) = dom::window_document() {
                    document.exit_pointer_lock();
                }
            }
            HostCommand::WriteFragment(fragment) => dom::write_fragment(&fragment),
            HostCommand::HideTutorial { instant } => {
                if let Some(document) = dom::window_document() {
                    overlay::hide_tutorial(&document, instant);
                }
            }
        }
    }
}
