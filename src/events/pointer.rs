use super::canvas_local;
use crate::core::{FaceScene, InteractionSampler, Lifecycle};
use crate::dom::Listeners;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy)]
enum Hover {
    Enter,
    Move,
}

/// Desktop hover: the effect follows the mouse while it is over the canvas.
pub fn wire_pointer_handlers(
    listeners: &mut Listeners,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Lifecycle<FaceScene>>>,
) {
    wire_hover(listeners, canvas, scene, "mouseenter", Hover::Enter);
    wire_hover(listeners, canvas, scene, "mousemove", Hover::Move);

    let scene_leave = scene.clone();
    listeners.listen(canvas, "mouseleave", move |_ev: web::Event| {
        if let Some(face) = scene_leave.borrow_mut().effect_mut() {
            face.interaction.on_pointer_deactivate();
        }
    });
}

fn wire_hover(
    listeners: &mut Listeners,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Lifecycle<FaceScene>>>,
    kind: &'static str,
    hover: Hover,
) {
    let canvas_ev = canvas.clone();
    let scene = scene.clone();
    listeners.listen(canvas, kind, move |ev: web::Event| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let local = canvas_local(&canvas_ev, mouse.client_x(), mouse.client_y());
        if let Some(face) = scene.borrow_mut().effect_mut() {
            match hover {
                Hover::Enter => face.interaction.on_pointer_activate(local),
                Hover::Move => face.interaction.on_pointer_move(local),
            }
        }
    });
}
