use super::canvas_local;
use crate::core::{FaceScene, Lifecycle, TOUCH_RELEASE_DELAY_MS};
use crate::dom::Listeners;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The single pending "relax after tap" timeout.
#[derive(Clone, Default)]
pub struct ReleaseTimer {
    slot: Rc<RefCell<Option<(i32, Closure<dyn FnMut()>)>>>,
}

impl ReleaseTimer {
    /// Replaces any armed timeout with one firing `token` after the delay.
    fn arm(&self, token: u32, scene: Rc<RefCell<Lifecycle<FaceScene>>>) {
        self.cancel();
        let Some(window) = web::window() else {
            return;
        };
        let closure = Closure::wrap(Box::new(move || {
            if let Some(face) = scene.borrow_mut().effect_mut() {
                face.interaction.release_touch(token);
            }
        }) as Box<dyn FnMut()>);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TOUCH_RELEASE_DELAY_MS,
        ) {
            Ok(handle) => *self.slot.borrow_mut() = Some((handle, closure)),
            Err(e) => log::warn!("[touch] setTimeout failed: {:?}", e),
        }
    }

    /// Clears the pending timeout, if any. Safe to call after it has fired.
    pub fn cancel(&self) {
        if let Some((handle, _closure)) = self.slot.borrow_mut().take() {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }
}

/// Mobile tap: a touch disturbs the particles briefly, then lets them settle.
pub fn wire_touch_handlers(
    listeners: &mut Listeners,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Lifecycle<FaceScene>>>,
    timer: &ReleaseTimer,
) {
    {
        let canvas_ev = canvas.clone();
        let scene = scene.clone();
        let timer = timer.clone();
        listeners.listen(canvas, "touchstart", move |ev: web::Event| {
            let Some(touch) = ev
                .dyn_ref::<web::TouchEvent>()
                .and_then(|t| t.touches().get(0))
            else {
                return;
            };
            let local = canvas_local(&canvas_ev, touch.client_x(), touch.client_y());
            let token = match scene.borrow_mut().effect_mut() {
                Some(face) => face.interaction.touch_start(local),
                None => return,
            };
            timer.arm(token, scene.clone());
        });
    }

    {
        let scene = scene.clone();
        listeners.listen(canvas, "touchend", move |_ev: web::Event| {
            if let Some(face) = scene.borrow_mut().effect_mut() {
                face.interaction.touch_end();
            }
        });
    }

    {
        let scene = scene.clone();
        let timer = timer.clone();
        listeners.listen(canvas, "touchcancel", move |_ev: web::Event| {
            let had_pending = match scene.borrow_mut().effect_mut() {
                Some(face) => face.interaction.touch_cancel(),
                None => false,
            };
            if had_pending {
                timer.cancel();
            }
        });
    }
}
