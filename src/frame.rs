use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = RefCell<Option<Closure<dyn FnMut()>>>;

/// requestAnimationFrame loop handing the elapsed time since the previous
/// frame to its callback. Stopping (or dropping) cancels the pending frame.
pub struct FrameLoop {
    tick: Rc<TickSlot>,
    request_id: Rc<Cell<Option<i32>>>,
}

fn request_frame(tick: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window()?
        .request_animation_frame(tick.as_ref().unchecked_ref())
        .ok()
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(Duration) + 'static) -> Self {
        let tick: Rc<TickSlot> = Rc::new(RefCell::new(None));
        let request_id = Rc::new(Cell::new(None));

        let tick_weak: Weak<TickSlot> = Rc::downgrade(&tick);
        let request_id_tick = request_id.clone();
        let mut last_instant = Instant::now();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            request_id_tick.set(None);
            let now = Instant::now();
            let dt = now - last_instant;
            last_instant = now;
            on_frame(dt);
            // A stopped loop has emptied the slot; nothing gets rescheduled.
            if let Some(tick) = tick_weak.upgrade() {
                if let Some(cb) = tick.borrow().as_ref() {
                    request_id_tick.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            request_id.set(request_frame(cb));
        }
        Self { tick, request_id }
    }

    pub fn stop(&self) {
        if let Some(id) = self.request_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
