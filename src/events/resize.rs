use crate::dom::Listeners;
use web_sys as web;

/// Calls `on_resize` on every window resize until the listener set is cleared.
pub fn wire_resize(listeners: &mut Listeners, mut on_resize: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        listeners.listen(&window, "resize", move |_ev: web::Event| on_resize());
    }
}
