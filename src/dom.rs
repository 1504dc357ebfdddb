use crate::constants::DARK_SCHEME_QUERY;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("#{} is not a canvas", id))
}

#[inline]
pub fn device_pixel_ratio() -> f32 {
    web::window()
        .map(|w| w.device_pixel_ratio() as f32)
        .unwrap_or(1.0)
}

/// Reads the color-scheme preference once; light when the query is unsupported.
pub fn prefers_dark_scheme() -> bool {
    web::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Event listeners owned by one mounted effect. Clearing (or dropping) the
/// set detaches every handler from its target.
#[derive(Default)]
pub struct Listeners {
    items: Vec<Listener>,
}

impl Listeners {
    pub fn listen(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        {
            log::warn!("[dom] addEventListener({}) failed: {:?}", kind, e);
            return;
        }
        self.items.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
    }

    pub fn clear(&mut self) {
        for l in self.items.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.clear();
    }
}
