#![cfg(target_arch = "wasm32")]
use crate::constants::{FACE_CANVAS_ID, FACE_SOURCE_ATTR, SNOW_CANVAS_ID};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
mod core;
mod dom;
mod events;
mod face;
mod frame;
mod image;
mod render;
mod snow;

enum Mounted {
    Snow(snow::SnowMount),
    Face(face::FaceMount),
}

/// Host-facing handle for one mounted effect. Mount failures produce an
/// inert handle; nothing is ever thrown back into the page.
#[wasm_bindgen]
pub struct EffectHandle {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl EffectHandle {
    /// Cancels the frame loop and detaches every listener and timer.
    pub fn unmount(&mut self) {
        match self.inner.take() {
            Some(Mounted::Snow(mut s)) => s.unmount(),
            Some(Mounted::Face(mut f)) => f.unmount(),
            None => {}
        }
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        match &self.inner {
            Some(Mounted::Snow(s)) => s.is_mounted(),
            Some(Mounted::Face(f)) => f.is_mounted(),
            None => false,
        }
    }
}

impl Drop for EffectHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl EffectHandle {
    fn from_result(kind: &str, result: anyhow::Result<Mounted>) -> Self {
        match result {
            Ok(m) => Self { inner: Some(m) },
            Err(e) => {
                log::warn!("[{}] not mounted: {:?}", kind, e);
                Self { inner: None }
            }
        }
    }
}

/// Starts the falling-snow background on the canvas with id `canvas_id`.
#[wasm_bindgen(js_name = mountSnow)]
pub fn mount_snow(canvas_id: &str) -> EffectHandle {
    let mounted = dom::canvas_by_id(canvas_id)
        .and_then(snow::mount)
        .map(Mounted::Snow);
    EffectHandle::from_result("snow", mounted)
}

/// Starts the image-disintegration effect, sampling `image_url` once decoded.
#[wasm_bindgen(js_name = mountFace)]
pub fn mount_face(canvas_id: &str, image_url: &str) -> EffectHandle {
    let mounted = dom::canvas_by_id(canvas_id)
        .and_then(|canvas| face::mount(canvas, image_url))
        .map(Mounted::Face);
    EffectHandle::from_result("face", mounted)
}

thread_local! {
    static AUTO_MOUNTED: RefCell<Vec<EffectHandle>> = const { RefCell::new(Vec::new()) };
}

// Pages that only include the module get both effects on the conventional ids.
fn auto_mount() {
    let Some(document) = dom::window_document() else {
        return;
    };
    let mut handles = Vec::new();
    if document.get_element_by_id(SNOW_CANVAS_ID).is_some() {
        handles.push(mount_snow(SNOW_CANVAS_ID));
    }
    if let Some(el) = document.get_element_by_id(FACE_CANVAS_ID) {
        match el.get_attribute(FACE_SOURCE_ATTR) {
            Some(url) => handles.push(mount_face(FACE_CANVAS_ID, &url)),
            None => log::warn!("[face] #{} has no {}", FACE_CANVAS_ID, FACE_SOURCE_ATTR),
        }
    }
    AUTO_MOUNTED.with(|m| m.borrow_mut().extend(handles));
}

/// Tears down whatever `start()` mounted automatically.
#[wasm_bindgen(js_name = unmountAll)]
pub fn unmount_all() {
    let handles = AUTO_MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    for mut h in handles {
        h.unmount();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-particles starting");
    auto_mount();
    Ok(())
}
