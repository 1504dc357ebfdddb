use crate::core::{FaceConfig, FaceScene, Lifecycle};
use crate::dom::Listeners;
use crate::events::{self, touch::ReleaseTimer};
use crate::frame::FrameLoop;
use crate::image;
use crate::render::{self, ColorCache, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// A running image-disintegration effect bound to one canvas.
pub struct FaceMount {
    frame: FrameLoop,
    listeners: Listeners,
    timer: ReleaseTimer,
    scene: Rc<RefCell<Lifecycle<FaceScene>>>,
}

pub fn mount(canvas: web::HtmlCanvasElement, image_url: &str) -> anyhow::Result<FaceMount> {
    let surface = Rc::new(Surface::new(canvas.clone())?);

    let mut lifecycle = Lifecycle::new(FaceScene::new(FaceConfig::default()));
    lifecycle.mount(surface.configure());
    let scene = Rc::new(RefCell::new(lifecycle));

    spawn_load(scene.clone(), image_url.to_string());

    let mut listeners = Listeners::default();
    let timer = ReleaseTimer::default();
    events::pointer::wire_pointer_handlers(&mut listeners, &canvas, &scene);
    events::touch::wire_touch_handlers(&mut listeners, &canvas, &scene, &timer);
    {
        let surface = surface.clone();
        let scene = scene.clone();
        events::resize::wire_resize(&mut listeners, move || {
            let state = surface.configure();
            let mut lc = scene.borrow_mut();
            if lc.resize(state) {
                log::debug!(
                    "[face] resampled {} particles",
                    lc.effect().field.particles.len()
                );
            }
        });
    }

    let frame = {
        let scene = scene.clone();
        let mut cache = ColorCache::default();
        FrameLoop::start(move |dt| {
            let mut lc = scene.borrow_mut();
            if lc.tick(dt) {
                render::draw_face(&surface, &lc.surface(), &lc.effect().field, &mut cache);
            }
        })
    };

    log::info!("[face] mounted, loading {}", image_url);
    Ok(FaceMount {
        frame,
        listeners,
        timer,
        scene,
    })
}

/// Decodes the image off the frame loop; particles appear once it completes.
/// A failed load leaves the canvas blank.
fn spawn_load(scene: Rc<RefCell<Lifecycle<FaceScene>>>, url: String) {
    spawn_local(async move {
        let source = match image::load_source(&url).await {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[face] image unavailable: {:?}", e);
                return;
            }
        };
        let mut lc = scene.borrow_mut();
        let Some(face) = lc.effect_mut() else {
            log::debug!("[face] unmounted before {} loaded", url);
            return;
        };
        let (w, h) = (source.width(), source.height());
        match face.set_source(source) {
            Ok(n) => log::info!("[face] sampled {} particles from {}x{} image", n, w, h),
            Err(e) => log::warn!("[face] sampling failed: {}", e),
        }
    });
}

impl FaceMount {
    pub fn unmount(&mut self) {
        self.frame.stop();
        self.listeners.clear();
        self.timer.cancel();
        self.scene.borrow_mut().unmount();
        log::info!("[face] unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.scene.borrow().is_mounted()
    }
}
