use crate::core::{Lifecycle, SnowConfig, SnowField};
use crate::dom::{self, Listeners};
use crate::events;
use crate::frame::FrameLoop;
use crate::render::{self, SnowPalette, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A running snow background bound to one canvas.
pub struct SnowMount {
    frame: FrameLoop,
    listeners: Listeners,
    snow: Rc<RefCell<Lifecycle<SnowField>>>,
}

pub fn mount(canvas: web::HtmlCanvasElement) -> anyhow::Result<SnowMount> {
    let surface = Rc::new(Surface::new(canvas)?);
    let palette = SnowPalette::for_scheme(dom::prefers_dark_scheme());

    let mut lifecycle = Lifecycle::new(SnowField::new(SnowConfig::default(), rand::random()));
    lifecycle.mount(surface.configure());
    log::info!(
        "[snow] mounted: {} flakes, outline={}",
        lifecycle.effect().flakes.len(),
        palette.outline.is_some()
    );
    let snow = Rc::new(RefCell::new(lifecycle));

    let mut listeners = Listeners::default();
    {
        let surface = surface.clone();
        let snow = snow.clone();
        events::resize::wire_resize(&mut listeners, move || {
            let state = surface.configure();
            snow.borrow_mut().resize(state);
        });
    }

    let frame = {
        let snow = snow.clone();
        FrameLoop::start(move |dt| {
            let mut lc = snow.borrow_mut();
            if lc.tick(dt) {
                render::draw_snow(&surface, &lc.surface(), lc.effect(), &palette);
            }
        })
    };

    Ok(SnowMount {
        frame,
        listeners,
        snow,
    })
}

impl SnowMount {
    pub fn unmount(&mut self) {
        self.frame.stop();
        self.listeners.clear();
        self.snow.borrow_mut().unmount();
        log::info!("[snow] unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.snow.borrow().is_mounted()
    }
}
