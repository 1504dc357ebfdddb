use super::constants::MAX_FRAME_DT_SEC;
use super::surface::SurfaceState;
use std::time::Duration;

/// One animated particle effect. `resize` may rebuild the particle set;
/// `step` advances the simulation by one frame.
pub trait Effect {
    fn resize(&mut self, surface: SurfaceState);
    fn step(&mut self, dt_sec: f32);
}

/// Frame delta in seconds, clamped so a long pause (hidden tab, debugger)
/// integrates as a single short frame.
#[inline]
pub fn frame_dt_secs(dt: Duration) -> f32 {
    dt.as_secs_f32().clamp(0.0, MAX_FRAME_DT_SEC)
}

/// Mount state around an effect. Once unmounted, ticks, resizes and event
/// writes are all dropped so nothing mutates a torn-down surface.
pub struct Lifecycle<E> {
    effect: E,
    surface: SurfaceState,
    mounted: bool,
    frames: u64,
}

impl<E: Effect> Lifecycle<E> {
    pub fn new(effect: E) -> Self {
        Self {
            effect,
            surface: SurfaceState::default(),
            mounted: false,
            frames: 0,
        }
    }

    pub fn mount(&mut self, surface: SurfaceState) {
        self.mounted = true;
        self.frames = 0;
        self.resize(surface);
    }

    /// Returns false when unmounted.
    pub fn resize(&mut self, surface: SurfaceState) -> bool {
        if !self.mounted {
            return false;
        }
        self.surface = surface;
        self.effect.resize(surface);
        true
    }

    /// Advances one frame. Returns false (and does nothing) when unmounted.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.mounted {
            return false;
        }
        self.effect.step(frame_dt_secs(dt));
        self.frames += 1;
        true
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn surface(&self) -> SurfaceState {
        self.surface
    }

    #[inline]
    pub fn effect(&self) -> &E {
        &self.effect
    }

    /// Mutable access for event handlers; `None` after unmount.
    #[inline]
    pub fn effect_mut(&mut self) -> Option<&mut E> {
        self.mounted.then_some(&mut self.effect)
    }
}
