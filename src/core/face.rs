use super::constants::*;
use super::interaction::Interaction;
use super::lifecycle::Effect;
use super::sampling::{sample_particles, FaceParticle, SampleError, SourceImage};
use super::surface::SurfaceState;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct FaceConfig {
    pub grid_size: usize,
    pub alpha_threshold: u8,
    pub hole_radius: f32,
    pub repulsion_strength: f32,
    pub spring: f32,
    pub damping: f32,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            alpha_threshold: ALPHA_THRESHOLD,
            hole_radius: HOLE_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            spring: SPRING,
            damping: DAMPING,
        }
    }
}

/// Velocity kick for a particle at `offset` from the pointer (particle minus
/// pointer). Linear falloff from full strength at the pointer to zero at the
/// hole radius; nothing at or beyond it. A particle sitting exactly on the
/// pointer is pushed straight up.
#[inline]
pub fn repulsion_impulse(offset: Vec2, config: &FaceConfig) -> Vec2 {
    let distance = offset.length();
    if distance >= config.hole_radius {
        return Vec2::ZERO;
    }
    let force = (config.hole_radius - distance) / config.hole_radius * config.repulsion_strength;
    offset.try_normalize().unwrap_or(Vec2::NEG_Y) * force
}

/// One frame of face physics: optional repulsion, spring toward the origin,
/// damping, then integration.
#[inline]
pub fn step_particle(p: &mut FaceParticle, repulsion_point: Option<Vec2>, config: &FaceConfig) {
    if let Some(pointer) = repulsion_point {
        p.vel += repulsion_impulse(p.pos - pointer, config);
    }
    p.vel += (p.origin() - p.pos) * config.spring;
    p.vel *= config.damping;
    p.pos += p.vel;
}

#[derive(Clone, Debug, Default)]
pub struct FaceField {
    pub particles: Vec<FaceParticle>,
    pub config: FaceConfig,
    generation: u64,
}

impl FaceField {
    pub fn new(config: FaceConfig) -> Self {
        Self {
            particles: Vec::new(),
            config,
            generation: 0,
        }
    }

    /// Bumped on every full replacement of the particle set.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn replace(&mut self, particles: Vec<FaceParticle>) {
        self.particles = particles;
        self.generation += 1;
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn step(&mut self, repulsion_point: Option<Vec2>) {
        for p in self.particles.iter_mut() {
            step_particle(p, repulsion_point, &self.config);
        }
    }
}

/// Image-disintegration effect: particle field, pointer state and the decoded
/// source it samples from.
#[derive(Clone, Debug, Default)]
pub struct FaceScene {
    pub field: FaceField,
    pub interaction: Interaction,
    source: Option<SourceImage>,
    surface: SurfaceState,
}

impl FaceScene {
    pub fn new(config: FaceConfig) -> Self {
        Self {
            field: FaceField::new(config),
            ..Default::default()
        }
    }

    #[inline]
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Installs a freshly decoded image and rebuilds the particles.
    pub fn set_source(&mut self, source: SourceImage) -> Result<usize, SampleError> {
        self.source = Some(source);
        self.repopulate()
    }

    /// Discards the current particle set and samples a new one for the
    /// current surface. Without a source the field stays empty.
    pub fn repopulate(&mut self) -> Result<usize, SampleError> {
        let Some(source) = &self.source else {
            self.field.clear();
            return Ok(0);
        };
        let (w, h) = self.surface.pixel_size();
        let buffer = source.render_cropped(w, h);
        let sampled = sample_particles(
            &buffer,
            w,
            h,
            self.field.config.grid_size,
            self.field.config.alpha_threshold,
        );
        match sampled {
            Ok(particles) => {
                let n = particles.len();
                self.field.replace(particles);
                Ok(n)
            }
            Err(e) => {
                self.field.clear();
                Err(e)
            }
        }
    }
}

impl Effect for FaceScene {
    fn resize(&mut self, surface: SurfaceState) {
        self.surface = surface;
        if let Err(e) = self.repopulate() {
            log::warn!("[face] resample failed: {}", e);
        }
    }

    fn step(&mut self, _dt_sec: f32) {
        let point = self.interaction.snapshot().repulsion_point();
        self.field.step(point);
    }
}
