use super::constants::*;
use super::lifecycle::Effect;
use super::surface::SurfaceState;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Snowflake {
    pub pos: Vec2,
    pub radius: f32,
    pub speed_y: f32,
    pub speed_x: f32,
    pub opacity: f32,
}

/// Uniform range expressed as `min + span * U[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub span: f32,
}

impl Span {
    pub const fn new(min: f32, span: f32) -> Self {
        Self { min, span }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min + rng.gen::<f32>() * self.span
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.min + self.span
    }
}

#[derive(Clone, Debug)]
pub struct SnowConfig {
    pub count: usize,
    pub radius: Span,
    pub speed_y: Span,
    pub speed_x: Span,
    pub opacity: Span,
    pub wrap_margin: f32,
    pub recycle_margin: f32,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            count: FLAKE_COUNT,
            radius: Span::new(FLAKE_RADIUS_MIN, FLAKE_RADIUS_SPAN),
            speed_y: Span::new(FLAKE_SPEED_Y_MIN, FLAKE_SPEED_Y_SPAN),
            speed_x: Span::new(FLAKE_SPEED_X_MIN, FLAKE_SPEED_X_SPAN),
            opacity: Span::new(FLAKE_OPACITY_MIN, FLAKE_OPACITY_SPAN),
            wrap_margin: WRAP_MARGIN,
            recycle_margin: RECYCLE_MARGIN,
        }
    }
}

pub struct SnowField {
    pub flakes: Vec<Snowflake>,
    pub config: SnowConfig,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl SnowField {
    pub fn new(config: SnowConfig, seed: u64) -> Self {
        Self {
            flakes: Vec::new(),
            config,
            width: 0.0,
            height: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Replaces the whole batch with fresh flakes spread uniformly over the surface.
    pub fn populate(&mut self, surface: &SurfaceState) {
        self.width = surface.width;
        self.height = surface.height;
        let (w, h) = (self.width, self.height);
        let config = &self.config;
        let rng = &mut self.rng;
        self.flakes = (0..config.count)
            .map(|_| random_flake(config, w, h, rng))
            .collect();
    }

    pub fn step(&mut self, dt_sec: f32) {
        let (w, h) = (self.width, self.height);
        for flake in self.flakes.iter_mut() {
            step_flake(flake, dt_sec, w, h, &self.config, &mut self.rng);
        }
    }
}

impl Effect for SnowField {
    fn resize(&mut self, surface: SurfaceState) {
        self.populate(&surface);
    }

    fn step(&mut self, dt_sec: f32) {
        SnowField::step(self, dt_sec);
    }
}

pub fn random_flake<R: Rng + ?Sized>(
    config: &SnowConfig,
    width: f32,
    height: f32,
    rng: &mut R,
) -> Snowflake {
    Snowflake {
        pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
        radius: config.radius.sample(rng),
        speed_y: config.speed_y.sample(rng),
        speed_x: config.speed_x.sample(rng),
        opacity: config.opacity.sample(rng),
    }
}

/// Moves one flake, wraps it horizontally and recycles it to the top once it
/// falls past the bottom margin. Only `pos` is ever written.
pub fn step_flake<R: Rng + ?Sized>(
    flake: &mut Snowflake,
    dt_sec: f32,
    width: f32,
    height: f32,
    config: &SnowConfig,
    rng: &mut R,
) {
    flake.pos.y += flake.speed_y * dt_sec;
    flake.pos.x += flake.speed_x * dt_sec;

    let m = config.wrap_margin;
    if flake.pos.x < -m {
        flake.pos.x = width + m;
    } else if flake.pos.x > width + m {
        flake.pos.x = -m;
    }

    if flake.pos.y > height + config.recycle_margin {
        flake.pos.y = -config.recycle_margin;
        flake.pos.x = rng.gen::<f32>() * width;
    }
}
