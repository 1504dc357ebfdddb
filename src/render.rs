use crate::constants::*;
use crate::core::{FaceField, SnowField, SurfaceState, FLAKE_GLOW_SCALE};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas plus its 2D context. All drawing after [`Surface::configure`] is
/// issued in CSS pixels.
pub struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Surface {
    /// Fails when the browser refuses a 2D context; callers treat that as
    /// "render nothing".
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("unexpected context type"))?;
        Ok(Self { canvas, ctx })
    }

    /// Sizes the backing store to the container bounds times the device pixel
    /// ratio and resets the transform so one unit equals one CSS pixel.
    pub fn configure(&self) -> SurfaceState {
        let rect = self.canvas.get_bounding_client_rect();
        let state = SurfaceState::configure(
            rect.width() as f32,
            rect.height() as f32,
            crate::dom::device_pixel_ratio(),
        );
        let (w_px, h_px) = state.backing_size();
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        let dpr = state.dpr as f64;
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        log::debug!(
            "[surface] {:.0}x{:.0} css @{:.2} -> {}x{} px",
            state.width,
            state.height,
            state.dpr,
            w_px,
            h_px
        );
        state
    }

    #[inline]
    pub fn clear(&self, state: &SurfaceState) {
        self.ctx
            .clear_rect(0.0, 0.0, state.width as f64, state.height as f64);
    }
}

/// Snow colors resolved once at mount from the color-scheme preference.
#[derive(Clone, Copy, Debug)]
pub struct SnowPalette {
    pub inner: &'static str,
    pub outer: &'static str,
    pub outline: Option<&'static str>,
}

impl SnowPalette {
    pub fn for_scheme(dark: bool) -> Self {
        if dark {
            Self {
                inner: SNOW_DARK_INNER,
                outer: SNOW_DARK_OUTER,
                outline: None,
            }
        } else {
            Self {
                inner: SNOW_LIGHT_INNER,
                outer: SNOW_LIGHT_OUTER,
                outline: Some(SNOW_LIGHT_OUTLINE),
            }
        }
    }
}

pub fn draw_snow(surface: &Surface, state: &SurfaceState, field: &SnowField, palette: &SnowPalette) {
    let ctx = &surface.ctx;
    surface.clear(state);
    for flake in &field.flakes {
        let x = flake.pos.x as f64;
        let y = flake.pos.y as f64;
        let r = (flake.radius * FLAKE_GLOW_SCALE) as f64;
        ctx.set_global_alpha(flake.opacity as f64);

        let gradient = match ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
            Ok(g) => g,
            Err(_) => continue,
        };
        _ = gradient.add_color_stop(0.0, palette.inner);
        _ = gradient.add_color_stop(1.0, palette.outer);
        ctx.set_fill_style_canvas_gradient(&gradient);

        ctx.begin_path();
        _ = ctx.arc(x, y, r, 0.0, TAU);
        ctx.fill();

        if let Some(outline) = palette.outline {
            ctx.set_stroke_style_str(outline);
            ctx.set_line_width(SNOW_OUTLINE_WIDTH);
            ctx.stroke();
        }
    }
    ctx.set_global_alpha(1.0);
}

/// Paint strings for the current particle generation, rebuilt only when the
/// field is repopulated.
#[derive(Default)]
pub struct ColorCache {
    generation: Option<u64>,
    styles: Vec<String>,
}

impl ColorCache {
    fn sync(&mut self, field: &FaceField) {
        if self.generation == Some(field.generation()) {
            return;
        }
        self.styles = field.particles.iter().map(|p| p.color.to_css()).collect();
        self.generation = Some(field.generation());
    }
}

pub fn draw_face(surface: &Surface, state: &SurfaceState, field: &FaceField, cache: &mut ColorCache) {
    let ctx = &surface.ctx;
    surface.clear(state);
    if field.is_empty() {
        return;
    }
    cache.sync(field);
    let side = field.config.grid_size as f64;
    let mut last_style: Option<&str> = None;
    for (p, style) in field.particles.iter().zip(cache.styles.iter()) {
        if last_style != Some(style.as_str()) {
            ctx.set_fill_style_str(style);
            last_style = Some(style.as_str());
        }
        ctx.fill_rect(p.pos.x as f64, p.pos.y as f64, side, side);
    }
}
