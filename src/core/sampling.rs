use super::color::Rgba;
use super::surface::center_crop;
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSize {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("grid step must be at least 1")]
    ZeroGap,
}

/// Particle of the image-disintegration effect. `origin` is fixed at
/// creation and acts as the spring rest point.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgba,
    origin: Vec2,
}

impl FaceParticle {
    pub fn at_rest(origin: Vec2, color: Rgba) -> Self {
        Self {
            pos: origin,
            vel: Vec2::ZERO,
            color,
            origin,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn displacement(&self) -> Vec2 {
        self.pos - self.origin
    }
}

#[inline]
fn check_len(width: usize, height: usize, actual: usize) -> Result<(), SampleError> {
    let expected = width * height * 4;
    if actual != expected {
        return Err(SampleError::BufferSize {
            width,
            height,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Decoded RGBA pixels of the source image at its natural size.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceImage {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl SourceImage {
    pub fn new(width: usize, height: usize, rgba: Vec<u8>) -> Result<Self, SampleError> {
        check_len(width, height, rgba.len())?;
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn uniform(width: usize, height: usize, color: Rgba) -> Self {
        let rgba = [color.r, color.g, color.b, color.a].repeat(width * height);
        Self {
            width,
            height,
            rgba,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Draws the center-cropped region into a `dst_w x dst_h` RGBA buffer
    /// using nearest-pixel scaling. An empty source yields a transparent buffer.
    pub fn render_cropped(&self, dst_w: usize, dst_h: usize) -> Vec<u8> {
        let mut out = vec![0u8; dst_w * dst_h * 4];
        if self.width == 0 || self.height == 0 || dst_w == 0 || dst_h == 0 {
            return out;
        }
        let crop = center_crop(
            self.width as f32,
            self.height as f32,
            dst_w as f32,
            dst_h as f32,
        );
        let sx_scale = crop.w / dst_w as f32;
        let sy_scale = crop.h / dst_h as f32;
        let max_x = self.width - 1;
        let max_y = self.height - 1;
        for y in 0..dst_h {
            let sy = ((crop.y + (y as f32 + 0.5) * sy_scale) as usize).min(max_y);
            for x in 0..dst_w {
                let sx = ((crop.x + (x as f32 + 0.5) * sx_scale) as usize).min(max_x);
                let src = (sy * self.width + sx) * 4;
                let dst = (y * dst_w + x) * 4;
                out[dst..dst + 4].copy_from_slice(&self.rgba[src..src + 4]);
            }
        }
        out
    }
}

/// Emits one particle per full `gap x gap` grid cell whose top-left pixel is
/// at least `alpha_threshold` opaque. Cells are visited row by row.
pub fn sample_particles(
    rgba: &[u8],
    width: usize,
    height: usize,
    gap: usize,
    alpha_threshold: u8,
) -> Result<Vec<FaceParticle>, SampleError> {
    if gap == 0 {
        return Err(SampleError::ZeroGap);
    }
    check_len(width, height, rgba.len())?;

    let cols = width / gap;
    let rows = height / gap;
    let mut particles = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        let y = row * gap;
        for col in 0..cols {
            let x = col * gap;
            let i = (y * width + x) * 4;
            let Some(color) = Rgba::from_slice(&rgba[i..]) else {
                continue;
            };
            if !color.is_visible(alpha_threshold) {
                continue;
            }
            particles.push(FaceParticle::at_rest(Vec2::new(x as f32, y as f32), color));
        }
    }
    Ok(particles)
}
