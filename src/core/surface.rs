// Surface sizing and crop math shared by both effects. Particles live in CSS-pixel
// space; the device pixel ratio only affects the backing store and draw transform.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceState {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            dpr: 1.0,
        }
    }
}

impl SurfaceState {
    /// Builds the surface state from container bounds (CSS pixels) and the
    /// host device pixel ratio. Non-finite or negative inputs collapse to an
    /// empty surface; a missing or bogus ratio falls back to 1.
    pub fn configure(width: f32, height: f32, dpr: f32) -> Self {
        let clean = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self {
            width: clean(width),
            height: clean(height),
            dpr,
        }
    }

    /// Backing store size in device pixels, never smaller than 1x1.
    #[inline]
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.dpr) as u32;
        let h = (self.height * self.dpr) as u32;
        (w.max(1), h.max(1))
    }

    /// Whole-pixel size of a CSS-space offscreen buffer.
    #[inline]
    pub fn pixel_size(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Source rectangle in image pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Centered crop of a `src_w x src_h` image matching the destination aspect
/// ratio. The longer axis (relative to the destination) is trimmed evenly on
/// both sides so the image is neither letterboxed nor stretched.
pub fn center_crop(src_w: f32, src_h: f32, dst_w: f32, dst_h: f32) -> CropRect {
    let full = CropRect {
        x: 0.0,
        y: 0.0,
        w: src_w.max(0.0),
        h: src_h.max(0.0),
    };
    if src_w <= 0.0 || src_h <= 0.0 || dst_w <= 0.0 || dst_h <= 0.0 {
        return full;
    }
    let src_ratio = src_w / src_h;
    let dst_ratio = dst_w / dst_h;
    if src_ratio > dst_ratio {
        // wider than the destination
        let w = src_h * dst_ratio;
        CropRect {
            x: (src_w - w) * 0.5,
            y: 0.0,
            w,
            h: src_h,
        }
    } else {
        let h = src_w / dst_ratio;
        CropRect {
            x: 0.0,
            y: (src_h - h) * 0.5,
            w: src_w,
            h,
        }
    }
}
