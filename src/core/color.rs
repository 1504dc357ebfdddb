// Structured RGBA color; formatted into a paint string only at draw time.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Reads one pixel from a tightly packed RGBA buffer. `None` when the
    /// slice is shorter than four bytes.
    #[inline]
    pub fn from_slice(px: &[u8]) -> Option<Self> {
        match px {
            [r, g, b, a, ..] => Some(Self::new(*r, *g, *b, *a)),
            _ => None,
        }
    }

    #[inline]
    pub fn alpha_f32(&self) -> f32 {
        self.a as f32 / 255.0
    }

    #[inline]
    pub fn is_visible(&self, alpha_threshold: u8) -> bool {
        self.a >= alpha_threshold
    }

    /// CSS `rgba()` string accepted by canvas fill styles.
    pub fn to_css(&self) -> String {
        let alpha = self.alpha_f32();
        if self.a == 255 {
            format!("rgba({}, {}, {}, 1)", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, alpha)
        }
    }
}
