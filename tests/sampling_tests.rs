// Host-side tests for image sampling into particles.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod surface {
        include!("../src/core/surface.rs");
    }
    pub mod sampling {
        include!("../src/core/sampling.rs");
    }
}

use fx::color::Rgba;
use fx::sampling::*;

const GAP: usize = 3;
const THRESHOLD: u8 = 50;

#[test]
fn opaque_uniform_image_fills_every_full_cell() {
    let color = Rgba::new(200, 120, 40, 255);
    for (w, h) in [(30, 30), (31, 20), (10, 11), (3, 3), (2, 9)] {
        let img = SourceImage::uniform(w, h, color);
        let buf = img.render_cropped(w, h);
        let particles = sample_particles(&buf, w, h, GAP, THRESHOLD).unwrap();
        assert_eq!(particles.len(), (w / GAP) * (h / GAP), "{w}x{h}");
        assert!(particles.iter().all(|p| p.color == color));
    }
}

#[test]
fn transparent_image_emits_nothing() {
    let img = SourceImage::uniform(40, 40, Rgba::new(255, 255, 255, 0));
    let buf = img.render_cropped(60, 30);
    let particles = sample_particles(&buf, 60, 30, GAP, THRESHOLD).unwrap();
    assert!(particles.is_empty());
}

#[test]
fn alpha_threshold_is_inclusive() {
    let w = 6;
    let h = 3;
    let mut buf = vec![0u8; w * h * 4];
    // cell at x=0 just below threshold, cell at x=3 exactly at threshold
    buf[3] = THRESHOLD - 1;
    buf[3 * 4 + 3] = THRESHOLD;
    let particles = sample_particles(&buf, w, h, GAP, THRESHOLD).unwrap();
    assert_eq!(particles.len(), 1);
    assert_eq!(particles[0].origin(), glam::Vec2::new(3.0, 0.0));
}

#[test]
fn particles_start_at_rest_on_their_origin() {
    let img = SourceImage::uniform(12, 9, Rgba::new(1, 2, 3, 255));
    let buf = img.render_cropped(12, 9);
    let particles = sample_particles(&buf, 12, 9, GAP, THRESHOLD).unwrap();
    for p in &particles {
        assert_eq!(p.pos, p.origin());
        assert_eq!(p.vel, glam::Vec2::ZERO);
        assert_eq!(p.origin().x as usize % GAP, 0);
        assert_eq!(p.origin().y as usize % GAP, 0);
    }
    // row-major order
    assert_eq!(particles[1].origin(), glam::Vec2::new(3.0, 0.0));
    assert_eq!(particles[4].origin(), glam::Vec2::new(0.0, 3.0));
}

#[test]
fn sampling_traces_only_the_visible_subject() {
    // left half opaque red, right half transparent
    let (w, h) = (12, 6);
    let mut rgba = Vec::with_capacity(w * h * 4);
    for _y in 0..h {
        for x in 0..w {
            let a = if x < w / 2 { 255 } else { 0 };
            rgba.extend_from_slice(&[255, 0, 0, a]);
        }
    }
    let img = SourceImage::new(w, h, rgba).unwrap();
    let buf = img.render_cropped(w, h);
    let particles = sample_particles(&buf, w, h, GAP, THRESHOLD).unwrap();
    assert_eq!(particles.len(), 2 * 2);
    assert!(particles.iter().all(|p| p.origin().x < (w / 2) as f32));
}

#[test]
fn render_cropped_keeps_the_center_of_a_wide_image() {
    // 3 vertical bands: blue | green | red, each 10px wide
    let (w, h) = (30, 10);
    let mut rgba = Vec::with_capacity(w * h * 4);
    for _y in 0..h {
        for x in 0..w {
            let px = match x / 10 {
                0 => [0, 0, 255, 255],
                1 => [0, 255, 0, 255],
                _ => [255, 0, 0, 255],
            };
            rgba.extend_from_slice(&px);
        }
    }
    let img = SourceImage::new(w, h, rgba).unwrap();
    // square destination crops to the middle 10x10 band
    let buf = img.render_cropped(20, 20);
    assert!(buf.chunks_exact(4).all(|px| px == [0, 255, 0, 255]));
}

#[test]
fn mismatched_buffer_is_rejected() {
    let err = sample_particles(&[0u8; 10], 2, 2, GAP, THRESHOLD).unwrap_err();
    assert_eq!(
        err,
        SampleError::BufferSize {
            width: 2,
            height: 2,
            expected: 16,
            actual: 10
        }
    );
    assert!(SourceImage::new(2, 2, vec![0; 15]).is_err());
}

#[test]
fn zero_gap_is_rejected() {
    let err = sample_particles(&[0u8; 16], 2, 2, 0, THRESHOLD).unwrap_err();
    assert_eq!(err, SampleError::ZeroGap);
}

#[test]
fn color_formats_as_css_at_draw_time() {
    assert_eq!(Rgba::new(10, 20, 30, 255).to_css(), "rgba(10, 20, 30, 1)");
    assert_eq!(Rgba::new(10, 20, 30, 0).to_css(), "rgba(10, 20, 30, 0.000)");
    assert_eq!(Rgba::new(1, 2, 3, 51).to_css(), "rgba(1, 2, 3, 0.200)");
}
