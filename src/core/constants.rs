// Shared simulation tuning constants used by both effects.

// Snow field
pub const FLAKE_COUNT: usize = 140;
pub const FLAKE_RADIUS_MIN: f32 = 1.2;
pub const FLAKE_RADIUS_SPAN: f32 = 2.3; // radius in [1.2, 3.5)
pub const FLAKE_SPEED_Y_MIN: f32 = 20.0; // units per second
pub const FLAKE_SPEED_Y_SPAN: f32 = 40.0;
pub const FLAKE_SPEED_X_MIN: f32 = -10.0;
pub const FLAKE_SPEED_X_SPAN: f32 = 20.0;
pub const FLAKE_OPACITY_MIN: f32 = 0.3;
pub const FLAKE_OPACITY_SPAN: f32 = 0.5;
pub const FLAKE_GLOW_SCALE: f32 = 2.0; // painted radius relative to stored radius

// Snow boundaries
pub const WRAP_MARGIN: f32 = 20.0; // horizontal slack before wrapping to the other side
pub const RECYCLE_MARGIN: f32 = 10.0; // below the bottom edge; respawn the same distance above the top

// Image sampling
pub const GRID_SIZE: usize = 3; // sampling step and painted square side
pub const ALPHA_THRESHOLD: u8 = 50;

// Face physics (per frame)
pub const HOLE_RADIUS: f32 = 32.0;
pub const REPULSION_STRENGTH: f32 = 3.2;
pub const SPRING: f32 = 0.02;
pub const DAMPING: f32 = 0.86;

// Interaction
pub const TOUCH_RELEASE_DELAY_MS: i32 = 220;

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
