pub mod color;
pub mod constants;
pub mod face;
pub mod interaction;
pub mod lifecycle;
pub mod sampling;
pub mod snow;
pub mod surface;

pub use color::Rgba;
pub use constants::*;
pub use face::{FaceConfig, FaceField, FaceScene};
pub use interaction::{to_local, Interaction, InteractionSampler, InteractionState};
pub use lifecycle::{Effect, Lifecycle};
pub use sampling::{FaceParticle, SampleError, SourceImage};
pub use snow::{SnowConfig, SnowField, Snowflake};
pub use surface::SurfaceState;
