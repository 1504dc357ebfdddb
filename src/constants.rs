/// Paint styles and DOM hooks for the web front-end.
///
/// Simulation tuning lives in `core/constants.rs`; everything here only
/// affects how particles look on the canvas or where the effects mount.
// Element ids picked up by the auto-mount in `start()`
pub const SNOW_CANVAS_ID: &str = "snow-canvas";
pub const FACE_CANVAS_ID: &str = "face-canvas";
pub const FACE_SOURCE_ATTR: &str = "data-src";

// Snow palette, dark scheme
pub const SNOW_DARK_INNER: &str = "rgba(255, 255, 255, 0.9)";
pub const SNOW_DARK_OUTER: &str = "rgba(255, 255, 255, 0)";

// Snow palette, light scheme (bluish flakes with a faint outline for contrast)
pub const SNOW_LIGHT_INNER: &str = "rgba(210, 225, 255, 0.95)";
pub const SNOW_LIGHT_OUTER: &str = "rgba(210, 225, 255, 0)";
pub const SNOW_LIGHT_OUTLINE: &str = "rgba(160, 180, 210, 0.4)";
pub const SNOW_OUTLINE_WIDTH: f64 = 0.5;

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
