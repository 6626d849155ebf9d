//! Simulation constants and tuning parameters.

/// Nominal display refresh rate the frame driver targets (Hz).
pub const FRAME_RATE: u32 = 60;

// --- Arena ---

/// Default arena width in pixels.
pub const ARENA_WIDTH: f64 = 600.0;

/// Default arena height in pixels.
pub const ARENA_HEIGHT: f64 = 400.0;

// --- Rendering ---

/// Angular step between polygon vertices when tracing a circle (degrees).
pub const CIRCLE_STEP_DEG: u32 = 10;

/// Vertices per traced circle: 0..=360 in `CIRCLE_STEP_DEG` steps.
pub const CIRCLE_VERTEX_COUNT: usize = (360 / CIRCLE_STEP_DEG) as usize + 1;

// --- Tags ---

/// Marks an entity whose Follow target tracks the canvas mouse position.
pub const FOLLOW_MOUSE_TAG: &str = "followMouse";

// --- Scene layout ---

/// Circles spawned by every scene preset.
pub const SCENE_CIRCLE_COUNT: usize = 20;

/// Circles per grid row.
pub const GRID_COLUMNS: usize = 10;

/// Offset of the first grid cell from the arena origin (pixels).
pub const GRID_ORIGIN: f64 = 50.0;

/// Spacing between grid cells (pixels).
pub const GRID_SPACING: f64 = 50.0;

/// Radius of scene circles (pixels).
pub const CIRCLE_RADIUS: f64 = 20.0;

/// Per-tick velocity retention for scene circles.
pub const CIRCLE_FRICTION: f64 = 0.99;

/// Gravity magnitude applied to rain circles (pixels per tick²).
pub const RAIN_GRAVITY: f64 = 0.09807;

/// Gravity direction for rain circles (degrees, 90 = screen down).
pub const RAIN_GRAVITY_DIRECTION: f64 = 90.0;

/// Half-width of the random horizontal launch speed for rain circles.
pub const RAIN_SPREAD: f64 = 0.5;

/// Easing for circles chasing the mouse.
pub const FOLLOW_MOUSE_EASING: f64 = 0.05;

/// Easing for circles converging on the arena center.
pub const FOLLOW_POINT_EASING: f64 = 0.02;

// --- Engine ---

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
