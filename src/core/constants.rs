// Shared tuning constants for the page effects. Distances are canvas pixels,
// times are milliseconds unless the name says otherwise.

// Particle field
pub const PARTICLE_MAX_COUNT: usize = 50;
pub const PARTICLE_AREA_PER_PARTICLE: f32 = 15_000.0; // one particle per this many px²
pub const PARTICLE_SPEED_SPAN: f32 = 0.5; // velocity components drawn from ±span/2
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_LIFE_MIN: f32 = 50.0; // frames
pub const PARTICLE_LIFE_SPAN: f32 = 100.0;
pub const PARTICLE_MAX_OPACITY: f32 = 0.5;

// Pointer attraction
pub const POINTER_INFLUENCE_RADIUS: f32 = 100.0;
pub const POINTER_PULL: f32 = 0.001;

// Proximity graph
pub const LINK_DISTANCE: f32 = 80.0;
pub const LINK_ALPHA: f32 = 0.2;
pub const LINK_WIDTH: f64 = 1.0;

// Cursor trail
pub const CURSOR_TRAIL_SMOOTHING: f32 = 0.1; // fraction of the gap closed per frame
pub const CURSOR_DOT_HOVER_SCALE: f32 = 2.0;
pub const CURSOR_OUTLINE_HOVER_SCALE: f32 = 1.5;

// Reveal
pub const REVEAL_MAX_DELAY_TIER: usize = 3;
pub const REVEAL_CASCADE_STEP_MS: i32 = 100;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Typing
pub const TYPING_START_DELAY_MS: i32 = 1000;
pub const TYPING_CHAR_INTERVAL_MS: i32 = 100;
pub const TYPING_COMPLETE_DELAY_MS: i32 = 2000;

// Counters
pub const COUNTER_DURATION_MS: u64 = 2000;

// Navigation
pub const NAV_SOLID_AFTER_PX: f64 = 100.0;
pub const NAV_AUTOHIDE_AFTER_PX: f64 = 500.0;
pub const NAV_DESKTOP_MIN_WIDTH_PX: f64 = 768.0;
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 200.0;

// Contact form
pub const TEXT_FIELD_MIN_CHARS: usize = 2;
pub const SIMULATED_SUBMIT_MS: i32 = 2000;

// Parallax
pub const PARALLAX_RATE: f64 = -0.5;
pub const FLOATING_CARD_BASE_RATE: f64 = 0.1;
pub const FLOATING_CARD_RATE_STEP: f64 = 0.05;

// Notifications
pub const NOTIFICATION_DISMISS_MS: i32 = 5000;

// Window resize coalescing
pub const RESIZE_DEBOUNCE_MS: i32 = 100;
