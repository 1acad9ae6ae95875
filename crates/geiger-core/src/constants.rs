// Shared timing and threshold constants for the click engine and its effects.

// Level range exposed by the slider
pub const LEVEL_MAX: i32 = 1000;

// Scheduler
pub const IDLE_REPOLL_MS: f64 = 100.0; // re-poll interval while the level is zero
pub const MIN_CADENCE_MS: f64 = 20.0; // floor applied to every sampled cadence

// Display
pub const ANIMATE_THRESHOLD: u32 = 50; // |current - last| above this triggers the count-up
pub const COUNT_UP_STEPS: usize = 5;
pub const COUNT_UP_START_DELAY_MS: i32 = 50;
pub const COUNT_UP_STEP_MS: i32 = 30;
pub const COUNT_UP_SETTLE_MS: i32 = 100;
pub const PLACEHOLDER_MAX: u32 = 1000; // placeholders are drawn from [0, PLACEHOLDER_MAX)

// Click effects
pub const SHAKE_LEVEL: i32 = 700;
pub const SHAKE_MS: i32 = 150;
pub const CLICK_GLITCH_LEVEL: i32 = 600;
pub const CLICK_GLITCH_CHANCE: f64 = 0.1;
pub const PARTICLE_CHANCE: f64 = 0.3;
pub const PARTICLE_MIN_LEVEL: i32 = 100;
pub const PARTICLE_LEVEL_STEP: i32 = 200; // one particle per step of level
pub const PARTICLE_MAX: usize = 5;
pub const PARTICLE_STAGGER_MS: i32 = 100;
pub const PARTICLE_ACTIVATE_MS: i32 = 10;
pub const PARTICLE_REMOVE_GRACE_MS: f64 = 100.0;
pub const BAR_FLASH_MS: i32 = 300;

// Glitch
pub const GLITCH_MIN_LEVEL: i32 = 200;
pub const GLITCH_PULSE_MS: i32 = 100;
pub const DISTORTION_LEVEL: i32 = 600;
pub const DISTORTION_CHANCE: f64 = 0.3;
pub const DISTORTION_MS: i32 = 200;

// Ambient loops
pub const AMBIENT_GLITCH_LEVEL: i32 = 200;
pub const AMBIENT_GLITCH_DELAY_MIN_MS: f64 = 5000.0;
pub const AMBIENT_GLITCH_DELAY_MAX_MS: f64 = 20000.0;
pub const NOISE_INTERVAL_MS: i32 = 1000;
pub const NOISE_MIN_LEVEL: i32 = 100;
pub const NOISE_OPACITY_SCALE: f32 = 0.1;
