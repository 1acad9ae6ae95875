// DOM ids, CSS class names and custom properties the page is built around.

// Controls
pub const ID_SLIDER: &str = "radiationSlider";
pub const ID_START_BUTTON: &str = "startBtn";
pub const ID_STOP_BUTTON: &str = "stopBtn";
pub const ID_RESET_BUTTON: &str = "resetBtn";
pub const ID_TEST_BUTTON: &str = "testBtn";

// Readouts
pub const ID_READING: &str = "radiationValue";
pub const ID_SLIDER_LABEL: &str = "sliderValue";
pub const ID_BAR: &str = "radiationBar";
pub const ID_STATUS_TEXT: &str = "statusText";
pub const ID_DEVICE_STATUS: &str = "deviceStatus";

// Effect layers
pub const ID_GLITCH_OVERLAY: &str = "glitchOverlay";
pub const ID_DISTORTION: &str = "screenDistortion";
pub const PARTICLE_PARENT_SELECTOR: &str = ".container";

// Classes
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_ANIMATED: &str = "animated";
pub const CLASS_UPDATING: &str = "updating";
pub const CLASS_SHAKE: &str = "screen-shake";
pub const CLASS_PARTICLE: &str = "radiation-particle";
pub const CLASS_READING_BASE: &str = "radiation-level";
pub const CLASS_STATUS_BASE: &str = "status";

// Custom properties
pub const PROP_NOISE_OPACITY: &str = "--noise-opacity";
pub const PROP_DRIFT: &str = "--drift";
pub const PROP_DRIFT_END: &str = "--drift-end";
pub const PROP_DURATION: &str = "--duration";

// Particles start just above the bottom edge of the container
pub const PARTICLE_BOTTOM: &str = "10px";

// Double-tap zoom guard window
pub const DOUBLE_TAP_MS: f64 = 300.0;
