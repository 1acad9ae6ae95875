// Vibration patterns (pulse/pause durations in ms), strongest last.
pub const PATTERN_FAINT: &[u32] = &[20];
pub const PATTERN_LOW: &[u32] = &[30];
pub const PATTERN_MEDIUM: &[u32] = &[40, 50, 40];
pub const PATTERN_HIGH: &[u32] = &[60, 30, 60];
pub const PATTERN_SEVERE: &[u32] = &[80, 40, 80, 40, 80];
pub const PATTERN_EXTREME: &[u32] = &[100, 50, 100, 50, 150];

/// Pattern for one click at `level`.
#[inline]
pub fn vibration_pattern(level: i32) -> &'static [u32] {
    match level {
        l if l < 100 => PATTERN_FAINT,
        l if l < 200 => PATTERN_LOW,
        l if l < 400 => PATTERN_MEDIUM,
        l if l < 600 => PATTERN_HIGH,
        l if l < 800 => PATTERN_SEVERE,
        _ => PATTERN_EXTREME,
    }
}
