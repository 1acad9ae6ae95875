/// Current and previous radiation level.
///
/// Values are stored as given; the slider bounds the input, nothing here
/// clamps or validates it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelStore {
    current: i32,
    last: i32,
}

impl LevelStore {
    pub fn new(level: i32) -> Self {
        Self {
            current: level,
            last: level,
        }
    }

    pub fn set_level(&mut self, level: i32) {
        self.last = self.current;
        self.current = level;
    }

    #[inline]
    pub fn level(&self) -> i32 {
        self.current
    }

    #[inline]
    pub fn last_level(&self) -> i32 {
        self.last
    }

    /// Absolute distance between the current and the previous level.
    #[inline]
    pub fn changed_by(&self) -> u32 {
        self.current.abs_diff(self.last)
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.last = 0;
    }
}
