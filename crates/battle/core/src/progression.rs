//! Experience curve.

/// Experience needed to advance from `level` to `level + 1`:
/// `40 × level² + 60 × level`.
pub const fn exp_to_level(level: u32) -> u64 {
    let level = level as u64;
    40 * level * level + 60 * level
}

/// Level and experience progress of a hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Experience {
    pub level: u32,
    /// Experience accumulated toward the next level.
    pub current: u64,
}

impl Experience {
    pub const fn new(level: u32) -> Self {
        Self { level, current: 0 }
    }

    pub const fn to_next_level(&self) -> u64 {
        exp_to_level(self.level)
    }

    pub fn gain(&mut self, amount: u32) {
        self.current += u64::from(amount);
    }

    pub const fn can_level_up(&self) -> bool {
        self.current >= self.to_next_level()
    }

    /// Advance one level if enough experience was gained, carrying the
    /// surplus over. Returns whether the level changed.
    pub fn level_up(&mut self) -> bool {
        if !self.can_level_up() {
            return false;
        }
        self.current -= self.to_next_level();
        self.level += 1;
        true
    }

    /// Gain experience and take every level it pays for. Returns the number
    /// of levels gained.
    pub fn gain_and_level(&mut self, amount: u32) -> u32 {
        self.gain(amount);
        let mut gained = 0;
        while self.level_up() {
            gained += 1;
        }
        gained
    }
}

impl Default for Experience {
    fn default() -> Self {
        Self::new(1)
    }
}
