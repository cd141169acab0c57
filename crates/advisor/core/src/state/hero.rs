//! Hero state.

/// Health and armor of a hero at snapshot time.
///
/// All damage-sufficiency arithmetic in this workspace treats health and
/// armor as a single scalar via [`HeroState::effective_health`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroState {
    pub health: i32,
    pub armor: i32,
}

impl HeroState {
    pub const fn new(health: i32, armor: i32) -> Self {
        Self { health, armor }
    }

    /// Health plus armor, the single target scalar for lethal arithmetic.
    #[inline]
    pub fn effective_health(&self) -> i32 {
        self.health + self.armor
    }
}
