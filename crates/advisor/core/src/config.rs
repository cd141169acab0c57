/// Advisor configuration constants and tunable thresholds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileConfig {
    /// Fixed allowance for the combo-based lethal branch: if the enemy's
    /// effective health minus this turn's face attack is within the
    /// allowance (plus projected next-turn damage), the combo is considered
    /// in range next turn.
    pub combo_reach_allowance: i32,

    /// Extra allowance per stealthed friendly copy of the configured
    /// death-rattle minion (it will almost certainly connect next turn).
    pub stealth_rattler_bonus: i32,
}

impl ProfileConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum cards in hand.
    pub const MAX_HAND_CARDS: usize = 10;
    /// Maximum minions per board side.
    pub const MAX_BOARD_MINIONS: usize = 7;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_COMBO_REACH_ALLOWANCE: i32 = 14;
    pub const DEFAULT_STEALTH_RATTLER_BONUS: i32 = 5;

    pub fn new() -> Self {
        Self {
            combo_reach_allowance: Self::DEFAULT_COMBO_REACH_ALLOWANCE,
            stealth_rattler_bonus: Self::DEFAULT_STEALTH_RATTLER_BONUS,
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self::new()
    }
}
