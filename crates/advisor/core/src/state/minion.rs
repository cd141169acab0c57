//! Board minion state.

use bitflags::bitflags;

use super::CardId;

bitflags! {
    /// Combat-relevant flags for a minion on the board.
    ///
    /// Each bit mirrors one boolean the host snapshot exposes. Using bitflags
    /// keeps the per-minion footprint at one byte and makes flag queries O(1).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct MinionFlags: u8 {
        /// The minion may attack this turn (no summoning sickness, not frozen).
        const CAN_ATTACK    = 1 << 0;
        /// Attackers must target this minion first.
        const TAUNT         = 1 << 1;
        /// The minion cannot be targeted until it attacks.
        const STEALTH       = 1 << 2;
        /// The next damage instance is absorbed entirely.
        const DIVINE_SHIELD = 1 << 3;
    }
}

/// A minion on either side of the board at snapshot time.
///
/// `attack` and `health` are the *current* values after buffs and damage.
/// The same shape serves both friendly and enemy minions; flags that only
/// matter for one side (e.g. `CAN_ATTACK` for friendlies, `TAUNT` for
/// enemies) are simply ignored by queries on the other side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minion {
    pub id: CardId,
    pub attack: i32,
    pub health: i32,
    pub flags: MinionFlags,
}

impl Minion {
    pub const fn new(id: CardId, attack: i32, health: i32, flags: MinionFlags) -> Self {
        Self {
            id,
            attack,
            health,
            flags,
        }
    }

    #[inline]
    pub fn can_attack(&self) -> bool {
        self.flags.contains(MinionFlags::CAN_ATTACK)
    }

    #[inline]
    pub fn is_taunt(&self) -> bool {
        self.flags.contains(MinionFlags::TAUNT)
    }

    #[inline]
    pub fn is_stealth(&self) -> bool {
        self.flags.contains(MinionFlags::STEALTH)
    }

    #[inline]
    pub fn has_divine_shield(&self) -> bool {
        self.flags.contains(MinionFlags::DIVINE_SHIELD)
    }
}
