//! Card identity constants.
//!
//! Identities are opaque handles agreed with the host; only equality matters.
//! Grouped by how the profile uses them, not by game taxonomy.

use advisor_core::CardId;

// ===== neutral utility =====
pub const THE_COIN: CardId = CardId(1);

// ===== damage spells (catalog entries) =====
pub const SWIPE: CardId = CardId(10);
pub const LIVING_ROOTS: CardId = CardId(11);

// ===== combo pieces =====
pub const FORCE_OF_NATURE: CardId = CardId(20);
pub const SAVAGE_ROAR: CardId = CardId(21);

// ===== ramp and openings =====
pub const INNERVATE: CardId = CardId(30);
pub const WILD_GROWTH: CardId = CardId(31);
pub const DARNASSUS_ASPIRANT: CardId = CardId(32);
pub const SHADE_OF_NAXXRAMAS: CardId = CardId(33);
pub const PILOTED_SHREDDER: CardId = CardId(34);
pub const DRUID_OF_THE_CLAW: CardId = CardId(35);

// ===== value and draw =====
pub const KEEPER_OF_THE_GROVE: CardId = CardId(40);
pub const ANCIENT_OF_LORE: CardId = CardId(41);
pub const EMPEROR_THAURISSAN: CardId = CardId(42);

// ===== sticky deathrattle minions (trade exempt) =====
pub const HARVEST_GOLEM: CardId = CardId(50);
pub const HAUNTED_CREEPER: CardId = CardId(51);

// ===== enemy taunts worth silencing =====
pub const SENJIN_SHIELDMASTA: CardId = CardId(60);
pub const SLUDGE_BELCHER: CardId = CardId(61);
pub const IRONFUR_GRIZZLY: CardId = CardId(62);
pub const FEN_CREEPER: CardId = CardId(63);
pub const ANCIENT_OF_WAR: CardId = CardId(64);

// ===== hero powers =====
pub const STEADY_SHOT: CardId = CardId(100);
pub const SHAPESHIFT: CardId = CardId(101);
pub const LIFE_TAP: CardId = CardId(102);
pub const FIREBLAST: CardId = CardId(103);
pub const REINFORCE: CardId = CardId(104);
pub const ARMOR_UP: CardId = CardId(105);
pub const LESSER_HEAL: CardId = CardId(106);
pub const DAGGER_MASTERY: CardId = CardId(107);
