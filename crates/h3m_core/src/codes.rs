use std::fmt;

use serde::{Deserialize, Serialize};

/// Format revision of a map stream.
///
/// Nearly every optional section and field width in the container is
/// conditional on this code, so the decoder threads it through every
/// record. The on-disk code is four bytes little-endian even though only
/// the low byte varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Version {
    RestorationOfErathia,
    ArmageddonsBlade,
    ShadowOfDeath,
}

impl Version {
    pub const ROE_CODE: u32 = 0x0E;
    pub const AB_CODE: u32 = 0x15;
    pub const SOD_CODE: u32 = 0x1C;

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            Self::ROE_CODE => Some(Self::RestorationOfErathia),
            Self::AB_CODE => Some(Self::ArmageddonsBlade),
            Self::SOD_CODE => Some(Self::ShadowOfDeath),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Self::RestorationOfErathia => Self::ROE_CODE,
            Self::ArmageddonsBlade => Self::AB_CODE,
            Self::ShadowOfDeath => Self::SOD_CODE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RestorationOfErathia => "RoE",
            Self::ArmageddonsBlade => "AB",
            Self::ShadowOfDeath => "SoD",
        }
    }

    /// Bytes consumed for a player slot nobody can play.
    pub fn absent_player_padding(self) -> usize {
        match self {
            Self::RestorationOfErathia => 6,
            Self::ArmageddonsBlade => 12,
            Self::ShadowOfDeath => 13,
        }
    }

    /// Bits in the per-player allowed-factions set.
    pub fn faction_bits(self) -> usize {
        match self {
            Self::ShadowOfDeath => 16,
            _ => 8,
        }
    }

    /// Bytes backing the allowed-heroes pool bitset.
    pub fn hero_pool_bytes(self) -> usize {
        match self {
            Self::RestorationOfErathia => 16,
            _ => 20,
        }
    }

    /// Bytes backing the allowed-artifacts pool bitset; the section does
    /// not exist at all in the earliest revision.
    pub fn artifact_pool_bytes(self) -> Option<usize> {
        match self {
            Self::RestorationOfErathia => None,
            Self::ArmageddonsBlade => Some(17),
            Self::ShadowOfDeath => Some(18),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side length class of the square map grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl MapSize {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            36 => Some(Self::Small),
            72 => Some(Self::Medium),
            108 => Some(Self::Large),
            144 => Some(Self::ExtraLarge),
            _ => None,
        }
    }

    /// Tiles along one edge; also the raw on-disk code.
    pub fn side(self) -> u32 {
        match self {
            Self::Small => 36,
            Self::Medium => 72,
            Self::Large => 108,
            Self::ExtraLarge => 144,
        }
    }

    pub fn code(self) -> u32 {
        self.side()
    }

    /// Tiles per level of the map.
    pub fn tile_count(self) -> usize {
        let side = self.side() as usize;
        side * side
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
            Self::ExtraLarge => "XL",
        }
    }
}

impl fmt::Display for MapSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Expert,
    Impossible,
}

impl Difficulty {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Easy),
            1 => Some(Self::Normal),
            2 => Some(Self::Hard),
            3 => Some(Self::Expert),
            4 => Some(Self::Impossible),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Easy => 0,
            Self::Normal => 1,
            Self::Hard => 2,
            Self::Expert => 3,
            Self::Impossible => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Expert => "expert",
            Self::Impossible => "impossible",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computer behaviour declared for a playable slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiTactic {
    Random,
    Warrior,
    Builder,
    Explorer,
}

impl AiTactic {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Random),
            1 => Some(Self::Warrior),
            2 => Some(Self::Builder),
            3 => Some(Self::Explorer),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Random => 0,
            Self::Warrior => 1,
            Self::Builder => 2,
            Self::Explorer => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Warrior => "warrior",
            Self::Builder => "builder",
            Self::Explorer => "explorer",
        }
    }
}

impl fmt::Display for AiTactic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flag color of a player slot, fixed by slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    Tan,
    Green,
    Orange,
    Purple,
    Teal,
    Pink,
}

impl PlayerColor {
    pub const PALETTE: [Self; 8] = [
        Self::Red,
        Self::Blue,
        Self::Tan,
        Self::Green,
        Self::Orange,
        Self::Purple,
        Self::Teal,
        Self::Pink,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::PALETTE.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Tan => "tan",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Teal => "teal",
            Self::Pink => "pink",
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
