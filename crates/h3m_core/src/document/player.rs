use crate::codes::{AiTactic, Version};
use crate::error::DecodeError;
use crate::reader::LittleEndianReader;

use super::read_flag;

/// One of the 8 fixed player slots. A slot nobody can play carries no
/// info block; its on-disk body is version-sized padding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerSlot {
    pub can_be_human: bool,
    pub can_be_computer: bool,
    pub info: Option<PlayerInfo>,
}

impl PlayerSlot {
    pub fn present(&self) -> bool {
        self.can_be_human || self.can_be_computer
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfo {
    pub ai_tactic: AiTactic,
    /// Factions this player may start with, least significant bit first.
    pub allowed_factions: Vec<bool>,
    pub is_faction_random: bool,
    pub main_town: Option<MainTown>,
    pub has_random_hero: bool,
    pub custom_hero: Option<CustomHero>,
    /// Named heroes owned by the slot; absent from the earliest revision.
    pub heroes: Option<Vec<HeroEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainTown {
    /// The two generation flags were added after the first revision; the
    /// coordinate triple exists in every revision.
    pub generate_hero_at_town: Option<bool>,
    pub generate_hero: Option<bool>,
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomHero {
    pub id: u8,
    pub portrait: u8,
    pub name: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroEntry {
    pub id: u8,
    pub name: Vec<u8>,
}

/// Sentinel id meaning the slot has no customized main hero.
const NO_CUSTOM_HERO: u8 = 0xFF;

pub fn decode_player_slot(
    r: &mut LittleEndianReader<'_>,
    version: Version,
) -> Result<PlayerSlot, DecodeError> {
    let can_be_human = read_flag(r, "human availability flag")?;
    let can_be_computer = read_flag(r, "computer availability flag")?;

    if !can_be_human && !can_be_computer {
        r.skip(version.absent_player_padding())?;
        return Ok(PlayerSlot {
            can_be_human,
            can_be_computer,
            info: None,
        });
    }

    let info = decode_player_info(r, version)?;
    Ok(PlayerSlot {
        can_be_human,
        can_be_computer,
        info: Some(info),
    })
}

fn decode_player_info(
    r: &mut LittleEndianReader<'_>,
    version: Version,
) -> Result<PlayerInfo, DecodeError> {
    let offset = r.position();
    let raw_tactic = r.read_u8()?;
    let ai_tactic = AiTactic::from_code(raw_tactic).ok_or(DecodeError::UnknownCode {
        field: "ai tactic",
        value: raw_tactic.into(),
        offset,
    })?;

    if version == Version::ShadowOfDeath {
        r.skip(1)?; // reserved
    }

    let allowed_factions = r.read_bits(version.faction_bits())?;
    let is_faction_random = r.read_u8()? != 0;

    let has_main_town = r.read_u8()? != 0;
    let main_town = if has_main_town {
        let (generate_hero_at_town, generate_hero) =
            if version != Version::RestorationOfErathia {
                (Some(r.read_u8()? != 0), Some(r.read_u8()? != 0))
            } else {
                (None, None)
            };
        Some(MainTown {
            generate_hero_at_town,
            generate_hero,
            x: r.read_u8()?,
            y: r.read_u8()?,
            z: r.read_u8()?,
        })
    } else {
        None
    };

    let has_random_hero = r.read_u8()? != 0;

    let hero_id = r.read_u8()?;
    let custom_hero = if hero_id != NO_CUSTOM_HERO {
        let portrait = r.read_u8()?;
        let name = r.read_length_prefixed()?;
        Some(CustomHero {
            id: hero_id,
            portrait,
            name,
        })
    } else {
        None
    };

    let heroes = if version != Version::RestorationOfErathia {
        Some(decode_hero_roster(r)?)
    } else {
        None
    };

    Ok(PlayerInfo {
        ai_tactic,
        allowed_factions,
        is_faction_random,
        main_town,
        has_random_hero,
        custom_hero,
        heroes,
    })
}

fn decode_hero_roster(r: &mut LittleEndianReader<'_>) -> Result<Vec<HeroEntry>, DecodeError> {
    r.skip(1)?; // reserved
    let count = r.read_u8()? as usize;
    r.skip(3)?; // reserved
    let mut heroes = Vec::with_capacity(count);
    for _ in 0..count {
        heroes.push(HeroEntry {
            id: r.read_u8()?,
            name: r.read_length_prefixed()?,
        });
    }
    Ok(heroes)
}
