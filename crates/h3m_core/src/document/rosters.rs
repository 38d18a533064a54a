use crate::error::DecodeError;
use crate::reader::LittleEndianReader;

use super::PLAYER_SLOT_COUNT;

/// Heroes barred from the tavern pool, with the players they are barred
/// for as a bitmask. Present only in the latest revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisposedHero {
    pub id: u8,
    pub portrait: u8,
    pub name: Vec<u8>,
    pub players: u8,
}

/// Per-hero customization slot from the fixed 156-entry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredefinedHero {
    pub custom: bool,
    /// Leading byte of the customization payload. The rest of that
    /// payload's layout is unknown and is not consumed.
    pub detail: Option<u8>,
}

pub const PREDEFINED_HERO_COUNT: usize = 156;
pub const SPELL_POOL_BYTES: usize = 9;
pub const ABILITY_POOL_BYTES: usize = 4;

/// The count byte is a presence gate only: any nonzero value is followed
/// by exactly one team id per fixed player slot, never fewer or more.
pub fn decode_teams(
    r: &mut LittleEndianReader<'_>,
) -> Result<(u8, Option<[u8; PLAYER_SLOT_COUNT]>), DecodeError> {
    let count = r.read_u8()?;
    if count == 0 {
        return Ok((0, None));
    }
    let mut teams = [0u8; PLAYER_SLOT_COUNT];
    for team in &mut teams {
        *team = r.read_u8()?;
    }
    Ok((count, Some(teams)))
}

pub fn decode_placeholder_heroes(
    r: &mut LittleEndianReader<'_>,
) -> Result<Vec<u8>, DecodeError> {
    let count = r.read_u32_le()? as usize;
    r.read_bytes(count)
}

pub fn decode_disposed_heroes(
    r: &mut LittleEndianReader<'_>,
) -> Result<Vec<DisposedHero>, DecodeError> {
    let count = r.read_u8()? as usize;
    let mut heroes = Vec::with_capacity(count);
    for _ in 0..count {
        heroes.push(DisposedHero {
            id: r.read_u8()?,
            portrait: r.read_u8()?,
            name: r.read_length_prefixed()?,
            players: r.read_u8()?,
        });
    }
    Ok(heroes)
}

pub fn decode_predefined_heroes(
    r: &mut LittleEndianReader<'_>,
) -> Result<Vec<PredefinedHero>, DecodeError> {
    let mut heroes = Vec::with_capacity(PREDEFINED_HERO_COUNT);
    for _ in 0..PREDEFINED_HERO_COUNT {
        let custom = r.read_u8()? != 0;
        let detail = if custom { Some(r.read_u8()?) } else { None };
        heroes.push(PredefinedHero { custom, detail });
    }
    Ok(heroes)
}
