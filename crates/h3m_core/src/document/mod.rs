pub mod conditions;
pub mod player;
pub mod rosters;
pub mod terrain;

use crate::codes::{Difficulty, MapSize, Version};
use crate::error::DecodeError;
use crate::reader::LittleEndianReader;

use conditions::{LossCondition, VictoryCondition, decode_loss, decode_victory};
use player::{PlayerSlot, decode_player_slot};
use rosters::{
    ABILITY_POOL_BYTES, DisposedHero, PredefinedHero, SPELL_POOL_BYTES, decode_disposed_heroes,
    decode_placeholder_heroes, decode_predefined_heroes, decode_teams,
};
use terrain::{TerrainGrid, decode_terrain};

pub const PLAYER_SLOT_COUNT: usize = 8;

/// Reserved run between the hero and artifact pools; purpose unknown,
/// width fixed across revisions.
const RESERVED_BLOCK_BYTES: usize = 31;

/// The fully decoded tree for one map stream.
///
/// Built atomically by a single forward pass; strings are kept as raw
/// bytes because the container predates any text encoding guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDocument {
    pub version: Version,
    pub any_players: bool,
    pub size: MapSize,
    pub has_subterranean: bool,
    pub name: Vec<u8>,
    pub description: Vec<u8>,
    pub difficulty: Difficulty,
    /// Hero level cap; absent from the earliest revision.
    pub max_level: Option<u8>,
    pub players: [PlayerSlot; PLAYER_SLOT_COUNT],
    pub victory: Option<VictoryCondition>,
    pub loss: Option<LossCondition>,
    pub teams_count: u8,
    pub teams: Option<[u8; PLAYER_SLOT_COUNT]>,
    pub allowed_heroes: Vec<bool>,
    pub placeholder_heroes: Option<Vec<u8>>,
    pub disposed_heroes: Option<Vec<DisposedHero>>,
    pub allowed_artifacts: Option<Vec<bool>>,
    pub allowed_spells: Option<Vec<bool>>,
    pub allowed_abilities: Option<Vec<bool>>,
    /// Number of rumor entries; the rumor payload itself is unmodeled.
    pub rumor_count: u32,
    pub predefined_heroes: Option<Vec<PredefinedHero>>,
    pub terrain: TerrainGrid,
}

impl MapDocument {
    /// Decodes one complete map stream (already decompressed).
    ///
    /// The pass is strictly sequential with no lookahead or backtracking;
    /// the first structural or semantic violation aborts it and no
    /// partial document is returned.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut r = LittleEndianReader::new(bytes);
        decode_internal(&mut r)
    }
}

/// A byte that must be exactly 0 or 1.
pub(crate) fn read_flag(
    r: &mut LittleEndianReader<'_>,
    field: &'static str,
) -> Result<bool, DecodeError> {
    let offset = r.position();
    match r.read_u8()? {
        0 => Ok(false),
        1 => Ok(true),
        value => Err(DecodeError::UnknownCode {
            field,
            value: value.into(),
            offset,
        }),
    }
}

fn decode_internal(r: &mut LittleEndianReader<'_>) -> Result<MapDocument, DecodeError> {
    // Header: version, player flag, size, levels, texts, difficulty
    let offset = r.position();
    let raw_version = r.read_u32_le()?;
    let version = Version::from_code(raw_version).ok_or(DecodeError::UnknownCode {
        field: "version",
        value: raw_version,
        offset,
    })?;

    let any_players = r.read_u8()? != 0;

    let offset = r.position();
    let raw_size = r.read_u32_le()?;
    let size = MapSize::from_code(raw_size).ok_or(DecodeError::UnknownCode {
        field: "map size",
        value: raw_size,
        offset,
    })?;

    let has_subterranean = read_flag(r, "subterranean flag")?;

    let name = r.read_length_prefixed()?;
    let description = r.read_length_prefixed()?;

    let offset = r.position();
    let raw_difficulty = r.read_u8()?;
    let difficulty = Difficulty::from_code(raw_difficulty).ok_or(DecodeError::UnknownCode {
        field: "difficulty",
        value: raw_difficulty.into(),
        offset,
    })?;

    let max_level = if version != Version::RestorationOfErathia {
        Some(r.read_u8()?)
    } else {
        None
    };

    // Player slots 0..7, fixed order
    let mut players: [PlayerSlot; PLAYER_SLOT_COUNT] = Default::default();
    for slot in &mut players {
        *slot = decode_player_slot(r, version)?;
    }

    // Victory / loss conditions
    let victory = decode_victory(r, version)?;
    let loss = decode_loss(r)?;

    // Teams
    let (teams_count, teams) = decode_teams(r)?;

    // Hero pool and per-version rosters
    let allowed_heroes = r.read_bits(version.hero_pool_bytes() * 8)?;
    let placeholder_heroes = if version != Version::RestorationOfErathia {
        Some(decode_placeholder_heroes(r)?)
    } else {
        None
    };
    let disposed_heroes = if version == Version::ShadowOfDeath {
        Some(decode_disposed_heroes(r)?)
    } else {
        None
    };

    r.skip(RESERVED_BLOCK_BYTES)?;

    // Artifact / spell / ability pools
    let allowed_artifacts = match version.artifact_pool_bytes() {
        Some(bytes) => Some(r.read_bits(bytes * 8)?),
        None => None,
    };
    let (allowed_spells, allowed_abilities) = if version == Version::ShadowOfDeath {
        (
            Some(r.read_bits(SPELL_POOL_BYTES * 8)?),
            Some(r.read_bits(ABILITY_POOL_BYTES * 8)?),
        )
    } else {
        (None, None)
    };

    let rumor_count = r.read_u32_le()?;

    let predefined_heroes = if version == Version::ShadowOfDeath {
        Some(decode_predefined_heroes(r)?)
    } else {
        None
    };

    // Terrain: ground always, underground only with a subterranean level
    let terrain = decode_terrain(r, size.tile_count(), has_subterranean)?;

    Ok(MapDocument {
        version,
        any_players,
        size,
        has_subterranean,
        name,
        description,
        difficulty,
        max_level,
        players,
        victory,
        loss,
        teams_count,
        teams,
        allowed_heroes,
        placeholder_heroes,
        disposed_heroes,
        allowed_artifacts,
        allowed_spells,
        allowed_abilities,
        rumor_count,
        predefined_heroes,
        terrain,
    })
}
