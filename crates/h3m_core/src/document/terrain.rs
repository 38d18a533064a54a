use crate::error::DecodeError;
use crate::reader::LittleEndianReader;

pub const TILE_BYTES: usize = 7;

/// One terrain cell: base terrain plus river and road overlays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub terrain: u8,
    pub variant: u8,
    pub river_type: u8,
    pub river_direction: u8,
    pub road_type: u8,
    pub road_direction: u8,
    pub flags: u8,
}

/// Tile arrays for the map levels, row-major (index = row * side + col).
/// The underground level exists only when the map declares one; when it
/// does, it has the same length and ordering as the ground level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainGrid {
    pub ground: Vec<Tile>,
    pub underground: Option<Vec<Tile>>,
}

fn decode_tile(r: &mut LittleEndianReader<'_>) -> Result<Tile, DecodeError> {
    Ok(Tile {
        terrain: r.read_u8()?,
        variant: r.read_u8()?,
        river_type: r.read_u8()?,
        river_direction: r.read_u8()?,
        road_type: r.read_u8()?,
        road_direction: r.read_u8()?,
        flags: r.read_u8()?,
    })
}

fn decode_level(
    r: &mut LittleEndianReader<'_>,
    tile_count: usize,
) -> Result<Vec<Tile>, DecodeError> {
    let mut tiles = Vec::with_capacity(tile_count);
    for _ in 0..tile_count {
        tiles.push(decode_tile(r)?);
    }
    Ok(tiles)
}

pub fn decode_terrain(
    r: &mut LittleEndianReader<'_>,
    tile_count: usize,
    has_subterranean: bool,
) -> Result<TerrainGrid, DecodeError> {
    let ground = decode_level(r, tile_count)?;
    let underground = if has_subterranean {
        Some(decode_level(r, tile_count)?)
    } else {
        None
    };
    Ok(TerrainGrid {
        ground,
        underground,
    })
}
