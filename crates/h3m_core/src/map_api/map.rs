use std::borrow::Cow;

use crate::codes::{Difficulty, MapSize, Version};
use crate::document::terrain::Tile;
use crate::document::{MapDocument, PLAYER_SLOT_COUNT};
use crate::error::DecodeError;

use super::player::PlayerView;

/// Semantic, read-only lens over a fully decoded map document.
///
/// Constructed from a finished document only; every accessor is a pure
/// read, so a `Map` can be shared freely between readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    document: MapDocument,
}

impl Map {
    pub fn new(document: MapDocument) -> Self {
        Self { document }
    }

    /// Decodes an already-decompressed map stream and wraps the result.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        Ok(Self::new(MapDocument::decode(bytes)?))
    }

    pub fn document(&self) -> &MapDocument {
        &self.document
    }

    pub fn version(&self) -> Version {
        self.document.version
    }

    pub fn size(&self) -> MapSize {
        self.document.size
    }

    /// Tiles along one edge of the square grid.
    pub fn side(&self) -> u32 {
        self.document.size.side()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.document.difficulty
    }

    pub fn has_subterranean(&self) -> bool {
        self.document.has_subterranean
    }

    pub fn max_level(&self) -> Option<u8> {
        self.document.max_level
    }

    /// Map name, rendered lossily; legacy maps use regional single-byte
    /// encodings the container does not declare.
    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.document.name)
    }

    pub fn description(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.document.description)
    }

    /// The 8 fixed player slots in palette order.
    pub fn players(&self) -> Vec<PlayerView<'_>> {
        self.document
            .players
            .iter()
            .enumerate()
            .map(|(index, slot)| PlayerView::new(slot, index))
            .collect()
    }

    pub fn player(&self, index: usize) -> Option<PlayerView<'_>> {
        if index >= PLAYER_SLOT_COUNT {
            return None;
        }
        Some(PlayerView::new(&self.document.players[index], index))
    }

    pub fn ground(&self) -> &[Tile] {
        &self.document.terrain.ground
    }

    pub fn underground(&self) -> Option<&[Tile]> {
        self.document.terrain.underground.as_deref()
    }

    pub fn ground_tile(&self, row: u32, col: u32) -> Option<&Tile> {
        self.document.terrain.ground.get(self.tile_index(row, col)?)
    }

    pub fn underground_tile(&self, row: u32, col: u32) -> Option<&Tile> {
        let index = self.tile_index(row, col)?;
        self.document.terrain.underground.as_ref()?.get(index)
    }

    fn tile_index(&self, row: u32, col: u32) -> Option<usize> {
        let side = self.side();
        if row >= side || col >= side {
            return None;
        }
        Some((row * side + col) as usize)
    }
}
