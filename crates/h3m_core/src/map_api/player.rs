use crate::codes::{AiTactic, PlayerColor};
use crate::document::player::{MainTown, PlayerInfo, PlayerSlot};

/// Read-only view of one player slot, with the flag color the fixed
/// palette assigns to its index.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    slot: &'a PlayerSlot,
    index: usize,
    color: PlayerColor,
}

impl<'a> PlayerView<'a> {
    pub(crate) fn new(slot: &'a PlayerSlot, index: usize) -> Self {
        Self {
            slot,
            index,
            color: PlayerColor::PALETTE[index],
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn color(&self) -> PlayerColor {
        self.color
    }

    pub fn can_be_human(&self) -> bool {
        self.slot.can_be_human
    }

    pub fn can_be_computer(&self) -> bool {
        self.slot.can_be_computer
    }

    /// A slot takes part in the map when a human or a computer can play
    /// it; absent slots carry no info block at all.
    pub fn present(&self) -> bool {
        self.slot.present()
    }

    pub fn info(&self) -> Option<&'a PlayerInfo> {
        self.slot.info.as_ref()
    }

    /// `None` for absent slots, which have no declared behaviour.
    pub fn ai_tactic(&self) -> Option<AiTactic> {
        self.info().map(|info| info.ai_tactic)
    }

    pub fn main_town(&self) -> Option<&'a MainTown> {
        self.info().and_then(|info| info.main_town.as_ref())
    }
}
