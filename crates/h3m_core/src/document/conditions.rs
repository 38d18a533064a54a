use crate::codes::Version;
use crate::error::DecodeError;
use crate::reader::LittleEndianReader;

/// Special win condition block. Read only when the condition byte is not
/// the 0xFF "standard victory" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VictoryCondition {
    pub allow_normal_victory: bool,
    pub applies_to_ai: bool,
    pub kind: VictoryKind,
}

/// Win condition selected by the leading code byte.
///
/// Only the first three kinds carry a decoded payload. The remaining
/// kinds are recognized tags whose payload layout is unknown and not
/// self-describing; no payload bytes are consumed for them, so a stream
/// using one cannot be decoded past this block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VictoryKind {
    AcquireArtifact { object_type: u8 },
    AccumulateCreatures { object_type: u8, target_count: u32 },
    AccumulateResources { object_type: u8, target_count: u32 },
    UpgradeTown,
    BuildGrail,
    DefeatHero,
    CaptureTown,
    DefeatMonster,
    FlagDwellings,
    FlagMines,
    TransportArtifact,
}

/// Special loss condition, absent when the condition byte is 0xFF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCondition {
    LoseTown { x: u8, y: u8, z: u8 },
    LoseHero { x: u8, y: u8, z: u8 },
    TimeExpires { days: u16 },
}

const NO_CONDITION: u8 = 0xFF;

pub fn decode_victory(
    r: &mut LittleEndianReader<'_>,
    version: Version,
) -> Result<Option<VictoryCondition>, DecodeError> {
    let offset = r.position();
    let code = r.read_u8()?;
    if code == NO_CONDITION {
        return Ok(None);
    }

    let allow_normal_victory = r.read_u8()? != 0;
    let applies_to_ai = r.read_u8()? != 0;

    let kind = match code {
        0x00 => {
            let object_type = r.read_u8()?;
            if version != Version::RestorationOfErathia {
                r.skip(1)?; // reserved
            }
            VictoryKind::AcquireArtifact { object_type }
        }
        0x01 => {
            let object_type = r.read_u8()?;
            if version != Version::RestorationOfErathia {
                r.skip(1)?; // reserved
            }
            let target_count = r.read_u32_le()?;
            VictoryKind::AccumulateCreatures {
                object_type,
                target_count,
            }
        }
        0x02 => {
            let object_type = r.read_u8()?;
            let target_count = r.read_u32_le()?;
            VictoryKind::AccumulateResources {
                object_type,
                target_count,
            }
        }
        0x03 => VictoryKind::UpgradeTown,
        0x04 => VictoryKind::BuildGrail,
        0x05 => VictoryKind::DefeatHero,
        0x06 => VictoryKind::CaptureTown,
        0x07 => VictoryKind::DefeatMonster,
        0x08 => VictoryKind::FlagDwellings,
        0x09 => VictoryKind::FlagMines,
        0x0A => VictoryKind::TransportArtifact,
        value => {
            return Err(DecodeError::UnknownCode {
                field: "victory condition",
                value: value.into(),
                offset,
            });
        }
    };

    Ok(Some(VictoryCondition {
        allow_normal_victory,
        applies_to_ai,
        kind,
    }))
}

pub fn decode_loss(
    r: &mut LittleEndianReader<'_>,
) -> Result<Option<LossCondition>, DecodeError> {
    let offset = r.position();
    let code = r.read_u8()?;
    let condition = match code {
        NO_CONDITION => return Ok(None),
        0x00 => LossCondition::LoseTown {
            x: r.read_u8()?,
            y: r.read_u8()?,
            z: r.read_u8()?,
        },
        0x01 => LossCondition::LoseHero {
            x: r.read_u8()?,
            y: r.read_u8()?,
            z: r.read_u8()?,
        },
        0x02 => LossCondition::TimeExpires {
            days: r.read_u16_le()?,
        },
        value => {
            return Err(DecodeError::UnknownCode {
                field: "loss condition",
                value: value.into(),
                offset,
            });
        }
    };
    Ok(Some(condition))
}
