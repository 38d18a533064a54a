#![allow(dead_code)]

//! Byte-level fixture builders shared by the decode tests. Streams are
//! assembled field by field in document order, so the comments double as
//! a layout reference for the offset-based assertions.

pub fn push_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

pub fn push_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

pub fn push_str(buf: &mut Vec<u8>, s: &str) {
    push_raw_str(buf, s.as_bytes());
}

pub fn push_raw_str(buf: &mut Vec<u8>, bytes: &[u8]) {
    push_u32(buf, bytes.len() as u32);
    buf.extend_from_slice(bytes);
}

pub fn push_absent_player(buf: &mut Vec<u8>, padding: usize) {
    buf.push(0);
    buf.push(0);
    buf.extend_from_slice(&vec![0u8; padding]);
}

/// Tiles with terrain cycling 0..=9 so row-major indexing is assertable.
pub fn push_tiles_patterned(buf: &mut Vec<u8>, count: usize) {
    for i in 0..count {
        buf.push((i % 10) as u8); // terrain
        buf.push(1); // variant
        buf.push(0); // river type
        buf.push(0); // river direction
        buf.push(0); // road type
        buf.push(0); // road direction
        buf.push(0); // flags
    }
}

pub fn push_tiles_uniform(buf: &mut Vec<u8>, count: usize, terrain: u8) {
    for _ in 0..count {
        buf.extend_from_slice(&[terrain, 0, 0, 0, 0, 0, 0]);
    }
}

// Offsets into the fixture below, for the error-path tests.
pub const ROE_DIFFICULTY_OFFSET: usize = 31;
pub const ROE_PLAYERS_OFFSET: usize = 32;
pub const ROE_VICTORY_OFFSET: usize = 96;
pub const ROE_LOSS_OFFSET: usize = 97;

pub fn roe_all_absent() -> Vec<u8> {
    roe_all_absent_named(b"Tiny")
}

/// Smallest well-formed stream of the earliest revision: size S, one
/// level, nobody playable.
pub fn roe_all_absent_named(name: &[u8]) -> Vec<u8> {
    let mut b = Vec::new();
    push_u32(&mut b, 0x0E); // version: RoE
    b.push(0); // any players
    push_u32(&mut b, 36); // size: S
    b.push(0); // no subterranean level
    push_raw_str(&mut b, name); // name
    push_str(&mut b, "All quiet"); // description
    b.push(1); // difficulty: normal
    for _ in 0..8 {
        push_absent_player(&mut b, 6);
    }
    b.push(0xFF); // victory: standard
    b.push(0xFF); // loss: none
    b.push(0); // teams
    b.extend_from_slice(&[0u8; 16]); // hero pool
    b.extend_from_slice(&[0u8; 31]); // reserved block
    push_u32(&mut b, 0); // rumors
    push_tiles_patterned(&mut b, 36 * 36);
    b
}

pub fn sod_one_human() -> Vec<u8> {
    sod_with_teams(2)
}

/// Latest-revision stream: one human-only slot with a main town and a
/// named hero, special victory and loss conditions, every SoD-only
/// section populated.
pub fn sod_with_teams(teams_count: u8) -> Vec<u8> {
    let mut b = Vec::new();
    push_u32(&mut b, 0x1C); // version: SoD
    b.push(1); // any players
    push_u32(&mut b, 36); // size: S
    b.push(0); // no subterranean level
    push_str(&mut b, "Duel"); // name
    push_str(&mut b, "One human against the wild"); // description
    b.push(2); // difficulty: hard
    b.push(99); // max level

    // slot 0: human-only, main town at (3,4,0), one named hero
    b.push(1); // can be human
    b.push(0); // can be computer
    b.push(0); // ai tactic: random
    b.push(0); // reserved
    push_u16(&mut b, 0x0003); // allowed factions: bits 0 and 1
    b.push(0); // faction not random
    b.push(1); // has main town
    b.push(1); // generate hero at town
    b.push(0); // generate hero
    b.push(3); // town x
    b.push(4); // town y
    b.push(0); // town z
    b.push(0); // no random hero
    b.push(0xFF); // no custom main hero
    b.push(0); // reserved
    b.push(1); // roster count
    b.extend_from_slice(&[0, 0, 0]); // reserved
    b.push(5); // hero id
    push_str(&mut b, "Solmyr");
    for _ in 0..7 {
        push_absent_player(&mut b, 13);
    }

    // victory: acquire artifact; loss: time expires
    b.push(0x00);
    b.push(1); // normal victory also allowed
    b.push(0); // not for ai
    b.push(7); // object type
    b.push(0); // reserved
    b.push(0x02);
    push_u16(&mut b, 100); // days

    b.push(teams_count);
    if teams_count > 0 {
        b.extend_from_slice(&[0, 1, 0, 1, 0, 0, 1, 1]);
    }

    let mut hero_pool = [0u8; 20];
    hero_pool[0] = 0x02; // hero 1 allowed
    b.extend_from_slice(&hero_pool);

    push_u32(&mut b, 2); // placeholder heroes
    b.extend_from_slice(&[10, 11]);

    b.push(1); // disposed heroes
    b.push(3); // hero id
    b.push(3); // portrait
    push_str(&mut b, "Xeron");
    b.push(0b0000_0011); // barred for players 0 and 1

    b.extend_from_slice(&[0u8; 31]); // reserved block

    b.extend_from_slice(&[0u8; 18]); // artifact pool
    b.extend_from_slice(&[0u8; 9]); // spell pool
    b.extend_from_slice(&[0u8; 4]); // ability pool

    push_u32(&mut b, 0); // rumors

    // predefined heroes: entry 0 customized, the rest untouched
    b.push(1);
    b.push(1); // leading payload byte
    for _ in 1..156 {
        b.push(0);
    }

    push_tiles_patterned(&mut b, 36 * 36);
    b
}

/// Middle-revision stream with a subterranean level, a computer-only
/// slot, and an accumulate-creatures victory.
pub fn ab_underground() -> Vec<u8> {
    let mut b = Vec::new();
    push_u32(&mut b, 0x15); // version: AB
    b.push(1); // any players
    push_u32(&mut b, 36); // size: S
    b.push(1); // subterranean level present
    push_str(&mut b, "Depths"); // name
    push_str(&mut b, "Two levels"); // description
    b.push(3); // difficulty: expert
    b.push(36); // max level

    // slot 0: computer-only with a customized main hero, empty roster
    b.push(0); // can be human
    b.push(1); // can be computer
    b.push(1); // ai tactic: warrior
    b.push(0x05); // allowed factions: bits 0 and 2
    b.push(1); // faction random
    b.push(0); // no main town
    b.push(1); // random hero
    b.push(12); // custom hero id
    b.push(2); // portrait
    push_str(&mut b, "Edric");
    b.push(0); // reserved
    b.push(0); // roster count
    b.extend_from_slice(&[0, 0, 0]); // reserved
    for _ in 0..7 {
        push_absent_player(&mut b, 12);
    }

    // victory: accumulate creatures; loss: lose town
    b.push(0x01);
    b.push(0); // normal victory not allowed
    b.push(1); // applies to ai
    b.push(9); // object type
    b.push(0); // reserved
    push_u32(&mut b, 5000); // target count
    b.push(0x00);
    b.push(1); // town x
    b.push(2); // town y
    b.push(0); // town z

    b.push(0); // teams
    b.extend_from_slice(&[0u8; 20]); // hero pool
    push_u32(&mut b, 0); // placeholder heroes
    b.extend_from_slice(&[0u8; 31]); // reserved block
    b.extend_from_slice(&[0u8; 17]); // artifact pool
    push_u32(&mut b, 3); // rumors

    push_tiles_patterned(&mut b, 36 * 36);
    push_tiles_uniform(&mut b, 36 * 36, 6);
    b
}
