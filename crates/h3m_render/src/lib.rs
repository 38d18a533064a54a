use crossterm::style::{Color, Stylize};
use h3m_core::map_api::Map;
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Gap between the ground and underground grids when both are printed.
const LEVEL_GUTTER: &str = "         ";

/// Highest terrain code with a known meaning; anything above it renders
/// as its numeric value instead of a glyph.
const MAX_KNOWN_TERRAIN: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    Plain,
    #[default]
    Ansi,
}

fn terrain_color(terrain: u8) -> Color {
    match terrain {
        0 => Color::DarkGrey,    // dirt
        1 => Color::Yellow,      // sand
        2 => Color::Green,       // grass
        3 => Color::White,       // snow
        4 => Color::DarkGreen,   // swamp
        5 => Color::DarkYellow,  // rough
        6 => Color::DarkRed,     // subterranean
        7 => Color::Red,         // lava
        8 => Color::Blue,        // water
        9 => Color::Black,       // rock
        _ => Color::Cyan,
    }
}

fn terrain_cell(terrain: u8, mode: ColorMode) -> String {
    let text = if terrain <= MAX_KNOWN_TERRAIN {
        "X ".to_string()
    } else {
        format!("{terrain} ")
    };
    match mode {
        ColorMode::Plain => text,
        ColorMode::Ansi => text.with(terrain_color(terrain)).to_string(),
    }
}

/// Renders the terrain as one glyph cell per tile, one line per map row.
/// When the map has an underground level it is printed to the right of
/// the ground grid, separated by a fixed gutter.
pub fn render_terrain(map: &Map, mode: ColorMode) -> String {
    let side = map.side() as usize;
    let ground = map.ground();
    let underground = map.underground();

    let mut out = String::new();
    for row in 0..side {
        for col in 0..side {
            out.push_str(&terrain_cell(ground[row * side + col].terrain, mode));
        }
        if let Some(under) = underground {
            out.push_str(LEVEL_GUTTER);
            for col in 0..side {
                out.push_str(&terrain_cell(under[row * side + col].terrain, mode));
            }
        }
        out.push('\n');
    }
    out
}

/// Fixed-order `key=value` summary of the map metadata, one line per
/// field, absent slots omitted.
pub fn render_summary(map: &Map) -> String {
    let mut out = String::new();
    out.push_str(&format!("name={}\n", map.name()));
    out.push_str(&format!("version={}\n", map.version()));
    out.push_str(&format!("size={}\n", map.size()));
    out.push_str(&format!("difficulty={}\n", map.difficulty()));
    out.push_str(&format!("subterranean={}\n", map.has_subterranean()));
    if let Some(level) = map.max_level() {
        out.push_str(&format!("max_level={level}\n"));
    }
    for player in map.players() {
        if !player.present() {
            continue;
        }
        out.push_str(&format!(
            "player.{}={} human={} computer={}",
            player.index(),
            player.color(),
            player.can_be_human(),
            player.can_be_computer(),
        ));
        if let Some(tactic) = player.ai_tactic() {
            out.push_str(&format!(" tactic={tactic}"));
        }
        out.push('\n');
    }
    out
}

/// JSON object over the same fields as the text summary, with all 8
/// player slots included.
pub fn render_json(map: &Map) -> JsonValue {
    let mut root = JsonMap::new();
    root.insert("name".into(), JsonValue::from(map.name().into_owned()));
    root.insert(
        "description".into(),
        JsonValue::from(map.description().into_owned()),
    );
    root.insert("version".into(), JsonValue::from(map.version().as_str()));
    root.insert("size".into(), JsonValue::from(map.size().as_str()));
    root.insert("side".into(), JsonValue::from(map.side()));
    root.insert(
        "difficulty".into(),
        JsonValue::from(map.difficulty().as_str()),
    );
    root.insert(
        "subterranean".into(),
        JsonValue::from(map.has_subterranean()),
    );
    root.insert("max_level".into(), JsonValue::from(map.max_level()));
    root.insert(
        "teams".into(),
        match map.document().teams {
            Some(teams) => JsonValue::from(teams.to_vec()),
            None => JsonValue::Null,
        },
    );

    let players: Vec<JsonValue> = map
        .players()
        .iter()
        .map(|player| {
            let mut entry = JsonMap::new();
            entry.insert("index".into(), JsonValue::from(player.index()));
            entry.insert("color".into(), JsonValue::from(player.color().as_str()));
            entry.insert("present".into(), JsonValue::from(player.present()));
            entry.insert("human".into(), JsonValue::from(player.can_be_human()));
            entry.insert("computer".into(), JsonValue::from(player.can_be_computer()));
            entry.insert(
                "tactic".into(),
                match player.ai_tactic() {
                    Some(tactic) => JsonValue::from(tactic.as_str()),
                    None => JsonValue::Null,
                },
            );
            JsonValue::Object(entry)
        })
        .collect();
    root.insert("players".into(), JsonValue::from(players));

    JsonValue::Object(root)
}
