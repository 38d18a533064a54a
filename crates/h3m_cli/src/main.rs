use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use flate2::read::GzDecoder;
use h3m_core::map_api::Map;
use h3m_render::{ColorMode, render_json, render_summary, render_terrain};

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

#[derive(Debug, Parser)]
#[command(name = "h3m", about = "Inspect Heroes of Might and Magic III map files")]
struct Cli {
    #[arg(value_name = "MAP.h3m")]
    path: PathBuf,
    #[arg(long)]
    name: bool,
    #[arg(long)]
    description: bool,
    #[arg(long)]
    version: bool,
    #[arg(long)]
    size: bool,
    #[arg(long)]
    difficulty: bool,
    #[arg(long)]
    subterranean: bool,
    #[arg(long = "max-level")]
    max_level: bool,
    #[arg(long)]
    players: bool,
    /// Print the terrain grid.
    #[arg(long)]
    map: bool,
    #[arg(long)]
    json: bool,
    #[arg(long = "no-color")]
    no_color: bool,
}

impl Cli {
    fn any_field_selected(&self) -> bool {
        self.name
            || self.description
            || self.version
            || self.size
            || self.difficulty
            || self.subterranean
            || self.max_level
            || self.players
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let raw = fs::read(&cli.path)?;
    let bytes = decompress_if_gzip(raw)?;
    let map = Map::decode(&bytes)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&render_json(&map))?);
        return Ok(());
    }

    if cli.any_field_selected() {
        print_selected_fields(cli, &map);
    } else if !cli.map {
        print!("{}", render_summary(&map));
    }

    if cli.map {
        let mode = if cli.no_color {
            ColorMode::Plain
        } else {
            ColorMode::Ansi
        };
        print!("{}", render_terrain(&map, mode));
    }

    Ok(())
}

/// Requested fields in fixed order, one `key=value` line each.
fn print_selected_fields(cli: &Cli, map: &Map) {
    if cli.name {
        println!("name={}", map.name());
    }
    if cli.description {
        println!("description={}", map.description());
    }
    if cli.version {
        println!("version={}", map.version());
    }
    if cli.size {
        println!("size={}", map.size());
    }
    if cli.difficulty {
        println!("difficulty={}", map.difficulty());
    }
    if cli.subterranean {
        println!("subterranean={}", map.has_subterranean());
    }
    if cli.max_level {
        match map.max_level() {
            Some(level) => println!("max_level={level}"),
            None => println!("max_level="),
        }
    }
    if cli.players {
        for player in map.players() {
            if !player.present() {
                continue;
            }
            print!(
                "player.{}={} human={} computer={}",
                player.index(),
                player.color(),
                player.can_be_human(),
                player.can_be_computer(),
            );
            match player.ai_tactic() {
                Some(tactic) => println!(" tactic={tactic}"),
                None => println!(),
            }
        }
    }
}

/// The container is normally gzip-compressed, but a pre-decompressed
/// stream is accepted as-is.
fn decompress_if_gzip(raw: Vec<u8>) -> Result<Vec<u8>, std::io::Error> {
    if raw.len() >= GZIP_MAGIC.len() && raw[..GZIP_MAGIC.len()] == GZIP_MAGIC {
        let mut out = Vec::new();
        GzDecoder::new(raw.as_slice()).read_to_end(&mut out)?;
        return Ok(out);
    }
    Ok(raw)
}
