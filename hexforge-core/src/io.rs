//! Board file serialization
//!
//! Versioned JSON wire format. On the wire a terrain's exits are a single
//! integer plus a `specified` flag, shared between edge masks and
//! deployment-zone masks for compatibility; the typed masks exist only in
//! the model and are decoded here against the terrain table.

use crate::board::Board;
use crate::coords::Coords;
use crate::hex::Hex;
use crate::terrain::{
    get_terrain_type, terrain_id_to_index, EdgeMask, ExitKind, Exits, Terrain, ZoneMask,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current board file format version
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed board data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported board format version {0}")]
    UnsupportedVersion(u32),
    #[error("invalid board dimensions {width}x{height}")]
    BadDimensions { width: i32, height: i32 },
    #[error("expected {expected} hex entries, found {found}")]
    HexCount { expected: usize, found: usize },
    #[error("unknown terrain type '{0}'")]
    UnknownTerrain(String),
    #[error("zone mask {0:#010x} has bits outside zones 1-31")]
    BadZoneMask(u32),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("board encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize)]
struct BoardFile {
    version: u32,
    width: i32,
    height: i32,
    roads_auto_exit: bool,
    #[serde(default)]
    tags: Vec<String>,
    hexes: Vec<HexFile>,
}

#[derive(Serialize, Deserialize)]
struct HexFile {
    level: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    terrains: Vec<TerrainFile>,
}

#[derive(Serialize, Deserialize)]
struct TerrainFile {
    #[serde(rename = "type")]
    type_id: String,
    level: i32,
    specified: bool,
    exits: u32,
}

fn encode_terrain(terrain: &Terrain) -> TerrainFile {
    let (specified, exits) = match terrain.exits {
        Exits::Auto(mask) => (false, mask.0 as u32),
        Exits::Edges(mask) => (true, mask.0 as u32),
        Exits::Zones(mask) => (true, mask.0),
    };
    TerrainFile {
        type_id: get_terrain_type(terrain.type_id).id.to_string(),
        level: terrain.level,
        specified,
        exits,
    }
}

fn decode_terrain(file: &TerrainFile) -> Result<Terrain, LoadError> {
    let type_id = terrain_id_to_index(&file.type_id)
        .ok_or_else(|| LoadError::UnknownTerrain(file.type_id.clone()))?;

    let exits = match get_terrain_type(type_id).exit_kind {
        ExitKind::Zones => {
            if file.exits & 0x8000_0000 != 0 {
                return Err(LoadError::BadZoneMask(file.exits));
            }
            Exits::Zones(ZoneMask(file.exits))
        }
        _ => {
            let mask = EdgeMask(file.exits as u8 & 0x3f);
            if file.specified {
                Exits::Edges(mask)
            } else {
                Exits::Auto(mask)
            }
        }
    };

    Ok(Terrain {
        type_id,
        level: file.level,
        exits,
    })
}

/// Serialize a board to its JSON file form
pub fn save_board(board: &Board) -> Result<Vec<u8>, SaveError> {
    let file = BoardFile {
        version: FORMAT_VERSION,
        width: board.width(),
        height: board.height(),
        roads_auto_exit: board.roads_auto_exit,
        tags: board.tags.iter().cloned().collect(),
        hexes: board
            .hexes()
            .map(|(_, hex)| HexFile {
                level: hex.level,
                theme: hex.theme.clone(),
                terrains: hex
                    .terrain_ids()
                    .iter()
                    .filter_map(|&id| hex.terrain(id))
                    .map(encode_terrain)
                    .collect(),
            })
            .collect(),
    };
    Ok(serde_json::to_vec_pretty(&file)?)
}

/// Deserialize a board from its JSON file form
///
/// Constructs a fresh board or fails; a caller's existing board is never
/// partially overwritten.
pub fn load_board(bytes: &[u8]) -> Result<Board, LoadError> {
    let file: BoardFile = serde_json::from_slice(bytes)?;

    if file.version != FORMAT_VERSION {
        return Err(LoadError::UnsupportedVersion(file.version));
    }
    if file.width <= 0 || file.height <= 0 {
        return Err(LoadError::BadDimensions {
            width: file.width,
            height: file.height,
        });
    }
    let expected = (file.width * file.height) as usize;
    if file.hexes.len() != expected {
        return Err(LoadError::HexCount {
            expected,
            found: file.hexes.len(),
        });
    }

    let mut board = Board::new(file.width, file.height);
    board.roads_auto_exit = file.roads_auto_exit;
    board.tags = file.tags.into_iter().collect();

    for (i, hex_file) in file.hexes.iter().enumerate() {
        let c = Coords::new(i as i32 % file.width, i as i32 / file.width);
        let mut hex = Hex::new(hex_file.level);
        hex.theme = hex_file.theme.clone();
        for terrain_file in &hex_file.terrains {
            hex.set_terrain(decode_terrain(terrain_file)?);
        }
        board.set_hex(c, hex);
    }

    Ok(board)
}
