//! Random board generation

use crate::board::Board;
use crate::coords::Coords;
use crate::terrain::{Terrain, WATER, WOODS};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Knobs for board generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardSettings {
    pub width: i32,
    pub height: i32,
    pub theme: Option<String>,
    /// Number of hill features to raise
    pub hilliness: u32,
    /// Number of woods patches to scatter
    pub woods: u32,
    /// Number of water pockets to sink
    pub lakes: u32,
    /// Seed for deterministic generation; fresh entropy when absent
    pub seed: Option<u64>,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            width: 16,
            height: 17,
            theme: None,
            hilliness: 0,
            woods: 0,
            lakes: 0,
            seed: None,
        }
    }
}

/// Generate a board from settings
///
/// Zero feature knobs produce a flat clear board. Identical settings with
/// the same seed produce identical boards.
pub fn generate(settings: &BoardSettings) -> Board {
    let mut board = Board::new(settings.width, settings.height);

    if let Some(theme) = &settings.theme {
        let coords: Vec<Coords> = board.coords().collect();
        for c in coords {
            if let Some(hex) = board.hex_mut(c) {
                hex.theme = Some(theme.clone());
            }
        }
    }

    let mut rng = match settings.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    for _ in 0..settings.hilliness {
        raise_hill(&mut board, &mut rng);
    }
    for _ in 0..settings.woods {
        plant_woods(&mut board, &mut rng);
    }
    for _ in 0..settings.lakes {
        sink_lake(&mut board, &mut rng);
    }

    board
}

fn random_coords<R: Rng>(board: &Board, rng: &mut R) -> Coords {
    Coords::new(
        rng.gen_range(0..board.width()),
        rng.gen_range(0..board.height()),
    )
}

/// Raise a hill: full height at the center, sloping off over two rings
fn raise_hill<R: Rng>(board: &mut Board, rng: &mut R) {
    let center = random_coords(board, rng);
    let height: i32 = rng.gen_range(1..=3);

    for distance in 0..=2u8 {
        let rise = height - distance as i32;
        if rise <= 0 {
            break;
        }
        for c in center.ring(distance) {
            if let Some(hex) = board.hex_mut(c) {
                hex.level += rise;
            }
        }
    }
}

/// Scatter a woods patch over a cell and its neighbors
fn plant_woods<R: Rng>(board: &mut Board, rng: &mut R) {
    let center = random_coords(board, rng);
    let level: i32 = rng.gen_range(1..=2);

    if let Some(hex) = board.hex_mut(center) {
        hex.set_terrain(Terrain::new(WOODS, level));
    }
    for c in center.ring(1) {
        if let Some(hex) = board.hex_mut(c) {
            if !hex.contains_terrain(WATER) {
                hex.set_terrain(Terrain::new(WOODS, 1));
            }
        }
    }
}

/// Sink a water pocket over a cell and its neighbors
fn sink_lake<R: Rng>(board: &mut Board, rng: &mut R) {
    let center = random_coords(board, rng);
    let depth: i32 = rng.gen_range(1..=2);

    if let Some(hex) = board.hex_mut(center) {
        hex.level = 0;
        hex.remove_terrain(WOODS);
        hex.set_terrain(Terrain::new(WATER, depth));
    }
    for c in center.ring(1) {
        if let Some(hex) = board.hex_mut(c) {
            hex.level = 0;
            hex.remove_terrain(WOODS);
            hex.set_terrain(Terrain::new(WATER, 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_board() {
        let board = generate(&BoardSettings::default());
        assert_eq!(board.width(), 16);
        assert_eq!(board.height(), 17);
        assert!(board.hexes().all(|(_, h)| h.level == 0 && h.is_clear()));
    }

    #[test]
    fn test_deterministic_per_seed() {
        let settings = BoardSettings {
            hilliness: 5,
            woods: 4,
            lakes: 2,
            seed: Some(42),
            ..Default::default()
        };
        assert_eq!(generate(&settings), generate(&settings));
    }

    #[test]
    fn test_seeds_differ() {
        let a = BoardSettings {
            hilliness: 5,
            woods: 4,
            seed: Some(1),
            ..Default::default()
        };
        let b = BoardSettings {
            seed: Some(2),
            ..a.clone()
        };
        assert_ne!(generate(&a), generate(&b));
    }

    #[test]
    fn test_features_present() {
        let settings = BoardSettings {
            hilliness: 3,
            woods: 3,
            lakes: 1,
            seed: Some(7),
            ..Default::default()
        };
        let board = generate(&settings);
        assert!(board.hexes().any(|(_, h)| h.level > 0));
        assert!(board.hexes().any(|(_, h)| h.contains_terrain(WOODS)));
        assert!(board.hexes().any(|(_, h)| h.contains_terrain(WATER)));
    }

    #[test]
    fn test_theme_applied() {
        let settings = BoardSettings {
            theme: Some("desert".to_string()),
            ..Default::default()
        };
        let board = generate(&settings);
        assert!(board.hexes().all(|(_, h)| h.theme.as_deref() == Some("desert")));
    }
}
