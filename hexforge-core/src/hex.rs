//! Per-cell board state

use crate::terrain::{get_terrain_type, ExitKind, Exits, Terrain, TerrainTypeId};
use rustc_hash::FxHashMap;

/// One cell of the board grid
///
/// Elevation is independent from any terrain level: a hex at level 2 with
/// level-1 woods is a wooded hilltop. A hex without terrains is "clear".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hex {
    pub level: i32,
    terrains: FxHashMap<TerrainTypeId, Terrain>,
    pub theme: Option<String>,
}

impl Hex {
    pub fn new(level: i32) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Terrain of the given type, if present
    pub fn terrain(&self, type_id: TerrainTypeId) -> Option<&Terrain> {
        self.terrains.get(&type_id)
    }

    pub fn contains_terrain(&self, type_id: TerrainTypeId) -> bool {
        self.terrains.contains_key(&type_id)
    }

    /// Add a terrain, replacing any existing terrain of the same type
    pub fn set_terrain(&mut self, terrain: Terrain) {
        self.terrains.insert(terrain.type_id, terrain);
    }

    pub fn remove_terrain(&mut self, type_id: TerrainTypeId) -> Option<Terrain> {
        self.terrains.remove(&type_id)
    }

    pub fn clear_terrains(&mut self) {
        self.terrains.clear();
    }

    pub fn terrains(&self) -> impl Iterator<Item = &Terrain> {
        self.terrains.values()
    }

    /// Terrain type ids present on this hex, ascending
    pub fn terrain_ids(&self) -> Vec<TerrainTypeId> {
        let mut ids: Vec<TerrainTypeId> = self.terrains.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn is_clear(&self) -> bool {
        self.terrains.is_empty()
    }

    /// Structural problems with this hex, as human-readable descriptions
    ///
    /// Reports missing companion terrains and exit-mask/type mismatches.
    /// Never fabricates anything; see [`Hex::ensure_companions`] for the
    /// editing-flow helper that fills companions in.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for id in self.terrain_ids() {
            let tt = get_terrain_type(id);
            for &(companion, _) in tt.companions {
                if !self.contains_terrain(companion) {
                    problems.push(format!(
                        "{} requires {}",
                        tt.name,
                        get_terrain_type(companion).name
                    ));
                }
            }

            let terrain = &self.terrains[&id];
            match (tt.exit_kind, terrain.exits) {
                (ExitKind::Zones, Exits::Zones(mask)) => {
                    if mask.is_empty() {
                        problems.push(format!("{} has no zone bits set", tt.name));
                    }
                }
                (ExitKind::Zones, _) => {
                    problems.push(format!("{} exits must be a zone mask", tt.name));
                }
                (ExitKind::Edges, Exits::Zones(_)) => {
                    problems.push(format!("{} exits must be an edge mask", tt.name));
                }
                (ExitKind::None, Exits::Edges(_) | Exits::Zones(_)) => {
                    problems.push(format!("{} does not carry exits", tt.name));
                }
                _ => {}
            }
        }

        problems
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_empty()
    }

    /// Fabricate missing companion terrains at their table defaults
    ///
    /// Invoked explicitly by the editing flow after placing a structure
    /// terrain; validation never calls this.
    pub fn ensure_companions(&mut self, type_id: TerrainTypeId) {
        for &(companion, default_level) in get_terrain_type(type_id).companions {
            if !self.contains_terrain(companion) {
                self.set_terrain(Terrain::new(companion, default_level));
            }
        }
    }
}
