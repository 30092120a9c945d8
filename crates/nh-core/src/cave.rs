//! The minimal grid model the turn engine reads and writes.
//!
//! Map generation, room/corridor layout, and everything else that
//! *produces* a cave are out of scope; this module only owns the shape
//! the engine's components need: terrain features, the externally
//! produced flow fields (`when`/`cost`), monster occupancy, warded
//! cells, and per-cell dropped-item stacks.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::monster::MonsterId;
use crate::object::Object;

/// Per-cell terrain, narrowed to what movement/stepping cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Feature {
    #[default]
    Floor,
    Wall,
    /// Indestructible rock: never bashed, never tunnelled by ordinary means.
    PermWall,
    Rubble,
    ClosedDoor,
    LockedDoor,
    OpenDoor,
    BrokenDoor,
    Lava,
    Water,
    Chasm,
}

impl Feature {
    pub const fn is_passable(&self) -> bool {
        matches!(self, Feature::Floor | Feature::OpenDoor | Feature::BrokenDoor)
    }

    pub const fn is_wall(&self) -> bool {
        matches!(self, Feature::Wall | Feature::PermWall)
    }

    pub const fn is_permanent(&self) -> bool {
        matches!(self, Feature::PermWall)
    }

    pub const fn is_door(&self) -> bool {
        matches!(
            self,
            Feature::ClosedDoor | Feature::LockedDoor | Feature::OpenDoor | Feature::BrokenDoor
        )
    }

    pub const fn blocks_sight(&self) -> bool {
        matches!(self, Feature::Wall | Feature::PermWall | Feature::ClosedDoor | Feature::LockedDoor)
    }
}

fn default_grid<T: Copy>(width: usize, height: usize, value: T) -> Vec<Vec<T>> {
    vec![vec![value; width]; height]
}

/// The map the turn engine operates over, for one level, at one instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cave {
    width: usize,
    height: usize,
    feat: Vec<Vec<Feature>>,
    /// Flow-field "when" stamp: the turn number a flow producer last
    /// pushed a value into this cell. Consumed, never advanced, by the
    /// engine.
    when: Vec<Vec<u32>>,
    /// Flow-field cost from the cell to the flow's target (usually the
    /// player). Consumed, never advanced, by the engine.
    cost: Vec<Vec<i32>>,
    /// Monster occupying a cell, if any.
    m_idx: Vec<Vec<Option<MonsterId>>>,
    /// Cells wards/glyphs prevent summoning onto.
    warded: Vec<Vec<bool>>,
    /// Items dropped on the floor, keyed by cell.
    objects: Vec<Vec<Vec<Object>>>,
    pub player_x: i32,
    pub player_y: i32,
    pub player_has_los: bool,
    pub current_turn: u32,
}

impl Cave {
    pub fn new(width: usize, height: usize) -> EngineResult<Self> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidCaveDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            feat: default_grid(width, height, Feature::Floor),
            when: default_grid(width, height, 0),
            cost: default_grid(width, height, i32::MAX),
            m_idx: default_grid(width, height, None),
            warded: default_grid(width, height, false),
            objects: vec![vec![Vec::new(); width]; height],
            player_x: 0,
            player_y: 0,
            player_has_los: true,
            current_turn: 0,
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn require_bounds(&self, x: i32, y: i32) -> EngineResult<()> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn feature(&self, x: i32, y: i32) -> Feature {
        if !self.in_bounds(x, y) {
            return Feature::PermWall;
        }
        self.feat[y as usize][x as usize]
    }

    pub fn set_feature(&mut self, x: i32, y: i32, feature: Feature) -> EngineResult<()> {
        self.require_bounds(x, y)?;
        self.feat[y as usize][x as usize] = feature;
        Ok(())
    }

    pub fn when(&self, x: i32, y: i32) -> u32 {
        if !self.in_bounds(x, y) {
            return 0;
        }
        self.when[y as usize][x as usize]
    }

    pub fn set_when(&mut self, x: i32, y: i32, value: u32) -> EngineResult<()> {
        self.require_bounds(x, y)?;
        self.when[y as usize][x as usize] = value;
        Ok(())
    }

    pub fn cost(&self, x: i32, y: i32) -> i32 {
        if !self.in_bounds(x, y) {
            return i32::MAX;
        }
        self.cost[y as usize][x as usize]
    }

    pub fn set_cost(&mut self, x: i32, y: i32, value: i32) -> EngineResult<()> {
        self.require_bounds(x, y)?;
        self.cost[y as usize][x as usize] = value;
        Ok(())
    }

    pub fn occupant(&self, x: i32, y: i32) -> Option<MonsterId> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.m_idx[y as usize][x as usize]
    }

    pub fn set_occupant(&mut self, x: i32, y: i32, who: Option<MonsterId>) -> EngineResult<()> {
        self.require_bounds(x, y)?;
        self.m_idx[y as usize][x as usize] = who;
        Ok(())
    }

    pub fn is_empty_cell(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y)
            && self.feature(x, y).is_passable()
            && self.occupant(x, y).is_none()
            && !(x == self.player_x && y == self.player_y)
    }

    pub fn is_warded(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return true;
        }
        self.warded[y as usize][x as usize]
    }

    pub fn set_warded(&mut self, x: i32, y: i32, warded: bool) -> EngineResult<()> {
        self.require_bounds(x, y)?;
        self.warded[y as usize][x as usize] = warded;
        Ok(())
    }

    pub fn objects_at(&self, x: i32, y: i32) -> &[Object] {
        if !self.in_bounds(x, y) {
            return &[];
        }
        &self.objects[y as usize][x as usize]
    }

    pub fn drop_object(&mut self, x: i32, y: i32, object: Object) -> EngineResult<()> {
        self.require_bounds(x, y)?;
        self.objects[y as usize][x as usize].push(object);
        Ok(())
    }

    pub fn take_objects(&mut self, x: i32, y: i32) -> Vec<Object> {
        if !self.in_bounds(x, y) {
            return Vec::new();
        }
        std::mem::take(&mut self.objects[y as usize][x as usize])
    }

    pub fn blocks_sight(&self, x: i32, y: i32) -> bool {
        self.feature(x, y).blocks_sight()
    }

    /// Debug-only consistency checks for the data-model invariants named
    /// in the spec: occupancy and `m_idx` agree in both directions, and
    /// every grid has matching dimensions.
    pub fn debug_assert_invariants(&self) {
        debug_assert_eq!(self.feat.len(), self.height);
        debug_assert_eq!(self.when.len(), self.height);
        debug_assert_eq!(self.cost.len(), self.height);
        debug_assert_eq!(self.m_idx.len(), self.height);
        for row in &self.feat {
            debug_assert_eq!(row.len(), self.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_sized_cave() {
        assert!(Cave::new(0, 5).is_err());
        assert!(Cave::new(5, 0).is_err());
    }

    #[test]
    fn out_of_bounds_reads_are_safely_defaulted() {
        let cave = Cave::new(4, 4).unwrap();
        assert_eq!(cave.feature(-1, 0), Feature::PermWall);
        assert_eq!(cave.feature(100, 0), Feature::PermWall);
        assert_eq!(cave.cost(-1, -1), i32::MAX);
    }

    #[test]
    fn set_feature_out_of_bounds_errors() {
        let mut cave = Cave::new(4, 4).unwrap();
        assert!(cave.set_feature(10, 10, Feature::Wall).is_err());
        assert!(cave.set_feature(1, 1, Feature::Wall).is_ok());
        assert!(cave.feature(1, 1).is_wall());
    }

    #[test]
    fn occupancy_round_trips() {
        let mut cave = Cave::new(4, 4).unwrap();
        let id = MonsterId(1);
        cave.set_occupant(2, 2, Some(id)).unwrap();
        assert_eq!(cave.occupant(2, 2), Some(id));
        assert!(!cave.is_empty_cell(2, 2));
    }
}
