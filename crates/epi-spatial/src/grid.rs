//! Dense occupancy grid.
//!
//! # Data layout
//!
//! One `AgentId` slot per integer coordinate of the world, padded by the
//! infection radius on every side so that neighborhood scans around any
//! in-region position stay in bounds:
//!
//! ```text
//!   x ∈ [world.left - pad, world.right + pad]     (inclusive)
//!   y ∈ [world.top  - pad, world.bottom + pad]
//!   slot(x, y) = (y - origin.y) * stride + (x - origin.x)
//! ```
//!
//! Empty slots hold `AgentId::INVALID`.  Only Resident, living agents are
//! ever on the grid; travellers and the dead are absent.

use epi_core::{AgentId, Cell, Rect};

use crate::{SpatialError, SpatialResult};

/// "Who is where" for every placed agent.  At most one agent per coordinate.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    /// Top-left corner of the padded area.
    origin:   Cell,
    stride:   i32,
    rows:     i32,
    slots:    Vec<AgentId>,
    occupied: usize,
}

impl OccupancyGrid {
    /// Empty grid covering `world` plus `pad` cells on every side.  The
    /// padded area must stay within `epi_core::config::MAX_GRID_CELLS`,
    /// which `EpidemicConfig::validate` enforces.
    pub fn new(world: Rect, pad: i32) -> Self {
        let stride = world.width() + 2 * pad + 1;
        let rows = world.height() + 2 * pad + 1;
        Self {
            origin: Cell::new(world.left - pad, world.top - pad),
            stride,
            rows,
            slots: vec![AgentId::INVALID; stride as usize * rows as usize],
            occupied: 0,
        }
    }

    #[inline]
    fn slot(&self, cell: Cell) -> Option<usize> {
        let x = cell.x - self.origin.x;
        let y = cell.y - self.origin.y;
        if (0..self.stride).contains(&x) && (0..self.rows).contains(&y) {
            Some((y * self.stride + x) as usize)
        } else {
            None
        }
    }

    /// `true` if `cell` is inside the padded grid.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.slot(cell).is_some()
    }

    /// The agent at `cell`, if any.  Out-of-bounds cells are empty.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<AgentId> {
        self.slot(cell)
            .map(|i| self.slots[i])
            .filter(|a| a.is_valid())
    }

    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell).is_some()
    }

    /// Put `agent` at `cell`.
    ///
    /// # Errors
    ///
    /// [`SpatialError::Occupied`] if another agent is there,
    /// [`SpatialError::OutOfBounds`] if the cell is off the grid.
    pub fn place(&mut self, agent: AgentId, cell: Cell) -> SpatialResult<()> {
        let i = self.slot(cell).ok_or(SpatialError::OutOfBounds(cell))?;
        let occupant = self.slots[i];
        if occupant.is_valid() {
            return Err(SpatialError::Occupied { cell, occupant });
        }
        self.slots[i] = agent;
        self.occupied += 1;
        Ok(())
    }

    /// Clear `cell`, returning whoever was there.
    pub fn vacate(&mut self, cell: Cell) -> Option<AgentId> {
        let i = self.slot(cell)?;
        let prev = std::mem::replace(&mut self.slots[i], AgentId::INVALID);
        if prev.is_valid() {
            self.occupied -= 1;
            Some(prev)
        } else {
            None
        }
    }

    /// Move `agent` from `from` to `to` in one step.
    ///
    /// On failure the grid is left exactly as it was.
    pub fn relocate(&mut self, agent: AgentId, from: Cell, to: Cell) -> SpatialResult<()> {
        if from == to {
            return Ok(());
        }
        let dst = self.slot(to).ok_or(SpatialError::OutOfBounds(to))?;
        let occupant = self.slots[dst];
        if occupant.is_valid() {
            return Err(SpatialError::Occupied { cell: to, occupant });
        }
        if let Some(src) = self.slot(from) {
            if self.slots[src] == agent {
                self.slots[src] = AgentId::INVALID;
                self.occupied -= 1;
            }
        }
        self.slots[dst] = agent;
        self.occupied += 1;
        Ok(())
    }

    /// Occupied cells in the square of half-side `radius` around `center`,
    /// excluding `center` itself.
    ///
    /// Scan order is x-offset outer, y-offset inner, each ascending, so
    /// callers that draw random numbers per neighbor stay deterministic.
    pub fn neighbors(&self, center: Cell, radius: i32) -> impl Iterator<Item = (Cell, AgentId)> + '_ {
        (-radius..=radius)
            .flat_map(move |dx| (-radius..=radius).map(move |dy| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(move |(dx, dy)| {
                let cell = center.offset(dx, dy);
                self.get(cell).map(|agent| (cell, agent))
            })
    }

    /// Number of occupied cells.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Iterate `(cell, agent)` over every occupied slot, row by row.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (Cell, AgentId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_valid())
            .map(move |(i, &a)| {
                let i = i as i32;
                (Cell::new(self.origin.x + i % self.stride, self.origin.y + i / self.stride), a)
            })
    }
}
