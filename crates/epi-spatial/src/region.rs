//! Region partition.
//!
//! # Layout
//!
//! The world is cut into a near-square grid of equal squares, as large as
//! the world allows, then surplus squares are dropped from the end of the
//! generation order until exactly the requested count remains:
//!
//! ```text
//! R = 7  →  ⌈√7⌉ × ⌊√7⌋ = 3 × 2 = 6 < 7  →  3 × 3 grid, last 2 dropped
//!
//!   col:  0     1     2
//!       ┌───┐ ┌───┐ ┌───┐
//!       │ 0 │ │ 3 │ │ 6 │    squares are generated column by column,
//!       └───┘ └───┘ └───┘    top to bottom, so trimming removes the
//!       ┌───┐ ┌───┐          bottom of the last column first
//!       │ 1 │ │ 4 │
//!       └───┘ └───┘
//!       ┌───┐ ┌───┐
//!       │ 2 │ │ 5 │
//!       └───┘ └───┘
//! ```
//!
//! Each square is then inset by a margin, leaving a gap of twice the margin
//! between neighbouring regions.

use epi_core::{Cell, Rect, RegionId};

use crate::{SpatialError, SpatialResult};

// ── Region ────────────────────────────────────────────────────────────────────

/// One sub-population area.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub id:     RegionId,
    pub bounds: Rect,
}

impl Region {
    /// Inclusive range of valid top-left agent positions `(min, max)`.
    ///
    /// An agent's whole footprint must fit inside the region, so the last
    /// valid column is `right - agent_width`.
    #[inline]
    pub fn placement_bounds(&self, agent_width: i32) -> (Cell, Cell) {
        (
            Cell::new(self.bounds.left, self.bounds.top),
            Cell::new(self.bounds.right - agent_width, self.bounds.bottom - agent_width),
        )
    }

    /// `true` if an agent at `cell` lies entirely inside the region.
    #[inline]
    pub fn contains_footprint(&self, cell: Cell, agent_width: i32) -> bool {
        let (min, max) = self.placement_bounds(agent_width);
        (min.x..=max.x).contains(&cell.x) && (min.y..=max.y).contains(&cell.y)
    }

    /// Number of distinct valid agent positions.
    pub fn capacity(&self, agent_width: i32) -> usize {
        let (min, max) = self.placement_bounds(agent_width);
        let w = (max.x - min.x + 1).max(0) as usize;
        let h = (max.y - min.y + 1).max(0) as usize;
        w * h
    }

    /// Where arriving travellers are put down: the region's center, pulled
    /// back inside the placement bounds for very small regions.
    pub fn travel_target(&self, agent_width: i32) -> Cell {
        let (min, max) = self.placement_bounds(agent_width);
        let c = self.bounds.center();
        Cell::new(c.x.clamp(min.x, max.x), c.y.clamp(min.y, max.y))
    }
}

// ── RegionLayout ──────────────────────────────────────────────────────────────

/// The fixed set of regions for a run.  Indexed by `RegionId`.
#[derive(Clone, Debug)]
pub struct RegionLayout {
    regions: Vec<Region>,
    /// Side of each partition square before the margin is applied.
    pub edge:    i32,
    pub columns: u32,
    pub rows:    u32,
}

impl RegionLayout {
    /// Partition `world` into `count` equal squares inset by `margin`.
    ///
    /// # Errors
    ///
    /// - [`SpatialError::NoRegions`] if `count == 0`.
    /// - [`SpatialError::RegionTooSmall`] if the inset squares cannot hold a
    ///   single `agent_width` footprint.
    pub fn partition(count: u32, world: Rect, margin: i32, agent_width: i32) -> SpatialResult<Self> {
        if count == 0 {
            return Err(SpatialError::NoRegions);
        }

        let (columns, rows) = grid_dimensions(count);
        let edge = (world.width() / columns as i32).min(world.height() / rows as i32);
        let side = edge - 2 * margin;
        if side < agent_width.max(1) {
            return Err(SpatialError::RegionTooSmall { side, margin, agent_width });
        }

        let regions = (0..columns)
            .flat_map(|col| (0..rows).map(move |row| (col, row)))
            .take(count as usize)
            .enumerate()
            .map(|(i, (col, row))| {
                let square = Rect::from_origin(
                    world.left + col as i32 * edge,
                    world.top + row as i32 * edge,
                    edge,
                    edge,
                );
                Region { id: RegionId(i as u32), bounds: square.inset(margin) }
            })
            .collect();

        Ok(Self { regions, edge, columns, rows })
    }

    #[inline]
    pub fn get(&self, id: RegionId) -> &Region {
        &self.regions[id.index()]
    }

    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> + '_ {
        self.regions.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Sum of [`Region::capacity`] over all regions.
    pub fn total_capacity(&self, agent_width: i32) -> usize {
        self.regions.iter().map(|r| r.capacity(agent_width)).sum()
    }
}

/// Columns × rows of the partition grid for `count` regions.
///
/// `⌈√count⌉ × ⌊√count⌋` when that covers `count`, else `⌈√count⌉` squared.
pub fn grid_dimensions(count: u32) -> (u32, u32) {
    let floor = count.isqrt();
    let ceil = if floor * floor == count { floor } else { floor + 1 };
    if ceil * floor >= count {
        (ceil, floor)
    } else {
        (ceil, ceil)
    }
}
