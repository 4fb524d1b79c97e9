//! Unit tests for epi-spatial.

use epi_core::{AgentId, Cell, Rect, RegionId};

use crate::{OccupancyGrid, RegionLayout, SpatialError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn classic_world() -> Rect {
    Rect::from_origin(0, 0, 1700, 900)
}

fn small_grid() -> OccupancyGrid {
    OccupancyGrid::new(Rect::from_origin(0, 0, 20, 10), 2)
}

// ── Region partition ──────────────────────────────────────────────────────────

#[cfg(test)]
mod partition {
    use super::*;
    use crate::region::grid_dimensions;

    #[test]
    fn dimensions_cover_count() {
        assert_eq!(grid_dimensions(1), (1, 1));
        assert_eq!(grid_dimensions(2), (2, 1));
        assert_eq!(grid_dimensions(3), (2, 2));
        assert_eq!(grid_dimensions(5), (3, 2));
        assert_eq!(grid_dimensions(7), (3, 3));
        assert_eq!(grid_dimensions(9), (3, 3));
        for n in 1..200 {
            let (c, r) = grid_dimensions(n);
            assert!(c * r >= n, "{n}: {c}x{r}");
            assert!(c >= r);
        }
    }

    #[test]
    fn classic_nine_regions() {
        let layout = RegionLayout::partition(9, classic_world(), 20, 5).unwrap();
        assert_eq!(layout.len(), 9);
        assert_eq!(layout.edge, 300); // min(1700 / 3, 900 / 3)

        // Column-major generation order.
        assert_eq!(layout.get(RegionId(0)).bounds, Rect::from_origin(20, 20, 260, 260));
        assert_eq!(layout.get(RegionId(1)).bounds, Rect::from_origin(20, 320, 260, 260));
        assert_eq!(layout.get(RegionId(3)).bounds, Rect::from_origin(320, 20, 260, 260));
    }

    #[test]
    fn surplus_cells_trimmed_from_the_end() {
        let layout = RegionLayout::partition(7, classic_world(), 10, 5).unwrap();
        assert_eq!(layout.len(), 7);
        assert_eq!((layout.columns, layout.rows), (3, 3));
        // Region 6 is the top of the third column; its siblings were dropped.
        let last = layout.get(RegionId(6)).bounds;
        assert_eq!(last.left, 2 * layout.edge + 10);
        assert_eq!(last.top, 10);
    }

    #[test]
    fn regions_do_not_overlap_and_stay_in_world() {
        let world = classic_world();
        let layout = RegionLayout::partition(13, world, 5, 5).unwrap();
        let regions = layout.regions();
        for (i, a) in regions.iter().enumerate() {
            assert!(a.bounds.left >= world.left && a.bounds.right <= world.right);
            assert!(a.bounds.top >= world.top && a.bounds.bottom <= world.bottom);
            for b in &regions[i + 1..] {
                assert!(!a.bounds.overlaps(&b.bounds), "{} overlaps {}", a.bounds, b.bounds);
            }
        }
    }

    #[test]
    fn zero_regions_is_an_error() {
        let err = RegionLayout::partition(0, classic_world(), 20, 5).unwrap_err();
        assert!(matches!(err, SpatialError::NoRegions));
    }

    #[test]
    fn margin_too_large_is_an_error() {
        // 100 regions → edge 90; a 43 px margin leaves a 4 px side.
        let err = RegionLayout::partition(100, classic_world(), 43, 5).unwrap_err();
        assert!(matches!(err, SpatialError::RegionTooSmall { side: 4, .. }));
    }

    #[test]
    fn capacity_and_travel_target() {
        let layout = RegionLayout::partition(1, Rect::from_origin(0, 0, 30, 30), 5, 5).unwrap();
        let region = layout.get(RegionId(0));
        // Inset square is [5, 25); valid x is 5..=20 → 16 columns.
        assert_eq!(region.capacity(5), 16 * 16);
        assert_eq!(region.travel_target(5), Cell::new(15, 15));
        assert!(region.contains_footprint(Cell::new(20, 5), 5));
        assert!(!region.contains_footprint(Cell::new(21, 5), 5));
    }

    #[test]
    fn travel_target_clamped_for_tight_regions() {
        let layout = RegionLayout::partition(1, Rect::from_origin(0, 0, 5, 5), 0, 5).unwrap();
        let region = layout.get(RegionId(0));
        assert_eq!(region.capacity(5), 1);
        assert_eq!(region.travel_target(5), Cell::new(0, 0));
    }
}

// ── Occupancy grid ────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use super::*;

    #[test]
    fn place_get_vacate() {
        let mut g = small_grid();
        let c = Cell::new(3, 4);
        assert!(!g.is_occupied(c));
        g.place(AgentId(1), c).unwrap();
        assert_eq!(g.get(c), Some(AgentId(1)));
        assert_eq!(g.occupied_count(), 1);
        assert_eq!(g.vacate(c), Some(AgentId(1)));
        assert_eq!(g.vacate(c), None);
        assert_eq!(g.occupied_count(), 0);
    }

    #[test]
    fn place_on_occupied_fails() {
        let mut g = small_grid();
        g.place(AgentId(1), Cell::new(0, 0)).unwrap();
        let err = g.place(AgentId(2), Cell::new(0, 0)).unwrap_err();
        assert!(matches!(err, SpatialError::Occupied { occupant: AgentId(1), .. }));
        assert_eq!(g.get(Cell::new(0, 0)), Some(AgentId(1)));
    }

    #[test]
    fn padding_is_addressable_but_beyond_is_not() {
        let mut g = small_grid();
        assert!(g.in_bounds(Cell::new(-2, -2)));
        assert!(g.in_bounds(Cell::new(22, 12)));
        assert!(!g.in_bounds(Cell::new(23, 0)));
        assert!(matches!(
            g.place(AgentId(0), Cell::new(-3, 0)),
            Err(SpatialError::OutOfBounds(_))
        ));
        assert_eq!(g.get(Cell::new(100, 100)), None);
    }

    #[test]
    fn relocate_moves_atomically() {
        let mut g = small_grid();
        g.place(AgentId(1), Cell::new(1, 1)).unwrap();
        g.place(AgentId(2), Cell::new(2, 2)).unwrap();

        assert!(g.relocate(AgentId(1), Cell::new(1, 1), Cell::new(2, 2)).is_err());
        assert_eq!(g.get(Cell::new(1, 1)), Some(AgentId(1)), "failed move leaves grid intact");

        g.relocate(AgentId(1), Cell::new(1, 1), Cell::new(1, 2)).unwrap();
        assert_eq!(g.get(Cell::new(1, 1)), None);
        assert_eq!(g.get(Cell::new(1, 2)), Some(AgentId(1)));
        assert_eq!(g.occupied_count(), 2);
    }

    #[test]
    fn neighbors_exclude_center_and_respect_radius() {
        let mut g = small_grid();
        let center = Cell::new(5, 5);
        g.place(AgentId(0), center).unwrap();
        g.place(AgentId(1), Cell::new(4, 6)).unwrap();
        g.place(AgentId(2), Cell::new(7, 3)).unwrap();
        g.place(AgentId(3), Cell::new(8, 5)).unwrap(); // distance 3

        let found: Vec<AgentId> = g.neighbors(center, 2).map(|(_, a)| a).collect();
        assert_eq!(found, vec![AgentId(1), AgentId(2)]);

        assert_eq!(g.neighbors(center, 0).count(), 0);
    }

    #[test]
    fn neighbors_scan_x_outer_y_inner() {
        let mut g = small_grid();
        g.place(AgentId(9), Cell::new(6, 4)).unwrap();
        g.place(AgentId(8), Cell::new(4, 6)).unwrap();
        g.place(AgentId(7), Cell::new(4, 4)).unwrap();
        let cells: Vec<Cell> = g.neighbors(Cell::new(5, 5), 1).map(|(c, _)| c).collect();
        assert_eq!(cells, vec![Cell::new(4, 4), Cell::new(4, 6), Cell::new(6, 4)]);
    }

    #[test]
    fn iter_occupied_reports_positions() {
        let mut g = small_grid();
        g.place(AgentId(3), Cell::new(-1, 7)).unwrap();
        g.place(AgentId(4), Cell::new(10, 0)).unwrap();
        let mut all: Vec<(Cell, AgentId)> = g.iter_occupied().collect();
        all.sort();
        assert_eq!(all, vec![(Cell::new(-1, 7), AgentId(3)), (Cell::new(10, 0), AgentId(4))]);
    }
}
