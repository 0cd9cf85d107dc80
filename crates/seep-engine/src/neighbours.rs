//! 4-connected neighbour wiring for a bounded row-major lattice.
//!
//! Edges absorb: a cell on the lattice edge simply has no neighbour in
//! that direction. Tables are built once per lattice (creation or
//! resize) and never touched during a tick.

use seep_core::{CellIndex, Direction};

/// Flat row-major index of `(x, y)`. Caller guarantees bounds.
#[inline]
pub(crate) fn flat(x: i32, y: i32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Neighbour indices of `(x, y)` in [`Direction::slot`] order.
pub(crate) fn neighbour_slots(x: i32, y: i32, width: u32, height: u32) -> [Option<CellIndex>; 4] {
    let mut slots = [None; 4];
    for dir in Direction::ALL {
        let (dx, dy) = dir.offset();
        let nx = x + dx;
        let ny = y + dy;
        if nx >= 0 && ny >= 0 && (nx as u32) < width && (ny as u32) < height {
            // Lattice construction bounds the cell count to u32.
            slots[dir.slot()] = Some(CellIndex(flat(nx, ny, width) as u32));
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_is_row_major() {
        assert_eq!(flat(0, 0, 5), 0);
        assert_eq!(flat(4, 0, 5), 4);
        assert_eq!(flat(0, 1, 5), 5);
        assert_eq!(flat(2, 3, 5), 17);
    }

    #[test]
    fn interior_cell_has_all_four() {
        let s = neighbour_slots(1, 1, 3, 3);
        // (1,0)=1, (2,1)=5, (1,2)=7, (0,1)=3
        assert_eq!(s[Direction::Top.slot()], Some(CellIndex(1)));
        assert_eq!(s[Direction::Right.slot()], Some(CellIndex(5)));
        assert_eq!(s[Direction::Bottom.slot()], Some(CellIndex(7)));
        assert_eq!(s[Direction::Left.slot()], Some(CellIndex(3)));
    }

    #[test]
    fn corner_cell_has_two() {
        let s = neighbour_slots(0, 0, 3, 3);
        assert_eq!(s[Direction::Top.slot()], None);
        assert_eq!(s[Direction::Left.slot()], None);
        assert_eq!(s[Direction::Right.slot()], Some(CellIndex(1)));
        assert_eq!(s[Direction::Bottom.slot()], Some(CellIndex(3)));
    }

    #[test]
    fn far_corner_has_two() {
        let s = neighbour_slots(3, 2, 4, 3);
        assert_eq!(s.iter().flatten().count(), 2);
        assert_eq!(s[Direction::Top.slot()], Some(CellIndex(7)));
        assert_eq!(s[Direction::Left.slot()], Some(CellIndex(10)));
    }

    #[test]
    fn edge_cell_has_three() {
        let s = neighbour_slots(1, 0, 3, 3);
        assert_eq!(s.iter().flatten().count(), 3);
        assert_eq!(s[Direction::Top.slot()], None);
    }
}
