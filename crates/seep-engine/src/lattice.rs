//! The dense cell grid and the host-facing edit surface.
//!
//! Coordinates are `(x, y)` with `x` growing rightwards and `y` growing
//! downwards. The outermost ring of cells is the border: it is created
//! as [`CellKind::Obstacle`] and every attempt to change it is a silent
//! no-op, so a host can drag-paint across the whole viewport without
//! special-casing the edges.

use log::{debug, trace};
use seep_core::{CellIndex, CellKind, LatticeError};
use smallvec::SmallVec;

use crate::cell::Cell;
use crate::hash;
use crate::neighbours;

/// A fixed-size 2D grid of cells bounded by an obstacle border.
///
/// # Examples
///
/// ```
/// use seep_engine::Lattice;
///
/// let mut lattice = Lattice::new(5, 5).unwrap();
/// lattice.add_liquid_at(2, 1, 2.0).unwrap();
/// assert_eq!(lattice.total_liquid(), 2.0);
///
/// // The border is permanently solid.
/// lattice.add_liquid_at(0, 0, 1.0).unwrap();
/// assert_eq!(lattice.cell_at(0, 0).unwrap().liquid(), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct Lattice {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Lattice {
    /// Smallest legal width or height: one interior cell plus the border.
    pub const MIN_DIM: u32 = 3;

    /// Allocate a `width × height` lattice with an obstacle border.
    ///
    /// Returns `Err(LatticeError::InvalidDimensions)` if either dimension
    /// is below [`MIN_DIM`](Self::MIN_DIM), exceeds `i32::MAX`, or the
    /// cell count does not fit in a `u32`.
    pub fn new(width: u32, height: u32) -> Result<Self, LatticeError> {
        let invalid = LatticeError::InvalidDimensions { width, height };
        if width < Self::MIN_DIM || height < Self::MIN_DIM {
            return Err(invalid);
        }
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(invalid);
        }
        let count = width as u64 * height as u64;
        if count > u32::MAX as u64 {
            return Err(invalid);
        }

        let mut cells = Vec::with_capacity(count as usize);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let kind = if is_border_of(x, y, width, height) {
                    CellKind::Obstacle
                } else {
                    CellKind::Open
                };
                let slots = neighbours::neighbour_slots(x, y, width, height);
                cells.push(Cell::new(x, y, kind, slots));
            }
        }

        debug!("created {width}x{height} lattice ({count} cells)");
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells, border included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty lattices.
    pub fn is_empty(&self) -> bool {
        false
    }

    // ── Coordinates ─────────────────────────────────────────────

    /// Whether `(x, y)` lies inside the lattice.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Whether `(x, y)` is on the permanent obstacle border.
    ///
    /// `false` for coordinates outside the lattice.
    pub fn is_border(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && is_border_of(x, y, self.width, self.height)
    }

    /// Whether `(x, y)` is an editable interior cell.
    pub fn is_interior(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && !is_border_of(x, y, self.width, self.height)
    }

    /// Bounds-checked conversion from coordinates to a [`CellIndex`].
    pub fn index_of(&self, x: i32, y: i32) -> Result<CellIndex, LatticeError> {
        if !self.contains(x, y) {
            return Err(LatticeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(CellIndex(neighbours::flat(x, y, self.width) as u32))
    }

    // ── Read access ─────────────────────────────────────────────

    /// The cell at `(x, y)`.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<&Cell, LatticeError> {
        let idx = self.index_of(x, y)?;
        Ok(&self.cells[idx.get()])
    }

    /// The cell at `idx`, or `None` if the index is out of range.
    pub fn cell(&self, idx: CellIndex) -> Option<&Cell> {
        self.cells.get(idx.get())
    }

    /// Classification at `(x, y)`, or `None` outside the lattice.
    pub fn kind_at(&self, x: i32, y: i32) -> Option<CellKind> {
        self.cell_at(x, y).ok().map(Cell::kind)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Existing neighbours of `idx`, in top/right/bottom/left order.
    pub fn neighbours(&self, idx: CellIndex) -> SmallVec<[CellIndex; 4]> {
        self.cell(idx)
            .map(|c| c.neighbour_slots().into_iter().flatten().collect())
            .unwrap_or_default()
    }

    // ── Aggregates ──────────────────────────────────────────────

    /// Sum of liquid over every cell.
    pub fn total_liquid(&self) -> f64 {
        self.cells.iter().map(Cell::liquid).sum()
    }

    /// Number of cells currently settled.
    pub fn settled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_settled()).count()
    }

    /// Number of cells the next tick will visit.
    pub fn active_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.kind().is_open() && !c.is_settled())
            .count()
    }

    /// Whether every cell is settled, i.e. the next tick is a no-op.
    pub fn is_fully_settled(&self) -> bool {
        self.cells.iter().all(Cell::is_settled)
    }

    /// FNV-1a hash of dimensions, kinds and liquid. See [`hash::state_hash`].
    pub fn state_hash(&self) -> u64 {
        hash::state_hash(self)
    }

    // ── Host edits ──────────────────────────────────────────────

    /// Reclassify the cell at `(x, y)` and wake it and its neighbours.
    ///
    /// Converting to [`CellKind::Obstacle`] drops the cell's liquid; that
    /// is the only way liquid leaves the lattice. No-op on the border.
    pub fn set_kind(&mut self, x: i32, y: i32, kind: CellKind) -> Result<(), LatticeError> {
        let idx = self.index_of(x, y)?;
        if self.is_border(x, y) {
            trace!("ignoring {kind} edit on border cell ({x}, {y})");
            return Ok(());
        }
        let dropped = self.cells[idx.get()].set_kind(kind);
        if dropped > 0.0 {
            trace!("obstacle at ({x}, {y}) removed {dropped} liquid");
        }
        self.wake_neighbours(idx);
        Ok(())
    }

    /// Make `(x, y)` open.
    pub fn set_open(&mut self, x: i32, y: i32) -> Result<(), LatticeError> {
        self.set_kind(x, y, CellKind::Open)
    }

    /// Make `(x, y)` an obstacle, dropping any liquid it holds.
    pub fn set_obstacle(&mut self, x: i32, y: i32) -> Result<(), LatticeError> {
        self.set_kind(x, y, CellKind::Obstacle)
    }

    /// Inject `amount` of liquid at `(x, y)` and wake the cell.
    ///
    /// No-op on obstacles, which includes the border. Returns
    /// `Err(LatticeError::InvalidAmount)` for negative, NaN, or infinite
    /// amounts.
    pub fn add_liquid_at(&mut self, x: i32, y: i32, amount: f64) -> Result<(), LatticeError> {
        let idx = self.index_of(x, y)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(LatticeError::InvalidAmount { amount });
        }
        if !self.cells[idx.get()].add_liquid(amount) {
            trace!("ignoring injection of {amount} into obstacle ({x}, {y})");
        }
        Ok(())
    }

    /// Rebuild the lattice at a new size.
    ///
    /// Cells that are interior in both the old and the new extent keep
    /// their kind and liquid; everything else starts fresh, and every
    /// neighbour link and settle state is rebuilt. Returns the liquid
    /// lost with cells that fell outside the new interior.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<f64, LatticeError> {
        let mut next = Lattice::new(width, height)?;
        let before = self.total_liquid();
        for cell in &self.cells {
            let (x, y) = (cell.x(), cell.y());
            if !self.is_interior(x, y) || !next.is_interior(x, y) {
                continue;
            }
            let idx = neighbours::flat(x, y, width);
            next.cells[idx].restore(cell.kind(), cell.liquid());
        }
        let dropped = (before - next.total_liquid()).max(0.0);
        debug!(
            "resized lattice {}x{} -> {width}x{height}, dropped {dropped} liquid",
            self.width, self.height
        );
        *self = next;
        Ok(dropped)
    }

    // ── Crate-private access ────────────────────────────────────

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    fn wake_neighbours(&mut self, idx: CellIndex) {
        for n in self.cells[idx.get()].neighbour_slots().into_iter().flatten() {
            self.cells[n.get()].unsettle();
        }
    }
}

fn is_border_of(x: i32, y: i32, width: u32, height: u32) -> bool {
    x == 0 || y == 0 || x as u32 == width - 1 || y as u32 == height - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use seep_core::Direction;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_rejects_degenerate_dimensions() {
        for (w, h) in [(2, 5), (5, 2), (0, 0), (1, 3)] {
            match Lattice::new(w, h) {
                Err(LatticeError::InvalidDimensions { width, height }) => {
                    assert_eq!((width, height), (w, h));
                }
                other => panic!("expected InvalidDimensions for {w}x{h}, got {other:?}"),
            }
        }
    }

    #[test]
    fn new_rejects_cell_count_overflow() {
        assert!(matches!(
            Lattice::new(70_000, 70_000),
            Err(LatticeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn smallest_lattice_has_one_open_cell() {
        let l = Lattice::new(3, 3).unwrap();
        let open: Vec<_> = l.iter().filter(|c| c.kind().is_open()).collect();
        assert_eq!(open.len(), 1);
        assert_eq!((open[0].x(), open[0].y()), (1, 1));
    }

    #[test]
    fn border_is_obstacle_interior_is_open() {
        let l = Lattice::new(6, 4).unwrap();
        for c in l.iter() {
            let border = c.x() == 0 || c.y() == 0 || c.x() == 5 || c.y() == 3;
            assert_eq!(c.kind().is_obstacle(), border, "cell ({}, {})", c.x(), c.y());
        }
    }

    #[test]
    fn neighbours_are_wired_by_index() {
        let l = Lattice::new(5, 4).unwrap();
        let c = l.cell_at(2, 1).unwrap();
        let top = l.cell(c.neighbour(Direction::Top).unwrap()).unwrap();
        let bottom = l.cell(c.neighbour(Direction::Bottom).unwrap()).unwrap();
        let left = l.cell(c.neighbour(Direction::Left).unwrap()).unwrap();
        let right = l.cell(c.neighbour(Direction::Right).unwrap()).unwrap();
        assert_eq!((top.x(), top.y()), (2, 0));
        assert_eq!((bottom.x(), bottom.y()), (2, 2));
        assert_eq!((left.x(), left.y()), (1, 1));
        assert_eq!((right.x(), right.y()), (3, 1));

        let corner = l.cell_at(0, 0).unwrap();
        assert_eq!(corner.neighbour(Direction::Top), None);
        assert_eq!(corner.neighbour(Direction::Left), None);
        assert_eq!(l.neighbours(l.index_of(0, 0).unwrap()).len(), 2);
    }

    // ── Coordinates ─────────────────────────────────────────────

    #[test]
    fn cell_at_out_of_bounds() {
        let l = Lattice::new(5, 5).unwrap();
        for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 5)] {
            match l.cell_at(x, y) {
                Err(LatticeError::OutOfBounds {
                    x: ex,
                    y: ey,
                    width: 5,
                    height: 5,
                }) => assert_eq!((ex, ey), (x, y)),
                other => panic!("expected OutOfBounds, got {other:?}"),
            }
        }
    }

    #[test]
    fn kind_at_reports_none_outside() {
        let l = Lattice::new(4, 4).unwrap();
        assert_eq!(l.kind_at(1, 1), Some(CellKind::Open));
        assert_eq!(l.kind_at(0, 2), Some(CellKind::Obstacle));
        assert_eq!(l.kind_at(4, 1), None);
        assert_eq!(l.kind_at(-3, 1), None);
    }

    #[test]
    fn border_and_interior_predicates() {
        let l = Lattice::new(4, 5).unwrap();
        assert!(l.is_border(0, 2));
        assert!(l.is_border(3, 4));
        assert!(!l.is_border(7, 7));
        assert!(l.is_interior(1, 1));
        assert!(l.is_interior(2, 3));
        assert!(!l.is_interior(3, 1));
        assert!(!l.is_interior(-1, 1));
    }

    // ── Edits ───────────────────────────────────────────────────

    #[test]
    fn border_edits_are_silent_noops() {
        let mut l = Lattice::new(5, 5).unwrap();
        l.set_open(0, 2).unwrap();
        l.add_liquid_at(4, 4, 3.0).unwrap();
        assert_eq!(l.kind_at(0, 2), Some(CellKind::Obstacle));
        assert_eq!(l.total_liquid(), 0.0);
    }

    #[test]
    fn edits_out_of_bounds_fail() {
        let mut l = Lattice::new(5, 5).unwrap();
        assert!(matches!(
            l.set_obstacle(9, 1),
            Err(LatticeError::OutOfBounds { .. })
        ));
        assert!(matches!(
            l.set_open(1, -1),
            Err(LatticeError::OutOfBounds { .. })
        ));
        assert!(matches!(
            l.add_liquid_at(5, 5, 1.0),
            Err(LatticeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn add_liquid_rejects_bad_amounts() {
        let mut l = Lattice::new(5, 5).unwrap();
        for amount in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                l.add_liquid_at(2, 2, amount),
                Err(LatticeError::InvalidAmount { .. })
            ));
        }
        assert_eq!(l.total_liquid(), 0.0);
    }

    #[test]
    fn add_liquid_into_interior_obstacle_is_noop() {
        let mut l = Lattice::new(5, 5).unwrap();
        l.set_obstacle(2, 2).unwrap();
        l.add_liquid_at(2, 2, 1.0).unwrap();
        assert_eq!(l.total_liquid(), 0.0);
    }

    #[test]
    fn obstacle_conversion_removes_exactly_the_cell_liquid() {
        let mut l = Lattice::new(6, 6).unwrap();
        l.add_liquid_at(2, 2, 0.75).unwrap();
        l.add_liquid_at(3, 3, 1.5).unwrap();
        l.set_obstacle(2, 2).unwrap();
        assert_eq!(l.total_liquid(), 1.5);
        assert_eq!(l.cell_at(2, 2).unwrap().liquid(), 0.0);
    }

    #[test]
    fn kind_change_wakes_cell_and_neighbours() {
        let mut l = Lattice::new(5, 5).unwrap();
        for c in l.cells_mut() {
            c.settle_now();
        }
        assert!(l.is_fully_settled());

        l.set_obstacle(2, 2).unwrap();
        for (x, y) in [(2, 2), (2, 1), (2, 3), (1, 2), (3, 2)] {
            assert!(!l.cell_at(x, y).unwrap().is_settled(), "({x}, {y})");
        }
        assert!(l.cell_at(1, 1).unwrap().is_settled());
        assert_eq!(l.settled_count(), 25 - 5);

        for c in l.cells_mut() {
            c.settle_now();
        }
        l.set_open(2, 2).unwrap();
        assert_eq!(l.settled_count(), 25 - 5);
    }

    #[test]
    fn injection_wakes_only_the_target() {
        let mut l = Lattice::new(5, 5).unwrap();
        for c in l.cells_mut() {
            c.settle_now();
        }
        l.add_liquid_at(1, 3, 0.5).unwrap();
        assert_eq!(l.settled_count(), 24);
        assert_eq!(l.active_count(), 1);
    }

    // ── Resize ──────────────────────────────────────────────────

    #[test]
    fn resize_keeps_shared_interior_state() {
        let mut l = Lattice::new(6, 6).unwrap();
        l.add_liquid_at(1, 1, 2.0).unwrap();
        l.add_liquid_at(4, 4, 3.0).unwrap();
        l.set_obstacle(2, 1).unwrap();

        let dropped = l.resize(4, 8).unwrap();
        assert_eq!((l.width(), l.height()), (4, 8));
        assert_eq!(l.len(), 32);
        assert_eq!(dropped, 3.0);
        assert_eq!(l.cell_at(1, 1).unwrap().liquid(), 2.0);
        assert_eq!(l.kind_at(2, 1), Some(CellKind::Obstacle));
        // New border row/column is solid even where the old interior was.
        assert_eq!(l.kind_at(3, 3), Some(CellKind::Obstacle));
        // Cells that were border before are open now.
        assert_eq!(l.kind_at(1, 5), Some(CellKind::Open));
        assert!(l.iter().all(|c| !c.is_settled()));
    }

    #[test]
    fn resize_rewires_neighbours() {
        let mut l = Lattice::new(3, 3).unwrap();
        l.resize(5, 4).unwrap();
        let c = l.cell_at(4, 3).unwrap();
        assert_eq!(c.neighbour(Direction::Right), None);
        assert_eq!(c.neighbour(Direction::Bottom), None);
        assert_eq!(c.neighbour(Direction::Left), Some(CellIndex(3 * 5 + 3)));
    }

    #[test]
    fn resize_rejects_degenerate_and_keeps_old_lattice() {
        let mut l = Lattice::new(5, 5).unwrap();
        l.add_liquid_at(2, 2, 1.0).unwrap();
        assert!(l.resize(2, 9).is_err());
        assert_eq!((l.width(), l.height()), (5, 5));
        assert_eq!(l.total_liquid(), 1.0);
    }

    proptest! {
        #[test]
        fn obstacles_are_always_dry(
            edits in proptest::collection::vec((0i32..8, 0i32..8, 0u8..3, 0.0f64..5.0), 0..40)
        ) {
            let mut l = Lattice::new(8, 8).unwrap();
            for (x, y, op, amount) in edits {
                match op {
                    0 => l.set_open(x, y).unwrap(),
                    1 => l.set_obstacle(x, y).unwrap(),
                    _ => l.add_liquid_at(x, y, amount).unwrap(),
                }
                for c in l.iter() {
                    prop_assert!(c.liquid() >= 0.0);
                    if c.kind().is_obstacle() {
                        prop_assert_eq!(c.liquid(), 0.0);
                    }
                }
            }
        }
    }
}
