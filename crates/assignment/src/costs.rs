use ct_core::Pixels;
use ct_core::Point;

/// Dense ground cost matrix for a rectangular assignment problem.
///
/// Rows are items (hand cards), columns are slots. Construction enforces
/// `rows <= cols`; the caller decides how to orient a wider-than-tall
/// problem. All costs must be finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Costs {
    rows: usize,
    cols: usize,
    data: Vec<Pixels>,
}

impl Costs {
    /// Builds a matrix from row-major data. Panics if the shape is
    /// inconsistent or taller than wide; the caller owns orientation.
    pub fn new(rows: usize, cols: usize, data: Vec<Pixels>) -> Self {
        assert!(rows <= cols, "assignment requires rows <= cols");
        assert_eq!(rows * cols, data.len(), "shape mismatch");
        Self { rows, cols, data }
    }
    /// Squared-distance costs between item positions and slot positions.
    /// The metric the hand layout loop minimizes.
    pub fn squared(items: &[Point], slots: &[Point]) -> Self {
        let data = items
            .iter()
            .flat_map(|item| slots.iter().map(|slot| item.squared(slot)))
            .collect();
        Self::new(items.len(), slots.len(), data)
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn at(&self, row: usize, col: usize) -> Pixels {
        self.data[row * self.cols + col]
    }
}
