use crate::scoring::{Cost, INFINITY};

/// A dense (n+1) x (m+1) grid of accumulated alignment costs, stored as
/// a flat row-major vector.
///
/// Indexing is bounds-checked per axis: an out-of-range row or column
/// panics instead of wrapping into a neighboring row.
#[derive(Clone)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Cost>,
}

impl CostMatrix {
    pub fn new(rows: usize, cols: usize, fill: Cost) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cost matrix index ({row}, {col}) out of range for shape ({}, {})",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cost {
        self.data[self.offset(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Cost) {
        let offset = self.offset(row, col);
        self.data[offset] = value;
    }
}

/// The three parallel grids of the affine gap model: the best cost of
/// any alignment of the prefixes (`total`), the best cost ending with a
/// gap in the first sequence (`insert`), and the best cost ending with a
/// gap in the second sequence (`delete`).
pub struct AffineMatrices {
    pub total: CostMatrix,
    pub insert: CostMatrix,
    pub delete: CostMatrix,
}

impl AffineMatrices {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            total: CostMatrix::new(rows, cols, INFINITY),
            insert: CostMatrix::new(rows, cols, INFINITY),
            delete: CostMatrix::new(rows, cols, INFINITY),
        }
    }
}
