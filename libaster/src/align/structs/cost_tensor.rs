use thiserror::Error;

use crate::scoring::Cost;

#[derive(Error, Debug)]
#[error("cost tensor of {cells} cells exceeds the ceiling of {max_cells}")]
pub struct CapacityError {
    pub cells: usize,
    pub max_cells: usize,
}

/// A dense cost tensor of shape (n_1 + 1) x ... x (n_k + 1), stored as a
/// flat row-major vector.
///
/// The cell count is estimated against a caller-supplied ceiling before
/// anything is allocated, so an infeasibly large alignment fails with
/// [CapacityError] instead of exhausting memory.
pub struct CostTensor {
    shape: Vec<usize>,
    strides: Vec<usize>,
    data: Vec<Cost>,
}

impl CostTensor {
    pub fn new(shape: &[usize], max_cells: usize) -> Result<Self, CapacityError> {
        let mut cells: usize = 1;
        for &dim in shape {
            cells = cells.checked_mul(dim).ok_or(CapacityError {
                cells: usize::MAX,
                max_cells,
            })?;
        }

        if cells > max_cells {
            return Err(CapacityError { cells, max_cells });
        }

        let mut strides = vec![1; shape.len()];
        for dim in (0..shape.len().saturating_sub(1)).rev() {
            strides[dim] = strides[dim + 1] * shape[dim + 1];
        }

        Ok(Self {
            shape: shape.to_vec(),
            strides,
            data: vec![0; cells],
        })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    fn offset(&self, index: &[usize]) -> usize {
        assert_eq!(
            index.len(),
            self.shape.len(),
            "cost tensor index has the wrong number of dimensions"
        );

        let mut offset = 0;
        for (dim, (&idx, &stride)) in index.iter().zip(self.strides.iter()).enumerate() {
            assert!(
                idx < self.shape[dim],
                "cost tensor index {idx} out of range for dimension {dim} of extent {}",
                self.shape[dim]
            );
            offset += idx * stride;
        }

        offset
    }

    #[inline]
    pub fn get(&self, index: &[usize]) -> Cost {
        self.data[self.offset(index)]
    }

    #[inline]
    pub fn set(&mut self, index: &[usize], value: Cost) {
        let offset = self.offset(index);
        self.data[offset] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() -> anyhow::Result<()> {
        let mut tensor = CostTensor::new(&[2, 3, 4], 1000)?;

        tensor.set(&[0, 0, 0], 7);
        tensor.set(&[1, 2, 3], 9);
        tensor.set(&[0, 2, 1], 11);

        assert_eq!(tensor.get(&[0, 0, 0]), 7);
        assert_eq!(tensor.get(&[1, 2, 3]), 9);
        assert_eq!(tensor.get(&[0, 2, 1]), 11);
        assert_eq!(tensor.get(&[1, 0, 0]), 0);

        Ok(())
    }

    #[test]
    fn test_capacity_ceiling() {
        let result = CostTensor::new(&[100, 100, 100], 999_999);
        let err = result.err().unwrap();
        assert_eq!(err.cells, 1_000_000);
        assert_eq!(err.max_cells, 999_999);

        assert!(CostTensor::new(&[100, 100, 100], 1_000_000).is_ok());
        assert!(CostTensor::new(&[usize::MAX, 2], usize::MAX).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range() {
        let tensor = CostTensor::new(&[2, 2], 100).unwrap();
        tensor.get(&[0, 2]);
    }
}
