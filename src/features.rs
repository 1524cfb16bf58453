//! Dense feature container handed to trainers.

use crate::dataset::Matrix;
use crate::error::{Error, Result};

/// A set of fixed-dimension feature vectors over flat storage.
///
/// The container's own bookkeeping is authoritative: the number of vectors
/// is the flat length divided by the per-vector dimension, regardless of
/// the shape of the matrix the data came from. Wrapping a column-stacked
/// matrix with the original feature width therefore doubles the vector
/// count rather than the vector dimension.
#[derive(Debug, Clone)]
pub struct DenseFeatures {
    data: Vec<f64>,
    dim: usize,
}

impl DenseFeatures {
    /// Wrap a matrix, one vector per row.
    pub fn from_matrix(matrix: &Matrix) -> Self {
        DenseFeatures {
            dim: matrix.n_cols(),
            data: matrix.clone().into_flat(),
        }
    }

    /// Wrap flat data as a run of `dim`-length vectors.
    pub fn from_flat(data: Vec<f64>, dim: usize) -> Result<Self> {
        if dim == 0 || data.is_empty() {
            return Err(Error::EmptyData);
        }
        if data.len() % dim != 0 {
            return Err(Error::PartialVector {
                len: data.len(),
                dim,
            });
        }
        Ok(DenseFeatures { data, dim })
    }

    pub fn num_vectors(&self) -> usize {
        self.data.len() / self.dim
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn vector(&self, i: usize) -> &[f64] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }
}

#[test]
fn vectors_follow_rows() {
    let m = crate::dataset::parse_matrix("1 2 3\n4 5 6\n").unwrap();
    let f = DenseFeatures::from_matrix(&m);
    assert_eq!(f.num_vectors(), 2);
    assert_eq!(f.dim(), 3);
    assert_eq!(f.vector(1), &[4.0, 5.0, 6.0]);
}

#[test]
fn vectors_follow_flat_storage() {
    // A 2x4 stacked block read as 2-dimensional vectors holds 4 vectors.
    let f = DenseFeatures::from_flat(vec![1.0, 2.0, 1.0, 2.0, 3.0, 4.0, 3.0, 4.0], 2).unwrap();
    assert_eq!(f.num_vectors(), 4);
    assert_eq!(f.vector(0), &[1.0, 2.0]);
    assert_eq!(f.vector(1), &[1.0, 2.0]);
    assert_eq!(f.vector(2), &[3.0, 4.0]);
}

#[test]
fn flat_storage_must_divide_into_vectors() {
    match DenseFeatures::from_flat(vec![1.0, 2.0, 3.0], 2) {
        Err(Error::PartialVector { len: 3, dim: 2 }) => {}
        other => panic!("unexpected: {:?}", other),
    }
}
