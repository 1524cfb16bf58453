//! Loading of whitespace-delimited numeric data files.
//!
//! Feature files hold one sample per line; label files hold one value per
//! line. Both are plain text with whitespace-separated numbers.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// A dense row-major matrix of `f64` values.
///
/// Rows are samples, columns are feature dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from flat row-major data.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 || data.len() != rows * cols {
            return Err(Error::EmptyData);
        }
        Ok(Matrix { rows, cols, data })
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Place `other` beside `self`, concatenating columns row by row.
    ///
    /// Both matrices must have the same number of rows.
    pub fn hstack(&self, other: &Matrix) -> Result<Matrix> {
        if self.rows != other.rows {
            return Err(Error::DimensionMismatch {
                expected: self.rows,
                found: other.rows,
            });
        }

        let cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for i in 0..self.rows {
            data.extend_from_slice(self.row(i));
            data.extend_from_slice(other.row(i));
        }

        Ok(Matrix {
            rows: self.rows,
            cols,
            data,
        })
    }

    /// Consume the matrix, yielding its flat row-major storage.
    pub fn into_flat(self) -> Vec<f64> {
        self.data
    }
}

/// Parse a matrix from text, one row per non-empty line.
pub fn parse_matrix(input: &str) -> Result<Matrix> {
    let mut cols = 0;
    let mut rows = 0;
    let mut data = Vec::new();

    for (lineno, line) in input.lines().enumerate() {
        let mut width = 0;
        for field in line.split_whitespace() {
            data.push(field.parse::<f64>()?);
            width += 1;
        }

        if width == 0 {
            continue;
        }

        if rows == 0 {
            cols = width;
        } else if width != cols {
            return Err(Error::RaggedRow {
                line: lineno + 1,
                expected: cols,
                found: width,
            });
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(Error::EmptyData);
    }

    Matrix::from_flat(rows, cols, data)
}

/// Parse a label vector from text; values may be separated by any whitespace.
pub fn parse_labels(input: &str) -> Result<Vec<f64>> {
    let labels = input
        .split_whitespace()
        .map(|field| field.parse::<f64>().map_err(Error::from))
        .collect::<Result<Vec<f64>>>()?;

    if labels.is_empty() {
        return Err(Error::EmptyData);
    }
    Ok(labels)
}

/// Load a feature matrix from a file.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    info!("Loading {}", path.as_ref().display());
    let text = fs::read_to_string(path)?;
    parse_matrix(&text)
}

/// Load a label vector from a file.
pub fn load_labels<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    info!("Loading {}", path.as_ref().display());
    let text = fs::read_to_string(path)?;
    parse_labels(&text)
}

#[test]
fn matrix_from_text() {
    let m = parse_matrix("1 2 3\n4 5 6\n").unwrap();
    assert_eq!(m.n_rows(), 2);
    assert_eq!(m.n_cols(), 3);
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    assert_eq!(m.get(0, 2), 3.0);
}

#[test]
fn matrix_skips_blank_lines() {
    let m = parse_matrix("\n1 2\n\n3 4\n\n").unwrap();
    assert_eq!(m.n_rows(), 2);
    assert_eq!(m.n_cols(), 2);
}

#[test]
fn matrix_rejects_ragged_rows() {
    match parse_matrix("1 2 3\n4 5\n") {
        Err(Error::RaggedRow {
            line: 2,
            expected: 3,
            found: 2,
        }) => {}
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn matrix_rejects_empty_input() {
    match parse_matrix("  \n \n") {
        Err(Error::EmptyData) => {}
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn matrix_rejects_malformed_numbers() {
    match parse_matrix("1 2\n3 x\n") {
        Err(Error::ParseError(_)) => {}
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn labels_from_text() {
    let y = parse_labels("-1\n-1\n1\n1\n").unwrap();
    assert_eq!(y, vec![-1.0, -1.0, 1.0, 1.0]);
}

#[test]
fn hstack_doubles_columns() {
    let m = parse_matrix("1 2\n3 4\n").unwrap();
    let s = m.hstack(&m).unwrap();
    assert_eq!(s.n_rows(), 2);
    assert_eq!(s.n_cols(), 4);
    assert_eq!(s.row(0), &[1.0, 2.0, 1.0, 2.0]);
    assert_eq!(s.row(1), &[3.0, 4.0, 3.0, 4.0]);
}

#[test]
fn hstack_requires_matching_rows() {
    let a = parse_matrix("1 2\n3 4\n").unwrap();
    let b = parse_matrix("1 2\n").unwrap();
    match a.hstack(&b) {
        Err(Error::DimensionMismatch {
            expected: 2,
            found: 1,
        }) => {}
        other => panic!("unexpected: {:?}", other),
    }
}
