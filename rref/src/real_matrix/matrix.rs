use std::fmt;

use itertools::Itertools;

use crate::error::{Result, RrefError};

// dense row-major storage, rows are contiguous slices
#[derive(Debug, Clone, PartialEq)]
pub struct RealMatrix {
    pub number_of_rows: usize,
    pub number_of_columns: usize,
    entries: Vec<f64>,
}

impl RealMatrix {
    pub fn zeroes(rows: usize, cols: usize) -> Self {
        Self {
            number_of_rows: rows,
            number_of_columns: cols,
            entries: vec![0.0; rows * cols],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeroes(n, n);
        for i in 0..n {
            matrix.set(i, i, 1.0);
        }
        matrix
    }

    /// Builds a matrix from a list of rows. Every row must have the length of
    /// the first one.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let number_of_columns = rows.first().map(Vec::len).unwrap_or(0);
        let mut entries = Vec::with_capacity(rows.len() * number_of_columns);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != number_of_columns {
                return Err(RrefError::RaggedRows {
                    row: idx,
                    expected: number_of_columns,
                    got: row.len(),
                });
            }
            entries.extend_from_slice(row);
        }
        Ok(Self {
            number_of_rows: rows.len(),
            number_of_columns,
            entries,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.number_of_rows, self.number_of_columns)
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.entries[self.offset(r, c)]
    }

    pub fn set(&mut self, r: usize, c: usize, v: f64) {
        let offset = self.offset(r, c);
        self.entries[offset] = v;
    }

    pub fn row(&self, r: usize) -> &[f64] {
        let start = r * self.number_of_columns;
        &self.entries[start..start + self.number_of_columns]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [f64] {
        let start = r * self.number_of_columns;
        &mut self.entries[start..start + self.number_of_columns]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.number_of_rows).map(move |r| self.row(r))
    }

    pub fn column(&self, c: usize) -> Vec<f64> {
        self.rows().map(|row| row[c]).collect()
    }

    pub fn copy_from(&mut self, other: &RealMatrix) {
        debug_assert_eq!(self.shape(), other.shape());
        self.entries.copy_from_slice(&other.entries);
    }

    /// Same shape and every pair of entries within `tol` of each other.
    pub fn approx_eq(&self, other: &RealMatrix, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .entries
                .iter()
                .zip(other.entries.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    fn offset(&self, r: usize, c: usize) -> usize {
        debug_assert!(r < self.number_of_rows && c < self.number_of_columns);
        r * self.number_of_columns + c
    }
}

impl fmt::Display for RealMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .rows()
            .map(|row| format!("[{}]", row.iter().map(|v| format!("{v}")).join(", ")))
            .join("\n");
        write!(f, "{lines}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn build_from_rows() {
        let m = RealMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.column(2), vec![3.0, 6.0]);
        assert_eq!(m.get(0, 1), 2.0);
    }

    #[test]
    fn reject_ragged_rows() {
        let err = RealMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            RrefError::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn zero_width_matrix_still_has_rows() {
        let m = RealMatrix::from_rows(vec![vec![], vec![]]).unwrap();
        assert_eq!(m.shape(), (2, 0));
        assert_eq!(m.rows().count(), 2);
    }

    #[test]
    fn display_prints_one_row_per_line() {
        let mut m = RealMatrix::identity(2);
        m.set(0, 1, 2.5);
        assert_eq!(m.to_string(), "[1, 2.5]\n[0, 1]");
    }

    #[test]
    fn approx_eq_respects_shape_and_tolerance() {
        let a = RealMatrix::identity(2);
        let mut b = RealMatrix::identity(2);
        b.set(1, 0, 1e-12);
        assert!(a.approx_eq(&b, 1e-10));
        assert!(!a.approx_eq(&b, 0.0));
        assert!(!a.approx_eq(&RealMatrix::identity(3), 1.0));
    }
}
