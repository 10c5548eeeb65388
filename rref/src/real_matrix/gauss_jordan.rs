use itertools::Itertools;

use crate::error::{Result, RrefError};

use super::matrix::RealMatrix;
use super::tolerance::Tolerance;

/// The row and value used to clear one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    pub row: usize,
    pub column: usize,
    pub value: f64,
}

/// Output of a full reduction: the reduced matrix, the right-hand side carried
/// through the same row operations (if one was given), and the pivots used.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub matrix: RealMatrix,
    pub rhs: Option<Vec<f64>>,
    pub pivots: Vec<Pivot>,
}

impl Reduction {
    pub fn pivot_columns(&self) -> Vec<usize> {
        self.pivots.iter().map(|p| p.column).collect()
    }

    pub fn free_columns(&self) -> Vec<usize> {
        let pivot_columns = self.pivot_columns();
        (0..self.matrix.number_of_columns)
            .filter(|c| !pivot_columns.contains(c))
            .collect()
    }
}

/// Gauss-Jordan workspace for dense real matrices.
///
/// Rows are never swapped. For each column, the first row whose entries left
/// of that column are all effectively zero, and whose entry in the column is
/// not, becomes the pivot row. Every other row is cleared in that column
/// using the pivot row as it was before the pass, then the pivot row is
/// scaled so the pivot becomes 1. Columns with no such row are skipped.
pub struct GaussJordan {
    pub number_of_rows: usize,
    pub number_of_columns: usize,
    active_column: usize,
    rows: RealMatrix,
    rhs: Option<Vec<f64>>,
    pivots: Vec<Pivot>,
    tolerance: Tolerance,
    // per-pass scratch space
    multipliers: Vec<f64>,
    pivot_row: Vec<f64>,
}

impl GaussJordan {
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self {
            number_of_rows: rows,
            number_of_columns: cols,
            active_column: 0,
            rows: RealMatrix::zeroes(rows, cols),
            rhs: None,
            pivots: Vec::with_capacity(cols.min(rows)),
            tolerance: Tolerance::default(),
            multipliers: vec![0.0; rows],
            pivot_row: vec![0.0; cols],
        }
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    // allows one to run gauss jordan on matrices of the same shape many times
    // without extra allocations, provided the matrix is the same shape.
    pub fn copy_from_matrix(&mut self, m: &RealMatrix) -> Result<()> {
        self.ensure_shape_matches(m)?;
        self.reset();
        self.rows.copy_from(m);
        self.rhs = None;
        Ok(())
    }

    /// Loads `m` together with a right-hand side `b` that will receive the
    /// same row operations. Fails before touching the workspace if `b` does
    /// not have one entry per row of `m`, or if `m` does not have the
    /// workspace's shape.
    pub fn copy_from_augmented_system(&mut self, m: &RealMatrix, b: &[f64]) -> Result<()> {
        ensure_rhs_matches(m, b)?;
        self.ensure_shape_matches(m)?;
        self.reset();
        self.rows.copy_from(m);
        match self.rhs.as_mut() {
            Some(rhs) => rhs.copy_from_slice(b),
            None => self.rhs = Some(b.to_vec()),
        }
        Ok(())
    }

    pub fn go_to_reduced_row_echelon_form(&mut self) {
        while self.is_not_in_reduced_row_echelon_form() {
            self.pivot_active_column();
            self.go_to_next_column();
        }
        log::debug!(
            "reduced {}x{} matrix with tolerance {}, pivot columns: [{}]",
            self.number_of_rows,
            self.number_of_columns,
            self.tolerance.value(),
            self.pivots.iter().map(|p| p.column).join(", ")
        );
    }

    pub fn matrix(&self) -> &RealMatrix {
        &self.rows
    }

    pub fn rhs(&self) -> Option<&[f64]> {
        self.rhs.as_deref()
    }

    pub fn pivots(&self) -> &[Pivot] {
        &self.pivots
    }

    pub fn into_reduction(self) -> Reduction {
        Reduction {
            matrix: self.rows,
            rhs: self.rhs,
            pivots: self.pivots,
        }
    }

    fn ensure_shape_matches(&self, m: &RealMatrix) -> Result<()> {
        let expected = (self.number_of_rows, self.number_of_columns);
        if m.shape() != expected {
            return Err(RrefError::ShapeMismatch {
                expected,
                got: m.shape(),
            });
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.active_column = 0;
        self.pivots.clear();
    }

    fn is_not_in_reduced_row_echelon_form(&self) -> bool {
        self.active_column < self.number_of_columns
    }

    fn pivot_active_column(&mut self) {
        match self.find_pivot() {
            Some(pivot) => {
                log::trace!(
                    "column {}: pivot row {} with value {}",
                    pivot.column,
                    pivot.row,
                    pivot.value
                );
                self.eliminate_with(&pivot);
                self.pivots.push(pivot);
            }
            None => log::trace!("column {}: no pivot, left free", self.active_column),
        }
    }

    fn find_pivot(&self) -> Option<Pivot> {
        (0..self.number_of_rows)
            .find(|&row_index| self.row_at_index_can_pivot_active_column(row_index))
            .map(|row| Pivot {
                row,
                column: self.active_column,
                value: self.rows.get(row, self.active_column),
            })
    }

    fn row_at_index_can_pivot_active_column(&self, index: usize) -> bool {
        let row = self.rows.row(index);
        let (prefix, rest) = row.split_at(self.active_column);
        prefix.iter().all(|&x| self.tolerance.is_effectively_zero(x))
            && self.tolerance.is_effectively_nonzero(rest[0])
    }

    // every row is updated from the pivot row and column as they were before
    // this pass, so the snapshot is taken up front
    fn eliminate_with(&mut self, pivot: &Pivot) {
        self.pivot_row.copy_from_slice(self.rows.row(pivot.row));
        for (row_index, multiplier) in self.multipliers.iter_mut().enumerate() {
            *multiplier = self.rows.get(row_index, pivot.column) / pivot.value;
        }
        self.multipliers[pivot.row] = 0.0;

        // no shortcut for zero multipliers: 0 * inf has to come out as NaN
        for (row_index, &multiplier) in self.multipliers.iter().enumerate() {
            for (entry, &p) in self.rows.row_mut(row_index).iter_mut().zip(&self.pivot_row) {
                *entry -= multiplier * p;
            }
        }
        for entry in self.rows.row_mut(pivot.row) {
            *entry /= pivot.value;
        }

        if let Some(rhs) = self.rhs.as_mut() {
            let rhs_pivot = rhs[pivot.row];
            for (entry, &multiplier) in rhs.iter_mut().zip(&self.multipliers) {
                *entry -= multiplier * rhs_pivot;
            }
            rhs[pivot.row] /= pivot.value;
        }
    }

    fn go_to_next_column(&mut self) {
        self.active_column += 1;
    }
}

fn ensure_rhs_matches(m: &RealMatrix, b: &[f64]) -> Result<()> {
    if m.number_of_rows != b.len() {
        return Err(RrefError::RowCountMismatch {
            rows: m.number_of_rows,
            rhs_len: b.len(),
        });
    }
    Ok(())
}

/// Reduces `a` to reduced row echelon form with the default tolerance,
/// carrying `b` through the same row operations when given.
///
/// `a` and `b` are left untouched; the result holds fresh copies.
pub fn reduced_row_echelon(a: &RealMatrix, b: Option<&[f64]>) -> Result<Reduction> {
    reduced_row_echelon_with_tolerance(a, b, Tolerance::default())
}

pub fn reduced_row_echelon_with_tolerance(
    a: &RealMatrix,
    b: Option<&[f64]>,
    tolerance: Tolerance,
) -> Result<Reduction> {
    let (rows, cols) = a.shape();
    let mut gj = GaussJordan::zero(rows, cols).with_tolerance(tolerance);
    match b {
        Some(b) => gj.copy_from_augmented_system(a, b)?,
        None => gj.copy_from_matrix(a)?,
    }
    gj.go_to_reduced_row_echelon_form();
    Ok(gj.into_reduction())
}
