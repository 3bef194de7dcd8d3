use std::{fmt::Display, ops::Range};

use crate::error::{LmsError, Result};

/// Row-major matrix of features. Every row has the same length, fixed when
/// the matrix is built, and the matrix is never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    data: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}

impl FeatureMatrix {
    /// Empty matrix with a declared column count.
    pub fn with_columns(n_cols: usize) -> Self {
        Self {
            data: Vec::new(),
            n_rows: 0,
            n_cols,
        }
    }

    /// Builds a matrix from rows. The first row fixes the width.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |row| row.len());
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(LmsError::mismatch("matrix row", n_cols, row.len()));
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            n_rows,
            n_cols,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.n_cols;
        &self.data[start..start + self.n_cols]
    }

    pub fn rows<'a>(&'a self) -> impl Iterator<Item = &'a [f64]> + 'a {
        (0..self.n_rows).map(move |index| self.row(index))
    }

    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows().map(|row| row[index]).collect()
    }

    /// Copies out a contiguous range of rows.
    pub fn slice_rows(&self, range: Range<usize>) -> FeatureMatrix {
        let data = self.data[range.start * self.n_cols..range.end * self.n_cols].to_vec();
        Self {
            data,
            n_rows: range.len(),
            n_cols: self.n_cols,
        }
    }

    /// Row-wise concatenation, `self` first. An empty matrix stacks with anything.
    pub fn vstack(&self, other: &FeatureMatrix) -> Result<FeatureMatrix> {
        if self.is_empty() {
            return Ok(other.clone());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }
        if self.n_cols != other.n_cols {
            return Err(LmsError::mismatch("vstack columns", self.n_cols, other.n_cols));
        }
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Ok(Self {
            data,
            n_rows: self.n_rows + other.n_rows,
            n_cols: self.n_cols,
        })
    }
}

impl Display for FeatureMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FeatureMatrix({}x{})", self.n_rows(), self.n_cols)
    }
}

/// Class labels, each 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelVector(Vec<u8>);

impl LabelVector {
    pub fn filled(label: u8, len: usize) -> Result<Self> {
        check_label(label as i64)?;
        Ok(Self(vec![label; len]))
    }

    pub fn from_values<I: IntoIterator<Item = i64>>(values: I) -> Result<Self> {
        let labels = values
            .into_iter()
            .map(|value| check_label(value).map(|_| value as u8))
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self(labels))
    }

    pub fn concat(&self, other: &LabelVector) -> LabelVector {
        let mut labels = self.0.clone();
        labels.extend_from_slice(&other.0);
        Self(labels)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn iter<'a>(&'a self) -> impl Iterator<Item = u8> + 'a {
        self.0.iter().copied()
    }

    /// Labels as real-valued regression targets.
    pub fn targets(&self) -> Vec<f64> {
        self.0.iter().map(|&label| label as f64).collect()
    }
}

fn check_label(value: i64) -> Result<()> {
    match value {
        0 | 1 => Ok(()),
        other => Err(LmsError::InvalidLabel(other)),
    }
}

/// Copy of `row` with a trailing constant 1.0 so the bias folds into a dot product.
pub fn augment(row: &[f64]) -> Vec<f64> {
    let mut augmented = Vec::with_capacity(row.len() + 1);
    augmented.extend_from_slice(row);
    augmented.push(1.0);
    augmented
}

pub fn dot(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs).map(|(a, b)| a * b).sum()
}
