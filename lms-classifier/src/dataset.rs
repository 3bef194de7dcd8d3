//! Loading whitespace-delimited numeric files and assembling labeled sets.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str,
};

use tracing::debug;

use crate::{
    error::{LmsError, Result},
    matrix::{FeatureMatrix, LabelVector},
};

/// Reads one sample per line from `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<FeatureMatrix> {
    let path = path.as_ref();
    let io_error = |source| LmsError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let matrix = parse_matrix(BufReader::new(file)).map_err(|err| match err {
        LmsError::Read(source) => io_error(source),
        other => other,
    })?;
    debug!(
        path = %path.display(),
        rows = matrix.n_rows(),
        cols = matrix.n_cols(),
        "loaded matrix"
    );
    Ok(matrix)
}

/// Parses whitespace-separated floats, one row per non-blank line. Fails on
/// the first bad token, non UTF-8 line or ragged row, reporting its 1-based
/// line number. Read failures come back as `LmsError::Read`; only `load`
/// knows the path to attach.
pub fn parse_matrix<R: BufRead>(reader: R) -> Result<FeatureMatrix> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width = None;

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let line_number = index + 1;
        let bytes = bytes.map_err(LmsError::Read)?;
        let line = str::from_utf8(&bytes).map_err(|err| LmsError::Parse {
            line: line_number,
            message: format!("invalid UTF-8: {}", err),
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| LmsError::Parse {
                    line: line_number,
                    message: format!("invalid number {:?}", token),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        let expected = *width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(LmsError::Parse {
                line: line_number,
                message: format!("expected {} values, found {}", expected, row.len()),
            });
        }
        rows.push(row);
    }

    FeatureMatrix::from_rows(rows)
}

/// Features of two classes stacked class 0 first, with matching labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSet {
    pub features: FeatureMatrix,
    pub labels: LabelVector,
    // first row of class 1
    boundary: usize,
}

impl LabeledSet {
    pub fn from_classes(class0: &FeatureMatrix, class1: &FeatureMatrix) -> Result<Self> {
        let features = class0.vstack(class1)?;
        let labels = LabelVector::filled(0, class0.n_rows())?
            .concat(&LabelVector::filled(1, class1.n_rows())?);
        Ok(Self {
            features,
            labels,
            boundary: class0.n_rows(),
        })
    }

    pub fn load_pair<P: AsRef<Path>, Q: AsRef<Path>>(class0: P, class1: Q) -> Result<Self> {
        Self::from_classes(&load(class0)?, &load(class1)?)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Rows that came from class `label`, in their original order.
    pub fn class_rows(&self, label: u8) -> FeatureMatrix {
        if label == 0 {
            self.features.slice_rows(0..self.boundary)
        } else {
            self.features.slice_rows(self.boundary..self.features.n_rows())
        }
    }
}
