//! Column-ordered data frame
//!
//! Minimal named-column table for evaluation-time feature handling. Columns
//! are either numeric or categorical; the normalizer reduces everything to
//! numeric before the frame is handed to a predictor as a matrix.

use crate::error::{Result, StageError};
use ndarray::Array2;

/// A single named column of row values
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Numeric values (already model-ready)
    Numeric(Vec<f64>),
    /// Categorical string values (need encoding before prediction)
    Categorical(Vec<String>),
}

impl Column {
    /// Number of rows in the column
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Categorical(v) => v.len(),
        }
    }

    /// True if the column has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for categorical columns
    pub fn is_categorical(&self) -> bool {
        matches!(self, Column::Categorical(_))
    }
}

/// Named-column table preserving insertion order
///
/// Column order matters: the trained model's input contract is positional,
/// so the frame never reorders columns behind the caller's back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<(String, Column)>,
    n_rows: usize,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Column names in order
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Look up a column by name
    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// True if the frame contains a column with this name
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// True if any categorical column remains
    pub fn has_categorical(&self) -> bool {
        self.columns.iter().any(|(_, c)| c.is_categorical())
    }

    /// Append a column, enforcing a consistent row count and unique names
    pub fn push_column(&mut self, name: impl Into<String>, column: Column) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(StageError::DataFormat(format!("duplicate column '{name}'")));
        }
        if self.columns.is_empty() {
            self.n_rows = column.len();
        } else if column.len() != self.n_rows {
            return Err(StageError::DataFormat(format!(
                "column '{name}' has {} rows, frame has {}",
                column.len(),
                self.n_rows
            )));
        }
        self.columns.push((name, column));
        Ok(())
    }

    /// Remove a column by name, preserving the order of the rest
    pub fn drop_column(&mut self, name: &str) -> Option<Column> {
        let idx = self.columns.iter().position(|(n, _)| n == name)?;
        let (_, col) = self.columns.remove(idx);
        Some(col)
    }

    /// Rename a column in place; no-op if absent
    pub fn rename(&mut self, from: &str, to: &str) {
        if let Some((name, _)) = self.columns.iter_mut().find(|(n, _)| n == from) {
            *name = to.to_string();
        }
    }

    /// Replace a column's values, keeping its position
    pub fn replace(&mut self, name: &str, column: Column) -> Result<()> {
        if column.len() != self.n_rows {
            return Err(StageError::DataFormat(format!(
                "replacement for '{name}' has {} rows, frame has {}",
                column.len(),
                self.n_rows
            )));
        }
        match self.columns.iter_mut().find(|(n, _)| n == name) {
            Some((_, c)) => {
                *c = column;
                Ok(())
            }
            None => Err(StageError::MissingColumn(name.to_string())),
        }
    }

    /// Consume the frame, yielding its columns in order
    pub fn into_columns(self) -> Vec<(String, Column)> {
        self.columns
    }

    /// Convert to a dense row-major feature matrix
    ///
    /// Fails if any categorical column remains; the normalizer must run
    /// first.
    pub fn to_matrix(&self) -> Result<Array2<f64>> {
        let mut data = Vec::with_capacity(self.n_rows * self.n_cols());
        for row in 0..self.n_rows {
            for (name, col) in &self.columns {
                match col {
                    Column::Numeric(v) => data.push(v[row]),
                    Column::Categorical(_) => {
                        return Err(StageError::DataFormat(format!(
                            "column '{name}' is still categorical"
                        )))
                    }
                }
            }
        }
        Array2::from_shape_vec((self.n_rows, self.n_cols()), data)
            .map_err(|e| StageError::DataFormat(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        let mut f = Frame::new();
        f.push_column("Age", Column::Numeric(vec![25.0, 40.0])).unwrap();
        f.push_column(
            "Vehicle_Damage",
            Column::Categorical(vec!["Yes".into(), "No".into()]),
        )
        .unwrap();
        f
    }

    #[test]
    fn test_push_and_get() {
        let f = sample();
        assert_eq!(f.n_rows(), 2);
        assert_eq!(f.n_cols(), 2);
        assert_eq!(f.names(), vec!["Age", "Vehicle_Damage"]);
        assert!(matches!(f.get("Age"), Some(Column::Numeric(_))));
    }

    #[test]
    fn test_push_duplicate_rejected() {
        let mut f = sample();
        let result = f.push_column("Age", Column::Numeric(vec![1.0, 2.0]));
        assert!(result.is_err());
    }

    #[test]
    fn test_push_length_mismatch_rejected() {
        let mut f = sample();
        let result = f.push_column("Extra", Column::Numeric(vec![1.0]));
        assert!(matches!(result, Err(StageError::DataFormat(_))));
    }

    #[test]
    fn test_drop_column_preserves_order() {
        let mut f = sample();
        f.push_column("Premium", Column::Numeric(vec![100.0, 200.0])).unwrap();
        let dropped = f.drop_column("Vehicle_Damage");
        assert!(dropped.is_some());
        assert_eq!(f.names(), vec!["Age", "Premium"]);
    }

    #[test]
    fn test_drop_missing_is_none() {
        let mut f = sample();
        assert!(f.drop_column("nope").is_none());
        assert_eq!(f.n_cols(), 2);
    }

    #[test]
    fn test_rename_in_place() {
        let mut f = sample();
        f.rename("Vehicle_Damage", "Damage");
        assert_eq!(f.names(), vec!["Age", "Damage"]);
        // Renaming a missing column is a no-op
        f.rename("ghost", "still_ghost");
        assert_eq!(f.n_cols(), 2);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut f = sample();
        f.replace("Vehicle_Damage", Column::Numeric(vec![1.0, 0.0])).unwrap();
        assert_eq!(f.names(), vec!["Age", "Vehicle_Damage"]);
        assert!(!f.has_categorical());
    }

    #[test]
    fn test_replace_missing_errors() {
        let mut f = sample();
        let result = f.replace("ghost", Column::Numeric(vec![1.0, 0.0]));
        assert!(matches!(result, Err(StageError::MissingColumn(_))));
    }

    #[test]
    fn test_to_matrix_rejects_categorical() {
        let f = sample();
        assert!(f.to_matrix().is_err());
    }

    #[test]
    fn test_to_matrix_row_major() {
        let mut f = Frame::new();
        f.push_column("a", Column::Numeric(vec![1.0, 3.0])).unwrap();
        f.push_column("b", Column::Numeric(vec![2.0, 4.0])).unwrap();
        let m = f.to_matrix().unwrap();
        assert_eq!(m.shape(), &[2, 2]);
        assert_eq!(m[[0, 0]], 1.0);
        assert_eq!(m[[0, 1]], 2.0);
        assert_eq!(m[[1, 0]], 3.0);
        assert_eq!(m[[1, 1]], 4.0);
    }

    #[test]
    fn test_empty_frame_matrix() {
        let f = Frame::new();
        let m = f.to_matrix().unwrap();
        assert_eq!(m.shape(), &[0, 0]);
    }
}
