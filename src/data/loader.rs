//! Delimited dataset loading
//!
//! Reads the held-out test set into a [`Frame`], inferring a numeric or
//! categorical type per column. A column is numeric only when every one of
//! its values parses as a float.

use crate::data::frame::{Column, Frame};
use crate::error::{Result, StageError};
use std::path::Path;
use tracing::debug;

/// Read a headered CSV file into a frame
pub fn read_csv(path: impl AsRef<Path>) -> Result<Frame> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(ToString::to_string).collect();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        if record.len() != headers.len() {
            return Err(StageError::DataFormat(format!(
                "row has {} fields, header has {}",
                record.len(),
                headers.len()
            )));
        }
        for (i, field) in record.iter().enumerate() {
            cells[i].push(field.to_string());
        }
    }

    let mut frame = Frame::new();
    for (name, values) in headers.into_iter().zip(cells) {
        frame.push_column(name, infer_column(values))?;
    }
    debug!(
        rows = frame.n_rows(),
        cols = frame.n_cols(),
        path = %path.display(),
        "test dataset loaded"
    );
    Ok(frame)
}

/// Split the binary target column off a frame
///
/// The target must be numeric with values in {0, 1}. The remaining frame
/// keeps its column order.
pub fn split_target(mut frame: Frame, target: &str) -> Result<(Frame, Vec<u8>)> {
    let column = frame
        .drop_column(target)
        .ok_or_else(|| StageError::MissingColumn(target.to_string()))?;

    let labels = match column {
        Column::Numeric(values) => values
            .into_iter()
            .map(|v| {
                if v == 0.0 {
                    Ok(0u8)
                } else if v == 1.0 {
                    Ok(1u8)
                } else {
                    Err(StageError::DataFormat(format!(
                        "target '{target}' contains non-binary value {v}"
                    )))
                }
            })
            .collect::<Result<Vec<u8>>>()?,
        Column::Categorical(_) => {
            return Err(StageError::DataFormat(format!(
                "target '{target}' is not numeric"
            )))
        }
    };

    Ok((frame, labels))
}

fn infer_column(values: Vec<String>) -> Column {
    let parsed: Option<Vec<f64>> = values.iter().map(|s| s.trim().parse::<f64>().ok()).collect();
    match parsed {
        Some(numeric) => Column::Numeric(numeric),
        None => Column::Categorical(values),
    }
}
