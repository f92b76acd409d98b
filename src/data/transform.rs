//! Evaluation-time feature normalization
//!
//! Reproduces the exact column schema the trained model was fitted on. The
//! four steps run in a fixed order; later steps depend on column names
//! produced by earlier ones. The whole pipeline is pure and idempotent: a
//! frame with no categorical columns left passes through unchanged.

use crate::data::frame::{Column, Frame};
use crate::error::{Result, StageError};
use std::collections::BTreeSet;
use tracing::info;

/// Columns renamed after dummy encoding, old name -> model-schema name
const DUMMY_RENAMES: [(&str, &str); 2] = [
    ("Vehicle_Age_< 1 Year", "Vehicle_Age_lt_1_Year"),
    ("Vehicle_Age_> 2 Years", "Vehicle_Age_gt_2_Years"),
];

/// Indicator columns coerced to integer-valued numerics
const INT_CAST_COLUMNS: [&str; 3] = [
    "Vehicle_Age_lt_1_Year",
    "Vehicle_Age_gt_2_Years",
    "Vehicle_Damage_Yes",
];

/// Apply the full normalization pipeline in its fixed order
pub fn normalize(frame: Frame) -> Result<Frame> {
    let mut frame = frame;
    map_gender(&mut frame)?;
    drop_id(&mut frame);
    let mut frame = one_hot(frame)?;
    rename_and_cast(&mut frame);
    Ok(frame)
}

/// Map the Gender column to numeric: Female -> 0, Male -> 1
///
/// Any other value fails fast with a data-format error. An already-numeric
/// Gender column passes through untouched so the pipeline stays idempotent.
pub fn map_gender(frame: &mut Frame) -> Result<()> {
    let column = frame
        .get("Gender")
        .ok_or_else(|| StageError::MissingColumn("Gender".to_string()))?;

    let values = match column {
        Column::Numeric(_) => return Ok(()),
        Column::Categorical(values) => values,
    };

    let mapped = values
        .iter()
        .map(|v| match v.as_str() {
            "Female" => Ok(0.0),
            "Male" => Ok(1.0),
            other => Err(StageError::DataFormat(format!(
                "unmapped Gender value '{other}'"
            ))),
        })
        .collect::<Result<Vec<f64>>>()?;

    info!("mapped Gender column to binary values");
    frame.replace("Gender", Column::Numeric(mapped))
}

/// Drop the `_id` column if present
pub fn drop_id(frame: &mut Frame) {
    if frame.drop_column("_id").is_some() {
        info!("dropped _id column");
    }
}

/// Dummy-encode all remaining categorical columns, dropping the first
/// category of each
///
/// Category levels are sorted byte-wise; dummy columns are named
/// `{column}_{category}` and appended after the numeric columns, in the
/// order the source columns appeared.
pub fn one_hot(frame: Frame) -> Result<Frame> {
    if !frame.has_categorical() {
        return Ok(frame);
    }

    let mut out = Frame::new();
    let mut dummies: Vec<(String, Vec<f64>)> = Vec::new();

    for (name, column) in frame.into_columns() {
        match column {
            Column::Numeric(values) => out.push_column(name, Column::Numeric(values))?,
            Column::Categorical(values) => {
                let categories: BTreeSet<&str> = values.iter().map(String::as_str).collect();
                for category in categories.iter().skip(1) {
                    let indicator = values
                        .iter()
                        .map(|v| if v == category { 1.0 } else { 0.0 })
                        .collect();
                    dummies.push((format!("{name}_{category}"), indicator));
                }
            }
        }
    }

    for (name, values) in dummies {
        out.push_column(name, Column::Numeric(values))?;
    }
    info!("created dummy variables for categorical features");
    Ok(out)
}

/// Rename generated vehicle-age dummies to valid identifiers and coerce the
/// indicator columns to integer values
pub fn rename_and_cast(frame: &mut Frame) {
    for (from, to) in DUMMY_RENAMES {
        frame.rename(from, to);
    }
    for name in INT_CAST_COLUMNS {
        if let Some(Column::Numeric(values)) = frame.get(name) {
            let cast = values.iter().map(|v| v.trunc()).collect();
            // Column exists with the right shape, replace cannot fail
            let _ = frame.replace(name, Column::Numeric(cast));
        }
    }
    info!("renamed dummy columns and cast indicators to int");
}
