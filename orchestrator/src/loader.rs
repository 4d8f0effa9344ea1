//! Reads datasets from comma separated text.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use log::debug;
use machine_learning::{MlErr, dataset::Dataset};

use crate::error::OrchestratorError;

/// Parses comma separated records, one per line, the label being the last value.
///
/// Blank lines are skipped and line numbers in errors are 1-based.
///
/// # Arguments
/// * `reader` - The text source.
/// * `has_header` - Whether the first line holds column names and must be discarded.
///
/// # Returns
/// The dataset or an error pointing to the offending line.
pub fn parse_csv<R: BufRead>(reader: R, has_header: bool) -> Result<Dataset, OrchestratorError> {
    let mut records = Vec::new();
    let mut line_numbers = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let lineno = i + 1;
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => OrchestratorError::Parse {
                line: lineno,
                msg: "the line is not valid UTF-8".into(),
            },
            _ => e.into(),
        })?;

        if has_header && i == 0 {
            debug!("skipping header: {line}");
            continue;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values = line
            .split(',')
            .map(|v| parse_value(v, lineno))
            .collect::<Result<Vec<_>, _>>()?;

        records.push(values);
        line_numbers.push(lineno);
    }

    Dataset::from_records(&records).map_err(|e| match e {
        MlErr::RaggedRecord { row, got, expected } => OrchestratorError::Parse {
            line: line_numbers[row],
            msg: format!("expected {expected} values, got {got}"),
        },
        MlErr::InvalidLabel { row, value } => OrchestratorError::Parse {
            line: line_numbers[row],
            msg: format!("the label must be 0 or 1, got {value}"),
        },
        e => e.into(),
    })
}

fn parse_value(v: &str, line: usize) -> Result<f64, OrchestratorError> {
    let v = v.trim();

    match v.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(OrchestratorError::Parse {
            line,
            msg: format!("cannot parse '{v}' as a finite number"),
        }),
    }
}

/// Reads a CSV dataset file.
///
/// # Arguments
/// * `path` - The file's path.
/// * `has_header` - Whether the first line holds column names and must be discarded.
pub fn load_csv(path: &Path, has_header: bool) -> Result<Dataset, OrchestratorError> {
    let file = File::open(path).map_err(|source| OrchestratorError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_csv(BufReader::new(file), has_header)
}
