use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum MlErr {
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    EmptyDataset,
    RaggedRecord {
        row: usize,
        got: usize,
        expected: usize,
    },
    RecordTooShort {
        len: usize,
    },
    InvalidLabel {
        row: usize,
        value: f64,
    },
    InvalidConfig(String),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            MlErr::EmptyDataset => write!(f, "The dataset must contain at least one record"),
            MlErr::RaggedRecord { row, got, expected } => write!(
                f,
                "Record {row} has {got} values but the dataset's records have {expected}"
            ),
            MlErr::RecordTooShort { len } => write!(
                f,
                "Records must hold at least one feature and a label, got a record of length {len}"
            ),
            MlErr::InvalidLabel { row, value } => write!(
                f,
                "The label of record {row} must be exactly 0 or 1, got {value}"
            ),
            MlErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for MlErr {}
