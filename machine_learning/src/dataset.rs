use ndarray::{Array2, ArrayView1, Ix1, iter::AxisIter, s};

use crate::{MlErr, Result};

/// An in-memory labeled dataset.
///
/// Every record has the same length, at least two: the features come first and the last value
/// is the binary label (`0.0` or `1.0`). A `Dataset` can only be built through its validating
/// constructors, so it is never empty and never ragged.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Array2<f64>,
}

impl Dataset {
    /// Creates a new `Dataset` from a flat, row-major buffer.
    ///
    /// # Arguments
    /// * `data` - The records laid out one after the other.
    /// * `record_size` - The amount of values per record, label included.
    ///
    /// # Returns
    /// A new `Dataset` or an error if the data doesn't describe a valid dataset.
    pub fn new(data: Vec<f64>, record_size: usize) -> Result<Self> {
        if record_size < 2 {
            return Err(MlErr::RecordTooShort { len: record_size });
        }

        if data.is_empty() {
            return Err(MlErr::EmptyDataset);
        }

        let len = data.len() / record_size;
        if data.len() % record_size != 0 {
            return Err(MlErr::SizeMismatch {
                a: "data",
                b: "records",
                got: data.len(),
                expected: len * record_size,
            });
        }

        let records =
            Array2::from_shape_vec((len, record_size), data).map_err(|_| MlErr::SizeMismatch {
                a: "data",
                b: "records",
                got: len,
                expected: len * record_size,
            })?;

        Self::validate_labels(&records)?;
        Ok(Self { records })
    }

    /// Creates a new `Dataset` from a sequence of records.
    ///
    /// # Arguments
    /// * `records` - The records, in the order they will be iterated during training.
    ///
    /// # Returns
    /// A new `Dataset` or an error if the records are empty, ragged or wrongly labeled.
    pub fn from_records<I, R>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let mut data = Vec::new();
        let mut record_size = None;

        for (row, record) in records.into_iter().enumerate() {
            let record = record.as_ref();
            let expected = *record_size.get_or_insert(record.len());

            if record.len() != expected {
                return Err(MlErr::RaggedRecord {
                    row,
                    got: record.len(),
                    expected,
                });
            }

            data.extend_from_slice(record);
        }

        let Some(record_size) = record_size else {
            return Err(MlErr::EmptyDataset);
        };

        Self::new(data, record_size)
    }

    fn validate_labels(records: &Array2<f64>) -> Result<()> {
        let label_col = records.ncols() - 1;

        for (row, &value) in records.column(label_col).iter().enumerate() {
            if value != 0.0 && value != 1.0 {
                return Err(MlErr::InvalidLabel { row, value });
            }
        }

        Ok(())
    }

    /// The amount of records.
    pub fn len(&self) -> usize {
        self.records.nrows()
    }

    /// Always `false`, datasets are validated to be non-empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The length of every record, label included.
    pub fn record_size(&self) -> usize {
        self.records.ncols()
    }

    /// The amount of features per record.
    pub fn features(&self) -> usize {
        self.record_size() - 1
    }

    /// Returns the record at `idx` or `None` if out of bounds.
    pub fn record(&self, idx: usize) -> Option<ArrayView1<'_, f64>> {
        (idx < self.len()).then(|| self.records.row(idx))
    }

    /// Iterates the records in insertion order.
    pub fn records(&self) -> AxisIter<'_, f64, Ix1> {
        self.records.outer_iter()
    }
}

/// Splits a record into its features and its label.
///
/// # Returns
/// A tuple `(features, label)` or an error if the record is empty.
pub fn split_record(record: ArrayView1<'_, f64>) -> Result<(ArrayView1<'_, f64>, f64)> {
    let Some(n) = record.len().checked_sub(1) else {
        return Err(MlErr::RecordTooShort { len: 0 });
    };

    let label = record[n];
    Ok((record.slice_move(s![..n]), label))
}
