use std::io::Error as IoError;
use std::num::ParseFloatError;
use std::result::Result as StdResult;

pub type Result<T> = StdResult<T, Error>;

#[derive(Debug)]
pub enum Error {
    IoError(IoError),
    ParseError(ParseFloatError),

    /// A data file contained no values.
    EmptyData,

    /// A matrix row had a different number of columns than the first row.
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Flat feature data does not divide into whole vectors.
    PartialVector {
        len: usize,
        dim: usize,
    },

    /// A label was neither -1, 0, nor +1.
    InvalidLabel(f64),

    /// Number of labels does not match the number of feature vectors.
    LabelCount {
        vectors: usize,
        labels: usize,
    },

    /// Feature dimension differs from what the model was trained with.
    DimensionMismatch {
        expected: usize,
        found: usize,
    },

    /// Task range with start past end.
    InvalidRange {
        start: usize,
        end: usize,
    },

    /// Task index outside the task group.
    InvalidTask {
        index: usize,
        num_tasks: usize,
    },

    /// The task group does not partition the vector range.
    NotAPartition {
        num_vectors: usize,
    },

    /// The model has not been trained yet.
    NotTrained,
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::IoError(e)
    }
}

impl From<ParseFloatError> for Error {
    fn from(e: ParseFloatError) -> Self {
        Error::ParseError(e)
    }
}
