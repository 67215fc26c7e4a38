use thiserror::Error;

/// Convenience result type for grid loading and record mapping.
pub type CsvResult<T> = Result<T, CsvError>;

/// Error type shared by the grid loader and the record reader.
///
/// All failures are terminal for the operation that raised them; nothing in
/// this crate retries or returns partial records.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Underlying I/O error (e.g. file not found) from path-based loading.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV text, such as a quoted field left unterminated at end
    /// of input.
    #[error("malformed csv: {message}")]
    Format { message: String },

    /// A cell value could not be converted into the scalar kind its field
    /// binding declares.
    ///
    /// This is the value-level counterpart of [`CsvError::Format`]; it keeps
    /// the record index, bound field name, and raw text for diagnostics.
    #[error("failed to convert record {record} field '{field}': {message} (raw='{raw}')")]
    Parse {
        record: usize,
        field: String,
        raw: String,
        message: String,
    },

    /// A row, column, or record index outside the valid range for the
    /// currently loaded data.
    #[error("{what} index {index} out of bounds (len={len})")]
    Index {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// The header contains an empty or missing entry, or a field binding
    /// references a name that is not in the schema.
    #[error("schema error: {message}")]
    Schema { message: String },
}
