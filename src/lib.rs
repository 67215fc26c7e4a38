//! `csv-records` is a small library for parsing CSV text into an in-memory
//! string [`Grid`] and mapping its rows or columns onto caller-defined,
//! typed record shapes.
//!
//! The primary entrypoints are [`load_from_path`] / [`load_from_str`] (text
//! into a [`Grid`]) and [`RecordReader`] (grid into typed records).
//!
//! ## Grid loading
//!
//! Two parse strategies are provided as distinct entry points:
//!
//! - [`ParseMode::Quoted`] (default): character-scan tokenizer that honors
//!   double-quoted fields, doubled-quote escapes, and CRLF input, and fails
//!   on mismatched quotes.
//! - [`ParseMode::Lines`]: naive newline/comma splitting with per-cell
//!   trimming; no quote handling.
//!
//! The loaded [`Grid`] exposes bounds-checked cell, row, column, and
//! sub-range accessors.
//!
//! ## Record mapping
//!
//! A record shape implements [`Record`] by declaring a static binding table:
//! one [`FieldBinding`] per field, associating a schema name, a scalar kind
//! ([`DataType`]), and a setter. The [`RecordReader`] reads the schema from
//! the header row or column (per [`Orientation`]), then produces records on
//! demand, optionally memoized by record index.
//!
//! ```rust
//! use csv_records::{
//!     load_from_str, FieldBinding, Orientation, ParseMode, Record, RecordReader,
//! };
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct Person {
//!     name: String,
//!     id: i32,
//!     age: f64,
//! }
//!
//! impl Record for Person {
//!     fn bindings() -> Vec<FieldBinding<Self>> {
//!         vec![
//!             FieldBinding::utf8("Name", |r, v| r.name = v),
//!             FieldBinding::int32("ID", |r, v| r.id = v),
//!             FieldBinding::float64("Age", |r, v| r.age = v),
//!         ]
//!     }
//! }
//!
//! # fn main() -> Result<(), csv_records::CsvError> {
//! let grid = load_from_str("Name,ID,Age\nBob,7,19.5\nAda,3,31.0\n", ParseMode::Quoted)?;
//! let mut reader: RecordReader<Person> = RecordReader::new(grid, Orientation::AlongRow, true)?;
//!
//! assert_eq!(reader.record_count(), 2);
//! let people = reader.all_records()?;
//! assert_eq!(people[0].name, "Bob");
//! assert_eq!(people[1].id, 3);
//! # Ok(())
//! # }
//! ```
//!
//! Empty numeric cells convert to zero rather than failing; string cells are
//! assigned verbatim. All other failures are fail-fast: mismatched quotes and
//! unparseable cells are format/parse errors, out-of-range indexes are index
//! errors, and empty or missing header entries are schema errors.
//!
//! ## Observability
//!
//! The core performs no logging. Path-based loading accepts an optional
//! [`LoadObserver`] (stderr, file, or composite implementations are
//! provided) that receives success/failure callbacks with severity
//! classification and an alert threshold — see [`LoadOptions`].
//!
//! ## Modules
//!
//! - [`grid`]: parse strategies, the [`Grid`] matrix, unified path loading,
//!   and load observability
//! - [`record`]: the typed [`RecordReader`]
//! - [`types`]: orientation, scalar kinds, schema, and field bindings
//! - [`error`]: the shared error type

pub mod error;
pub mod grid;
pub mod record;
pub mod types;

pub use error::{CsvError, CsvResult};
pub use grid::{
    load_from_path, load_from_str, CompositeObserver, FileObserver, Grid, LoadContext,
    LoadObserver, LoadOptions, LoadSeverity, LoadStats, ParseMode, StdErrObserver,
};
pub use record::RecordReader;
pub use types::{DataType, FieldBinding, Orientation, Record, Schema};
