//! Typed record reading over a loaded [`Grid`].
//!
//! A [`RecordReader`] binds a grid to an [`Orientation`] and a record shape
//! `R`. The header row (or column) supplies the [`Schema`]; every other
//! row/column is one logical record, addressed by a 0-based index that
//! excludes the header.
//!
//! Records are produced through the shape's static binding table
//! ([`crate::types::Record::bindings`]): for each binding, the schema
//! position of its name selects the cell, and the cell text converts per the
//! declared scalar kind. An optional per-index cache memoizes produced
//! records until [`RecordReader::clear_cache`] is called; it never evicts on
//! its own.

use std::collections::HashMap;

use crate::error::{CsvError, CsvResult};
use crate::grid::Grid;
use crate::types::{FieldBinding, Orientation, Record, Schema};

/// Reads a CSV grid as typed records, keyed by orientation-aware index.
///
/// # Examples
///
/// ```rust
/// use csv_records::{FieldBinding, Orientation, Record, RecordReader, load_from_str, ParseMode};
///
/// #[derive(Debug, Default, Clone, PartialEq)]
/// struct Person {
///     name: String,
///     id: i32,
///     age: f64,
/// }
///
/// impl Record for Person {
///     fn bindings() -> Vec<FieldBinding<Self>> {
///         vec![
///             FieldBinding::utf8("Name", |r, v| r.name = v),
///             FieldBinding::int32("ID", |r, v| r.id = v),
///             FieldBinding::float64("Age", |r, v| r.age = v),
///         ]
///     }
/// }
///
/// # fn main() -> Result<(), csv_records::CsvError> {
/// let grid = load_from_str("Name,ID,Age\nBob,7,19.5\n", ParseMode::Quoted)?;
/// let mut reader: RecordReader<Person> = RecordReader::new(grid, Orientation::AlongRow, true)?;
///
/// assert_eq!(reader.record_count(), 1);
/// let bob = reader.record(0)?;
/// assert_eq!(bob, Person { name: "Bob".to_string(), id: 7, age: 19.5 });
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RecordReader<R: Record> {
    grid: Grid,
    orientation: Orientation,
    schema: Schema,
    bindings: Vec<FieldBinding<R>>,
    use_cache: bool,
    cache: HashMap<usize, R>,
}

impl<R: Record> RecordReader<R> {
    /// Bind `grid` with the given orientation, reading the schema from the
    /// header row/column.
    ///
    /// Fails with [`CsvError::Schema`] when the grid has no data (no header
    /// to read) or any header entry is empty.
    pub fn new(grid: Grid, orientation: Orientation, use_cache: bool) -> CsvResult<Self> {
        let schema = read_schema(&grid, orientation)?;
        Ok(Self::assemble(grid, orientation, schema, use_cache))
    }

    /// Bind `grid` using a caller-supplied schema instead of reading the
    /// header.
    ///
    /// The physical header line is still excluded from record indexing, so
    /// record 0 remains the second row/column.
    pub fn with_schema(
        grid: Grid,
        orientation: Orientation,
        use_cache: bool,
        schema: Schema,
    ) -> Self {
        Self::assemble(grid, orientation, schema, use_cache)
    }

    fn assemble(grid: Grid, orientation: Orientation, schema: Schema, use_cache: bool) -> Self {
        Self {
            grid,
            orientation,
            schema,
            bindings: R::bindings(),
            use_cache,
            cache: HashMap::new(),
        }
    }

    /// The schema currently in effect.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The direction record cells run in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether produced records are memoized by index.
    pub fn uses_cache(&self) -> bool {
        self.use_cache
    }

    /// Number of records available (header excluded).
    pub fn record_count(&self) -> usize {
        let physical = match self.orientation {
            Orientation::AlongRow => self.grid.row_count(),
            Orientation::AlongColumn => self.grid.column_count(),
        };
        physical.saturating_sub(1)
    }

    /// The raw cell strings of logical record `index`.
    ///
    /// Record 0 is the first row/column after the header; fails with
    /// [`CsvError::Index`] when `index` is outside the record range.
    pub fn record_cells(&self, index: usize) -> CsvResult<Vec<String>> {
        if index >= self.record_count() {
            return Err(CsvError::Index {
                what: "record",
                index,
                len: self.record_count(),
            });
        }
        match self.orientation {
            Orientation::AlongRow => self.grid.row(index + 1),
            Orientation::AlongColumn => self.grid.column(index + 1),
        }
    }

    /// Produce the record at `index`.
    ///
    /// With caching enabled, a previously produced (or explicitly cached)
    /// value for `index` is returned unchanged without re-reading the grid.
    /// Otherwise every declared binding is resolved against the schema
    /// (first exact name match; absent names fail with [`CsvError::Schema`])
    /// and the selected cell converts per its declared kind. Cells missing
    /// from a short row count as empty, and empty numeric cells convert to
    /// zero.
    pub fn record(&mut self, index: usize) -> CsvResult<R> {
        if self.use_cache {
            if let Some(hit) = self.cache.get(&index) {
                return Ok(hit.clone());
            }
        }

        let cells = self.record_cells(index)?;
        let mut out = R::default();
        for binding in &self.bindings {
            let pos = self
                .schema
                .index_of(binding.name())
                .ok_or_else(|| CsvError::Schema {
                    message: format!("bound field '{}' is not in the schema", binding.name()),
                })?;
            let raw = cells.get(pos).map(String::as_str).unwrap_or("");
            binding.apply(&mut out, strip_surrounding_quotes(raw), index)?;
        }

        if self.use_cache {
            self.cache.insert(index, out.clone());
        }
        Ok(out)
    }

    /// Produce `count` records starting at `start`, in order.
    pub fn records(&mut self, start: usize, count: usize) -> CsvResult<Vec<R>> {
        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            out.push(self.record(start + i)?);
        }
        Ok(out)
    }

    /// Produce every record in the grid.
    pub fn all_records(&mut self) -> CsvResult<Vec<R>> {
        self.records(0, self.record_count())
    }

    /// Empties the record memo.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Insert-or-overwrite a cached record at `index`.
    ///
    /// Escape hatch for pre-seeding or test fixtures; with caching enabled,
    /// [`RecordReader::record`] returns this value for `index` from then on.
    pub fn cache_record(&mut self, index: usize, record: R) {
        self.cache.insert(index, record);
    }

    /// Releases the underlying grid and clears the schema.
    ///
    /// Afterwards [`RecordReader::record_count`] reports 0 and cell-backed
    /// reads fail as out of bounds. The cache is left intact.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.schema = Schema::default();
    }
}

/// Read the schema from the header row (or column, per orientation).
fn read_schema(grid: &Grid, orientation: Orientation) -> CsvResult<Schema> {
    if !grid.has_data() {
        return Err(CsvError::Schema {
            message: "cannot read schema: the grid has no data".to_string(),
        });
    }
    let len = match orientation {
        Orientation::AlongRow => grid.column_count(),
        Orientation::AlongColumn => grid.row_count(),
    };
    let mut names = Vec::with_capacity(len);
    for i in 0..len {
        let cell = match orientation {
            Orientation::AlongRow => grid.cell(0, i)?,
            Orientation::AlongColumn => grid.cell(i, 0)?,
        };
        names.push(cell.to_owned());
    }
    Schema::from_names(names)
}

/// Remove exactly one leading and one trailing quote character when both are
/// present. Grids built by the line-splitting loader keep field quotes; this
/// normalizes them before conversion.
fn strip_surrounding_quotes(raw: &str) -> &str {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}
