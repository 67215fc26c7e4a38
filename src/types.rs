//! Core data model types: orientation, scalar kinds, schema, and the static
//! field-binding table used to map cells onto record fields.
//!
//! A record shape declares its bindings once by implementing [`Record`]; the
//! reader reuses that table for every record it produces.

use crate::error::{CsvError, CsvResult};

/// The direction in which the cells of one logical record are laid out.
///
/// If a record's fields `name`, `age`, `phone` all sit in the same row, the
/// data runs along the row (and the header is row 0). If they sit in the
/// same column, it runs along the column (and the header is column 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Each record occupies one row; row 0 holds the schema names.
    AlongRow,
    /// Each record occupies one column; column 0 holds the schema names.
    AlongColumn,
}

/// Scalar kind a field binding converts its cell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit floating point number.
    Float32,
    /// 64-bit floating point number.
    Float64,
    /// UTF-8 string, assigned verbatim.
    Utf8,
}

/// Ordered list of header names identifying each column/row position.
///
/// Read from the grid's first row (or first column, depending on
/// [`Orientation`]); every name must be non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    names: Vec<String>,
}

impl Schema {
    /// Build a schema from an ordered list of names.
    ///
    /// Fails with [`CsvError::Schema`] if any name is empty.
    pub fn from_names(names: Vec<String>) -> CsvResult<Self> {
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(CsvError::Schema {
                    message: format!(
                        "schema name at position {i} is empty (header cells must be non-empty)"
                    ),
                });
            }
        }
        Ok(Self { names })
    }

    /// Number of names in the schema.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the schema holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate schema names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns the position of the first exact match for `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

/// Setter dispatch for one bound field. Non-capturing closures coerce to
/// these fn pointers at the call site.
enum Setter<R> {
    Int32(fn(&mut R, i32)),
    Int64(fn(&mut R, i64)),
    Float32(fn(&mut R, f32)),
    Float64(fn(&mut R, f64)),
    Utf8(fn(&mut R, String)),
}

/// Declared association between one schema name and one field of a record
/// shape `R`, tagged with the scalar kind the cell text converts into.
pub struct FieldBinding<R> {
    name: &'static str,
    setter: Setter<R>,
}

impl<R> FieldBinding<R> {
    /// Bind `name` to a 32-bit integer field.
    pub fn int32(name: &'static str, set: fn(&mut R, i32)) -> Self {
        Self {
            name,
            setter: Setter::Int32(set),
        }
    }

    /// Bind `name` to a 64-bit integer field.
    pub fn int64(name: &'static str, set: fn(&mut R, i64)) -> Self {
        Self {
            name,
            setter: Setter::Int64(set),
        }
    }

    /// Bind `name` to a 32-bit float field.
    ///
    /// Cell text may carry one trailing `f`/`F` suffix, which is stripped
    /// before parsing.
    pub fn float32(name: &'static str, set: fn(&mut R, f32)) -> Self {
        Self {
            name,
            setter: Setter::Float32(set),
        }
    }

    /// Bind `name` to a 64-bit float field.
    pub fn float64(name: &'static str, set: fn(&mut R, f64)) -> Self {
        Self {
            name,
            setter: Setter::Float64(set),
        }
    }

    /// Bind `name` to a string field; the cell is assigned verbatim.
    pub fn utf8(name: &'static str, set: fn(&mut R, String)) -> Self {
        Self {
            name,
            setter: Setter::Utf8(set),
        }
    }

    /// The schema name this binding looks up.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The scalar kind this binding converts into.
    pub fn data_type(&self) -> DataType {
        match self.setter {
            Setter::Int32(_) => DataType::Int32,
            Setter::Int64(_) => DataType::Int64,
            Setter::Float32(_) => DataType::Float32,
            Setter::Float64(_) => DataType::Float64,
            Setter::Utf8(_) => DataType::Utf8,
        }
    }

    /// Convert `raw` per the declared kind and assign it into `target`.
    ///
    /// Empty text assigns the numeric zero (or the empty string); anything
    /// else must parse, and a failure carries `record` for context.
    pub(crate) fn apply(&self, target: &mut R, raw: &str, record: usize) -> CsvResult<()> {
        match self.setter {
            Setter::Int32(set) => set(target, parse_number::<i32>(raw, self.name, record)?),
            Setter::Int64(set) => set(target, parse_number::<i64>(raw, self.name, record)?),
            Setter::Float32(set) => {
                // Tolerate author-style literals like `19.5f`.
                let stripped = raw
                    .strip_suffix(['f', 'F'])
                    .unwrap_or(raw);
                set(target, parse_number::<f32>(stripped, self.name, record)?);
            }
            Setter::Float64(set) => set(target, parse_number::<f64>(raw, self.name, record)?),
            Setter::Utf8(set) => set(target, raw.to_owned()),
        }
        Ok(())
    }
}

impl<R> std::fmt::Debug for FieldBinding<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("data_type", &self.data_type())
            .finish()
    }
}

fn parse_number<T>(raw: &str, field: &str, record: usize) -> CsvResult<T>
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    if raw.is_empty() {
        return Ok(T::default());
    }
    raw.parse::<T>().map_err(|e| CsvError::Parse {
        record,
        field: field.to_owned(),
        raw: raw.to_owned(),
        message: e.to_string(),
    })
}

/// A caller-defined record shape that knows how its fields bind to schema
/// names.
///
/// `Default` provides the blank value the reader fills in; `Clone` lets the
/// optional cache hand back stored records.
///
/// # Examples
///
/// ```rust
/// use csv_records::{FieldBinding, Record};
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
/// ```
pub trait Record: Default + Clone {
    /// The binding table for this shape, declared once and reused for every
    /// record produced.
    fn bindings() -> Vec<FieldBinding<Self>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_rejects_empty_names() {
        let err = Schema::from_names(vec!["a".to_string(), String::new()]).unwrap_err();
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn schema_index_of_first_match() {
        let schema =
            Schema::from_names(vec!["a".to_string(), "b".to_string(), "a".to_string()]).unwrap();
        assert_eq!(schema.index_of("a"), Some(0));
        assert_eq!(schema.index_of("b"), Some(1));
        assert_eq!(schema.index_of("c"), None);
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Probe {
        n: f32,
    }

    #[test]
    fn float32_binding_strips_one_trailing_suffix() {
        let binding: FieldBinding<Probe> = FieldBinding::float32("n", |r, v| r.n = v);
        let mut probe = Probe::default();
        binding.apply(&mut probe, "2.5F", 0).unwrap();
        assert_eq!(probe.n, 2.5);
        assert_eq!(binding.data_type(), DataType::Float32);
    }

    #[test]
    fn numeric_binding_defaults_empty_to_zero() {
        let binding: FieldBinding<Probe> = FieldBinding::float32("n", |r, v| r.n = v);
        let mut probe = Probe { n: 7.0 };
        binding.apply(&mut probe, "", 3).unwrap();
        assert_eq!(probe.n, 0.0);
    }
}
