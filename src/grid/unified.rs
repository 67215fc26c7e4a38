//! Unified grid loading entrypoint.
//!
//! Most callers should use [`load_from_path`], which reads a CSV file into a
//! [`Grid`] using the selected [`ParseMode`].
//!
//! - [`ParseMode::Quoted`] (default) uses the quote-aware tokenizer.
//! - [`ParseMode::Lines`] uses the naive split-and-trim loader.
//! - If an [`super::observability::LoadObserver`] is provided, the outcome is
//!   reported to it, with an alert when the computed severity meets the
//!   configured threshold.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{CsvError, CsvResult};

use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};
use super::{lines, quoted, Grid};

/// Which parse strategy turns text into a [`Grid`].
///
/// The two strategies are intentionally kept separate; see the
/// [module docs](crate::grid) for the behavioral differences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Quote-aware character-scan tokenizer ([`quoted::parse`]).
    #[default]
    Quoted,
    /// Newline/comma splitting with per-cell trimming ([`lines::parse`]).
    Lines,
}

/// Options controlling path-based loading.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct LoadOptions {
    /// Parse strategy.
    pub mode: ParseMode,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("mode", &self.mode)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Parse CSV text into a [`Grid`] with the given strategy.
pub fn load_from_str(text: &str, mode: ParseMode) -> CsvResult<Grid> {
    match mode {
        ParseMode::Quoted => quoted::parse(text),
        ParseMode::Lines => Ok(lines::parse(text)),
    }
}

/// Read a CSV file and parse it into a [`Grid`].
///
/// File read failures propagate as [`CsvError::Io`]. When an observer is
/// configured, this function reports:
///
/// - `on_success` with row/column stats,
/// - `on_failure` with a computed severity (I/O failures are
///   [`LoadSeverity::Critical`], parse failures [`LoadSeverity::Error`]),
/// - `on_alert` when the severity is >= `options.alert_at_or_above`.
///
/// # Examples
///
/// ```no_run
/// use csv_records::{load_from_path, LoadOptions};
///
/// # fn main() -> Result<(), csv_records::CsvError> {
/// let grid = load_from_path("people.csv", &LoadOptions::default())?;
/// println!("rows={}", grid.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> CsvResult<Grid> {
    let path = path.as_ref();
    let ctx = LoadContext {
        path: path.to_path_buf(),
        mode: options.mode,
    };

    let result = fs::read_to_string(path)
        .map_err(CsvError::from)
        .and_then(|text| load_from_str(&text, options.mode));

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(grid) => obs.on_success(
                &ctx,
                LoadStats {
                    rows: grid.row_count(),
                    columns: grid.column_count(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &CsvError) -> LoadSeverity {
    match e {
        CsvError::Io(_) => LoadSeverity::Critical,
        _ => LoadSeverity::Error,
    }
}
