use std::sync::{Arc, Mutex};

use csv_records::{
    load_from_path, CompositeObserver, CsvError, FileObserver, LoadContext, LoadObserver,
    LoadOptions, LoadSeverity, LoadStats, ParseMode,
};

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<LoadStats>>,
    failures: Mutex<Vec<LoadSeverity>>,
    alerts: Mutex<Vec<LoadSeverity>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &CsvError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &CsvError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

#[test]
fn loads_a_csv_file_from_disk() {
    let grid = load_from_path("tests/fixtures/people.csv", &LoadOptions::default()).unwrap();
    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.column_count(), 3);
    assert_eq!(grid.cell(1, 0).unwrap(), "Bob");
}

#[test]
fn missing_file_propagates_as_io_error() {
    let err =
        load_from_path("tests/fixtures/does_not_exist.csv", &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, CsvError::Io(_)));
}

#[test]
fn observer_receives_success_stats() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    load_from_path("tests/fixtures/people.csv", &opts).unwrap();

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(successes, vec![LoadStats { rows: 3, columns: 3 }]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: LoadSeverity::Critical,
        ..Default::default()
    };

    let _ = load_from_path("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![LoadSeverity::Critical]);
    assert_eq!(alerts, vec![LoadSeverity::Critical]);
}

#[test]
fn format_failure_does_not_alert_at_critical_threshold() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: LoadSeverity::Critical,
        ..Default::default()
    };

    // Mismatched quotes -> Format error -> Error severity, below the threshold.
    let _ = load_from_path("tests/fixtures/bad_quotes.csv", &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures, vec![LoadSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn format_failure_alerts_when_threshold_is_lowered() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: LoadSeverity::Error,
        ..Default::default()
    };

    let _ = load_from_path("tests/fixtures/bad_quotes.csv", &opts).unwrap_err();

    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![LoadSeverity::Error]);
}

#[test]
fn bad_quotes_fixture_loads_fine_in_lines_mode() {
    let opts = LoadOptions {
        mode: ParseMode::Lines,
        ..Default::default()
    };
    let grid = load_from_path("tests/fixtures/bad_quotes.csv", &opts).unwrap();
    assert_eq!(grid.row_count(), 1);
    assert_eq!(grid.cell(0, 0).unwrap(), "\"abc");
}

#[test]
fn composite_observer_fans_out_to_all_observers() {
    let first = Arc::new(RecordingObserver::default());
    let second = Arc::new(RecordingObserver::default());
    let composite = CompositeObserver::new(vec![
        first.clone() as Arc<dyn LoadObserver>,
        second.clone(),
    ]);
    let opts = LoadOptions {
        observer: Some(Arc::new(composite)),
        ..Default::default()
    };

    load_from_path("tests/fixtures/people.csv", &opts).unwrap();

    assert_eq!(first.successes.lock().unwrap().len(), 1);
    assert_eq!(second.successes.lock().unwrap().len(), 1);
}

#[test]
fn file_observer_appends_one_line_per_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("loads.log");
    let opts = LoadOptions {
        observer: Some(Arc::new(FileObserver::new(&log_path))),
        ..Default::default()
    };

    load_from_path("tests/fixtures/people.csv", &opts).unwrap();
    let _ = load_from_path("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();

    let log = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    // Success, failure, and the alert triggered by the Critical severity.
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("ok"));
    assert!(lines[0].contains("rows=3"));
    assert!(lines[1].contains("fail severity=Critical"));
    assert!(lines[2].contains("ALERT"));
}
