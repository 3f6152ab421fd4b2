//! Integration tests for skipped-package diagnostics and input errors

use fitcalc::{
    interpret, Driver, FitCalcError, ImportManager, InputError, OutputFormat, Package, RecordError,
};
use std::io::Write;
use tempfile::Builder;

#[test]
fn test_unknown_label_yields_no_report() {
    let err = interpret("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
    assert!(err.is_skippable());
    assert!(err.to_string().contains("XYZ"));
}

#[test]
fn test_each_skipped_package_gets_one_line() {
    let packages = vec![
        Package::new("RUN", vec![15000.0, 1.0]),
        Package::new("SWM", vec![720.0, 0.0, 80.0, 25.0, 40.0]),
        Package::new("", vec![]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];

    let mut out = Vec::new();
    let summary = Driver::new(OutputFormat::Text).run(&packages, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(summary.skipped, 3);
    assert_eq!(summary.processed, 1);
    assert_eq!(lines[0], "Invalid record: RUN expects 3 values, got 2");
    assert_eq!(lines[1], "Invalid record: duration must be positive, got 0");
    assert_eq!(lines[2], "Unknown workout type ");
    assert!(lines[3].starts_with("Тип тренировки: SportsWalking;"));
}

#[test]
fn test_diagnostics_stay_text_in_json_mode() {
    let packages = vec![Package::new("BIKE", vec![1.0])];

    let mut out = Vec::new();
    Driver::new(OutputFormat::Json).run(&packages, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Unknown workout type BIKE\n");
}

#[test]
fn test_non_finite_reading() {
    let err = interpret("RUN", &[15000.0, 1.0, f64::INFINITY]).unwrap_err();
    assert!(matches!(
        err,
        FitCalcError::InvalidRecord(RecordError::NonFinite { field: "weight" })
    ));
}

#[test]
fn test_import_then_process_file() {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "# label,action,duration,weight,...").unwrap();
    writeln!(file, "SWM,720,1,80,25,40").unwrap();
    writeln!(file, "XYZ,1,2,3").unwrap();
    writeln!(file, "RUN,15000,1,75").unwrap();

    let packages = ImportManager::new().import_file(file.path(), None).unwrap();
    assert_eq!(packages.len(), 3);

    let mut out = Vec::new();
    let summary = Driver::default().run(&packages, &mut out).unwrap();
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn test_import_parse_error_is_fatal() {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "RUN,15000,1,75").unwrap();
    writeln!(file, "RUN,fast,1,75").unwrap();

    let err = ImportManager::new().import_file(file.path(), None).unwrap_err();
    assert!(!err.is_skippable());
    assert!(matches!(err, FitCalcError::Input(InputError::Parse { line: 2, .. })));
}
