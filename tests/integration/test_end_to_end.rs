// 公開APIを通したエンドツーエンドテスト

use crate::fixtures::{pair_at, stepped_durations, ScriptedClock};
use arith_bench::{
    export_json_report, BenchmarkReport, BenchmarkRunner, DefaultBenchmarkConfig,
    NoOpProgressReporter, NumericKind, Operation, Rate,
};
use arith_bench::report::{BAR_WIDTH, ROW_WIDTH};
use tempfile::TempDir;

fn run_with<F: Fn(usize) -> f64>(durations: F) -> (BenchmarkReport, String) {
    let runner = BenchmarkRunner::new(
        DefaultBenchmarkConfig::new().with_iterations(20),
        NoOpProgressReporter::new(),
        ScriptedClock::new(durations),
    );

    let mut out = Vec::new();
    let report = runner.run_and_write(&mut out).unwrap();
    (report, String::from_utf8(out).unwrap())
}

#[test]
fn test_full_table_layout() {
    let (report, output) = run_with(stepped_durations);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(report.rows.len(), 20);
    assert_eq!(lines.len(), 23);
    assert_eq!(
        lines[0],
        format!(
            "  operation  |      type     |       op / sec      |    %    |  {}  |",
            "#".repeat(BAR_WIDTH)
        )
    );
    assert_eq!(lines[1], "-".repeat(ROW_WIDTH));
    assert_eq!(lines[22], "-".repeat(ROW_WIDTH));
    assert!(lines.iter().all(|line| line.len() == ROW_WIDTH));

    assert_eq!(
        lines[2],
        format!(
            "      +      |          i8   |     2.000000e+01    |   100   |  {}  |",
            "#".repeat(BAR_WIDTH)
        )
    );
    assert_eq!(
        lines[3],
        format!(
            "      -      |          i8   |     1.000000e+01    |    50   |  {}{}  |",
            "#".repeat(21),
            " ".repeat(21)
        )
    );
    assert!(lines[21].starts_with("      /      |         f64   |     5.000000e+00    |    25   |"));
}

#[test]
fn test_rows_follow_measurement_order() {
    let (report, _) = run_with(stepped_durations);

    let expected: Vec<(NumericKind, Operation)> = (0..25)
        .map(pair_at)
        .filter(|(_, operation)| !operation.is_baseline())
        .collect();
    let actual: Vec<(NumericKind, Operation)> = report
        .rows
        .iter()
        .map(|row| (row.kind, row.operation))
        .collect();

    assert_eq!(actual, expected);
}

#[test]
fn test_fastest_row_is_full() {
    // f32の乗算だけ差分0.5秒で最速になる
    let durations = |index: usize| match pair_at(index) {
        (NumericKind::F32, Operation::Mul) => 1.5,
        _ => stepped_durations(index),
    };
    let (report, _) = run_with(durations);

    assert_eq!(report.standard_rate, Some(40.0));
    let fastest = report.fastest().unwrap();
    assert_eq!((fastest.kind, fastest.operation), (NumericKind::F32, Operation::Mul));
    assert_eq!(fastest.percentage, Some(100));
    assert_eq!(fastest.bar_fill, BAR_WIDTH);

    assert!(report.rows.iter().all(|row| {
        row.percentage.map_or(true, |p| p <= 100) && row.bar_fill <= BAR_WIDTH
    }));
}

#[test]
fn test_unmeasurable_pairs_do_not_corrupt_table() {
    // i64の加算が基準より速く見える（粗い時計で起こりうる）
    let durations = |index: usize| match pair_at(index) {
        (NumericKind::I64, Operation::Add) => 0.5,
        _ => stepped_durations(index),
    };
    let (report, output) = run_with(durations);

    let row = report
        .rows
        .iter()
        .find(|row| row.kind == NumericKind::I64 && row.operation == Operation::Add)
        .unwrap();
    assert_eq!(row.rate, Rate::Unmeasurable);
    assert_eq!(report.standard_rate, Some(20.0));

    assert!(!output.contains("NaN"));
    assert!(output.lines().all(|line| line.len() == ROW_WIDTH));
    assert_eq!(row.percentage, None);
    assert_eq!(row.bar_fill, 0);
    assert!(output.contains(&format!(
        "      +      |         i64   |              inf    |     -   |  {}  |",
        " ".repeat(BAR_WIDTH)
    )));
}

#[test]
fn test_same_timings_produce_identical_output() {
    let (_, first) = run_with(stepped_durations);
    let (_, second) = run_with(stepped_durations);

    assert_eq!(first, second);
}

#[test]
fn test_clock_read_twice_per_measurement_plus_run_bounds() {
    let clock = ScriptedClock::new(stepped_durations);
    let runner = BenchmarkRunner::new(
        DefaultBenchmarkConfig::new().with_iterations(10),
        NoOpProgressReporter::new(),
        &clock,
    );

    runner.run().unwrap();
    // 計測25組 x 2回 + 実行全体の開始・終了
    assert_eq!(clock.calls(), 52);
}

#[test]
fn test_export_after_run() {
    let (report, _) = run_with(stepped_durations);
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("arith_bench.json");

    export_json_report(&report, &path).unwrap();

    let restored: BenchmarkReport =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(restored.rows, report.rows);
    assert_eq!(restored.measurements.len(), 25);
}
