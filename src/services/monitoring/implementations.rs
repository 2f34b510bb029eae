// 進捗監視の具象実装

use crate::core::{Measurement, NumericKind, Operation, ProgressReporter};

/// 標準エラー出力による進捗報告実装
///
/// 標準出力は結果の表だけに使う。
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report_started(&self, total_measurements: usize) {
        if !self.quiet {
            eprintln!("🚀 Starting {total_measurements} measurements...");
        }
    }

    fn report_measured(&self, measurement: &Measurement, completed: usize, total: usize) {
        if !self.quiet {
            eprintln!(
                "📊 [{completed}/{total}] {} {}: {:.3}s",
                measurement.kind, measurement.operation, measurement.elapsed_secs
            );
        }
    }

    fn report_unmeasurable(&self, kind: NumericKind, operation: Operation, delta_secs: f64) {
        if !self.quiet {
            eprintln!(
                "⚠️  {kind} {operation}: baseline-adjusted time {delta_secs:.3}s is not positive, rate is unmeasurable"
            );
        }
    }

    fn report_completed(&self, elapsed_secs: f64) {
        if !self.quiet {
            eprintln!("✅ Completed in {elapsed_secs:.2}s");
        }
    }
}

/// 何もしない進捗報告実装（テスト・静音実行用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for NoOpProgressReporter {
    fn report_started(&self, _total_measurements: usize) {}

    fn report_measured(&self, _measurement: &Measurement, _completed: usize, _total: usize) {}

    fn report_unmeasurable(&self, _kind: NumericKind, _operation: Operation, _delta_secs: f64) {}

    fn report_completed(&self, _elapsed_secs: f64) {}
}
