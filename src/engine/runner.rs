//! ベンチマーク実行エンジン
//!
//! 全ての（型, 演算）の組を計測順に計時し、速度と基準速度を求めて
//! `BenchmarkReport` を返す。描画は呼び出し側の任意。

use crate::core::{
    BenchmarkConfig, BenchmarkResult, Clock, Measurement, NumericKind, Operation,
    ProgressReporter,
};
use crate::measurement::measure_kind_median;
use crate::report::{compute_rates, BenchmarkReport};
use crate::services::validate_config;
use std::io::Write;

/// 依存関係をジェネリクスで受け取るベンチマーク実行器
pub struct BenchmarkRunner<C, R, K>
where
    C: BenchmarkConfig,
    R: ProgressReporter,
    K: Clock,
{
    config: C,
    reporter: R,
    clock: K,
}

impl<C, R, K> BenchmarkRunner<C, R, K>
where
    C: BenchmarkConfig,
    R: ProgressReporter,
    K: Clock,
{
    /// 新しい実行器を作成（コンストラクタインジェクション）
    pub fn new(config: C, reporter: R, clock: K) -> Self {
        Self {
            config,
            reporter,
            clock,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 全ての組を計測してレポートを返す（表示なし）
    pub fn run(&self) -> BenchmarkResult<BenchmarkReport> {
        validate_config(&self.config)?;

        let iterations = self.config.iterations();
        let samples = self.config.samples();
        let total = NumericKind::ALL.len() * Operation::ALL.len();
        let started = self.clock.seconds();

        self.reporter.report_started(total);

        let mut measurements = Vec::with_capacity(total);
        for kind in NumericKind::ALL {
            for operation in Operation::ALL {
                let elapsed =
                    measure_kind_median(&self.clock, kind, operation, iterations, samples);
                let measurement = Measurement::new(kind, operation, elapsed);

                measurements.push(measurement);
                self.reporter
                    .report_measured(&measurement, measurements.len(), total);
            }
        }

        let entries = compute_rates(&measurements, iterations)?;
        for entry in entries.iter().filter(|e| e.rate.is_unmeasurable()) {
            self.reporter
                .report_unmeasurable(entry.kind, entry.operation, entry.delta_secs);
        }

        let report = BenchmarkReport::new(iterations, samples, measurements, &entries);
        self.reporter
            .report_completed(self.clock.seconds() - started);

        Ok(report)
    }

    /// 計測して表を `out` に書き出す
    pub fn run_and_write<W: Write>(&self, out: &mut W) -> BenchmarkResult<BenchmarkReport> {
        let report = self.run()?;
        let table = report.render()?;

        out.write_all(table.as_bytes())?;
        out.flush()?;

        Ok(report)
    }
}
