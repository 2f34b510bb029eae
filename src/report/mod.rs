// レポートレイヤー - 速度計算、比較表の描画、JSON出力

pub mod export;
pub mod rates;
pub mod table;

pub use export::export_json_report;
pub use rates::{compute_rates, standard_rate, RateEntry};
pub use table::{render_table, BAR_WIDTH, ROW_WIDTH};

use crate::core::{BenchmarkResult, Measurement, Rate, TableRow};
use serde::{Deserialize, Serialize};

/// 1回のベンチマーク実行の結果一式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub iterations: u64,
    pub samples: usize,
    /// ベースラインを含む全計測（計測順）
    pub measurements: Vec<Measurement>,
    /// ベースラインを除いた表の行（計測順）
    pub rows: Vec<TableRow>,
    /// 100%基準となる最大の有限速度
    pub standard_rate: Option<f64>,
}

impl BenchmarkReport {
    /// 計算済みの速度一覧からレポートを組み立てる
    pub fn new(
        iterations: u64,
        samples: usize,
        measurements: Vec<Measurement>,
        entries: &[RateEntry],
    ) -> Self {
        let standard = standard_rate(entries);
        let rows = table::build_rows(entries, standard);

        Self {
            iterations,
            samples,
            measurements,
            rows,
            standard_rate: standard,
        }
    }

    /// 計測値だけからレポートを組み立てる
    pub fn from_measurements(
        measurements: Vec<Measurement>,
        iterations: u64,
        samples: usize,
    ) -> BenchmarkResult<Self> {
        let entries = compute_rates(&measurements, iterations)?;
        Ok(Self::new(iterations, samples, measurements, &entries))
    }

    /// 最速の組（基準速度を持つ最初の行）
    pub fn fastest(&self) -> Option<&TableRow> {
        let standard = self.standard_rate?;
        self.rows
            .iter()
            .find(|row| row.rate == Rate::Finite(standard))
    }

    /// 速度が計測できなかった行
    pub fn unmeasurable_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(|row| row.rate.is_unmeasurable())
    }

    pub fn render(&self) -> BenchmarkResult<String> {
        render_table(&self.rows)
    }
}
