// JSON形式でのレポート出力

use super::BenchmarkReport;
use crate::core::{BenchmarkError, BenchmarkResult};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    timestamp: String,
    #[serde(flatten)]
    report: &'a BenchmarkReport,
}

/// レポートにタイムスタンプを付けてJSONファイルに書き出す
pub fn export_json_report(report: &BenchmarkReport, path: &Path) -> BenchmarkResult<()> {
    let document = JsonReport {
        timestamp: chrono::Utc::now().to_rfc3339(),
        report,
    };

    let json = serde_json::to_string_pretty(&document)
        .map_err(|e| BenchmarkError::export(path, e.into()))?;
    std::fs::write(path, json).map_err(|e| BenchmarkError::export(path, e.into()))?;

    Ok(())
}
