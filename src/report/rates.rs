// ベースライン補正と速度計算

use crate::core::{BenchmarkError, BenchmarkResult, Measurement, NumericKind, Operation, Rate};
use serde::{Deserialize, Serialize};

/// ベースライン補正後の1組分の速度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub kind: NumericKind,
    pub operation: Operation,
    /// 演算の経過時間 - ベースラインの経過時間
    pub delta_secs: f64,
    pub rate: Rate,
}

/// ベースライン以外の全ての組について速度を求める
///
/// 入力の並び順を保つ。同じ型のベースラインが無い組があればエラー。
pub fn compute_rates(
    measurements: &[Measurement],
    iterations: u64,
) -> BenchmarkResult<Vec<RateEntry>> {
    measurements
        .iter()
        .filter(|m| !m.operation.is_baseline())
        .map(|m| {
            let baseline = baseline_for(measurements, m.kind)
                .ok_or_else(|| BenchmarkError::missing_baseline(m.kind))?;
            let delta_secs = m.elapsed_secs - baseline.elapsed_secs;

            Ok(RateEntry {
                kind: m.kind,
                operation: m.operation,
                delta_secs,
                rate: Rate::from_delta(iterations, delta_secs),
            })
        })
        .collect()
}

fn baseline_for(measurements: &[Measurement], kind: NumericKind) -> Option<&Measurement> {
    measurements
        .iter()
        .find(|m| m.kind == kind && m.operation.is_baseline())
}

/// 全ての組の中で最大の有限速度（表の100%基準）
pub fn standard_rate(entries: &[RateEntry]) -> Option<f64> {
    entries
        .iter()
        .filter_map(|entry| entry.rate.as_finite())
        .fold(None, |max, rate| match max {
            Some(current) if current >= rate => Some(current),
            _ => Some(rate),
        })
}
