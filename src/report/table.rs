//! 比較表の描画
//!
//! 列幅は全て固定で、各フィールドは右寄せ。1行は常に `ROW_WIDTH` 文字になる。

use super::rates::RateEntry;
use crate::core::{BenchmarkResult, Rate, TableRow};
use std::fmt::Write;

/// 速度バーの長さ
pub const BAR_WIDTH: usize = 42;

/// 区切り線および各行の長さ
pub const ROW_WIDTH: usize = 109;

/// 速度の指数表記の小数桁数
const RATE_PRECISION: usize = 6;

/// 計測不能な組の百分率欄
const UNMEASURABLE_MARKER: &str = "-";

const TITLE_PREFIX: &str = "  operation  |      type     |       op / sec      |    %    |  ";
const TITLE_SUFFIX: &str = "  |";

/// 基準速度に対する到達率（0.0〜1.0）
///
/// 計測不能な組はバーを描かない。
pub fn completion_fraction(rate: Rate, standard: Option<f64>) -> f64 {
    match (rate, standard) {
        (Rate::Unmeasurable, _) => 0.0,
        (Rate::Finite(value), Some(standard)) if standard > 0.0 => {
            (value / standard).clamp(0.0, 1.0)
        }
        (Rate::Finite(_), _) => 0.0,
    }
}

/// バーの塗りつぶし長（切り上げ）
pub fn bar_completion(fraction: f64, width: usize) -> usize {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).ceil();
    (filled as usize).min(width)
}

/// 基準速度に対する百分率（切り捨て、0〜100）。計測不能な組は `None`
pub fn speed_percentage(rate: Rate, standard: Option<f64>) -> Option<u32> {
    match (rate, standard) {
        (Rate::Unmeasurable, _) => None,
        (Rate::Finite(value), Some(standard)) if standard > 0.0 => {
            Some((value / standard * 100.0).clamp(0.0, 100.0) as u32)
        }
        (Rate::Finite(_), _) => Some(0),
    }
}

/// `filler` を `completion` 個並べ、残りを空白で埋めた `full_length` 文字の文字列
pub fn progress_bar(full_length: usize, completion: usize, filler: char) -> String {
    let completion = completion.min(full_length);
    let mut bar = String::with_capacity(full_length);
    bar.extend(std::iter::repeat(filler).take(completion));
    bar.extend(std::iter::repeat(' ').take(full_length - completion));
    bar
}

/// C の `%.*e` と同じ形式（指数部は符号付き2桁以上）で表記する
pub fn format_scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }

    let formatted = format!("{value:.precision$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
        None => formatted,
    }
}

/// 速度一覧から表の行を組み立てる
pub fn build_rows(entries: &[RateEntry], standard: Option<f64>) -> Vec<TableRow> {
    entries
        .iter()
        .map(|entry| TableRow {
            kind: entry.kind,
            operation: entry.operation,
            rate: entry.rate,
            percentage: speed_percentage(entry.rate, standard),
            bar_fill: bar_completion(completion_fraction(entry.rate, standard), BAR_WIDTH),
        })
        .collect()
}

pub fn title_line() -> String {
    format!(
        "{TITLE_PREFIX}{}{TITLE_SUFFIX}",
        progress_bar(BAR_WIDTH, BAR_WIDTH, '#')
    )
}

pub fn separator_line() -> String {
    progress_bar(ROW_WIDTH, ROW_WIDTH, '-')
}

pub fn format_row(row: &TableRow) -> String {
    let rate = match row.rate {
        Rate::Finite(value) => format_scientific(value, RATE_PRECISION),
        Rate::Unmeasurable => "inf".to_string(),
    };
    let percentage = match row.percentage {
        Some(percentage) => percentage.to_string(),
        None => UNMEASURABLE_MARKER.to_string(),
    };
    let bar = progress_bar(BAR_WIDTH, row.bar_fill, '#');

    format!(
        "{:>7}{:>7}{:>12}{:>4}{:>17}{:>5}{:>6}{:>4}{:>bar_field$}{:>3}",
        row.operation.symbol(),
        "|",
        row.kind.name(),
        "|",
        rate,
        "|",
        percentage,
        "|",
        bar,
        "|",
        bar_field = BAR_WIDTH + 2,
    )
}

/// 表全体（見出し、区切り線、各行、区切り線）を描画する
pub fn render_table(rows: &[TableRow]) -> BenchmarkResult<String> {
    let mut out = String::with_capacity((ROW_WIDTH + 1) * (rows.len() + 3));

    writeln!(out, "{}", title_line())?;
    writeln!(out, "{}", separator_line())?;
    for row in rows {
        writeln!(out, "{}", format_row(row))?;
    }
    writeln!(out, "{}", separator_line())?;

    Ok(out)
}
