// ベンチマークの抽象化インターフェース定義

use super::types::{Measurement, NumericKind, Operation};
use mockall::automock;

/// ベンチマーク設定を抽象化するトレイト
#[automock]
pub trait BenchmarkConfig {
    /// 1回の計測で回すループ回数
    fn iterations(&self) -> u64;

    /// 1組あたりの計測回数（中央値を採用）
    fn samples(&self) -> usize;
}

/// 進捗報告の抽象化トレイト
#[automock]
pub trait ProgressReporter {
    /// 計測開始時の報告
    fn report_started(&self, total_measurements: usize);

    /// 1組の計測完了の報告
    fn report_measured(&self, measurement: &Measurement, completed: usize, total: usize);

    /// ベースライン補正後の差分が正にならなかった組の報告
    fn report_unmeasurable(&self, kind: NumericKind, operation: Operation, delta_secs: f64);

    /// 全計測完了時の報告
    fn report_completed(&self, elapsed_secs: f64);
}

/// 経過時間の取得を抽象化するトレイト
///
/// 任意の起点からの単調増加する秒数を返す。
#[automock]
pub trait Clock {
    fn seconds(&self) -> f64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn seconds(&self) -> f64 {
        (**self).seconds()
    }
}
