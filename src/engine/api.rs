// 高レベル公開API
// BenchmarkRunnerを簡単に使用できるようにするための便利な関数

use super::BenchmarkRunner;
use crate::services::{
    ConsoleProgressReporter, DefaultBenchmarkConfig, NoOpProgressReporter, SystemClock,
};

/// デフォルト設定・コンソール進捗・実時間の実行器を作成
pub fn create_default_runner(
) -> BenchmarkRunner<DefaultBenchmarkConfig, ConsoleProgressReporter, SystemClock> {
    BenchmarkRunner::new(
        DefaultBenchmarkConfig::default(),
        ConsoleProgressReporter::new(),
        SystemClock::new(),
    )
}

/// 静音版の実行器を作成（表示せずにレポートだけ欲しい場合）
pub fn create_quiet_runner(
    config: DefaultBenchmarkConfig,
) -> BenchmarkRunner<DefaultBenchmarkConfig, NoOpProgressReporter, SystemClock> {
    BenchmarkRunner::new(config, NoOpProgressReporter::new(), SystemClock::new())
}
