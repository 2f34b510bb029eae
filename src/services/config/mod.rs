// 設定管理
// コンパイル時定数と、テスト用に差し替え可能なビルダー

pub mod implementations;

pub use implementations::{validate_config, DefaultBenchmarkConfig, DEFAULT_SAMPLES, ITERATIONS_NUM};
