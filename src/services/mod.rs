// サービス層 - 設定、進捗報告、時計の具象実装

pub mod clock;
pub mod config;
pub mod monitoring;

// 公開API
pub use clock::SystemClock;
pub use config::{validate_config, DefaultBenchmarkConfig, DEFAULT_SAMPLES, ITERATIONS_NUM};
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter};
