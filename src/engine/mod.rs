// エンジン層 - 計測のオーケストレーション
// サービス層と計測レイヤーを組み合わせてレポートを作る

pub mod api;
pub mod runner;

// 公開API
pub use api::{create_default_runner, create_quiet_runner};
pub use runner::BenchmarkRunner;
