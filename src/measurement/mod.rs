// 計測レイヤー - 数値型の抽象化と計時ループ

pub mod element;
pub mod kernels;

pub use element::BenchElement;
pub use kernels::{measure, measure_kind, measure_kind_median, median, run_operation};
