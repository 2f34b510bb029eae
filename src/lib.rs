pub mod cli;
pub mod core;
pub mod engine;
pub mod measurement;
pub mod report;
pub mod services;

pub use crate::core::{
    BenchmarkConfig, BenchmarkError, BenchmarkResult, Clock, Measurement, NumericKind, Operation,
    ProgressReporter, Rate, TableRow,
};
pub use engine::{create_default_runner, create_quiet_runner, BenchmarkRunner};
pub use report::{export_json_report, BenchmarkReport};
pub use services::{
    ConsoleProgressReporter, DefaultBenchmarkConfig, NoOpProgressReporter, SystemClock,
};
