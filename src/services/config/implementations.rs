// 設定管理の具象実装

use crate::core::{BenchmarkConfig, ValidationError, ValidationResult};

/// 1回の計測で回すループ回数
pub const ITERATIONS_NUM: u64 = 20_000_000;

/// 1組あたりの計測回数の既定値
pub const DEFAULT_SAMPLES: usize = 1;

/// デフォルト設定実装
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultBenchmarkConfig {
    iterations: u64,
    samples: usize,
}

impl DefaultBenchmarkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }
}

impl Default for DefaultBenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS_NUM,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl BenchmarkConfig for DefaultBenchmarkConfig {
    fn iterations(&self) -> u64 {
        self.iterations
    }

    fn samples(&self) -> usize {
        self.samples
    }
}

/// 設定値の検証
pub fn validate_config<C: BenchmarkConfig + ?Sized>(config: &C) -> ValidationResult<()> {
    if config.iterations() == 0 {
        return Err(ValidationError::new(
            "iterations",
            "ループ回数は1以上である必要があります",
        ));
    }

    if config.samples() == 0 {
        return Err(ValidationError::new(
            "samples",
            "計測回数は1以上である必要があります",
        ));
    }

    Ok(())
}
