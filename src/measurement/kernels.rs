//! 計時ループ
//!
//! 1反復あたり同種の演算を3変数で循環させながら6回連鎖させ、
//! ループ自体のオーバーヘッドを薄める。

use super::element::BenchElement;
use crate::core::{Clock, NumericKind, Operation};
use std::hint::black_box;

/// 3変数を循環させながら `step` を6回ずつ適用する
#[inline(always)]
fn run_cycle<T, F>(iterations: u64, seeds: (T, T, T), step: F) -> (T, T, T)
where
    T: BenchElement,
    F: Fn(T, T) -> T,
{
    let (mut a, mut b, mut c) = seeds;

    for _ in 0..black_box(iterations) {
        a = step(b, c);
        b = step(c, a);
        c = step(a, b);
        a = step(b, c);
        b = step(c, a);
        c = step(a, b);
    }

    (a, b, c)
}

/// 指定演算のループを実行し、そのまま最終値を返す（計時なし）
pub fn run_operation<T: BenchElement>(
    operation: Operation,
    iterations: u64,
    seeds: (T, T, T),
) -> (T, T, T) {
    match operation {
        Operation::Assign => run_cycle(iterations, seeds, |lhs, _| lhs),
        Operation::Add => run_cycle(iterations, seeds, T::bench_add),
        Operation::Sub => run_cycle(iterations, seeds, T::bench_sub),
        Operation::Mul => run_cycle(iterations, seeds, T::bench_mul),
        Operation::Div => run_cycle(iterations, seeds, T::bench_div),
    }
}

/// 指定演算のループ1回分の経過秒数を計測する
pub fn measure<T, C>(clock: &C, operation: Operation, iterations: u64, seeds: (T, T, T)) -> f64
where
    T: BenchElement,
    C: Clock + ?Sized,
{
    let start = clock.seconds();
    let result = run_operation(operation, iterations, black_box(seeds));
    black_box(result);
    let end = clock.seconds();

    end - start
}

/// 数値型を実行時の種別から選び、初期値1で計測する
pub fn measure_kind<C: Clock + ?Sized>(
    clock: &C,
    kind: NumericKind,
    operation: Operation,
    iterations: u64,
) -> f64 {
    fn seeds<T: BenchElement>() -> (T, T, T) {
        (T::seed(), T::seed(), T::seed())
    }

    match kind {
        NumericKind::I8 => measure(clock, operation, iterations, seeds::<i8>()),
        NumericKind::I32 => measure(clock, operation, iterations, seeds::<i32>()),
        NumericKind::I64 => measure(clock, operation, iterations, seeds::<i64>()),
        NumericKind::F32 => measure(clock, operation, iterations, seeds::<f32>()),
        NumericKind::F64 => measure(clock, operation, iterations, seeds::<f64>()),
    }
}

/// `samples` 回計測して経過秒数の中央値を返す
pub fn measure_kind_median<C: Clock + ?Sized>(
    clock: &C,
    kind: NumericKind,
    operation: Operation,
    iterations: u64,
    samples: usize,
) -> f64 {
    let mut elapsed: Vec<f64> = (0..samples.max(1))
        .map(|_| measure_kind(clock, kind, operation, iterations))
        .collect();

    median(&mut elapsed)
}

/// 中央値（偶数個なら中央2値の平均）
pub fn median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;

    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
