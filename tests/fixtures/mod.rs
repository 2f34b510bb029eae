// テスト用の時計とヘルパー

use arith_bench::{Clock, NumericKind, Operation};
use std::cell::Cell;

/// 計測ごとの所要時間を決め打ちで返す時計
///
/// 0回目の `seconds()` は実行全体の開始。以降は計測ごとに開始・終了の
/// 2回1組で呼ばれる前提で、終了時に `durations(計測番号)` だけ時刻を進める。
pub struct ScriptedClock<F: Fn(usize) -> f64> {
    calls: Cell<usize>,
    now: Cell<f64>,
    durations: F,
}

impl<F: Fn(usize) -> f64> ScriptedClock<F> {
    pub fn new(durations: F) -> Self {
        Self {
            calls: Cell::new(0),
            now: Cell::new(0.0),
            durations,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<F: Fn(usize) -> f64> Clock for ScriptedClock<F> {
    fn seconds(&self) -> f64 {
        let calls = self.calls.get();
        if calls >= 2 && calls % 2 == 0 {
            self.now.set(self.now.get() + (self.durations)(calls / 2 - 1));
        }
        self.calls.set(calls + 1);
        self.now.get()
    }
}

/// 計測番号から（型, 演算）を求める（型ごとに5演算ずつ計測される）
pub fn pair_at(index: usize) -> (NumericKind, Operation) {
    (NumericKind::ALL[index / 5], Operation::ALL[index % 5])
}

/// 基準1秒、加算2秒、減算3秒、乗算4秒、除算5秒
pub fn stepped_durations(index: usize) -> f64 {
    1.0 + (index % 5) as f64
}
