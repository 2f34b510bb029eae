// 計測に関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// 計測対象の数値型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericKind {
    I8,
    I32,
    I64,
    F32,
    F64,
}

impl NumericKind {
    /// 計測順に並べた全ての数値型
    pub const ALL: [NumericKind; 5] = [
        NumericKind::I8,
        NumericKind::I32,
        NumericKind::I64,
        NumericKind::F32,
        NumericKind::F64,
    ];

    /// 表に表示する型名
    pub const fn name(&self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 計測する演算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// 代入のみ（ループオーバーヘッドの基準）
    Assign,
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    /// 計測順に並べた全ての演算（先頭がベースライン）
    pub const ALL: [Operation; 5] = [
        Operation::Assign,
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    pub const fn is_baseline(&self) -> bool {
        matches!(self, Self::Assign)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 1組（型, 演算）の計測結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub kind: NumericKind,
    pub operation: Operation,
    pub elapsed_secs: f64,
}

impl Measurement {
    pub fn new(kind: NumericKind, operation: Operation, elapsed_secs: f64) -> Self {
        Self {
            kind,
            operation,
            elapsed_secs,
        }
    }
}

/// ベースライン補正後の演算速度
///
/// 時計の分解能やループの最適化で差分が0以下になった場合は
/// `Unmeasurable` として扱い、NaN/Infを表に流さない。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "ops_per_sec", rename_all = "snake_case")]
pub enum Rate {
    Finite(f64),
    Unmeasurable,
}

impl Rate {
    /// 反復回数と差分時間から速度を求める
    pub fn from_delta(iterations: u64, delta_secs: f64) -> Self {
        if !delta_secs.is_finite() || delta_secs <= 0.0 {
            return Self::Unmeasurable;
        }

        let ops_per_sec = iterations as f64 / delta_secs;
        if ops_per_sec.is_finite() {
            Self::Finite(ops_per_sec)
        } else {
            Self::Unmeasurable
        }
    }

    pub fn as_finite(&self) -> Option<f64> {
        match self {
            Self::Finite(value) => Some(*value),
            Self::Unmeasurable => None,
        }
    }

    pub fn is_unmeasurable(&self) -> bool {
        matches!(self, Self::Unmeasurable)
    }
}

/// 表の1行分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub kind: NumericKind,
    pub operation: Operation,
    pub rate: Rate,
    /// 最速の速度に対する割合（0〜100）。計測不能な組は `None`
    pub percentage: Option<u32>,
    /// バーの塗りつぶし長（0〜BAR_WIDTH）
    pub bar_fill: usize,
}
