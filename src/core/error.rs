// ベンチマーク用のカスタムエラー型定義

use super::types::NumericKind;
use std::path::PathBuf;
use thiserror::Error;

/// ベンチマーク固有のエラー型
#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("バリデーションエラー: {field} - {reason}")]
    Validation { field: String, reason: String },

    #[error("ベースライン欠落エラー: {kind} の代入ループが計測されていません")]
    MissingBaseline { kind: NumericKind },

    #[error("表描画エラー: {source}")]
    Render {
        #[source]
        source: std::fmt::Error,
    },

    #[error("レポート出力エラー: {path} - {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("入出力エラー: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

impl BenchmarkError {
    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// ベースライン欠落エラーの作成
    pub fn missing_baseline(kind: NumericKind) -> Self {
        Self::MissingBaseline { kind }
    }

    /// レポート出力エラーの作成
    pub fn export(path: impl Into<PathBuf>, source: anyhow::Error) -> Self {
        Self::Export {
            path: path.into(),
            source,
        }
    }

    /// 再実行で回復しうるエラーかどうか
    ///
    /// 設定や計測結果の不整合は再実行しても変わらない。
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Validation { .. } | Self::MissingBaseline { .. } => false,
            Self::Render { .. } => false,
            Self::Export { .. } | Self::Io { .. } => true,
        }
    }
}

/// ベンチマークの結果型
pub type BenchmarkResult<T> = std::result::Result<T, BenchmarkError>;

/// 検証結果 - バリデーション専用の結果型
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// バリデーション専用エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("バリデーションエラー: {field} - {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<ValidationError> for BenchmarkError {
    fn from(error: ValidationError) -> Self {
        BenchmarkError::Validation {
            field: error.field,
            reason: error.reason,
        }
    }
}

impl From<std::fmt::Error> for BenchmarkError {
    fn from(error: std::fmt::Error) -> Self {
        BenchmarkError::Render { source: error }
    }
}

impl From<std::io::Error> for BenchmarkError {
    fn from(error: std::io::Error) -> Self {
        BenchmarkError::Io { source: error }
    }
}
