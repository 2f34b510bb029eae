// CLI層 - コマンドライン引数の定義

pub mod args;

pub use args::Cli;
