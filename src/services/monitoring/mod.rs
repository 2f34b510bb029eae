// 進捗監視機能
// 計測開始、各計測の完了、計測不能な組、完了の通知

pub mod implementations;

// 公開API
pub use implementations::{ConsoleProgressReporter, NoOpProgressReporter};
