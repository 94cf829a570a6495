use crate::error::Result;
use async_trait::async_trait;

/// The line-oriented terminal the order flow talks through.
#[async_trait]
pub trait Console: Send {
    /// Writes `label` followed by `": "` and returns the next input line
    /// without its line terminator.
    async fn prompt(&mut self, label: &str) -> Result<String>;

    /// Writes `line` followed by a newline.
    async fn say(&mut self, line: &str) -> Result<()>;
}
