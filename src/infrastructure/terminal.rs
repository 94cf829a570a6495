use crate::domain::ports::Console;
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

/// A [`Console`] over any buffered async reader and async writer.
///
/// The reader is created once and reused for every prompt, so input typed
/// ahead of a prompt is never lost.
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
}

impl TerminalConsole<BufReader<Stdin>, Stdout> {
    /// Creates a console bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> TerminalConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console and returns the writer, e.g. to inspect output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[async_trait]
impl<R, W> Console for TerminalConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn prompt(&mut self, label: &str) -> Result<String> {
        self.writer.write_all(label.as_bytes()).await?;
        self.writer.write_all(b": ").await?;
        self.writer.flush().await?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            return Err(OrderError::InputClosed);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // Undecodable bytes become U+FFFD.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    async fn say(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prompt_writes_label_and_strips_newline() {
        let mut console = TerminalConsole::new(b"Calabresa\r\nPix\n".as_slice(), Vec::new());

        assert_eq!(console.prompt("Pizza").await.unwrap(), "Calabresa");
        assert_eq!(console.prompt("Payment").await.unwrap(), "Pix");

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, "Pizza: Payment: ");
    }

    #[tokio::test]
    async fn test_prompt_keeps_whitespace_and_empty_lines() {
        let mut console = TerminalConsole::new(b"  spaced \n\nlast".as_slice(), Vec::new());

        assert_eq!(console.prompt("a").await.unwrap(), "  spaced ");
        assert_eq!(console.prompt("b").await.unwrap(), "");
        assert_eq!(console.prompt("c").await.unwrap(), "last");
    }

    #[tokio::test]
    async fn test_prompt_replaces_invalid_utf8() {
        let mut console = TerminalConsole::new(b"Portug\xffesa\n\xff\xfe\r\n".as_slice(), Vec::new());

        assert_eq!(console.prompt("Pizza").await.unwrap(), "Portug\u{FFFD}esa");
        assert_eq!(console.prompt("CNPJ").await.unwrap(), "\u{FFFD}\u{FFFD}");
    }

    #[tokio::test]
    async fn test_prompt_on_closed_input() {
        let mut console = TerminalConsole::new(b"".as_slice(), Vec::new());
        assert!(matches!(
            console.prompt("Pizza").await,
            Err(OrderError::InputClosed)
        ));
    }

    #[tokio::test]
    async fn test_say_appends_newline() {
        let mut console = TerminalConsole::new(b"".as_slice(), Vec::new());
        console.say("Welcome").await.unwrap();
        assert_eq!(console.into_writer(), b"Welcome\n");
    }
}
