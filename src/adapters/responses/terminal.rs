//! Terminal Response Provider
//!
//! Reads answers line by line from an input stream (stdin by default),
//! writing a short prompt marker before each read. End of input and blank
//! lines count as "no response", which ends the traversal.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;

use crate::ports::ResponseProvider;

type Input = Box<dyn AsyncBufRead + Unpin + Send>;
type Output = Box<dyn AsyncWrite + Unpin + Send>;

/// Interactive response provider.
pub struct TerminalResponses {
    input: Mutex<Input>,
    output: Mutex<Output>,
}

impl TerminalResponses {
    /// Reads from stdin and prompts on stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }

    pub fn new<R, W>(input: R, output: W) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        Self {
            input: Mutex::new(Box::new(input)),
            output: Mutex::new(Box::new(output)),
        }
    }

    async fn prompt(&self, prompt_id: &str) -> std::io::Result<()> {
        let mut output = self.output.lock().await;
        output.write_all(format!("[{}] > ", prompt_id).as_bytes()).await?;
        output.flush().await
    }
}

#[async_trait]
impl ResponseProvider for TerminalResponses {
    async fn respond(&self, prompt_id: &str) -> Option<String> {
        if let Err(e) = self.prompt(prompt_id).await {
            tracing::warn!("Failed to write prompt: {}", e);
        }

        let mut line = String::new();
        let mut input = self.input.lock().await;
        match input.read_line(&mut line).await {
            Ok(0) => None,
            Ok(_) => {
                let answer = line.trim_end_matches(&['\r', '\n'][..]);
                (!answer.is_empty()).then(|| answer.to_string())
            }
            Err(e) => {
                tracing::warn!("Failed to read response: {}", e);
                None
            }
        }
    }
}
