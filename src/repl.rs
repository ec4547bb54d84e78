use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::client::EmbeddingClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::render::{render_embedding, render_empty};

pub const EXIT_KEYWORD: &str = "exit";

#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Exit,
    /// Payload to embed: the line as typed, minus its terminator.
    Text(&'a str),
}

/// Blank and exit checks look at the trimmed line, the payload does not.
pub fn classify_line(line: &str) -> Line<'_> {
    let payload = match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    };
    let trimmed = payload.trim();

    if trimmed.is_empty() {
        Line::Blank
    } else if trimmed.eq_ignore_ascii_case(EXIT_KEYWORD) {
        Line::Exit
    } else {
        Line::Text(payload)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit,
}

pub struct Repl {
    client: EmbeddingClient,
    server_address: String,
}

impl Repl {
    pub fn new(client: EmbeddingClient, config: &Config) -> Self {
        Self {
            client,
            server_address: config.server_address(),
        }
    }

    pub fn banner<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "=== Ollama Text Embedding Demo ===")?;
        writeln!(out, "Model: {}", self.client.model())?;
        writeln!(out, "Server: {}", self.server_address)?;
        writeln!(out, "{}", "-".repeat(40))
    }

    /// Reads lines until the exit keyword or end of input.
    ///
    /// Request failures are reported inline and never end the session; only
    /// a failure to write to `out` is returned.
    pub async fn run<R, W>(&self, mut input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        self.banner(out)?;

        let mut buf = Vec::new();
        loop {
            write!(out, "\nEnter text to embed (or '{EXIT_KEYWORD}' to quit):\n> ")?;
            out.flush()?;

            buf.clear();
            match input.read_until(b'\n', &mut buf).await {
                Ok(0) => {
                    info!("Input closed, ending session");
                    writeln!(out)?;
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("Could not read input, ending session: {}", e);
                    writeln!(out)?;
                    break;
                }
            }

            // Undecodable bytes become U+FFFD instead of ending the session.
            let line = String::from_utf8_lossy(&buf);
            if self.step(&line, out).await? == Step::Exit {
                break;
            }
        }

        Ok(())
    }

    /// Handles one line of input.
    pub async fn step<W: Write>(&self, line: &str, out: &mut W) -> Result<Step> {
        let text = match classify_line(line) {
            Line::Blank => {
                writeln!(out, "Please enter some text.")?;
                return Ok(Step::Continue);
            }
            Line::Exit => {
                writeln!(out, "Goodbye!")?;
                return Ok(Step::Exit);
            }
            Line::Text(text) => text,
        };

        writeln!(out, "\nGenerating embedding...")?;

        match self.client.embed(text).await {
            Ok(response) => match response.first_embedding() {
                Some(embedding) => render_embedding(out, embedding)?,
                None => render_empty(out)?,
            },
            Err(err) => self.report(out, &err)?,
        }

        Ok(Step::Continue)
    }

    fn report<W: Write>(&self, out: &mut W, err: &Error) -> std::io::Result<()> {
        debug!("Embedding request failed: {:?}", err);

        if err.is_transport() {
            writeln!(out, "\nConnection Error: {err}")?;
            writeln!(
                out,
                "Make sure Ollama server is running at {}",
                self.server_address
            )
        } else {
            let model = self.client.model();
            writeln!(out, "\nError: {err}")?;
            writeln!(
                out,
                "Make sure the {model} model is available (run: ollama pull {model})"
            )
        }
    }
}
