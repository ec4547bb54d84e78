use std::time::Duration;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use reqwest::Url;

pub const DEFAULT_URL: &str = "http://localhost:11434/api/embed";
pub const DEFAULT_MODEL: &str = "bge-m3";

/// Interactive console for an Ollama-compatible embedding server.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Embedding endpoint the requests are posted to.
    #[arg(long, env = "EMBED_URL", default_value = DEFAULT_URL)]
    pub url: Url,

    /// Model the server should embed with.
    #[arg(long, env = "EMBED_MODEL", default_value = DEFAULT_MODEL, value_parser = NonEmptyStringValueParser::new())]
    pub model: String,

    /// Give up on a request after this many seconds. Waits forever when unset.
    #[arg(long, env = "EMBED_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Log requests at debug level (logs go to stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Scheme, host and port of the endpoint, e.g. `http://localhost:11434/`.
    pub fn server_address(&self) -> String {
        format!("{}/", self.url.origin().ascii_serialization())
    }
}
