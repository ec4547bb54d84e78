use serde::{Deserialize, Serialize};

/// Body of `POST /api/embed`. One input per request.
#[derive(Debug, Serialize)]
pub struct EmbeddingRequest<'a> {
    pub model: &'a str,
    pub input: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingResponse {
    pub model: Option<String>,
    pub embeddings: Option<Vec<Vec<f64>>>,
}

impl EmbeddingResponse {
    /// The vector to display, if the server returned any.
    pub fn first_embedding(&self) -> Option<&[f64]> {
        self.embeddings
            .as_deref()
            .and_then(|embeddings| embeddings.first())
            .map(Vec::as_slice)
    }
}
