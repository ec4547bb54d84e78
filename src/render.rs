use std::io::Write;

/// Components listed one per line before the full vector.
pub const PREVIEW_DIMENSIONS: usize = 20;

pub fn render_embedding<W: Write>(out: &mut W, embedding: &[f64]) -> std::io::Result<()> {
    writeln!(out, "\n--- Embedding Result ---")?;
    writeln!(out, "Vector Dimensions: {}", embedding.len())?;
    writeln!(
        out,
        "\nVector Values (first {} dimensions):",
        PREVIEW_DIMENSIONS
    )?;

    for (idx, value) in embedding.iter().take(PREVIEW_DIMENSIONS).enumerate() {
        writeln!(out, "  [{idx}]: {value:.8}")?;
    }

    if embedding.len() > PREVIEW_DIMENSIONS {
        writeln!(
            out,
            "  ... ({} more dimensions)",
            embedding.len() - PREVIEW_DIMENSIONS
        )?;
    }

    writeln!(out, "\nFull Vector:")?;
    writeln!(out, "[{}]", full_vector(embedding))
}

pub fn render_empty<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "No embedding returned from the server.")
}

fn full_vector(embedding: &[f64]) -> String {
    embedding
        .iter()
        .map(|value| format!("{value:.6}"))
        .collect::<Vec<_>>()
        .join(", ")
}
