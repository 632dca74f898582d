//! Keygen command.

use anyhow::{Context, Result};
use std::path::Path;
use umash::Params;

/// Generate a fresh parameter blob and write it to `output`.
pub fn keygen(output: &Path) -> Result<()> {
    let params = Params::generate(&mut rand::rng());

    std::fs::write(output, params.to_le_bytes())
        .with_context(|| format!("Failed to write key file: {}", output.display()))?;

    println!("Wrote {}-byte key to {}", Params::SIZE, output.display());
    Ok(())
}
