//! Hash command
//!
//! File hashing with automatic parallelization via Rayon.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use umash::Params;

/// Load a key blob, or fall back to the built-in demo key.
fn load_params(key: Option<&Path>) -> Result<Params> {
    let bytes: [u8; Params::SIZE] = match key {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("Failed to read key file: {}", path.display()))?;
            data.as_slice()
                .try_into()
                .map_err(|_| anyhow::anyhow!("Key file must be exactly {} bytes", Params::SIZE))?
        }
        None => {
            // Demo key: sequential counter bytes. Public and reproducible;
            // run `umash keygen` for keys that need unpredictability.
            let mut bytes = [0u8; Params::SIZE];
            bytes.iter_mut().enumerate().for_each(|(i, b)| *b = i as u8);
            bytes
        }
    };

    Params::from_le_bytes(&bytes).map_err(|e| anyhow::anyhow!("Unusable key material: {e}"))
}

fn digest_line(params: &Params, seed: u64, which: u32, fingerprint: bool, data: &[u8]) -> String {
    if fingerprint {
        let fp = umash::fingerprint(params, seed, data);
        format!("{:016x}{:016x}", fp.hash[0], fp.hash[1])
    } else {
        format!("{:016x}", umash::hash(params, seed, which, data))
    }
}

/// Hash files (Rayon parallelizes across files) or stdin.
pub fn hash_files(
    files: &[PathBuf],
    key: Option<&Path>,
    seed: u64,
    which: u32,
    fingerprint: bool,
) -> Result<()> {
    let params = load_params(key)?;

    if files.is_empty() {
        let mut data = Vec::new();
        std::io::stdin()
            .read_to_end(&mut data)
            .context("Failed to read stdin")?;
        println!("{}  -", digest_line(&params, seed, which, fingerprint, &data));
        return Ok(());
    }

    let results = Mutex::new(Vec::with_capacity(files.len()));
    let errors = Mutex::new(Vec::new());

    files.par_iter().for_each(|path| {
        match std::fs::read(path).with_context(|| format!("Failed to read: {}", path.display())) {
            Ok(data) => {
                let line = digest_line(&params, seed, which, fingerprint, &data);
                results.lock().unwrap().push((path.clone(), line));
            }
            Err(e) => {
                errors.lock().unwrap().push((path.clone(), e));
            }
        }
    });

    // Print in original order
    let mut results = results.into_inner().unwrap();
    results.sort_by_key(|(path, _)| files.iter().position(|p| p == path).unwrap_or(usize::MAX));

    for (path, line) in results {
        println!("{}  {}", line, path.display());
    }

    let errors = errors.into_inner().unwrap();
    for (path, error) in &errors {
        eprintln!("Error: {}: {}", path.display(), error);
    }

    if !errors.is_empty() {
        anyhow::bail!("Failed to hash {} file(s)", errors.len());
    }

    Ok(())
}
