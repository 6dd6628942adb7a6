use std::fs;
use std::path::{Path, PathBuf};

use crate::ExtractError;

const SOURCE_EXTENSION: &str = "sm";

/// Find the single `.sm` file in `dir`. Zero or several candidates is an
/// input-resolution error; the extraction never guesses.
pub fn resolve_source(dir: &Path) -> Result<PathBuf, ExtractError> {
    let entries = fs::read_dir(dir).map_err(|e| io_err(dir, &e))?;
    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, &e))?;
        let path = entry.path();
        let is_sm = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION));
        if is_sm && path.is_file() {
            candidates.push(path);
        }
    }
    if candidates.len() == 1 {
        Ok(candidates.swap_remove(0))
    } else {
        Err(ExtractError::SourceResolution {
            dir: dir.display().to_string(),
            found: candidates.len(),
        })
    }
}

/// Resolve and read the simfile, returning its path and contents.
pub fn read_source(dir: &Path) -> Result<(PathBuf, String), ExtractError> {
    let path = resolve_source(dir)?;
    let contents = fs::read_to_string(&path).map_err(|e| io_err(&path, &e))?;
    Ok((path, contents))
}

fn io_err(path: &Path, e: &std::io::Error) -> ExtractError {
    ExtractError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
