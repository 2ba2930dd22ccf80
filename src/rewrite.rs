//! Literal reference rewriting in the site's text files

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Prefix every image reference carries in the manifest and UI source
const REF_PREFIX: &str = "/Images/";

/// Whether a rewrite pass changed the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    Updated,
    Unchanged,
}

/// Replace `/Images/<old>` with `/Images/<new>` for every mapping pair, in
/// mapping order, treating the file as raw text. The file is written back
/// only when its content actually changed.
///
/// Replacement is literal: when one old filename is a prefix of another
/// reference in the same file, mapping order decides the result.
pub fn apply(path: &Path, mapping: &[(String, String)]) -> Result<RewriteOutcome> {
    let original =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let mut content = original.clone();
    for (old, new) in mapping {
        content = content.replace(&format!("{REF_PREFIX}{old}"), &format!("{REF_PREFIX}{new}"));
    }

    if content == original {
        return Ok(RewriteOutcome::Unchanged);
    }
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(RewriteOutcome::Updated)
}
