//! `--nginx-conf`: point the snippet at a new file.

use std::path::PathBuf;

use crate::commands::CommandError;
use crate::config::{ConfigStore, Document};

/// Set `outputPath` and persist immediately.
pub fn set_output_path(
    store: &ConfigStore,
    doc: &mut Document,
    path: impl Into<PathBuf>,
) -> Result<(), CommandError> {
    let mut next = doc.clone();
    next.output_path = Some(path.into());
    store.save(&next)?;
    *doc = next;

    if let Some(path) = &doc.output_path {
        tracing::info!(path = %path.display(), "Nginx conf file path is set");
    }
    Ok(())
}
