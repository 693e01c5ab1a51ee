//! `show`: print the current document.

use crate::commands::CommandError;
use crate::config::{ConfigError, Document};

/// The document as pretty JSON, whatever format it is stored in.
pub fn document_json(doc: &Document) -> Result<String, CommandError> {
    serde_json::to_string_pretty(doc)
        .map_err(|e| CommandError::Config(ConfigError::Serialize(e.to_string())))
}
