//! `init`: bootstrap the global settings of the document.

use std::io::{BufRead, Write};

use crate::commands::{CommandError, Prompter};
use crate::config::{ConfigStore, Document};

/// Ask for `root` and `outputPath`, store them in `doc` and persist.
pub fn init<R, W>(
    store: &ConfigStore,
    doc: &mut Document,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CommandError>
where
    R: BufRead,
    W: Write,
{
    let answers = prompter.collect_init()?;

    let mut next = doc.clone();
    next.root = answers.root;
    next.output_path = Some(answers.output_path);
    store.save(&next)?;
    *doc = next;

    tracing::info!(path = %store.path().display(), root = %doc.root, "Initialized successfully");
    Ok(())
}
