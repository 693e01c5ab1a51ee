//! `switch`: flip apps between dev and prod, then refresh nginx.

use std::path::PathBuf;

use crate::commands::CommandError;
use crate::config::validation::validate_switchable;
use crate::config::{ConfigStore, Document};
use crate::endpoints::swap;
use crate::nginx::{render, write_snippet, ReloadOutput, Reloader};

/// What a successful `switch` did.
#[derive(Debug, Clone)]
pub struct SwitchReport {
    pub switched: Vec<String>,
    pub snippet_path: PathBuf,
    pub reload: ReloadOutput,
}

/// Swap each of `apps` in order, persist, rewrite the snippet and reload nginx.
///
/// Validation covers every name before anything changes: on error the
/// document and both files are untouched. `doc` is only updated once the
/// new document has been saved. A reload failure is returned as
/// [`CommandError::Reload`] with the config and snippet already written.
pub async fn switch<S, R>(
    store: &ConfigStore,
    doc: &mut Document,
    apps: &[S],
    reloader: &R,
) -> Result<SwitchReport, CommandError>
where
    S: AsRef<str>,
    R: Reloader,
{
    validate_switchable(doc, apps).map_err(|e| CommandError::from_validation(e, doc))?;
    let snippet_path = doc.output_path.clone().ok_or(CommandError::OutputPathUnset)?;

    let mut next = doc.clone();
    for app in apps {
        swap(&mut next, app.as_ref());
    }
    let snippet = render(&next)?;

    store.save(&next)?;
    *doc = next;
    tracing::info!(path = %store.path().display(), "Config file updated");

    write_snippet(&snippet_path, &snippet)?;

    let reload = reloader.reload().await?;
    tracing::info!(
        stdout = reload.stdout.trim(),
        stderr = reload.stderr.trim(),
        "Nginx has been reloaded"
    );

    Ok(SwitchReport {
        switched: apps.iter().map(|a| a.as_ref().to_string()).collect(),
        snippet_path,
        reload,
    })
}
