//! Swap an application between its `dev` and `prod` endpoints.

use std::path::PathBuf;

use crate::config::schema::{Document, Profile};

/// Exchange `doc.dev[app]` and `doc.prod[app]` in place.
///
/// Callers validate that `app` exists in both profiles first. If it does not,
/// the document is left untouched.
pub fn swap(doc: &mut Document, app: &str) {
    let (Some(dev), Some(prod)) = (doc.dev.get_mut(app), doc.prod.get_mut(app)) else {
        tracing::warn!(app, "App missing from a profile, not swapped");
        return;
    };

    std::mem::swap(dev, prod);

    tracing::info!(app, port = prod.port, folder = %prod.folder, "PROD becomes");
    tracing::info!(app, port = dev.port, folder = %dev.folder, "DEV becomes");
}

/// Folder of `app` under `profile`: `<root>/<folder>/<app>`.
pub fn app_path(doc: &Document, profile: Profile, app: &str) -> Option<PathBuf> {
    let endpoint = doc.endpoint(profile, app)?;
    Some(
        PathBuf::from(&doc.root)
            .join(&endpoint.folder)
            .join(app),
    )
}
