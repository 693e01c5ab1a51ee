//! Rendering of the nginx variables snippet.
//!
//! The snippet is a fixed template. It always names the same applications,
//! whatever `apps` the document recognizes:
//!
//! ```text
//! set $prod_localhost_port_signaling 9000;
//! set $prod_localhost_port_bot_storage 9100;
//! set $prod_localhost_port_auth_proxy 9200;
//! set $prod_root_mute /root/B/mute;
//!
//! set $dev_localhost_port_signaling 9001;
//! ...
//! ```

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{Document, Profile};
use crate::endpoints::app_path;

/// Apps whose port is exported, as (document key, variable suffix).
pub const PORT_APPS: [(&str, &str); 3] = [
    ("signaling", "signaling"),
    ("botStorage", "bot_storage"),
    ("authProxy", "auth_proxy"),
];

/// Apps whose folder is exported, as (document key, variable suffix).
pub const ROOT_APPS: [(&str, &str); 1] = [("mute", "mute")];

/// Profiles in output order.
const PROFILES: [Profile; 2] = [Profile::Prod, Profile::Dev];

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot render snippet: app '{app}' has no {profile} endpoint")]
    MissingEndpoint { app: String, profile: Profile },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Render the snippet for the current document.
pub fn render(doc: &Document) -> Result<String, RenderError> {
    let missing = |profile: Profile, app: &str| RenderError::MissingEndpoint {
        app: app.to_string(),
        profile,
    };

    let mut out = String::new();
    for (i, profile) in PROFILES.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for (key, var) in PORT_APPS {
            let endpoint = doc.endpoint(profile, key).ok_or_else(|| missing(profile, key))?;
            let _ = writeln!(out, "set ${profile}_localhost_port_{var} {};", endpoint.port);
        }
        for (key, var) in ROOT_APPS {
            let path = app_path(doc, profile, key).ok_or_else(|| missing(profile, key))?;
            let _ = writeln!(out, "set ${profile}_root_{var} {};", path.display());
        }
    }
    Ok(out)
}

/// Replace the snippet file with `contents`.
pub fn write_snippet(path: &Path, contents: &str) -> Result<(), RenderError> {
    fs::write(path, contents).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Nginx snippet written");
    Ok(())
}
