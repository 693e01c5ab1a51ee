//! Request validation against the loaded document.
//!
//! # Responsibilities
//! - Reject application names outside the recognized set
//! - Check both profiles carry an endpoint for each requested app
//!
//! # Design Decisions
//! - Returns every offending name, not just the first
//! - Pure functions over `&Document`; nothing here mutates or touches disk

use thiserror::Error;

use crate::config::schema::{Document, Profile};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown app names: {}", .unknown.join(", "))]
    UnknownApps { unknown: Vec<String> },

    #[error("app '{app}' has no {profile} endpoint")]
    MissingEndpoint { app: String, profile: Profile },
}

/// Check that every name in `apps` is recognized.
pub fn validate_app_names<S: AsRef<str>>(doc: &Document, apps: &[S]) -> Result<(), ValidationError> {
    let mut unknown: Vec<String> = Vec::new();
    for app in apps.iter().map(AsRef::as_ref) {
        if !doc.is_recognized(app) && !unknown.iter().any(|u| u == app) {
            unknown.push(app.to_string());
        }
    }

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::UnknownApps { unknown })
    }
}

/// Check that each app can be swapped: recognized and present in both profiles.
pub fn validate_switchable<S: AsRef<str>>(doc: &Document, apps: &[S]) -> Result<(), ValidationError> {
    validate_app_names(doc, apps)?;

    for app in apps.iter().map(AsRef::as_ref) {
        for profile in [Profile::Dev, Profile::Prod] {
            if doc.endpoint(profile, app).is_none() {
                return Err(ValidationError::MissingEndpoint {
                    app: app.to_string(),
                    profile,
                });
            }
        }
    }
    Ok(())
}
