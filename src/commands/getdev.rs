//! `getdev`: where the dev copy of an app lives.

use std::path::PathBuf;

use crate::commands::CommandError;
use crate::config::validation::validate_app_names;
use crate::config::{Document, Profile};
use crate::endpoints::app_path;

/// `<root>/<dev[app].folder>/<app>` for a recognized app.
pub fn dev_path(doc: &Document, app: &str) -> Result<PathBuf, CommandError> {
    validate_app_names(doc, &[app]).map_err(|e| CommandError::from_validation(e, doc))?;

    app_path(doc, Profile::Dev, app).ok_or_else(|| CommandError::MissingEndpoint {
        app: app.to_string(),
        profile: Profile::Dev,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoint;

    #[test]
    fn test_dev_path_for_recognized_app() {
        let mut doc = Document::default();
        doc.apps = vec!["mute".into()];
        doc.root = "/root".into();
        doc.dev.insert("mute".into(), Endpoint::new(3001, "A"));
        doc.prod.insert("mute".into(), Endpoint::new(3000, "B"));

        assert_eq!(dev_path(&doc, "mute").unwrap(), PathBuf::from("/root/A/mute"));
    }

    #[test]
    fn test_dev_path_rejects_unknown_app() {
        let mut doc = Document::default();
        doc.apps = vec!["mute".into()];
        // present in the profiles but not recognized
        doc.dev.insert("chat".into(), Endpoint::new(1, "A"));

        match dev_path(&doc, "chat") {
            Err(CommandError::UnknownApplication { unknown, supported }) => {
                assert_eq!(unknown, vec!["chat".to_string()]);
                assert_eq!(supported, vec!["mute".to_string()]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_dev_path_without_dev_endpoint() {
        let mut doc = Document::default();
        doc.apps = vec!["mute".into()];

        assert!(matches!(
            dev_path(&doc, "mute"),
            Err(CommandError::MissingEndpoint { .. })
        ));
    }
}
