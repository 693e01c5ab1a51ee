//! Command implementations behind the CLI.
//!
//! # Data Flow
//! ```text
//! main.rs (clap)
//!     → loads Document once through ConfigStore
//!     → output_path.rs (--nginx-conf, applied first)
//!     → one of switch.rs / getdev.rs / init.rs / show.rs
//!     → CommandError mapped to stderr + exit code
//! ```
//!
//! # Design Decisions
//! - Commands take the store, the loaded document and their capabilities
//!   (reloader, prompter) explicitly; nothing is global
//! - `switch` validates every name before touching the document

pub mod getdev;
pub mod init;
pub mod output_path;
pub mod prompt;
pub mod show;
pub mod switch;

use thiserror::Error;

use crate::config::schema::{Document, Profile};
use crate::config::{ConfigError, ValidationError};
use crate::nginx::{ReloadError, RenderError};

pub use getdev::dev_path;
pub use init::init;
pub use output_path::set_output_path;
pub use prompt::{InitAnswers, PromptError, Prompter};
pub use show::document_json;
pub use switch::{switch, SwitchReport};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(
        "unknown app names: {} (supported app names: {})",
        .unknown.join(", "),
        .supported.join(", ")
    )]
    UnknownApplication {
        unknown: Vec<String>,
        supported: Vec<String>,
    },

    #[error("app '{app}' has no {profile} endpoint")]
    MissingEndpoint { app: String, profile: Profile },

    #[error("no nginx snippet path configured, run `init` or pass --nginx-conf")]
    OutputPathUnset,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("config and nginx snippet were updated, but {0}")]
    Reload(#[from] ReloadError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl CommandError {
    pub(crate) fn from_validation(err: ValidationError, doc: &Document) -> Self {
        match err {
            ValidationError::UnknownApps { unknown } => CommandError::UnknownApplication {
                unknown,
                supported: doc.apps.clone(),
            },
            ValidationError::MissingEndpoint { app, profile } => {
                CommandError::MissingEndpoint { app, profile }
            }
        }
    }
}
