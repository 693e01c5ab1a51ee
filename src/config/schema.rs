//! Configuration document definitions.
//!
//! The document is the tool's persistent state: the recognized application
//! set, the two endpoint profiles and the global paths.
//! All types derive Serde traits for (de)serialization from config files.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root of the persisted configuration document.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct Document {
    /// Recognized application names.
    pub apps: Vec<String>,

    /// Endpoints used by the `dev` profile, keyed by application name.
    pub dev: BTreeMap<String, Endpoint>,

    /// Endpoints used by the `prod` profile, keyed by application name.
    pub prod: BTreeMap<String, Endpoint>,

    /// Base directory under which application folders live.
    pub root: String,

    /// Path of the generated nginx snippet.
    #[serde(
        rename = "outputPath",
        alias = "nginxConfFile",
        skip_serializing_if = "Option::is_none"
    )]
    pub output_path: Option<PathBuf>,

    /// Keys this tool does not use, kept so a save does not drop them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Where an application listens and which folder holds it for one profile.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Endpoint {
    pub port: u16,
    pub folder: String,
}

impl Endpoint {
    pub fn new(port: u16, folder: impl Into<String>) -> Self {
        Self {
            port,
            folder: folder.into(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "port {} in folder {}", self.port, self.folder)
    }
}

/// One of the two endpoint bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Dev,
    Prod,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Dev => "dev",
            Profile::Prod => "prod",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Document {
    /// Endpoint map for a profile.
    pub fn profile(&self, profile: Profile) -> &BTreeMap<String, Endpoint> {
        match profile {
            Profile::Dev => &self.dev,
            Profile::Prod => &self.prod,
        }
    }

    /// Endpoint of `app` under `profile`, if configured.
    pub fn endpoint(&self, profile: Profile, app: &str) -> Option<&Endpoint> {
        self.profile(profile).get(app)
    }

    /// Whether `app` is in the recognized application set.
    pub fn is_recognized(&self, app: &str) -> bool {
        self.apps.iter().any(|known| known == app)
    }
}
