//! Shared fixtures for integration tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use nginx_switch::nginx::{ReloadError, ReloadOutput, Reloader};
use nginx_switch::ConfigStore;
use tempfile::TempDir;

/// A config document in the shape the tool is deployed with.
pub fn fixture_json(output_path: &str) -> String {
    format!(
        r#"{{
  "apps": ["signaling", "botStorage", "authProxy", "mute"],
  "dev": {{
    "signaling": {{ "port": 9001, "folder": "sig-dev" }},
    "botStorage": {{ "port": 9101, "folder": "A" }},
    "authProxy": {{ "port": 9201, "folder": "A" }},
    "mute": {{ "port": 3001, "folder": "A" }}
  }},
  "prod": {{
    "signaling": {{ "port": 9000, "folder": "sig-prod" }},
    "botStorage": {{ "port": 9100, "folder": "B" }},
    "authProxy": {{ "port": 9200, "folder": "B" }},
    "mute": {{ "port": 3000, "folder": "B" }}
  }},
  "root": "/root",
  "outputPath": "{}",
  "maintainer": "ops"
}}
"#,
        output_path
    )
}

/// Temp directory holding `config.json`; the snippet goes to `switch.conf`.
#[allow(dead_code)]
pub struct Workspace {
    pub dir: TempDir,
    pub store: ConfigStore,
    pub snippet: PathBuf,
}

pub fn workspace() -> Workspace {
    let dir = tempfile::tempdir().unwrap();
    let snippet = dir.path().join("switch.conf");
    let config = dir.path().join("config.json");
    std::fs::write(&config, fixture_json(&snippet.display().to_string())).unwrap();

    Workspace {
        store: ConfigStore::new(config),
        snippet,
        dir,
    }
}

/// Reloader that answers from a script instead of running nginx.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeReloader {
    pub fail_with: Option<String>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeReloader {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing(stderr: &str) -> Self {
        Self {
            fail_with: Some(stderr.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Reloader for FakeReloader {
    async fn reload(&self) -> Result<ReloadOutput, ReloadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(stderr) => Err(ReloadError::Failed {
                code: Some(1),
                stdout: String::new(),
                stderr: stderr.clone(),
            }),
            None => Ok(ReloadOutput {
                stdout: String::new(),
                stderr: "signal process started".into(),
            }),
        }
    }
}
